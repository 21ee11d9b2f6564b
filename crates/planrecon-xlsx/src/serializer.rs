use planrecon_core::Workbook;
use rust_xlsxwriter::Workbook as XlsxWorkbook;

use crate::error::ExportError;

/// Injected spreadsheet-serialization collaborator.
///
/// `ensure_ready` is the availability boundary: an implementation may
/// block or fail here (remote capability, licensed component), and the
/// call is idempotent. `serialize` is synchronous once ready and leaves
/// the input untouched, so a failed export can be retried against the
/// same workbook model.
pub trait WorkbookSerializer {
    fn ensure_ready(&mut self) -> Result<(), ExportError>;

    fn serialize(&self, workbook: &Workbook) -> Result<Vec<u8>, ExportError>;
}

/// `rust_xlsxwriter`-backed serializer. The writer is statically
/// linked, so readiness never fails.
#[derive(Debug, Default)]
pub struct XlsxSerializer;

impl WorkbookSerializer for XlsxSerializer {
    fn ensure_ready(&mut self) -> Result<(), ExportError> {
        Ok(())
    }

    fn serialize(&self, workbook: &Workbook) -> Result<Vec<u8>, ExportError> {
        let mut xlsx = XlsxWorkbook::new();

        for sheet in &workbook.sheets {
            let worksheet = xlsx.add_worksheet().set_name(&sheet.name).map_err(|e| {
                ExportError::Serialize(format!("cannot create sheet '{}': {e}", sheet.name))
            })?;

            for (row, cells) in sheet.grid.iter().enumerate() {
                for (col, value) in cells.iter().enumerate() {
                    // Blank cells stay unwritten.
                    if value.is_empty() {
                        continue;
                    }
                    worksheet
                        .write_string(row as u32, col as u16, value)
                        .map_err(|e| {
                            ExportError::Serialize(format!(
                                "cannot write cell ({row},{col}) in '{}': {e}",
                                sheet.name
                            ))
                        })?;
                }
            }
        }

        xlsx.save_to_buffer()
            .map_err(|e| ExportError::Serialize(format!("cannot produce xlsx bytes: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planrecon_core::Sheet;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn serializes_to_zip_container() {
        let workbook = Workbook {
            sheets: vec![Sheet {
                name: "Dental".to_string(),
                grid: grid(&[
                    &["Reconciled", "Result"],
                    &["Alice", "In Both"],
                    &["", ""],
                ]),
            }],
        };

        let mut serializer = XlsxSerializer::default();
        serializer.ensure_ready().unwrap();
        let bytes = serializer.serialize(&workbook).unwrap();

        // xlsx is a zip container; check the local-file-header magic.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn ensure_ready_is_idempotent() {
        let mut serializer = XlsxSerializer::default();
        serializer.ensure_ready().unwrap();
        serializer.ensure_ready().unwrap();
    }

    #[test]
    fn invalid_sheet_name_surfaces_as_serialize_error() {
        // The engine's sheet-naming already prevents this; the boundary
        // still reports it cleanly rather than panicking.
        let workbook = Workbook {
            sheets: vec![Sheet {
                name: String::new(),
                grid: grid(&[&["x"]]),
            }],
        };
        let serializer = XlsxSerializer::default();
        let err = serializer.serialize(&workbook).unwrap_err();
        assert!(matches!(err, ExportError::Serialize(_)));
    }

    #[test]
    fn retry_after_failure_uses_same_model() {
        let workbook = Workbook {
            sheets: vec![Sheet {
                name: "Plans".to_string(),
                grid: grid(&[&["Alice"]]),
            }],
        };
        let serializer = XlsxSerializer::default();
        let first = serializer.serialize(&workbook).unwrap();
        let second = serializer.serialize(&workbook).unwrap();
        assert!(!first.is_empty());
        assert!(!second.is_empty());
    }
}
