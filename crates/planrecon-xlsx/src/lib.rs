//! `planrecon-xlsx` — serialization boundary for the workbook model.
//!
//! Turns the engine's abstract `Workbook` into `.xlsx` bytes and owns
//! the audit download filename convention. The engine never touches
//! this crate; callers inject a serializer where they need one.

pub mod error;
pub mod filename;
pub mod serializer;

pub use error::ExportError;
pub use filename::audit_filename;
pub use serializer::{WorkbookSerializer, XlsxSerializer};
