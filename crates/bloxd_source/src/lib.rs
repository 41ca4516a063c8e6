//! Source text management, line splitting, and 1-based line/column ranges.
//!
//! This crate provides the [`SourceDb`] for loading script files, the
//! [`SourceFile`] line view shared by the scanner and the renderers, and the
//! [`LineRange`] type every diagnostic position is expressed in.

#![warn(missing_docs)]

pub mod file_id;
pub mod line_range;
pub mod source_db;
pub mod source_file;

pub use file_id::FileId;
pub use line_range::LineRange;
pub use source_db::SourceDb;
pub use source_file::{split_lines, utf16_column, SourceFile};
