//! Document model for extracted Word content.
//!
//! The parser turns WordprocessingML into these structures and the report
//! writer reads them back out. Only body paragraphs and their text are kept.

mod document;
mod paragraph;

pub use document::*;
pub use paragraph::*;
