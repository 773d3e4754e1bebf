//! DOCX (Word) document parser.
//!
//! This module reads the body paragraphs of Word documents in the
//! Office Open XML (.docx) format.

mod parser;

pub use parser::DocxParser;
