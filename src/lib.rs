//! # paratext
//!
//! Paragraph text extraction from Word documents.
//!
//! The library reads the body paragraphs of a `.docx` package and prints
//! them as a plain text report: a banner header followed by every paragraph
//! that has visible text, in document order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paratext::{extract_paragraphs, parse_file};
//!
//! // Non-blank paragraph text, in order
//! for text in extract_paragraphs("ReConnect Blogs.docx")? {
//!     println!("{}", text);
//! }
//!
//! // Full model, blank paragraphs included
//! let doc = parse_file("ReConnect Blogs.docx")?;
//! println!("Paragraphs: {}", doc.len());
//! # Ok::<(), paratext::Error>(())
//! ```
//!
//! ## Features
//!
//! - `docx` (default): Word document parsing. Without it every load
//!   reports [`Error::MissingCapability`].

pub mod container;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod provision;
pub mod render;

#[cfg(feature = "docx")]
pub mod docx;

#[cfg(test)]
mod fixtures;

// Re-exports
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use detect::{detect_format_from_bytes, detect_format_from_path, WordFormat};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, Extractor, Outcome};
pub use model::{Document, Paragraph, TextRun};
pub use render::ReportOptions;

use std::path::Path;

/// Parse a Word document file and return its body paragraphs.
///
/// # Example
///
/// ```no_run
/// use paratext::parse_file;
///
/// let doc = parse_file("ReConnect Blogs.docx")?;
/// println!("Paragraphs: {}", doc.len());
/// # Ok::<(), paratext::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    #[cfg(feature = "docx")]
    {
        let parser = docx::DocxParser::open(path)?;
        parser.parse()
    }

    #[cfg(not(feature = "docx"))]
    {
        let _ = path;
        Err(Error::MissingCapability(provision::DOCX_CAPABILITY.to_string()))
    }
}

/// Parse a Word document from bytes.
///
/// # Example
///
/// ```no_run
/// use paratext::parse_bytes;
///
/// let data = std::fs::read("ReConnect Blogs.docx")?;
/// let doc = parse_bytes(&data)?;
/// # Ok::<(), paratext::Error>(())
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    #[cfg(feature = "docx")]
    {
        if !detect::is_zip_file(data) {
            return Err(Error::UnknownFormat);
        }
        let parser = docx::DocxParser::from_bytes(data.to_vec())?;
        parser.parse()
    }

    #[cfg(not(feature = "docx"))]
    {
        let _ = data;
        Err(Error::MissingCapability(provision::DOCX_CAPABILITY.to_string()))
    }
}

/// Extract the text of every non-blank paragraph, in document order.
///
/// # Example
///
/// ```no_run
/// use paratext::extract_paragraphs;
///
/// let paragraphs = extract_paragraphs("ReConnect Blogs.docx")?;
/// println!("{} paragraphs with text", paragraphs.len());
/// # Ok::<(), paratext::Error>(())
/// ```
pub fn extract_paragraphs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let doc = parse_file(path)?;
    Ok(doc.non_blank_paragraphs().map(|p| p.text()).collect())
}
