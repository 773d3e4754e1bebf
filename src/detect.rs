//! Word package detection.
//!
//! A `.docx` is a ZIP archive whose `[Content_Types].xml` declares a
//! WordprocessingML main part. Spreadsheets and presentations share the
//! container format and are rejected here.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const MACRO_DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.ms-word.document.macroEnabled.main+xml";
const TEMPLATE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
const MACRO_TEMPLATE_CONTENT_TYPE: &str =
    "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Flavour of Word package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFormat {
    /// Word document (.docx)
    Document,
    /// Macro-enabled document (.docm)
    MacroEnabledDocument,
    /// Template (.dotx)
    Template,
    /// Macro-enabled template (.dotm)
    MacroEnabledTemplate,
}

impl WordFormat {
    /// Returns the usual file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            WordFormat::Document => "docx",
            WordFormat::MacroEnabledDocument => "docm",
            WordFormat::Template => "dotx",
            WordFormat::MacroEnabledTemplate => "dotm",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            WordFormat::Document => "Word Document",
            WordFormat::MacroEnabledDocument => "Word Macro-Enabled Document",
            WordFormat::Template => "Word Template",
            WordFormat::MacroEnabledTemplate => "Word Macro-Enabled Template",
        }
    }
}

impl std::fmt::Display for WordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the Word format of a file on disk.
///
/// # Example
///
/// ```no_run
/// use paratext::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("ReConnect Blogs.docx")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), paratext::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<WordFormat> {
    let container = OoxmlContainer::open(path)?;
    detect_format(&container)
}

/// Detect the Word format of an in-memory package.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<WordFormat> {
    if !is_zip_file(data) {
        return Err(Error::UnknownFormat);
    }
    let container = OoxmlContainer::from_bytes(data.to_vec())?;
    detect_format(&container)
}

/// Detect the Word format of an opened package.
///
/// The flavour comes from `[Content_Types].xml`. A package without one is
/// not an OPC package at all, and one that declares no known main part is
/// reported as [`Error::UnknownFormat`].
pub fn detect_format(container: &OoxmlContainer) -> Result<WordFormat> {
    let content_types = container.read_xml(CONTENT_TYPES_PART)?;

    // Longer, more specific types first
    if content_types.contains(MACRO_TEMPLATE_CONTENT_TYPE) {
        Ok(WordFormat::MacroEnabledTemplate)
    } else if content_types.contains(MACRO_DOCUMENT_CONTENT_TYPE) {
        Ok(WordFormat::MacroEnabledDocument)
    } else if content_types.contains(TEMPLATE_CONTENT_TYPE) {
        Ok(WordFormat::Template)
    } else if content_types.contains(DOCUMENT_CONTENT_TYPE) {
        Ok(WordFormat::Document)
    } else if content_types.contains(XLSX_CONTENT_TYPE) {
        Err(Error::UnsupportedFormat("Excel Workbook".to_string()))
    } else if content_types.contains(PPTX_CONTENT_TYPE) {
        Err(Error::UnsupportedFormat("PowerPoint Presentation".to_string()))
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Detect the format and accept only a plain Word document.
///
/// Macro-enabled documents and templates are recognised but not read.
pub fn require_document(container: &OoxmlContainer) -> Result<()> {
    match detect_format(container)? {
        WordFormat::Document => Ok(()),
        other => Err(Error::UnsupportedFormat(other.name().to_string())),
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}
