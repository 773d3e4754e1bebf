//! Error types for the paratext library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for paratext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and reporting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Package not found at '{}'", .0.display())]
    PackageNotFound(PathBuf),

    /// The file format could not be determined.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The file is an Office package, but not a Word document.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Document parsing was compiled out of this build.
    #[error("{0} support is not available in this build")]
    MissingCapability(String),

    /// The provisioning subprocess could not be run or failed.
    #[error("Provisioning failed: {0}")]
    Provision(String),
}

impl Error {
    /// Whether this error means the parser itself is unavailable, as opposed
    /// to a fault with the document.
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Error::MissingCapability(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
