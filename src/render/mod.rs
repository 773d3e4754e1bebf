//! Output rendering for documents.
//!
//! The only output is a plain text report: a banner header followed by the
//! document's non-blank paragraphs.
//!
//! # Example
//!
//! ```no_run
//! use paratext::{parse_file, render::*};
//!
//! let doc = parse_file("ReConnect Blogs.docx")?;
//! let report = to_report(&doc, &ReportOptions::default())?;
//! print!("{}", report);
//! # Ok::<(), paratext::Error>(())
//! ```

mod options;
mod text;

pub use options::{ReportOptions, DEFAULT_BANNER_CHAR, DEFAULT_BANNER_WIDTH, DEFAULT_TITLE};
pub use text::{to_report, write_report};
