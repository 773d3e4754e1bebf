//! Plain text paragraph report.

use std::io::Write;

use crate::error::Result;
use crate::model::Document;

use super::options::ReportOptions;

/// Write the report for `doc` to `out` and return how many paragraphs were printed.
///
/// The header is a banner, the title and a second banner. Each paragraph
/// with visible text then follows as an empty line plus its untrimmed text.
/// Blank paragraphs are skipped and order is never changed.
pub fn write_report<W: Write>(doc: &Document, options: &ReportOptions, out: &mut W) -> Result<usize> {
    let banner = options.banner();
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", options.title)?;
    writeln!(out, "{}", banner)?;

    let mut printed = 0;
    for para in doc.non_blank_paragraphs() {
        writeln!(out, "\n{}", para.text())?;
        printed += 1;
    }

    out.flush()?;
    Ok(printed)
}

/// Render the report to a string.
pub fn to_report(doc: &Document, options: &ReportOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_report(doc, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
