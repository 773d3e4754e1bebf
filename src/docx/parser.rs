//! DOCX parser implementation.

use crate::container::OoxmlContainer;
use crate::detect::require_document;
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, TextRun};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// WordprocessingML main namespace (transitional).
const WML_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    container: OoxmlContainer,
    document_part: String,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container, rejecting packages that are not Word documents.
    fn from_container(container: OoxmlContainer) -> Result<Self> {
        require_document(&container)?;
        let document_part = container.main_document_path()?;

        Ok(Self {
            container,
            document_part,
        })
    }

    /// Parse the main document part and return its body paragraphs.
    pub fn parse(&self) -> Result<Document> {
        let xml = self.container.read_xml(&self.document_part)?;
        let doc = parse_document_xml(&xml)?;
        tracing::debug!(
            part = %self.document_part,
            paragraphs = doc.len(),
            "parsed document"
        );
        Ok(doc)
    }

    /// Archive path of the main document part.
    pub fn document_part(&self) -> &str {
        &self.document_part
    }
}

/// Collect the body paragraphs of a `w:document`.
///
/// Only `w:p` elements directly under `w:body` count. Their text comes from
/// runs that sit directly in the paragraph or in a top-level `w:hyperlink`,
/// so tables, content controls, revisions and text boxes contribute nothing.
/// Elements are matched by namespace, whatever prefix the producer chose.
pub(crate) fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut reader = NsReader::from_str(xml);
    // Keep whitespace inside xml:space="preserve" text
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    // Local names of open elements; empty for elements outside WordprocessingML
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraph: Option<Paragraph> = None;
    let mut para_depth = 0usize;
    let mut run: Option<TextRun> = None;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_resolved_event_into(&mut buf) {
            Ok((ns, Event::Start(ref e))) => {
                let name = wml_name(&ns, e);
                match name {
                    b"p" if paragraph.is_none() && is_body(&stack) => {
                        paragraph = Some(Paragraph::new());
                        para_depth = stack.len() + 1;
                    }
                    b"r" if run.is_none()
                        && paragraph.is_some()
                        && is_run_parent(&stack, para_depth) =>
                    {
                        run = Some(TextRun::default());
                        run_depth = stack.len() + 1;
                    }
                    b"t" if run.is_some() && stack.len() == run_depth => {
                        in_text = true;
                    }
                    _ => {
                        if stack.len() == run_depth {
                            if let (Some(run), Some(text)) = (run.as_mut(), run_content(name, e)) {
                                run.text.push_str(text);
                            }
                        }
                    }
                }
                stack.push(name.to_vec());
            }
            Ok((ns, Event::Empty(ref e))) => {
                let name = wml_name(&ns, e);
                if name == b"p" && paragraph.is_none() && is_body(&stack) {
                    doc.add_paragraph(Paragraph::new());
                } else if stack.len() == run_depth {
                    if let (Some(run), Some(text)) = (run.as_mut(), run_content(name, e)) {
                        run.text.push_str(text);
                    }
                }
            }
            Ok((_, Event::Text(ref e))) if in_text => {
                if let Some(run) = run.as_mut() {
                    let text = e.unescape().map_err(|err| Error::XmlParse(err.to_string()))?;
                    run.text.push_str(&text);
                }
            }
            Ok((_, Event::CData(ref e))) if in_text => {
                if let Some(run) = run.as_mut() {
                    run.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok((_, Event::End(_))) => {
                let depth = stack.len();
                let name = stack.pop();

                if in_text && name.as_deref() == Some(b"t".as_slice()) {
                    in_text = false;
                }
                if run.is_some() && depth == run_depth {
                    if let (Some(finished), Some(para)) = (run.take(), paragraph.as_mut()) {
                        if !finished.is_empty() {
                            para.add_run(finished);
                        }
                    }
                    run_depth = 0;
                }
                if paragraph.is_some() && depth == para_depth {
                    if let Some(para) = paragraph.take() {
                        doc.add_paragraph(para);
                    }
                    para_depth = 0;
                }
            }
            Ok((_, Event::Eof)) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(doc)
}

/// Local name of a WordprocessingML element, or empty for any other namespace.
fn wml_name<'a>(ns: &ResolveResult, e: &'a BytesStart) -> &'a [u8] {
    match ns {
        ResolveResult::Bound(Namespace(uri)) if *uri == WML_NS => e.local_name().into_inner(),
        _ => b"",
    }
}

/// Whether the innermost open element is `w:body`.
fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name.as_slice() == b"body")
}

/// Whether a run opened at this point belongs to the current paragraph's text.
fn is_run_parent(stack: &[Vec<u8>], para_depth: usize) -> bool {
    stack.len() == para_depth
        || (stack.len() == para_depth + 1
            && stack
                .last()
                .is_some_and(|name| name.as_slice() == b"hyperlink"))
}

/// Text contributed by a non-`w:t` child of a run.
fn run_content(name: &[u8], e: &BytesStart) -> Option<&'static str> {
    match name {
        b"tab" | b"ptab" => Some("\t"),
        b"br" => match get_attr(e, b"type").as_deref() {
            None | Some("textWrapping") => Some("\n"),
            // page and column breaks carry no text
            _ => None,
        },
        b"cr" => Some("\n"),
        b"noBreakHyphen" => Some("-"),
        _ => None,
    }
}

/// Helper to get an attribute value by local name.
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
