//! Document model structures.

use super::Paragraph;

/// A parsed Word document: its body paragraphs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Body paragraphs, blank ones included
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document with one single-run paragraph per entry.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: texts.into_iter().map(Paragraph::with_text).collect(),
        }
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Number of paragraphs, blank ones included.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs with visible text, in document order.
    pub fn non_blank_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| !p.is_blank())
    }

    /// Extract all non-blank paragraph text, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.non_blank_paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
