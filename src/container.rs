//! ZIP container abstraction for Word packages.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// Relationship type pointing from the package root to the main document part.
pub const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Where Word puts the main document part when relationships say nothing.
pub const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";

/// A relationship entry from a .rels file.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

/// Collection of relationships parsed from a .rels file.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
    /// Map from relationship type to list of relationships
    pub by_type: HashMap<String, Vec<Relationship>>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// Get relationships by type.
    pub fn get_by_type(&self, rel_type: &str) -> Vec<&Relationship> {
        self.by_type
            .get(rel_type)
            .map(|v| v.iter().collect())
            .unwrap_or_default()
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_type
            .entry(rel.rel_type.clone())
            .or_default()
            .push(rel.clone());
        self.by_id.insert(rel.id.clone(), rel);
    }
}

/// Rewrite a UTF-16 encoding declaration to UTF-8.
///
/// Once UTF-16 bytes are decoded into a `String`, a declaration still saying
/// `encoding="UTF-16"` would make quick-xml reinterpret the text.
fn fix_xml_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end_decl) = content.find("?>") {
            let decl = &content[..end_decl + 2];
            let rest = &content[end_decl + 2..];

            let fixed_decl = decl
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");

            return format!("{}{}", fixed_decl, rest);
        }
    }
    content.to_string()
}

/// Decode XML bytes handling UTF-8 (with or without BOM) and UTF-16 LE/BE.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if bytes.len() >= 3 && bytes[..3] == [0xEF, 0xBB, 0xBF] {
        return String::from_utf8(bytes[3..].to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)));
    }

    if bytes.len() >= 2 && bytes[..2] == [0xFF, 0xFE] {
        let content = decode_utf16(&bytes[2..], u16::from_le_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    if bytes.len() >= 2 && bytes[..2] == [0xFE, 0xFF] {
        let content = decode_utf16(&bytes[2..], u16::from_be_bytes)?;
        return Ok(fix_xml_encoding_declaration(&content));
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(e) => {
            // BOM-less UTF-16: ASCII markup leaves every other byte zero
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                let content = decode_utf16(bytes, u16::from_le_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                let content = decode_utf16(bytes, u16::from_be_bytes)?;
                Ok(fix_xml_encoding_declaration(&content))
            } else {
                Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    e,
                )))
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// OOXML package over an in-memory ZIP archive.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open a package from a file path.
    ///
    /// A path that does not exist is reported as [`Error::PackageNotFound`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paratext::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("ReConnect Blogs.docx")?;
    /// # Ok::<(), paratext::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::PackageNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "read package");
        Self::from_bytes(data)
    }

    /// Create a package from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == path)
    }

    /// List all parts in the archive.
    pub fn list_files(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }

    /// Read package-level relationships (`_rels/.rels`).
    pub fn read_package_relationships(&self) -> Result<Relationships> {
        self.parse_relationships("_rels/.rels")
    }

    /// Path of the main document part inside the archive.
    ///
    /// Follows the `officeDocument` package relationship, falling back to
    /// `word/document.xml` when the relationship is absent.
    pub fn main_document_path(&self) -> Result<String> {
        let rels = self.read_package_relationships()?;
        let path = rels
            .get_by_type(OFFICE_DOCUMENT_REL)
            .into_iter()
            .find(|rel| !rel.external)
            .map(|rel| Self::resolve_path("", &rel.target))
            .unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string());
        tracing::debug!(part = %path, "resolved main document part");
        Ok(path)
    }

    /// Parse a relationships file. A missing or empty file yields no relationships.
    fn parse_relationships(&self, rels_path: &str) -> Result<Relationships> {
        let content = match self.read_xml(rels_path) {
            Ok(c) => c,
            Err(_) => return Ok(Relationships::new()),
        };

        if content.trim().is_empty() {
            return Ok(Relationships::new());
        }

        let mut rels = Relationships::new();
        let mut reader = quick_xml::Reader::from_str(&content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Empty(e)) if e.name().as_ref() == b"Relationship" => {
                    let mut id = String::new();
                    let mut rel_type = String::new();
                    let mut target = String::new();
                    let mut external = false;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => id = String::from_utf8_lossy(&attr.value).to_string(),
                            b"Type" => rel_type = String::from_utf8_lossy(&attr.value).to_string(),
                            b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                            b"TargetMode" => {
                                external = String::from_utf8_lossy(&attr.value)
                                    .eq_ignore_ascii_case("external")
                            }
                            _ => {}
                        }
                    }

                    if !id.is_empty() {
                        rels.add(Relationship {
                            id,
                            rel_type,
                            target,
                            external,
                        });
                    }
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Resolve a relationship target against the part that owns it.
    pub fn resolve_path(base: &str, relative: &str) -> String {
        if let Some(stripped) = relative.strip_prefix('/') {
            return stripped.to_string();
        }

        let base_dir = Path::new(base).parent().unwrap_or(Path::new(""));

        let mut result = base_dir.to_path_buf();
        for component in Path::new(relative).components() {
            match component {
                std::path::Component::ParentDir => {
                    result.pop();
                }
                std::path::Component::Normal(c) => {
                    result.push(c);
                }
                _ => {}
            }
        }

        result.to_string_lossy().replace('\\', "/")
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            OoxmlContainer::resolve_path("", "word/document.xml"),
            "word/document.xml"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("", "/word/document2.xml"),
            "word/document2.xml"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("word/document.xml", "../media/image1.png"),
            "media/image1.png"
        );
        assert_eq!(
            OoxmlContainer::resolve_path("word/document.xml", "styles.xml"),
            "word/styles.xml"
        );
    }

    #[test]
    fn test_relationships_collection() {
        let mut rels = Relationships::new();
        rels.add(Relationship {
            id: "rId1".to_string(),
            rel_type: "http://test/type1".to_string(),
            target: "target1.xml".to_string(),
            external: false,
        });
        rels.add(Relationship {
            id: "rId2".to_string(),
            rel_type: "http://test/type1".to_string(),
            target: "target2.xml".to_string(),
            external: false,
        });

        assert!(rels.get("rId1").is_some());
        assert!(rels.get("rId3").is_none());
        assert_eq!(rels.get_by_type("http://test/type1").len(), 2);
    }

    #[test]
    fn test_open_in_memory_docx() {
        let container = OoxmlContainer::from_bytes(fixtures::docx("<w:p/>")).unwrap();
        assert!(container.exists("[Content_Types].xml"));
        assert!(container.exists("word/document.xml"));
        assert!(!container.exists("word/styles.xml"));
        assert_eq!(container.list_files().len(), 3);

        let rels = container.read_package_relationships().unwrap();
        assert!(rels.get("rId1").is_some());
        assert_eq!(container.main_document_path().unwrap(), "word/document.xml");
    }

    #[test]
    fn test_main_document_path_from_relationship() {
        let rels = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="/word/document2.xml"/>
</Relationships>"#;
        let data = fixtures::package(&[
            ("_rels/.rels", rels.as_bytes()),
            ("word/document2.xml", b"<w:document/>".as_slice()),
        ]);
        let container = OoxmlContainer::from_bytes(data).unwrap();
        assert_eq!(container.main_document_path().unwrap(), "word/document2.xml");
    }

    #[test]
    fn test_main_document_path_fallback() {
        let data = fixtures::package(&[("word/document.xml", b"<w:document/>".as_slice())]);
        let container = OoxmlContainer::from_bytes(data).unwrap();
        assert_eq!(container.main_document_path().unwrap(), DEFAULT_DOCUMENT_PART);
    }

    #[test]
    fn test_missing_part() {
        let container = OoxmlContainer::from_bytes(fixtures::docx("")).unwrap();
        let result = container.read_xml("word/numbering.xml");
        assert!(matches!(result, Err(Error::MissingComponent(_))));
    }

    #[test]
    fn test_open_missing_file() {
        let result = OoxmlContainer::open("definitely/not/here.docx");
        assert!(matches!(result, Err(Error::PackageNotFound(_))));
    }

    #[test]
    fn test_not_a_zip() {
        let result = OoxmlContainer::from_bytes(b"plain text, not a package".to_vec());
        assert!(matches!(result, Err(Error::ZipArchive(_))));
    }

    #[test]
    fn test_utf16_decoding() {
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        let utf8_bom = b"\xEF\xBB\xBF<?xml>";
        assert_eq!(decode_xml_bytes(utf8_bom).unwrap(), "<?xml>");

        let utf8_plain = b"<?xml>";
        assert_eq!(decode_xml_bytes(utf8_plain).unwrap(), "<?xml>");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let result = decode_xml_bytes(b"A\xFFCD");
        match result {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("expected invalid data error, got {:?}", other),
        }

        let data = fixtures::package(&[("word/document.xml", b"<w:t>A\xFFCD</w:t>".as_slice())]);
        let container = OoxmlContainer::from_bytes(data).unwrap();
        assert!(container.read_xml("word/document.xml").is_err());
    }

    #[test]
    fn test_utf16_declaration_rewritten() {
        let xml = r#"<?xml version="1.0" encoding="UTF-16"?><a/>"#;
        let mut bytes = vec![0xFF, 0xFE];
        for unit in xml.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(
            decode_xml_bytes(&bytes).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?><a/>"#
        );
    }
}
