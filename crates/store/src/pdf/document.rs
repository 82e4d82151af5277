//! PDF Document Structure
//!
//! Catalog, page tree, page objects and the Info dictionary.

use super::fonts::encode_win_ansi;
use super::objects::{ObjectId, PdfDictionary, PdfObject};
use super::renderer::POINTS_PER_MM;
use chrono::{DateTime, Utc};

/// Version written in the file header
pub const PDF_VERSION: &str = "1.4";

/// Producer recorded in the Info dictionary
pub const PRODUCER: &str = concat!("Resigner PDF Export ", env!("CARGO_PKG_VERSION"));

/// PDF document information
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub producer: String,
    pub creation_date: DateTime<Utc>,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>, author: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            subject: subject.into(),
            producer: PRODUCER.to_string(),
            creation_date: Utc::now(),
        }
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = date;
        self
    }

    /// Convert to the Info dictionary. An empty subject is left out.
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new()
            .with("Title", PdfObject::string(encode_win_ansi(&self.title)))
            .with("Author", PdfObject::string(encode_win_ansi(&self.author)))
            .with("Producer", PdfObject::string(encode_win_ansi(&self.producer)))
            .with("CreationDate", PdfObject::string(pdf_date(&self.creation_date)));
        if !self.subject.is_empty() {
            dict.insert("Subject", PdfObject::string(encode_win_ansi(&self.subject)));
        }
        dict
    }
}

/// PDF date string, e.g. `D:20261016093000Z`
pub fn pdf_date(date: &DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Document catalog (root object)
pub fn create_catalog(pages: ObjectId) -> PdfDictionary {
    PdfDictionary::typed("Catalog").with("Pages", pages)
}

/// Page tree root
pub fn create_pages(kids: &[ObjectId]) -> PdfDictionary {
    PdfDictionary::typed("Pages")
        .with(
            "Kids",
            kids.iter().copied().map(PdfObject::from).collect::<Vec<_>>(),
        )
        .with("Count", kids.len())
}

/// Page object. Width and height are millimetres.
pub fn create_page(
    parent: ObjectId,
    contents: ObjectId,
    resources: PdfDictionary,
    width: f32,
    height: f32,
) -> PdfDictionary {
    PdfDictionary::typed("Page")
        .with("Parent", parent)
        .with(
            "MediaBox",
            PdfObject::rect(
                0.0,
                0.0,
                width as f64 * POINTS_PER_MM,
                height as f64 * POINTS_PER_MM,
            ),
        )
        .with("Contents", contents)
        .with("Resources", resources)
}

/// Resources dictionary with the given font resource names
pub fn create_resources(fonts: &[(String, ObjectId)]) -> PdfDictionary {
    let mut font_dict = PdfDictionary::new();
    for (name, id) in fonts {
        font_dict.insert(name.clone(), *id);
    }
    PdfDictionary::new().with("Font", font_dict).with(
        "ProcSet",
        vec![PdfObject::name("PDF"), PdfObject::name("Text")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_info_dictionary() {
        let date = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let info = DocumentInfo::new("Resignation Letter", "Resigner", "").with_creation_date(date);
        let s = info.to_dictionary().to_string();
        assert!(s.contains("/Title (Resignation Letter)"));
        assert!(s.contains("/Author (Resigner)"));
        assert!(s.contains("/CreationDate (D:20260304050607Z)"));
        assert!(s.contains("/Producer (Resigner PDF Export"));
        assert!(!s.contains("/Subject"));
    }

    #[test]
    fn test_info_with_subject() {
        let info = DocumentInfo::new("T", "A", "Notice");
        assert!(info.to_dictionary().to_string().contains("/Subject (Notice)"));
    }

    #[test]
    fn test_pages_tree() {
        let pages = create_pages(&[ObjectId(4), ObjectId(6)]).to_string();
        assert!(pages.contains("/Count 2"));
        assert!(pages.contains("/Kids [4 0 R 6 0 R]"));
        assert!(pages.contains("/Type /Pages"));
    }

    #[test]
    fn test_a4_media_box() {
        let page = create_page(
            ObjectId(2),
            ObjectId(5),
            create_resources(&[("F1".to_string(), ObjectId(3))]),
            210.0,
            297.0,
        )
        .to_string();
        assert!(page.contains("/MediaBox [0 0 595.2756 841.8898]"));
        assert!(page.contains("/Font << /F1 3 0 R >>"));
        assert!(page.contains("/ProcSet [/PDF /Text]"));
    }
}
