//! PDF Object Model
//!
//! The handful of object types a letter export needs. Objects render to their
//! PDF syntax through `Display`; string bytes outside printable ASCII are
//! written as octal escapes, so the rendered form is always ASCII.

use std::collections::BTreeMap;
use std::fmt;

/// Indirect object number (generation is always 0 for new files)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0", self.0)
    }
}

/// PDF object types
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string, already in the target byte encoding
    String(Vec<u8>),
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Reference(ObjectId),
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        PdfObject::String(bytes.into())
    }

    pub fn reference(id: ObjectId) -> Self {
        PdfObject::Reference(id)
    }

    /// Rectangle array `[x0 y0 x1 y1]`
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        PdfObject::Array(vec![
            PdfObject::Real(x0),
            PdfObject::Real(y0),
            PdfObject::Real(x1),
            PdfObject::Real(y1),
        ])
    }
}

impl From<bool> for PdfObject {
    fn from(b: bool) -> Self {
        PdfObject::Boolean(b)
    }
}

impl From<i64> for PdfObject {
    fn from(n: i64) -> Self {
        PdfObject::Integer(n)
    }
}

impl From<usize> for PdfObject {
    fn from(n: usize) -> Self {
        PdfObject::Integer(n as i64)
    }
}

impl From<f64> for PdfObject {
    fn from(n: f64) -> Self {
        PdfObject::Real(n)
    }
}

impl From<ObjectId> for PdfObject {
    fn from(id: ObjectId) -> Self {
        PdfObject::Reference(id)
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

impl From<Vec<PdfObject>> for PdfObject {
    fn from(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }
}

/// Dictionary with keys kept in sorted order for stable output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with its `/Type` entry set
    pub fn typed(type_name: &str) -> Self {
        Self::new().with("Type", PdfObject::name(type_name))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PdfObject>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stream payload with its dictionary. `/Length` is filled in by the writer.
#[derive(Debug, Clone, Default)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
        }
    }
}

/// Format a number the way content streams expect: no exponent, at most
/// four decimals, trailing zeros trimmed.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let s = format!("{:.4}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("(")?;
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => write!(f, "\\{}", byte as char)?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            0x20..=0x7E => write!(f, "{}", byte as char)?,
            _ => write!(f, "\\{:03o}", byte)?,
        }
    }
    f.write_str(")")
}

fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_str("/")?;
    for byte in name.bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                write!(f, "#{:02X}", byte)?
            }
            0x21..=0x7E => write!(f, "{}", byte as char)?,
            _ => write!(f, "#{:02X}", byte)?,
        }
    }
    Ok(())
}

impl fmt::Display for PdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfObject::Null => f.write_str("null"),
            PdfObject::Boolean(b) => write!(f, "{}", b),
            PdfObject::Integer(n) => write!(f, "{}", n),
            PdfObject::Real(n) => f.write_str(&format_number(*n)),
            PdfObject::String(bytes) => write_literal(f, bytes),
            PdfObject::Name(name) => write_name(f, name),
            PdfObject::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            PdfObject::Dictionary(dict) => write!(f, "{}", dict),
            PdfObject::Reference(id) => write!(f, "{} R", id),
        }
    }
}

impl fmt::Display for PdfDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<<")?;
        for (key, value) in &self.entries {
            f.write_str(" ")?;
            write_name(f, key)?;
            write!(f, " {}", value)?;
        }
        f.write_str(" >>")
    }
}
