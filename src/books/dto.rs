use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const TITLE_REQUIRED: &str = "Title is required and must be a non-empty string";
pub const AUTHOR_REQUIRED: &str = "Author is required and must be a non-empty string";
pub const INVALID_YEAR: &str = "Year must be a valid integer between 0 and current year";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: Option<i64>,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
        }
    }
}

/// Client supplied fields for creating or replacing a book.
///
/// Fields are kept as raw JSON so that a wrongly typed value shows up as a validation
/// message instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

impl BookPayload {
    /// Decodes a JSON request body. An empty body carries no fields and so does a top level
    /// array. Anything that does not start as an object or an array is rejected, as is
    /// malformed JSON.
    pub fn from_slice(body: &[u8]) -> LibraryResult<Self> {
        match body.iter().find(|b| !b.is_ascii_whitespace()) {
            None => Ok(Self::default()),
            Some(b'{') | Some(b'[') => match serde_json::from_slice::<Value>(body)? {
                Value::Object(map) => Ok(serde_json::from_value(Value::Object(map))?),
                _ => Ok(Self::default()),
            },
            Some(_) => Err(LibraryError::serialization("JSON body must be an object or an array")),
        }
    }

    /// Checks every rule, collecting all violations in title, author, year order, and builds an
    /// unsaved book with trimmed text. A falsy year (absent, null, 0, "" or false)
    /// is stored as no year at all, so an explicit 0 comes back as null.
    pub fn build_book(&self, current_year: i64) -> LibraryResult<BookEntity> {
        self.check(current_year)
            .map_err(|errors| LibraryError::validation(VALIDATION_FAILED, errors))
    }

    fn check(&self, current_year: i64) -> Result<BookEntity, Vec<String>> {
        let mut errors = vec![];
        let title = required_text(&self.title);
        if title.is_none() {
            errors.push(TITLE_REQUIRED.to_string());
        }
        let author = required_text(&self.author);
        if author.is_none() {
            errors.push(AUTHOR_REQUIRED.to_string());
        }
        let year = match self.year.as_ref().filter(|v| is_truthy(v)) {
            None => None,
            Some(Value::Number(n)) => match integral(n) {
                Some(year) if (0..=current_year).contains(&year) => Some(year),
                _ => {
                    errors.push(INVALID_YEAR.to_string());
                    None
                }
            },
            Some(_) => {
                errors.push(INVALID_YEAR.to_string());
                None
            }
        };
        match (title, author) {
            (Some(title), Some(author)) if errors.is_empty() => Ok(BookEntity::new(title, author, year)),
            _ => Err(errors),
        }
    }
}

/// A request body as received. It is only decoded once the book it targets is known to exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookBody {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl BookBody {
    pub fn new(content_type: Option<&str>, bytes: &[u8]) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            bytes: bytes.to_vec(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.content_type.as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|essence| essence.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
            .unwrap_or(false)
    }

    // bodies of any other content type are not read and carry no fields
    pub fn decode(&self) -> LibraryResult<BookPayload> {
        if self.is_json() {
            BookPayload::from_slice(&self.bytes)
        } else {
            Ok(BookPayload::default())
        }
    }
}

fn required_text(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// 1999.0 counts as an integer, 1999.5 does not.
fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}
