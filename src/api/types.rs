use serde::Deserialize;

/// Format tag of a book. The catalog only ever serves `PDF` and `UNICODE`,
/// anything else is kept verbatim so it can show up in logs.
/// Null, missing, or non-string tags decode as `Other` instead of failing the page.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "serde_json::Value")]
pub enum BookType {
    Pdf,
    Unicode,
    Other(String),
}

impl From<String> for BookType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PDF" => BookType::Pdf,
            "UNICODE" => BookType::Unicode,
            _ => BookType::Other(tag),
        }
    }
}

impl From<serde_json::Value> for BookType {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(tag) => BookType::from(tag),
            other => BookType::Other(other.to_string()),
        }
    }
}

/// A record without a tag is unrecognized.
impl Default for BookType {
    fn default() -> Self {
        BookType::Other(String::new())
    }
}

impl BookType {
    /// Returns the wire tag for display and logging
    pub fn tag(&self) -> &str {
        match self {
            BookType::Pdf => "PDF",
            BookType::Unicode => "UNICODE",
            BookType::Other(tag) => tag,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
}

/// A single record from the remote catalog.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: Author,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "bookType", default)]
    pub book_type: BookType,
}

/// Response body of `GET /api/books`. Pagination metadata is ignored.
#[derive(Deserialize, Debug)]
pub struct CatalogPage {
    pub data: Vec<Book>,
}
