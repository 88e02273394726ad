use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

const INDENT: &[u8] = b"    ";

// Decoded carries the records read before decoding stopped, plus the reason it stopped early.
#[derive(Debug)]
pub struct Decoded {
    pub books: Vec<BookEntity>,
    pub error: Option<LibraryError>,
}

impl Decoded {
    fn complete(books: Vec<BookEntity>) -> Self {
        Decoded { books, error: None }
    }

    fn partial(books: Vec<BookEntity>, error: LibraryError) -> Self {
        Decoded { books, error: Some(error) }
    }
}

/// Serializes the whole collection as a JSON array pretty-printed with 4-space indentation.
pub fn encode_all(books: &[BookEntity]) -> LibraryResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    books.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| LibraryError::serialization(
        format!("encoded catalog is not utf-8 {:?}", err).as_str()))
}

/// Parses a JSON array of records.
///
/// Text that is not a JSON array yields no records. A record with a missing or mistyped field
/// stops decoding: the records before it are returned along with the error, the rest are not read.
pub fn decode_all(text: &str) -> Decoded {
    let values = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(values)) => values,
        Ok(other) => {
            return Decoded::partial(vec![], LibraryError::serialization(
                format!("expected a JSON array of books, found {}", json_kind(&other)).as_str()));
        }
        Err(err) => return Decoded::partial(vec![], LibraryError::from(err)),
    };

    let mut books = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<BookEntity>(value) {
            Ok(book) => books.push(book),
            Err(err) => {
                return Decoded::partial(books, LibraryError::serialization(
                    format!("book record at index {} is invalid: {}", index, err).as_str()));
            }
        }
    }
    Decoded::complete(books)
}

pub fn encode_book(book: &BookEntity) -> LibraryResult<String> {
    Ok(serde_json::to_string(book)?)
}

pub fn decode_book(text: &str) -> LibraryResult<BookEntity> {
    Ok(serde_json::from_str(text)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
