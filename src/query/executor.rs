use crate::book::models::RecipeBook;
use crate::query::parser::{ParseError, QueryPath};
use serde_json::Value as JsonValue;

#[derive(Debug)]
pub enum QueryError {
    RecipeNotFound(String),
    PropertyNotFound(String),
    IndexOutOfRange(usize, usize),
    InvalidType(String),
    ParseError(ParseError),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::RecipeNotFound(id) => write!(f, "Recipe '{}' not found", id),
            QueryError::PropertyNotFound(prop) => write!(f, "Property '{}' not found", prop),
            QueryError::IndexOutOfRange(idx, len) => {
                write!(f, "Index {} out of range (length: {})", idx, len)
            }
            QueryError::InvalidType(msg) => write!(f, "Invalid type: {}", msg),
            QueryError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<ParseError> for QueryError {
    fn from(e: ParseError) -> Self {
        QueryError::ParseError(e)
    }
}

pub struct QueryExecutor<'a> {
    book: &'a RecipeBook,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(book: &'a RecipeBook) -> Self {
        Self { book }
    }

    pub fn execute(&self, path: &QueryPath) -> Result<JsonValue, QueryError> {
        // Check if this is a book-level collection query
        if let QueryPath::Property(name, inner) = path {
            if let QueryPath::Recipe(id) = inner.as_ref() {
                if id == "book" {
                    return self.execute_book_query(name);
                }
            }
        }

        self.walk(path)
    }

    fn execute_book_query(&self, collection: &str) -> Result<JsonValue, QueryError> {
        match collection {
            "recipes" => serde_json::to_value(&self.book.recipes)
                .map_err(|e| QueryError::InvalidType(format!("Failed to serialize: {}", e))),
            "categories" => Ok(JsonValue::Array(
                self.book
                    .categories()
                    .into_iter()
                    .map(|c| JsonValue::String(c.to_string()))
                    .collect(),
            )),
            _ => Err(QueryError::InvalidType(format!(
                "Unknown book collection: {}",
                collection
            ))),
        }
    }

    fn walk(&self, path: &QueryPath) -> Result<JsonValue, QueryError> {
        match path {
            QueryPath::Recipe(id) => self.get_recipe(id),
            QueryPath::Property(name, inner) => {
                let value = self.walk(inner)?;
                get_property(&value, name)
            }
            QueryPath::Index(idx, inner) => {
                let value = self.walk(inner)?;
                get_index(&value, *idx)
            }
        }
    }

    fn get_recipe(&self, id: &str) -> Result<JsonValue, QueryError> {
        let recipe = self
            .book
            .get(id)
            .ok_or_else(|| QueryError::RecipeNotFound(id.to_string()))?;

        serde_json::to_value(recipe)
            .map_err(|e| QueryError::InvalidType(format!("Failed to serialize recipe: {}", e)))
    }
}

fn get_property(value: &JsonValue, name: &str) -> Result<JsonValue, QueryError> {
    match value {
        JsonValue::Object(map) => map
            .get(name)
            .cloned()
            .ok_or_else(|| QueryError::PropertyNotFound(name.to_string())),
        _ => Err(QueryError::InvalidType(format!(
            "Cannot access property '{}' on non-object",
            name
        ))),
    }
}

fn get_index(value: &JsonValue, idx: usize) -> Result<JsonValue, QueryError> {
    match value {
        JsonValue::Array(arr) => {
            if idx >= arr.len() {
                return Err(QueryError::IndexOutOfRange(idx, arr.len()));
            }
            Ok(arr[idx].clone())
        }
        _ => Err(QueryError::InvalidType(format!(
            "Cannot index into non-array (index: {})",
            idx
        ))),
    }
}
