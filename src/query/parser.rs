#[derive(Debug, Clone, PartialEq)]
pub enum QueryPath {
    // Recipe by ID: "apple-pie"
    Recipe(String),
    // Property access: "apple-pie/title"
    Property(String, Box<QueryPath>),
    // Array index: "apple-pie/typed/ingredients/0"
    Index(usize, Box<QueryPath>),
}

#[derive(Debug)]
pub enum ParseError {
    EmptyPath,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyPath => write!(f, "Query path cannot be empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a slash-separated query path. The first segment names a recipe
/// (or the "book" pseudo-recipe for collection queries); numeric segments
/// index into arrays, everything else is a property access.
pub fn parse_query_path(path: &str) -> Result<QueryPath, ParseError> {
    if path.is_empty() {
        return Err(ParseError::EmptyPath);
    }

    let mut parts = path.split('/');

    let recipe_id = match parts.next() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ParseError::EmptyPath),
    };
    let mut current = QueryPath::Recipe(recipe_id);

    for part in parts {
        if part.is_empty() {
            continue;
        }

        if let Ok(index) = part.parse::<usize>() {
            current = QueryPath::Index(index, Box::new(current));
        } else {
            current = QueryPath::Property(part.to_string(), Box::new(current));
        }
    }

    Ok(current)
}
