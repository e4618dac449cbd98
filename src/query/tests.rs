#[cfg(test)]
mod tests {
    use crate::book::loader::load_book_from_str;
    use crate::book::models::RecipeBook;
    use crate::query::executor::{QueryError, QueryExecutor};
    use crate::query::parser::{parse_query_path, QueryPath};
    use serde_json::Value as JsonValue;

    fn sample_book() -> RecipeBook {
        let content = r#"
        [
            {
                "id": "apple-pie",
                "title": "Apple Pie",
                "category": "Pies",
                "typed": {
                    "ingredients": [
                        { "item": "apples", "amount": "6" },
                        { "item": "flour", "amount": "1 1/2 cups" }
                    ],
                    "steps": ["Make the crust.", "Fill and bake."]
                }
            },
            {
                "id": "scones",
                "title": "Cream Scones",
                "category": "Breads",
                "typed": {
                    "ingredients": [{ "item": "cream", "amount": "1 cup" }],
                    "steps": ["Mix.", "Bake."]
                }
            }
        ]
        "#;
        let (book, _) = load_book_from_str(content).unwrap();
        book
    }

    #[test]
    fn test_parse_recipe() {
        let result = parse_query_path("apple-pie").unwrap();
        assert!(matches!(result, QueryPath::Recipe(id) if id == "apple-pie"));
    }

    #[test]
    fn test_parse_property() {
        let result = parse_query_path("apple-pie/title").unwrap();
        match result {
            QueryPath::Property(name, inner) => {
                assert_eq!(name, "title");
                assert!(matches!(*inner, QueryPath::Recipe(id) if id == "apple-pie"));
            }
            _ => panic!("Expected Property"),
        }
    }

    #[test]
    fn test_parse_index() {
        let result = parse_query_path("apple-pie/typed/ingredients/0").unwrap();
        match result {
            QueryPath::Index(0, inner) => match *inner {
                QueryPath::Property(name, inner2) => {
                    assert_eq!(name, "ingredients");
                    assert!(matches!(*inner2, QueryPath::Property(_, _)));
                }
                _ => panic!("Expected Property"),
            },
            _ => panic!("Expected Index"),
        }
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(parse_query_path("").is_err());
    }

    #[test]
    fn test_query_recipe_title() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("apple-pie/title").unwrap();
        let result = executor.execute(&path).unwrap();
        assert_eq!(result, JsonValue::String("Apple Pie".to_string()));
    }

    #[test]
    fn test_query_ingredient_amount() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("apple-pie/typed/ingredients/1/amount").unwrap();
        let result = executor.execute(&path).unwrap();
        assert_eq!(result, JsonValue::String("1 1/2 cups".to_string()));
    }

    #[test]
    fn test_query_whole_recipe() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("scones").unwrap();
        let result = executor.execute(&path).unwrap();
        assert_eq!(result["category"], JsonValue::String("Breads".to_string()));
    }

    #[test]
    fn test_query_book_categories() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("book/categories").unwrap();
        let result = executor.execute(&path).unwrap();
        assert_eq!(
            result,
            serde_json::json!(["Pies", "Breads"])
        );
    }

    #[test]
    fn test_query_book_recipes() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("book/recipes").unwrap();
        let result = executor.execute(&path).unwrap();
        match result {
            JsonValue::Array(arr) => assert_eq!(arr.len(), 2),
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_query_unknown_recipe() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("banana-bread/title").unwrap();
        assert!(matches!(
            executor.execute(&path),
            Err(QueryError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn test_query_unknown_property() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("apple-pie/rating").unwrap();
        assert!(matches!(
            executor.execute(&path),
            Err(QueryError::PropertyNotFound(_))
        ));
    }

    #[test]
    fn test_query_index_out_of_range() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("apple-pie/typed/ingredients/9").unwrap();
        assert!(matches!(
            executor.execute(&path),
            Err(QueryError::IndexOutOfRange(9, 2))
        ));
    }

    #[test]
    fn test_query_index_on_non_array() {
        let book = sample_book();
        let executor = QueryExecutor::new(&book);

        let path = parse_query_path("apple-pie/title/0").unwrap();
        assert!(matches!(
            executor.execute(&path),
            Err(QueryError::InvalidType(_))
        ));
    }
}
