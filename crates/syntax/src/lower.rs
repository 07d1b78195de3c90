//! Lowering from the apollo-parser CST into [`crate::ast`] nodes.

use std::sync::Arc;

use apollo_parser::cst::{self, CstNode};
use apollo_parser::SyntaxTree;
use graphql_types::{Location, Source};

use crate::ast;

/// Errors produced while parsing GraphQL text into literal nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The parser reported an error.
    #[error("Syntax Error: {message} (at offset {offset})")]
    Parse { message: String, offset: usize },

    /// The text parsed, but did not contain the expected construct.
    #[error("Syntax Error: expected {expected}")]
    Missing { expected: &'static str },
}

// A standalone value is parsed as the argument of a synthetic field.
const VALUE_PREFIX: &str = "{ f(v: ";
const VALUE_SUFFIX: &str = "\n) }";

/// Parse a standalone value, such as `42`, `"hi"` or `[1, 2]`.
///
/// Only ignored tokens (whitespace, commas, comments) may follow the value.
/// Locations on the returned nodes point into `source`.
pub fn parse_value(source: Arc<Source>) -> Result<ast::Value, SyntaxError> {
    let text = format!("{VALUE_PREFIX}{}{VALUE_SUFFIX}", source.body());
    let tree = apollo_parser::Parser::new(&text).parse();
    let body_end = VALUE_PREFIX.len() + source.body().len();
    let lowering = Lowering {
        source,
        shift: VALUE_PREFIX.len(),
    };
    lowering.check_errors(&tree)?;

    let value = first_field(&tree)
        .and_then(|field| field.arguments())
        .and_then(|args| args.arguments().next())
        .and_then(|arg| arg.value())
        .ok_or(SyntaxError::Missing { expected: "value" })?;

    let value_end: usize = value.syntax().text_range().end().into();
    let rest_start = value_end.min(body_end);
    let rest = text.get(rest_start..body_end).unwrap_or_default();
    if let Some(at) = first_significant(rest) {
        let offset = rest_start.saturating_sub(VALUE_PREFIX.len()) + at;
        tracing::debug!(offset, "Unexpected text after value");
        return Err(SyntaxError::Parse {
            message: "Unexpected text after value".to_string(),
            offset,
        });
    }

    lowering
        .value(&value)
        .ok_or(SyntaxError::Missing { expected: "value" })
}

/// Byte position of the first character in `text` that is not an ignored
/// token.
fn first_significant(text: &str) -> Option<usize> {
    let mut in_comment = false;
    for (i, c) in text.char_indices() {
        match c {
            '\n' | '\r' => in_comment = false,
            _ if in_comment => {}
            '#' => in_comment = true,
            ' ' | '\t' | ',' | '\u{feff}' => {}
            _ => return Some(i),
        }
    }
    None
}

/// Parse an executable document and lower its first top-level field.
pub fn parse_field(source: Arc<Source>) -> Result<ast::Field, SyntaxError> {
    let tree = apollo_parser::Parser::new(source.body()).parse();
    let lowering = Lowering { source, shift: 0 };
    lowering.check_errors(&tree)?;

    first_field(&tree)
        .and_then(|field| lowering.field(&field))
        .ok_or(SyntaxError::Missing { expected: "field" })
}

fn first_field(tree: &SyntaxTree) -> Option<cst::Field> {
    tree.document()
        .definitions()
        .find_map(|def| match def {
            cst::Definition::OperationDefinition(op) => op.selection_set(),
            _ => None,
        })?
        .selections()
        .find_map(|selection| match selection {
            cst::Selection::Field(field) => Some(field),
            _ => None,
        })
}

struct Lowering {
    source: Arc<Source>,
    /// Bytes of synthetic text preceding the caller's source
    shift: usize,
}

impl Lowering {
    fn check_errors(&self, tree: &SyntaxTree) -> Result<(), SyntaxError> {
        match tree.errors().next() {
            Some(error) => {
                let offset = error
                    .index()
                    .saturating_sub(self.shift)
                    .min(self.source.body().len());
                tracing::debug!(
                    source = self.source.name(),
                    offset,
                    message = error.message(),
                    "Failed to parse GraphQL"
                );
                Err(SyntaxError::Parse {
                    message: error.message().to_string(),
                    offset,
                })
            }
            None => Ok(()),
        }
    }

    fn span<N: CstNode>(&self, node: &N) -> Location {
        let range = node.syntax().text_range();
        self.location(range.start().into(), range.end().into())
    }

    fn location(&self, start: usize, end: usize) -> Location {
        Location::new(
            start.saturating_sub(self.shift),
            end.saturating_sub(self.shift),
            Arc::clone(&self.source),
        )
    }

    fn name(&self, name: &cst::Name) -> ast::Name {
        ast::Name {
            value: Arc::from(name.text().as_str()),
            loc: Some(self.span(name)),
        }
    }

    fn field(&self, field: &cst::Field) -> Option<ast::Field> {
        let name = self.name(&field.name()?);
        let alias = field
            .alias()
            .and_then(|alias| alias.name())
            .map(|n| self.name(&n));

        let arguments = field
            .arguments()
            .map(|args| {
                args.arguments()
                    .filter_map(|arg| self.argument(&arg))
                    .collect()
            })
            .unwrap_or_default();

        Some(ast::Field {
            alias,
            name,
            arguments,
            loc: Some(self.span(field)),
        })
    }

    fn argument(&self, argument: &cst::Argument) -> Option<ast::Argument> {
        Some(ast::Argument {
            name: self.name(&argument.name()?),
            value: self.value(&argument.value()?)?,
            loc: Some(self.span(argument)),
        })
    }

    fn value(&self, value: &cst::Value) -> Option<ast::Value> {
        let lowered = match value {
            cst::Value::Variable(var) => {
                let loc = Some(self.span(var));
                ast::Value::Variable(ast::Variable {
                    name: self.name(&var.name()?),
                    loc,
                })
            }
            cst::Value::IntValue(int) => {
                let token = int.int_token()?;
                let range = token.text_range();
                ast::Value::Int(ast::IntValue {
                    value: token.text().to_string(),
                    loc: Some(self.location(range.start().into(), range.end().into())),
                })
            }
            cst::Value::FloatValue(float) => {
                let token = float.float_token()?;
                let range = token.text_range();
                ast::Value::Float(ast::FloatValue {
                    value: token.text().to_string(),
                    loc: Some(self.location(range.start().into(), range.end().into())),
                })
            }
            cst::Value::StringValue(string) => {
                let raw = string.syntax().text().to_string();
                ast::Value::String(ast::StringValue {
                    value: String::from(string),
                    block: raw.trim_start().starts_with("\"\"\""),
                    loc: Some(self.span(string)),
                })
            }
            cst::Value::BooleanValue(boolean) => ast::Value::Boolean(ast::BooleanValue {
                value: boolean.true_token().is_some(),
                loc: Some(self.span(boolean)),
            }),
            cst::Value::NullValue(null) => ast::Value::Null(ast::NullValue {
                loc: Some(self.span(null)),
            }),
            cst::Value::EnumValue(enum_value) => ast::Value::Enum(ast::EnumValue {
                value: enum_value.name()?.text().to_string(),
                loc: Some(self.span(enum_value)),
            }),
            cst::Value::ListValue(list) => ast::Value::List(ast::ListValue {
                values: list.values().filter_map(|v| self.value(&v)).collect(),
                loc: Some(self.span(list)),
            }),
            cst::Value::ObjectValue(object) => ast::Value::Object(ast::ObjectValue {
                fields: object
                    .object_fields()
                    .filter_map(|field| {
                        Some(ast::ObjectField {
                            name: self.name(&field.name()?),
                            value: self.value(&field.value()?)?,
                            loc: Some(self.span(&field)),
                        })
                    })
                    .collect(),
                loc: Some(self.span(object)),
            }),
        };
        Some(lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(text: &str) -> ast::Value {
        parse_value(Arc::new(Source::new(text))).unwrap()
    }

    #[test]
    fn test_parse_int_literal() {
        let ast::Value::Int(int) = value("42") else {
            panic!("expected int literal");
        };
        assert_eq!(int.value, "42");
        let loc = int.loc.unwrap();
        assert_eq!((loc.start, loc.end), (0, 2));
        assert_eq!(loc.text(), Some("42"));
    }

    #[test]
    fn test_parse_negative_int_keeps_text() {
        let ast::Value::Int(int) = value("-7") else {
            panic!("expected int literal");
        };
        assert_eq!(int.value, "-7");
    }

    #[test]
    fn test_parse_float_literal() {
        let ast::Value::Float(float) = value("1.5e3") else {
            panic!("expected float literal");
        };
        assert_eq!(float.value, "1.5e3");
    }

    #[test]
    fn test_parse_string_literal_is_unescaped() {
        let ast::Value::String(string) = value(r#""a\nb""#) else {
            panic!("expected string literal");
        };
        assert_eq!(string.value, "a\nb");
        assert!(!string.block);
    }

    #[test]
    fn test_parse_block_string() {
        let ast::Value::String(string) = value(r#""""block""""#) else {
            panic!("expected string literal");
        };
        assert_eq!(string.value, "block");
        assert!(string.block);
    }

    #[test]
    fn test_parse_other_kinds() {
        assert_eq!(value("true").kind(), ast::ValueKind::Boolean);
        assert!(matches!(
            value("false"),
            ast::Value::Boolean(ast::BooleanValue { value: false, .. })
        ));
        assert_eq!(value("null").kind(), ast::ValueKind::Null);
        assert_eq!(value("RED").kind(), ast::ValueKind::Enum);
        assert_eq!(value("$id").kind(), ast::ValueKind::Variable);
    }

    #[test]
    fn test_parse_list_and_object() {
        let ast::Value::List(list) = value("[1, \"two\", 3.0]") else {
            panic!("expected list");
        };
        let kinds: Vec<_> = list.values.iter().map(ast::Value::kind).collect();
        assert_eq!(
            kinds,
            vec![ast::ValueKind::Int, ast::ValueKind::String, ast::ValueKind::Float]
        );

        let ast::Value::Object(object) = value("{ a: 1, b: { c: true } }") else {
            panic!("expected object");
        };
        assert_eq!(object.fields.len(), 2);
        assert_eq!(object.fields[0].name.as_str(), "a");
        assert_eq!(object.fields[1].value.kind(), ast::ValueKind::Object);
    }

    #[test]
    fn test_parse_value_error_offset_is_relative_to_source() {
        let err = parse_value(Arc::new(Source::new("[1, 2"))).unwrap_err();
        assert!(matches!(err, SyntaxError::Parse { .. }));
    }

    #[test]
    fn test_parse_value_rejects_trailing_arguments() {
        let err = parse_value(Arc::new(Source::new("1, w: 2"))).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Parse {
                message: "Unexpected text after value".to_string(),
                offset: 3,
            }
        );
    }

    #[test]
    fn test_parse_value_allows_trailing_ignored_tokens() {
        let ast::Value::Int(int) = value("7 , # the answer\n\t") else {
            panic!("expected int literal");
        };
        assert_eq!(int.value, "7");
        assert_eq!(value("[1] # done").kind(), ast::ValueKind::List);
    }

    #[test]
    fn test_parse_value_error_offsets_stay_within_source() {
        for text in ["", "1) { x } #", "{ a: "] {
            match parse_value(Arc::new(Source::new(text))) {
                Err(SyntaxError::Parse { offset, .. }) => {
                    assert!(offset <= text.len(), "{text:?} reported offset {offset}");
                }
                other => panic!("{text:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn test_first_significant() {
        assert_eq!(first_significant(""), None);
        assert_eq!(first_significant(" ,\t\r\n"), None);
        assert_eq!(first_significant("# x: 1\n"), None);
        assert_eq!(first_significant("# c\n x"), Some(5));
        assert_eq!(first_significant(", w: 2"), Some(2));
    }

    #[test]
    fn test_parse_field_arguments() {
        let source = Arc::new(Source::new("{ me: user(id: 4, name: \"x\") { id } }"));
        let field = parse_field(Arc::clone(&source)).unwrap();

        assert_eq!(field.name.as_str(), "user");
        assert_eq!(field.response_key(), "me");
        assert_eq!(field.arguments.len(), 2);

        let id = field.argument("id").unwrap();
        let loc = id.value.location().unwrap();
        assert_eq!(loc.text(), Some("4"));
        assert!(Arc::ptr_eq(&loc.source, &source));
        assert_eq!(loc.start_position().column, 16);
    }

    #[test]
    fn test_parse_field_without_operation() {
        let err = parse_field(Arc::new(Source::new("type Query { a: Int }"))).unwrap_err();
        assert_eq!(err, SyntaxError::Missing { expected: "field" });
    }

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::Missing { expected: "value" };
        assert_eq!(err.to_string(), "Syntax Error: expected value");
    }
}
