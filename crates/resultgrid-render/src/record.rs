//! Result records handed over by the query backend.
//!
//! A [`ResultRecord`] is one match (or one status marker) produced by
//! evaluating a path expression. Each variant supplies its own subset of the
//! display fields; [`ResultRecord::field`] returns `None` for a field the
//! variant does not have, which is different from an empty value.

use serde::{Deserialize, Serialize};

/// Text shown when an expression matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// A display field a record may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Source line of the matched node.
    Line,
    /// Element name of the matched node.
    Tag,
    /// Rendered match content.
    Result,
    /// Diagnostic text from a failed parse or evaluation.
    Error,
}

/// Discriminant of a [`ResultRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Element,
    Attribute,
    Text,
    Scalar,
    ParseError,
    NoResults,
}

/// A name/value pair of an element's attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One record produced by the query backend.
///
/// Serialized with an internal `kind` tag:
///
/// ```rust
/// use resultgrid_render::{Field, ResultRecord};
///
/// let record: ResultRecord = serde_json::from_str(
///     r#"{"kind": "attribute", "line": 4, "tag": "item", "name": "id", "value": "7"}"#,
/// ).unwrap();
/// assert_eq!(record.field(Field::Result).as_deref(), Some("@id: 7"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultRecord {
    /// An element matched by the expression.
    Element {
        #[serde(default)]
        line: Option<u32>,
        #[serde(default)]
        tag: Option<String>,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        attributes: Vec<Attribute>,
    },
    /// An attribute matched by the expression. Attributes carry no source
    /// position, so `line` and `tag` describe the owning element.
    Attribute {
        #[serde(default)]
        line: Option<u32>,
        #[serde(default)]
        tag: Option<String>,
        name: String,
        value: String,
    },
    /// A text node matched by the expression; `line` and `tag` describe the
    /// parent element.
    Text {
        #[serde(default)]
        line: Option<u32>,
        #[serde(default)]
        tag: Option<String>,
        text: String,
    },
    /// A bare value such as a count or a boolean.
    Scalar { value: String },
    /// The input could not be parsed or the expression could not be evaluated.
    ParseError { message: String },
    /// Placeholder for an empty result set.
    NoResults,
}

impl ResultRecord {
    /// Creates an element match.
    pub fn element(line: u32, tag: impl Into<String>, text: impl Into<String>) -> Self {
        ResultRecord::Element {
            line: Some(line),
            tag: Some(tag.into()),
            text: Some(text.into()),
            attributes: Vec::new(),
        }
    }

    /// Creates an attribute match on the element `tag` at `line`.
    pub fn attribute(
        line: u32,
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ResultRecord::Attribute {
            line: Some(line),
            tag: Some(tag.into()),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a parse/evaluation failure record.
    pub fn parse_error(message: impl Into<String>) -> Self {
        ResultRecord::ParseError {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            ResultRecord::Element { .. } => RecordKind::Element,
            ResultRecord::Attribute { .. } => RecordKind::Attribute,
            ResultRecord::Text { .. } => RecordKind::Text,
            ResultRecord::Scalar { .. } => RecordKind::Scalar,
            ResultRecord::ParseError { .. } => RecordKind::ParseError,
            ResultRecord::NoResults => RecordKind::NoResults,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultRecord::ParseError { .. })
    }

    /// Returns the display value of `field`, or `None` if this record does
    /// not supply it.
    pub fn field(&self, field: Field) -> Option<String> {
        match (self, field) {
            (ResultRecord::Element { line, .. }, Field::Line)
            | (ResultRecord::Attribute { line, .. }, Field::Line)
            | (ResultRecord::Text { line, .. }, Field::Line) => line.map(|l| l.to_string()),

            (ResultRecord::Element { tag, .. }, Field::Tag)
            | (ResultRecord::Attribute { tag, .. }, Field::Tag)
            | (ResultRecord::Text { tag, .. }, Field::Tag) => tag.clone(),

            (
                ResultRecord::Element {
                    text, attributes, ..
                },
                Field::Result,
            ) => Some(element_content(text.as_deref(), attributes)),
            (ResultRecord::Attribute { name, value, .. }, Field::Result) => {
                Some(format!("@{}: {}", name, value))
            }
            (ResultRecord::Text { text, .. }, Field::Result) => Some(text.clone()),
            (ResultRecord::Scalar { value }, Field::Result) => Some(value.clone()),
            (ResultRecord::NoResults, Field::Result) => Some(NO_RESULTS_MESSAGE.to_string()),

            (ResultRecord::ParseError { message }, Field::Error) => Some(message.clone()),

            _ => None,
        }
    }
}

/// Element text when it has visible characters, otherwise its attributes
/// as `@name: "value" ` pairs.
fn element_content(text: Option<&str>, attributes: &[Attribute]) -> String {
    match text {
        Some(text) if text.chars().any(|c| !c.is_whitespace()) => text.to_string(),
        _ => attributes
            .iter()
            .map(|a| format!("@{}: \"{}\" ", a.name, a.value))
            .collect(),
    }
}
