//! The query backend boundary and its parse cache.
//!
//! Evaluating path expressions is not done here. A backend implements
//! [`QueryEngine`]; [`SearchCache`] wraps it so that repeated searches over
//! unchanged text parse the text once.

use std::path::Path;

use resultgrid_render::ResultRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Diagnostic text from a failed parse or evaluation. Shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Diagnostic(pub String);

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Diagnostic(message.into())
    }
}

/// A backend able to parse structured text and evaluate expressions on it.
pub trait QueryEngine {
    /// Parsed form of the input text.
    type Document;

    /// Parses `text`. A failure is reported to the user, not raised.
    fn parse(&self, text: &str) -> std::result::Result<Self::Document, Diagnostic>;

    /// Evaluates `query` against a parsed document.
    fn evaluate(
        &self,
        document: &Self::Document,
        query: &str,
    ) -> std::result::Result<Vec<ResultRecord>, Diagnostic>;
}

/// Outcome of one evaluation: a list of matches, or a failure.
///
/// Decodes from either a JSON array of records or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evaluation {
    Matches(Vec<ResultRecord>),
    Failed { error: String },
}

impl Evaluation {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an evaluation from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_json(&json)
    }

    /// Flattens the outcome into displayable records. A failure becomes a
    /// single parse-error record.
    pub fn into_records(self) -> Vec<ResultRecord> {
        match self {
            Evaluation::Matches(records) => records,
            Evaluation::Failed { error } => vec![ResultRecord::parse_error(error)],
        }
    }
}

impl From<std::result::Result<Vec<ResultRecord>, Diagnostic>> for Evaluation {
    fn from(result: std::result::Result<Vec<ResultRecord>, Diagnostic>) -> Self {
        match result {
            Ok(records) => Evaluation::Matches(records),
            Err(Diagnostic(error)) => Evaluation::Failed { error },
        }
    }
}

struct Parsed<D> {
    text: String,
    document: std::result::Result<D, Diagnostic>,
}

/// Single-slot cache of the last parsed text.
///
/// The slot is keyed on the exact input text; any change evicts it. Parse
/// failures are cached too, so an unparseable buffer is not re-parsed for
/// every new expression.
pub struct SearchCache<E: QueryEngine> {
    engine: E,
    slot: Option<Parsed<E::Document>>,
}

impl<E: QueryEngine> SearchCache<E> {
    pub fn new(engine: E) -> Self {
        SearchCache { engine, slot: None }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Whether `text` is the currently cached input.
    pub fn is_cached(&self, text: &str) -> bool {
        self.slot.as_ref().is_some_and(|p| p.text == text)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Evaluates `query` against `text`, parsing only if `text` changed.
    ///
    /// Parse and evaluation failures come back as a single parse-error
    /// record.
    pub fn search(&mut self, text: &str, query: &str) -> Vec<ResultRecord> {
        let parsed = match self.slot.take() {
            Some(parsed) if parsed.text == text => {
                debug!("parse cache hit");
                parsed
            }
            _ => {
                debug!(bytes = text.len(), "parse cache miss");
                Parsed {
                    text: text.to_string(),
                    document: self.engine.parse(text),
                }
            }
        };
        let parsed = self.slot.insert(parsed);

        let outcome = match &parsed.document {
            Ok(document) => self.engine.evaluate(document, query),
            Err(diagnostic) => Err(diagnostic.clone()),
        };
        if let Err(diagnostic) = &outcome {
            debug!(%diagnostic, query, "search failed");
        }
        Evaluation::from(outcome).into_records()
    }
}
