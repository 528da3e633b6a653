//! Program input.
//!
//! A program document is either a single expression or an object of the
//! form `{"program": [expr, ...]}`.

use serde_json::Value as Json;

/// Key naming the expression list in a program document.
const PROGRAM_KEY: &str = "program";

/// Error reading a program document.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of untyped expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    expressions: Vec<Json>,
}

impl Program {
    /// Parse a program document.
    ///
    /// Only JSON syntax is checked here; expression shapes are checked when
    /// each expression is evaluated.
    pub fn parse(source: &str) -> Result<Self, ProgramError> {
        let document: Json = serde_json::from_str(source)?;
        Ok(Self::from_document(document))
    }

    /// Read and parse a program document from `path`.
    pub fn read(path: &str) -> Result<Self, ProgramError> {
        let source = std::fs::read_to_string(path).map_err(|source| ProgramError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Interpret a parsed document.
    pub fn from_document(document: Json) -> Self {
        let expressions = match document {
            Json::Object(mut fields) => match fields.remove(PROGRAM_KEY) {
                Some(Json::Array(expressions)) if fields.is_empty() => expressions,
                // Not a program wrapper: evaluate the object as-is.
                Some(other) => {
                    fields.insert(PROGRAM_KEY.to_string(), other);
                    vec![Json::Object(fields)]
                }
                None => vec![Json::Object(fields)],
            },
            single => vec![single],
        };
        Program { expressions }
    }

    pub fn expressions(&self) -> &[Json] {
        &self.expressions
    }
}
