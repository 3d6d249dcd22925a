//! Errors surfaced by classification and conversion.

use crate::classify::Rule;
use serde::Serialize;

/// The requested target id is not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported target: {target}")]
pub struct UnsupportedTarget {
    pub target: String,
}

impl UnsupportedTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// A line matched a rule by keyword but its capture pattern did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("malformed {}: {text}", .rule.name())]
pub struct MalformedLine {
    pub rule: Rule,
    pub text: String,
}

/// Error that can occur when converting a source text.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    UnsupportedTarget(#[from] UnsupportedTarget),

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: MalformedLine,
    },
}
