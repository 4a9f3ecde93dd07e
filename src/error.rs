//! Relation parsing errors
//!
//! Ingestion is all-or-nothing: any of these aborts graph construction.

use std::fmt;
use thiserror::Error;

/// Which input relation a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// `<id><delim><name>` lines
    Vertices,
    /// `<id1><delim><id2>` lines
    Edges,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertices => f.write_str("vertex relation"),
            Self::Edges => f.write_str("edge relation"),
        }
    }
}

/// Malformed relation input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// Line has fewer than two tokens
    #[error("{relation} line {line}: expected 2 tokens, found {found}")]
    MissingToken {
        /// Source relation
        relation: RelationKind,
        /// 1-based line number
        line: usize,
        /// Number of tokens present
        found: usize,
    },

    /// Token is not a positive integer vertex id
    #[error("{relation} line {line}: invalid vertex id {token:?}")]
    InvalidId {
        /// Source relation
        relation: RelationKind,
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },
}

impl RelationError {
    /// Line number (1-based) of the offending input
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingToken { line, .. } | Self::InvalidId { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RelationError::MissingToken {
            relation: RelationKind::Edges,
            line: 3,
            found: 1,
        };
        assert_eq!(err.to_string(), "edge relation line 3: expected 2 tokens, found 1");
        assert_eq!(err.line(), 3);

        let err = RelationError::InvalidId {
            relation: RelationKind::Vertices,
            line: 7,
            token: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "vertex relation line 7: invalid vertex id \"x1\"");
    }
}
