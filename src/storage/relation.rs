//! Line-oriented vertex and edge relations
//!
//! # Format
//!
//! ```text
//! vertices:  <id><delim><name>     e.g. "1, alpha\r\n"
//! edges:     <id1><delim><id2>     e.g. "1, 2\r\n"
//! ```
//!
//! The delimiter is `,` when the line contains one, whitespace otherwise.
//! Tokens are trimmed; only the first two are used. Every line must carry
//! two tokens, so a blank line is malformed. Ids are positive integers.

use super::VertexId;
use crate::error::{RelationError, RelationKind};

/// Split a line into its first two tokens
fn two_tokens(
    line: &str,
    relation: RelationKind,
    line_no: usize,
) -> Result<(&str, &str), RelationError> {
    let tokens: Vec<&str> = if line.contains(',') {
        line.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    } else {
        line.split_whitespace().collect()
    };

    match tokens.as_slice() {
        [first, second, ..] => Ok((*first, *second)),
        _ => Err(RelationError::MissingToken {
            relation,
            line: line_no,
            found: tokens.len(),
        }),
    }
}

fn parse_id(
    token: &str,
    relation: RelationKind,
    line_no: usize,
) -> Result<VertexId, RelationError> {
    token
        .parse::<u32>()
        .ok()
        .filter(|&id| id > 0)
        .map(VertexId)
        .ok_or_else(|| RelationError::InvalidId {
            relation,
            line: line_no,
            token: token.to_string(),
        })
}

/// Lines with their 1-based line numbers
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines().enumerate().map(|(idx, line)| (idx + 1, line))
}

/// Parse a vertex relation into `(id, name)` rows, in file order
///
/// # Errors
///
/// Returns `RelationError` on the first line with fewer than two tokens
/// (blank lines included) or an id that is not a positive integer.
/// Nothing is returned for earlier lines.
///
/// # Example
///
/// ```
/// use fastgraph::storage::{parse_vertices, VertexId};
///
/// let rows = parse_vertices("1, alpha\r\n2 beta\n").unwrap();
/// assert_eq!(rows[0], (VertexId(1), "alpha".to_string()));
/// assert_eq!(rows[1], (VertexId(2), "beta".to_string()));
/// ```
pub fn parse_vertices(text: &str) -> Result<Vec<(VertexId, String)>, RelationError> {
    numbered_lines(text)
        .map(|(line_no, line)| {
            let (id, name) = two_tokens(line, RelationKind::Vertices, line_no)?;
            Ok((
                parse_id(id, RelationKind::Vertices, line_no)?,
                name.to_string(),
            ))
        })
        .collect()
}

/// Parse an edge relation into raw `(a, b)` pairs, in file order
///
/// # Errors
///
/// Returns `RelationError` on the first malformed line.
pub fn parse_edges(text: &str) -> Result<Vec<(VertexId, VertexId)>, RelationError> {
    numbered_lines(text)
        .map(|(line_no, line)| {
            let (a, b) = two_tokens(line, RelationKind::Edges, line_no)?;
            Ok((
                parse_id(a, RelationKind::Edges, line_no)?,
                parse_id(b, RelationKind::Edges, line_no)?,
            ))
        })
        .collect()
}

/// Format one vertex line: `"<id>, <name>\r\n"`
#[must_use]
pub fn vertex_line(id: VertexId, name: &str) -> String {
    format!("{id}, {name}\r\n")
}

/// Format one edge line: `"<a>, <b>\r\n"`
#[must_use]
pub fn edge_line(a: VertexId, b: VertexId) -> String {
    format!("{a}, {b}\r\n")
}
