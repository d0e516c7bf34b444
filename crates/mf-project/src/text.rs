//! Plain-text network format.
//!
//! Node list: comma-separated labels, e.g. `A,B,C,D,E`. Edge list: one
//! `from,to,capacity` line per edge. Whitespace around fields is ignored
//! and blank lines are skipped.
//!
//! A text *file* holds the node list on its first content line and edge
//! lines after it. Lines starting with `#` are comments.

use crate::schema::{EdgeDef, NetworkDef};

pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed text input. Line numbers are 1-based.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Line {line}: expected 3 fields 'from,to,capacity', found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: capacity '{value}' is not a number")]
    InvalidCapacity { line: usize, value: String },

    #[error("Line {line}: empty node label")]
    EmptyLabel { line: usize },

    #[error("No nodes given")]
    NoNodes,
}

/// Split a comma-separated node list, dropping empty entries.
pub fn parse_nodes(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

/// Parse one `from,to,capacity` line.
pub fn parse_edge_line(line: usize, text: &str) -> ParseResult<EdgeDef> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let &[from, to, capacity] = &fields[..] else {
        return Err(ParseError::FieldCount {
            line,
            found: fields.len(),
        });
    };
    if from.is_empty() || to.is_empty() {
        return Err(ParseError::EmptyLabel { line });
    }
    // Range checks (negative, NaN, inf) belong to the graph builder.
    let capacity = capacity
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidCapacity {
            line,
            value: capacity.to_string(),
        })?;
    Ok(EdgeDef::new(from, to, capacity))
}

pub fn parse_edges(text: &str) -> ParseResult<Vec<EdgeDef>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_edge_line(i + 1, l))
        .collect()
}

/// Build a network from a node list and an edge list.
///
/// Terminals are left unset so the defaults apply.
pub fn parse_network(nodes: &str, edges: &str) -> ParseResult<NetworkDef> {
    let nodes = parse_nodes(nodes);
    if nodes.is_empty() {
        return Err(ParseError::NoNodes);
    }
    Ok(NetworkDef::new("", nodes, parse_edges(edges)?))
}

/// Parse a whole text file (node line first, then edge lines).
pub fn parse_text_file(content: &str) -> ParseResult<NetworkDef> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let nodes = lines.next().map(|(_, l)| parse_nodes(l)).unwrap_or_default();
    if nodes.is_empty() {
        return Err(ParseError::NoNodes);
    }
    let edges = lines
        .map(|(n, l)| parse_edge_line(n, l))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(NetworkDef::new("", nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_text(def: &NetworkDef) -> String {
        let mut out = def.nodes.join(",");
        out.push('\n');
        for e in &def.edges {
            out.push_str(&format!("{},{},{}\n", e.from, e.to, e.capacity));
        }
        out
    }

    #[test]
    fn nodes_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(parse_nodes(" A, B ,,C,"), vec!["A", "B", "C"]);
        assert!(parse_nodes(" , ").is_empty());
    }

    #[test]
    fn edge_lines() {
        let edges = parse_edges("A,B,10\n\n  B , C , 2.5 \n").unwrap();
        assert_eq!(edges, vec![EdgeDef::new("A", "B", 10.0), EdgeDef::new("B", "C", 2.5)]);
    }

    #[test]
    fn edge_errors_carry_line_numbers() {
        assert_eq!(
            parse_edges("A,B,1\nA,B\n"),
            Err(ParseError::FieldCount { line: 2, found: 2 })
        );
        assert_eq!(
            parse_edges("A,B,1,2"),
            Err(ParseError::FieldCount { line: 1, found: 4 })
        );
        assert_eq!(
            parse_edges("A,B,ten"),
            Err(ParseError::InvalidCapacity {
                line: 1,
                value: "ten".into()
            })
        );
        assert_eq!(parse_edges("\n ,B,1"), Err(ParseError::EmptyLabel { line: 2 }));
    }

    #[test]
    fn network_needs_nodes() {
        assert_eq!(parse_network("", "A,B,1"), Err(ParseError::NoNodes));
        let def = parse_network("A,B", "A,B,1").unwrap();
        assert_eq!(def.default_source(), Some("A"));
        assert!(def.source.is_none() && def.sink.is_none());
    }

    #[test]
    fn text_file_with_comments() {
        let content = "# demo\n\nA,B,C\n# edges\nA,B,2\nB,C,1\n";
        let def = parse_text_file(content).unwrap();
        assert_eq!(def.nodes, vec!["A", "B", "C"]);
        assert_eq!(def.edges.len(), 2);

        let err = parse_text_file("A,B\nA,B,x\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCapacity {
                line: 2,
                value: "x".into()
            }
        );
        assert_eq!(parse_text_file("# only comments\n"), Err(ParseError::NoNodes));
    }

    #[test]
    fn text_layout_parses_back() {
        let def = NetworkDef::sample();
        let parsed = parse_text_file(&to_text(&def)).unwrap();
        assert_eq!(parsed.nodes, def.nodes);
        assert_eq!(parsed.edges, def.edges);
    }
}
