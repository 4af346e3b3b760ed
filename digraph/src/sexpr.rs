/*
 * SPDX-FileCopyrightText: 2025 The digraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading and writing graphs in parenthesized textual form.
//!
//! A graph with `n` nodes is described by a list starting with `n` and
//! followed by exactly `n` inner lists, each made of a node and its
//! successors:
//!
//! ```text
//! (4
//!   (0 1)
//!   (1 2 3)
//!   (2)
//!   (3 3)
//! )
//! ```
//!
//! Whitespace, including newlines, is free between tokens. Inner lists may
//! appear in any order; if a node has more than one list, its successors
//! accumulate, and repeated successors are ignored.
//!
//! ```
//! use digraph::prelude::*;
//! use digraph::sexpr;
//!
//! let graph = sexpr::parse("(2 (0 1) (1))")?;
//! assert!(graph.has_arc(0, 1));
//! assert_eq!(graph.to_string(), "(\n2\n(0 1)\n(1)\n)");
//! # Ok::<(), ParseError>(())
//! ```

use crate::graphs::adj_matrix::AdjMatrix;
use crate::traits::RandomAccessGraph;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can happen while parsing a graph.
///
/// Offsets are byte offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Expected {expected} at offset {offset}, found {found:?}")]
    Expected {
        expected: &'static str,
        found: String,
        offset: usize,
    },
    #[error("Invalid node {token:?} at offset {offset}")]
    InvalidNumber { token: String, offset: usize },
    #[error("Node {node} at offset {offset} is out of range (the graph has {num_nodes} nodes)")]
    NodeOutOfRange {
        node: usize,
        num_nodes: usize,
        offset: usize,
    },
    #[error("The graph at offset {offset} declares {num_nodes} nodes, more than the input can describe")]
    TooManyNodes { num_nodes: usize, offset: usize },
    #[error("Trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Atom(s) => f.write_str(s),
        }
    }
}

/// Splits the input into parentheses and atoms, keeping track of offsets.
struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the next token and its offset without consuming it.
    fn peek(&self) -> Option<(Token<'a>, usize)> {
        let rest = &self.input[self.pos..];
        let start = self.pos + (rest.len() - rest.trim_start().len());
        let rest = &self.input[start..];
        match rest.as_bytes().first()? {
            b'(' => Some((Token::Open, start)),
            b')' => Some((Token::Close, start)),
            _ => {
                let len = rest
                    .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
                    .unwrap_or(rest.len());
                Some((Token::Atom(&rest[..len]), start))
            }
        }
    }

    fn advance(&mut self) -> Option<(Token<'a>, usize)> {
        let (token, offset) = self.peek()?;
        self.pos = offset
            + match token {
                Token::Atom(s) => s.len(),
                _ => 1,
            };
        Some((token, offset))
    }

    fn expect(&mut self, expected: Token<'static>, what: &'static str) -> Result<(), ParseError> {
        match self.advance() {
            None => Err(ParseError::UnexpectedEnd),
            Some((token, _)) if token == expected => Ok(()),
            Some((token, offset)) => Err(ParseError::Expected {
                expected: what,
                found: token.to_string(),
                offset,
            }),
        }
    }

    fn number(&mut self) -> Result<(usize, usize), ParseError> {
        match self.advance() {
            None => Err(ParseError::UnexpectedEnd),
            Some((Token::Atom(s), offset)) => s
                .parse::<usize>()
                .map(|n| (n, offset))
                .map_err(|_| ParseError::InvalidNumber {
                    token: s.to_owned(),
                    offset,
                }),
            Some((token, offset)) => Err(ParseError::Expected {
                expected: "a number",
                found: token.to_string(),
                offset,
            }),
        }
    }

    fn node(&mut self, num_nodes: usize) -> Result<usize, ParseError> {
        let (node, offset) = self.number()?;
        if node >= num_nodes {
            return Err(ParseError::NodeOutOfRange {
                node,
                num_nodes,
                offset,
            });
        }
        Ok(node)
    }
}

/// Parses a graph in parenthesized textual form.
pub fn parse(input: &str) -> Result<AdjMatrix, ParseError> {
    let mut tokens = Tokens::new(input);
    tokens.expect(Token::Open, "'('")?;
    let (num_nodes, offset) = tokens.number()?;
    // Each node needs a row list of at least three bytes
    if num_nodes
        .checked_mul(3)
        .is_none_or(|min_len| min_len > input.len())
    {
        return Err(ParseError::TooManyNodes { num_nodes, offset });
    }
    let mut graph = AdjMatrix::empty(num_nodes);

    for _ in 0..num_nodes {
        tokens.expect(Token::Open, "'('")?;
        let node = tokens.node(num_nodes)?;
        loop {
            match tokens.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some((Token::Close, _)) => {
                    tokens.advance();
                    break;
                }
                Some(_) => {
                    let succ = tokens.node(num_nodes)?;
                    graph.add_arc(node, succ);
                }
            }
        }
    }

    tokens.expect(Token::Close, "')'")?;
    if let Some((_, offset)) = tokens.peek() {
        return Err(ParseError::TrailingInput { offset });
    }

    log::debug!(
        "Parsed a graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    );
    Ok(graph)
}

/// A wrapper displaying a graph in parenthesized textual form.
///
/// There is one inner list per node, in increasing order, and the
/// successors of each node are listed in increasing order, so that
/// [`parse`] recovers the original graph.
pub struct Sexpr<'a, G>(pub &'a G);

impl<G: RandomAccessGraph> fmt::Display for Sexpr<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "(")?;
        writeln!(f, "{}", graph.num_nodes())?;
        for node in 0..graph.num_nodes() {
            write!(f, "({node}")?;
            for succ in graph.successors(node) {
                write!(f, " {succ}")?;
            }
            writeln!(f, ")")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Sexpr(self), f)
    }
}

impl FromStr for AdjMatrix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
