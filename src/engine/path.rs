// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Dotted/bracketed path expressions such as
//! `RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.MmbId`.

use crate::engine::error::MappingError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, char, digit1},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair},
};
use std::fmt;
use std::str::FromStr;

/// One step of a path: a field name with an optional zero-based index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub name: String,
    pub index: Option<usize>,
}

impl PathSegment {
    pub fn field(name: &str) -> Self {
        Self {
            name: name.to_string(),
            index: None,
        }
    }

    pub fn indexed(name: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            index: Some(index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.name, index),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed, non-empty path. Immutable once built and cheap to share.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn last(&self) -> &PathSegment {
        // Construction guarantees at least one segment.
        &self.segments[self.segments.len() - 1]
    }

    /// Copy of this path with `index` attached to its final segment.
    pub fn indexed(&self, index: usize) -> Result<FieldPath, MappingError> {
        if self.last().index.is_some() {
            return Err(MappingError::MalformedPath {
                path: self.to_string(),
                reason: "sequence path already ends with an index".to_string(),
            });
        }
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            last.index = Some(index);
        }
        Ok(FieldPath { segments })
    }

    pub fn join(&self, other: &FieldPath) -> FieldPath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        FieldPath { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, segment) in self.segments.iter().enumerate() {
            if pos > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

/// Parse a path expression into its segments.
pub fn parse_path(input: &str) -> Result<FieldPath, MappingError> {
    if input.trim().is_empty() {
        return Err(malformed(input, "path is empty"));
    }

    match separated_list1(char('.'), segment).parse(input) {
        Ok(("", segments)) => Ok(FieldPath { segments }),
        Ok((rest, _)) => Err(malformed(input, &describe_remainder(rest))),
        Err(_) => Err(malformed(input, &describe_remainder(input))),
    }
}

fn malformed(path: &str, reason: &str) -> MappingError {
    MappingError::MalformedPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Turn the unparsed tail into a message a table author can act on.
fn describe_remainder(rest: &str) -> String {
    if let Some(after) = rest.strip_prefix('[') {
        return match after.find(']') {
            None => "unterminated '['".to_string(),
            Some(end) => format!(
                "index '{}' is not a non-negative integer",
                &after[..end]
            ),
        };
    }
    if rest.starts_with(']') {
        return "unmatched ']'".to_string();
    }
    if rest.starts_with('.') {
        return "empty segment".to_string();
    }
    format!("unexpected input at '{rest}'")
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    delimited(char('['), map_res(digit1, str::parse::<usize>), char(']')).parse(input)
}

fn segment(input: &str) -> IResult<&str, PathSegment> {
    map(pair(identifier, opt(index)), |(name, index)| PathSegment {
        name: name.to_string(),
        index,
    })
    .parse(input)
}
