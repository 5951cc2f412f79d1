// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::engine::value::LeafKind;
use thiserror::Error;

/// Why a walk could not continue past a segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessFault {
    #[error("{record} has no field named {field}")]
    UnknownField { record: &'static str, field: String },

    #[error("value is not a record")]
    NotARecord,

    #[error("value is not a sequence")]
    NotASequence,

    #[error("sequence needs an index")]
    IndexRequired,

    #[error("value is not a leaf")]
    NotALeaf,

    #[error("index {index} is past the writable limit of {limit}")]
    IndexOutOfRange { index: usize, limit: usize },
}

/// Every failure the mapping engine can report. Any of these aborts the
/// conversion in progress.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MappingError {
    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("cannot read {path} at {segment}: {fault}")]
    PathRead {
        path: String,
        segment: String,
        fault: AccessFault,
    },

    #[error("cannot write {path} at {segment}: {fault}")]
    PathWrite {
        path: String,
        segment: String,
        fault: AccessFault,
    },

    #[error("invalid mapping table: {reason}")]
    Table { reason: String },

    #[error("no coercion from {from} to {to}")]
    UnsupportedCoercion { from: LeafKind, to: LeafKind },

    #[error("{value} cannot be represented as {to}")]
    OutOfRange { value: String, to: LeafKind },

    #[error("unsupported message version: unknown namespace '{namespace}'")]
    UnknownNamespace { namespace: String },

    #[error("xml {operation} failed: {reason}")]
    Xml {
        operation: &'static str,
        reason: String,
    },

    #[error("{source_path} -> {target_path}: {cause}")]
    Pair {
        source_path: String,
        target_path: String,
        cause: Box<MappingError>,
    },
}

impl MappingError {
    /// Attach the offending path pair, leaving already-wrapped errors alone.
    pub fn for_pair(self, source: impl ToString, target: impl ToString) -> Self {
        match self {
            MappingError::Pair { .. } => self,
            cause => MappingError::Pair {
                source_path: source.to_string(),
                target_path: target.to_string(),
                cause: Box::new(cause),
            },
        }
    }

    /// The innermost error, looking through pair wrappers.
    pub fn root_cause(&self) -> &MappingError {
        match self {
            MappingError::Pair { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_wrapping_names_both_paths() {
        let err = MappingError::UnsupportedCoercion {
            from: LeafKind::Text,
            to: LeafKind::Decimal,
        }
        .for_pair("Amount", "IntrBkSttlmAmt.Value");
        assert_eq!(
            err.to_string(),
            "Amount -> IntrBkSttlmAmt.Value: no coercion from text to decimal"
        );
    }

    #[test]
    fn pair_wrapping_is_not_nested() {
        let err = MappingError::UnknownNamespace {
            namespace: "urn:x".into(),
        }
        .for_pair("A", "B")
        .for_pair("C", "D");
        let MappingError::Pair { source_path, .. } = &err else {
            panic!("expected pair error");
        };
        assert_eq!(source_path, "A");
        assert!(matches!(
            err.root_cause(),
            MappingError::UnknownNamespace { .. }
        ));
    }
}
