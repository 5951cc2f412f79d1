// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Path-driven structural mapping between flat models and schema documents.

pub mod accessor;
pub mod coerce;
pub mod dispatch;
pub mod error;
pub mod mapping;
pub mod path;
pub mod reflect;
pub mod validate;
pub mod value;

pub use coerce::{coerce, is_absent};
pub use dispatch::{Document, DocumentFactory, DocumentRegistry, document_namespace};
pub use error::{AccessFault, MappingError};
pub use mapping::{Entry, MappingTable, PathPair, apply, convert, remake_mapping};
pub use path::{FieldPath, PathSegment, parse_path};
pub use reflect::{Leaf, Optional, Record, Reflect, Sequence, Slot, SlotMut, kind_mismatch};
pub use validate::{ValidationReport, validate_document};
pub use value::{LeafKind, Value};
