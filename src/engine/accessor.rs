// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Reading and writing leaves addressed by a [`FieldPath`].
//!
//! Reads stop quietly at the first absent optional or out-of-range index and
//! report the leaf as absent.  Writes are planned on a read-only walk first
//! (absent containers are inspected through detached defaults), so a path
//! that names a missing field or a value that cannot be coerced leaves the
//! target untouched.  Only once the plan succeeds does the mutable walk
//! create optionals and pad sequences.

use crate::engine::coerce::{coerce, is_absent};
use crate::engine::error::{AccessFault, MappingError};
use crate::engine::path::{FieldPath, PathSegment};
use crate::engine::reflect::{Leaf, Record, Reflect, Slot, SlotMut};
use crate::engine::value::{LeafKind, Value};

/// Most default elements a single write may pad a sequence with.
pub const MAX_SEQUENCE_PADDING: usize = 1024;

/// Length a sequence of `current` elements must reach to hold `index`.
fn grown_len(current: usize, index: usize) -> Result<usize, AccessFault> {
    let limit = current.saturating_add(MAX_SEQUENCE_PADDING);
    match index.checked_add(1) {
        Some(wanted) if wanted <= limit => Ok(wanted.max(current)),
        _ => Err(AccessFault::IndexOutOfRange { index, limit }),
    }
}

/// Read the leaf at `path`. `Ok(None)` means some part of the path is absent.
pub fn get(root: &dyn Reflect, path: &FieldPath) -> Result<Option<Value>, MappingError> {
    Ok(locate(root, path)?.map(|found| found.leaf.value()))
}

/// Like [`get`], but also treats a leaf holding its kind's empty value as
/// absent, unless the leaf sits in an optional that was explicitly populated.
pub fn probe(root: &dyn Reflect, path: &FieldPath) -> Result<Option<Value>, MappingError> {
    Ok(locate(root, path)?.and_then(|found| {
        let value = found.leaf.value();
        if !found.explicit && is_absent(&value) {
            None
        } else {
            Some(value)
        }
    }))
}

/// Current length of the sequence at `path`, or `None` when it is unreachable.
pub fn len(root: &dyn Reflect, path: &FieldPath) -> Result<Option<usize>, MappingError> {
    let walk = Walk::read(path);
    let (parents, last) = path.segments().split_at(path.segments().len() - 1);
    let Some(node) = walk.descend(root, parents)? else {
        return Ok(None);
    };
    let Some(record) = walk.record(node, &last[0])? else {
        return Ok(None);
    };
    let field = walk.field(record, &last[0])?;
    if last[0].index.is_some() {
        return Err(walk.fault(&last[0], AccessFault::NotASequence));
    }
    match unwrap_optional(field) {
        None => Ok(None),
        Some(node) => match node.slot() {
            Slot::Sequence(seq) => Ok(Some(seq.len())),
            _ => Err(walk.fault(&last[0], AccessFault::NotASequence)),
        },
    }
}

/// Write `value` to the leaf at `path`, creating containers along the way.
pub fn set(root: &mut dyn Reflect, path: &FieldPath, value: Value) -> Result<(), MappingError> {
    let walk = Walk::write(path);
    let kind = walk.plan(&*root, path.segments(), path.last())?;
    let value = coerce(value, kind)?;
    let leaf = walk.descend_mut(root, path.segments(), path.last())?;
    tracing::trace!(path = %path, value = %value, "assign");
    leaf.assign(value)
}

struct Found<'a> {
    leaf: &'a dyn Leaf,
    explicit: bool,
}

fn locate<'a>(root: &'a dyn Reflect, path: &FieldPath) -> Result<Option<Found<'a>>, MappingError> {
    let walk = Walk::read(path);
    let Some(node) = walk.descend(root, path.segments())? else {
        return Ok(None);
    };
    match node.slot() {
        Slot::Leaf(leaf) => Ok(Some(Found {
            leaf,
            explicit: false,
        })),
        Slot::Optional(optional) => match optional.get() {
            None => Ok(None),
            Some(inner) => match inner.slot() {
                Slot::Leaf(leaf) => Ok(Some(Found {
                    leaf,
                    explicit: true,
                })),
                _ => Err(walk.fault(path.last(), AccessFault::NotALeaf)),
            },
        },
        _ => Err(walk.fault(path.last(), AccessFault::NotALeaf)),
    }
}

/// Look through any number of populated optionals.
fn unwrap_optional(node: &dyn Reflect) -> Option<&dyn Reflect> {
    match node.slot() {
        Slot::Optional(optional) => optional.get().and_then(unwrap_optional),
        _ => Some(node),
    }
}

/// Direction-aware error construction for one path.
struct Walk<'p> {
    path: &'p FieldPath,
    writing: bool,
}

impl<'p> Walk<'p> {
    fn read(path: &'p FieldPath) -> Self {
        Self {
            path,
            writing: false,
        }
    }

    fn write(path: &'p FieldPath) -> Self {
        Self {
            path,
            writing: true,
        }
    }

    fn fault(&self, segment: &PathSegment, fault: AccessFault) -> MappingError {
        let path = self.path.to_string();
        let segment = segment.to_string();
        if self.writing {
            MappingError::PathWrite {
                path,
                segment,
                fault,
            }
        } else {
            MappingError::PathRead {
                path,
                segment,
                fault,
            }
        }
    }

    /// Follow `segments` from `node`; `None` once an optional or index is absent.
    fn descend<'a>(
        &self,
        node: &'a dyn Reflect,
        segments: &[PathSegment],
    ) -> Result<Option<&'a dyn Reflect>, MappingError> {
        let mut node = node;
        for segment in segments {
            let Some(record) = self.record(node, segment)? else {
                return Ok(None);
            };
            let field = self.field(record, segment)?;
            node = match segment.index {
                None => field,
                Some(index) => match self.element(field, index, segment)? {
                    Some(element) => element,
                    None => return Ok(None),
                },
            };
        }
        Ok(Some(node))
    }

    fn record<'a>(
        &self,
        node: &'a dyn Reflect,
        segment: &PathSegment,
    ) -> Result<Option<&'a dyn Record>, MappingError> {
        match unwrap_optional(node) {
            None => Ok(None),
            Some(node) => match node.slot() {
                Slot::Record(record) => Ok(Some(record)),
                Slot::Sequence(_) => Err(self.fault(segment, AccessFault::IndexRequired)),
                _ => Err(self.fault(segment, AccessFault::NotARecord)),
            },
        }
    }

    fn field<'a>(
        &self,
        record: &'a dyn Record,
        segment: &PathSegment,
    ) -> Result<&'a dyn Reflect, MappingError> {
        record.field(&segment.name).ok_or_else(|| {
            self.fault(
                segment,
                AccessFault::UnknownField {
                    record: record.type_name(),
                    field: segment.name.clone(),
                },
            )
        })
    }

    fn element<'a>(
        &self,
        field: &'a dyn Reflect,
        index: usize,
        segment: &PathSegment,
    ) -> Result<Option<&'a dyn Reflect>, MappingError> {
        match unwrap_optional(field) {
            None => Ok(None),
            Some(node) => match node.slot() {
                Slot::Sequence(seq) => Ok(seq.get(index)),
                _ => Err(self.fault(segment, AccessFault::NotASequence)),
            },
        }
    }

    /// Resolve the leaf kind a write would land on, without mutating.
    fn plan(
        &self,
        node: &dyn Reflect,
        segments: &[PathSegment],
        last: &PathSegment,
    ) -> Result<LeafKind, MappingError> {
        let Some((segment, rest)) = segments.split_first() else {
            return match node.slot() {
                Slot::Leaf(leaf) => Ok(leaf.kind()),
                Slot::Optional(optional) => match optional.get() {
                    Some(inner) => self.plan(inner, segments, last),
                    None => self.plan(optional.scratch().as_ref(), segments, last),
                },
                _ => Err(self.fault(last, AccessFault::NotALeaf)),
            };
        };

        match node.slot() {
            Slot::Optional(optional) => match optional.get() {
                Some(inner) => self.plan(inner, segments, last),
                None => self.plan(optional.scratch().as_ref(), segments, last),
            },
            Slot::Record(record) => {
                let field = self.field(record, segment)?;
                match segment.index {
                    None => self.plan(field, rest, last),
                    Some(index) => self.plan_element(field, index, segment, rest, last),
                }
            }
            Slot::Sequence(_) => Err(self.fault(segment, AccessFault::IndexRequired)),
            Slot::Leaf(_) => Err(self.fault(segment, AccessFault::NotARecord)),
        }
    }

    fn plan_element(
        &self,
        field: &dyn Reflect,
        index: usize,
        segment: &PathSegment,
        rest: &[PathSegment],
        last: &PathSegment,
    ) -> Result<LeafKind, MappingError> {
        match field.slot() {
            Slot::Optional(optional) => match optional.get() {
                Some(inner) => self.plan_element(inner, index, segment, rest, last),
                None => {
                    self.plan_element(optional.scratch().as_ref(), index, segment, rest, last)
                }
            },
            Slot::Sequence(seq) => match seq.get(index) {
                Some(element) => self.plan(element, rest, last),
                None => {
                    grown_len(seq.len(), index).map_err(|fault| self.fault(segment, fault))?;
                    self.plan(seq.scratch().as_ref(), rest, last)
                }
            },
            _ => Err(self.fault(segment, AccessFault::NotASequence)),
        }
    }

    /// Mutable walk that creates what is missing. Only called after `plan`.
    fn descend_mut<'a>(
        &self,
        node: &'a mut dyn Reflect,
        segments: &[PathSegment],
        last: &PathSegment,
    ) -> Result<&'a mut dyn Leaf, MappingError> {
        let Some((segment, rest)) = segments.split_first() else {
            return match node.slot_mut() {
                SlotMut::Leaf(leaf) => Ok(leaf),
                SlotMut::Optional(optional) => {
                    self.descend_mut(optional.get_or_insert(), segments, last)
                }
                _ => Err(self.fault(last, AccessFault::NotALeaf)),
            };
        };

        match node.slot_mut() {
            SlotMut::Optional(optional) => {
                self.descend_mut(optional.get_or_insert(), segments, last)
            }
            SlotMut::Record(record) => {
                let type_name = record.type_name();
                let field = record.field_mut(&segment.name).ok_or_else(|| {
                    self.fault(
                        segment,
                        AccessFault::UnknownField {
                            record: type_name,
                            field: segment.name.clone(),
                        },
                    )
                })?;
                match segment.index {
                    None => self.descend_mut(field, rest, last),
                    Some(index) => self.element_mut(field, index, segment, rest, last),
                }
            }
            SlotMut::Sequence(_) => Err(self.fault(segment, AccessFault::IndexRequired)),
            SlotMut::Leaf(_) => Err(self.fault(segment, AccessFault::NotARecord)),
        }
    }

    fn element_mut<'a>(
        &self,
        field: &'a mut dyn Reflect,
        index: usize,
        segment: &PathSegment,
        rest: &[PathSegment],
        last: &PathSegment,
    ) -> Result<&'a mut dyn Leaf, MappingError> {
        match field.slot_mut() {
            SlotMut::Optional(optional) => {
                self.element_mut(optional.get_or_insert(), index, segment, rest, last)
            }
            SlotMut::Sequence(seq) => {
                let wanted =
                    grown_len(seq.len(), index).map_err(|fault| self.fault(segment, fault))?;
                seq.grow_to(wanted);
                match seq.get_mut(index) {
                    Some(element) => self.descend_mut(element, rest, last),
                    None => Err(self.fault(segment, AccessFault::NotASequence)),
                }
            }
            _ => Err(self.fault(segment, AccessFault::NotASequence)),
        }
    }
}
