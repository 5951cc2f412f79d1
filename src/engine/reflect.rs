// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Field-by-name access to record graphs.
//!
//! Every value the engine can walk implements [`Reflect`], which classifies it
//! as a leaf, a record, an optional container or a sequence.  Records list
//! their fields by schema name (usually via [`impl_record!`](crate::impl_record)),
//! containers come for free through the blanket impls on `Option`, `Vec` and
//! `Box`, and leaves carry their own coercion kind and validation hook.

use crate::engine::error::MappingError;
use crate::engine::value::{LeafKind, Value};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

pub enum Slot<'a> {
    Leaf(&'a dyn Leaf),
    Record(&'a dyn Record),
    Optional(&'a dyn Optional),
    Sequence(&'a dyn Sequence),
}

pub enum SlotMut<'a> {
    Leaf(&'a mut dyn Leaf),
    Record(&'a mut dyn Record),
    Optional(&'a mut dyn Optional),
    Sequence(&'a mut dyn Sequence),
}

pub trait Reflect {
    fn slot(&self) -> Slot<'_>;
    fn slot_mut(&mut self) -> SlotMut<'_>;
}

/// A named-field record, typically one XSD complex type or a flat model.
pub trait Record {
    fn type_name(&self) -> &'static str;
    fn field_names(&self) -> &'static [&'static str];
    fn field(&self, name: &str) -> Option<&dyn Reflect>;
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}

/// A value that may be entirely absent.
pub trait Optional {
    fn get(&self) -> Option<&dyn Reflect>;
    /// Populate with a default value when absent and hand back the referent.
    fn get_or_insert(&mut self) -> &mut dyn Reflect;
    /// Detached default referent, used to inspect the shape without mutating.
    fn scratch(&self) -> Box<dyn Reflect>;
}

/// An indexed, growable run of values.
pub trait Sequence {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&dyn Reflect>;
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
    /// Pad with default elements up to `len`. Never shrinks.
    fn grow_to(&mut self, len: usize);
    fn scratch(&self) -> Box<dyn Reflect>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A terminal value with a coercion kind.
pub trait Leaf {
    fn kind(&self) -> LeafKind;
    fn value(&self) -> Value;
    /// Store a value already coerced to [`Leaf::kind`].
    fn assign(&mut self, value: Value) -> Result<(), MappingError>;

    /// Type-level constraint check (patterns, lengths). Business rules do not belong here.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Error for a leaf handed a value of the wrong kind.
pub fn kind_mismatch(value: &Value, to: LeafKind) -> MappingError {
    MappingError::UnsupportedCoercion {
        from: value.kind(),
        to,
    }
}

impl<T: Reflect + Default + 'static> Optional for Option<T> {
    fn get(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|v| v as &dyn Reflect)
    }

    fn get_or_insert(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }

    fn scratch(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}

impl<T: Reflect + Default + 'static> Reflect for Option<T> {
    fn slot(&self) -> Slot<'_> {
        Slot::Optional(self)
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Optional(self)
    }
}

impl<T: Reflect + Default + 'static> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|v| v as &mut dyn Reflect)
    }

    fn grow_to(&mut self, len: usize) {
        if Vec::len(self) < len {
            self.resize_with(len, T::default);
        }
    }

    fn scratch(&self) -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}

impl<T: Reflect + Default + 'static> Reflect for Vec<T> {
    fn slot(&self) -> Slot<'_> {
        Slot::Sequence(self)
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Sequence(self)
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn slot(&self) -> Slot<'_> {
        (**self).slot()
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        (**self).slot_mut()
    }
}

macro_rules! primitive_leaf {
    ($ty:ty, $kind:ident) => {
        impl Leaf for $ty {
            fn kind(&self) -> LeafKind {
                LeafKind::$kind
            }

            fn value(&self) -> Value {
                Value::$kind(self.clone())
            }

            fn assign(&mut self, value: Value) -> Result<(), MappingError> {
                match value {
                    Value::$kind(v) => {
                        *self = v;
                        Ok(())
                    }
                    other => Err(kind_mismatch(&other, LeafKind::$kind)),
                }
            }
        }

        impl Reflect for $ty {
            fn slot(&self) -> Slot<'_> {
                Slot::Leaf(self)
            }

            fn slot_mut(&mut self) -> SlotMut<'_> {
                SlotMut::Leaf(self)
            }
        }
    };
}

primitive_leaf!(String, Text);
primitive_leaf!(f64, Float);
primitive_leaf!(bool, Bool);
primitive_leaf!(Decimal, Decimal);
primitive_leaf!(NaiveDate, Date);
primitive_leaf!(NaiveDateTime, DateTime);

/// Implement [`Record`] and [`Reflect`] for a struct by listing its fields
/// under their schema names.
///
/// ```ignore
/// impl_record!(GroupHeader { "MsgId" => msg_id, "CreDtTm" => cre_dt_tm });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($name:literal => $field:ident),* $(,)? }) => {
        impl $crate::engine::Record for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[$($name),*]
            }

            fn field(&self, name: &str) -> Option<&dyn $crate::engine::Reflect> {
                match name {
                    $($name => Some(&self.$field as &dyn $crate::engine::Reflect),)*
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut dyn $crate::engine::Reflect> {
                match name {
                    $($name => Some(&mut self.$field as &mut dyn $crate::engine::Reflect),)*
                    _ => None,
                }
            }
        }

        impl $crate::engine::Reflect for $ty {
            fn slot(&self) -> $crate::engine::Slot<'_> {
                $crate::engine::Slot::Record(self)
            }

            fn slot_mut(&mut self) -> $crate::engine::SlotMut<'_> {
                $crate::engine::SlotMut::Record(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Party {
        name: String,
        aliases: Vec<String>,
        score: Option<f64>,
    }

    impl_record!(Party { "Nm" => name, "Alias" => aliases, "Score" => score });

    #[test]
    fn records_expose_fields_by_schema_name() {
        let party = Party {
            name: "ACME".into(),
            ..Default::default()
        };
        let Slot::Record(record) = party.slot() else {
            panic!("party should be a record");
        };
        assert_eq!(record.type_name(), "Party");
        assert_eq!(record.field_names(), &["Nm", "Alias", "Score"]);
        let Some(Slot::Leaf(leaf)) = record.field("Nm").map(|f| f.slot()) else {
            panic!("Nm should be a leaf");
        };
        assert_eq!(leaf.value(), Value::Text("ACME".into()));
        assert!(record.field("Missing").is_none());
    }

    #[test]
    fn optional_inserts_default_on_demand() {
        let mut party = Party::default();
        let SlotMut::Record(record) = party.slot_mut() else {
            panic!("party should be a record");
        };
        let Some(SlotMut::Optional(score)) = record.field_mut("Score").map(|f| f.slot_mut()) else {
            panic!("Score should be optional");
        };
        let SlotMut::Leaf(leaf) = score.get_or_insert().slot_mut() else {
            panic!("Score referent should be a leaf");
        };
        leaf.assign(Value::Float(1.5)).unwrap();
        assert_eq!(party.score, Some(1.5));
    }

    #[test]
    fn sequences_grow_but_never_shrink() {
        let mut aliases = vec!["a".to_string()];
        Sequence::grow_to(&mut aliases, 3);
        assert_eq!(aliases, vec!["a".to_string(), String::new(), String::new()]);
        Sequence::grow_to(&mut aliases, 1);
        assert_eq!(Sequence::len(&aliases), 3);
    }

    #[test]
    fn leaves_reject_values_of_another_kind() {
        let mut name = String::new();
        let err = name.assign(Value::Float(2.0)).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnsupportedCoercion {
                from: LeafKind::Float,
                to: LeafKind::Text
            }
        );
    }
}
