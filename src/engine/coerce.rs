// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Translation between the flat model's primitive leaves and the schema's
//! more specific leaf types.  The rule set is symmetric, so the same
//! function serves both the model-to-document and document-to-model legs.

use crate::engine::error::MappingError;
use crate::engine::value::{LeafKind, Value};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Convert `value` into the representation a leaf of kind `to` stores.
pub fn coerce(value: Value, to: LeafKind) -> Result<Value, MappingError> {
    let from = value.kind();
    match (value, to) {
        (value, to) if from == to => Ok(value),
        (Value::Float(v), LeafKind::Decimal) => Decimal::from_f64(v)
            .map(Value::Decimal)
            .ok_or_else(|| MappingError::OutOfRange {
                value: v.to_string(),
                to,
            }),
        (Value::Decimal(v), LeafKind::Float) => {
            v.to_f64()
                .map(Value::Float)
                .ok_or_else(|| MappingError::OutOfRange {
                    value: v.to_string(),
                    to,
                })
        }
        (Value::DateTime(v), LeafKind::Date) => Ok(Value::Date(v.date())),
        (Value::Date(v), LeafKind::DateTime) => Ok(Value::DateTime(v.and_time(NaiveTime::MIN))),
        _ => Err(MappingError::UnsupportedCoercion { from, to }),
    }
}

/// Whether a value carries no data and should not be copied.
///
/// A currency amount of exactly zero reads as absent here; fields where
/// zero is meaningful are modelled as `Option` so an explicit `Some(0.0)`
/// survives (see `accessor::probe`).
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Text(v) => v.is_empty(),
        Value::Float(v) => *v == 0.0,
        Value::Decimal(v) => v.is_zero(),
        Value::Date(v) => *v == NaiveDate::default(),
        Value::DateTime(v) => *v == NaiveDateTime::default(),
        Value::Bool(v) => !*v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn datetime(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn same_kind_passes_through() {
        let value = Value::Text("ABC123".into());
        assert_eq!(coerce(value.clone(), LeafKind::Text).unwrap(), value);
    }

    #[test]
    fn float_and_decimal_round_trip() {
        let decimal = coerce(Value::Float(1234.56), LeafKind::Decimal).unwrap();
        assert_eq!(decimal, Value::Decimal(Decimal::from_str("1234.56").unwrap()));
        assert_eq!(
            coerce(decimal, LeafKind::Float).unwrap(),
            Value::Float(1234.56)
        );
    }

    #[test]
    fn non_finite_float_is_out_of_range() {
        let err = coerce(Value::Float(f64::NAN), LeafKind::Decimal).unwrap_err();
        assert!(matches!(err, MappingError::OutOfRange { .. }));
    }

    #[test]
    fn datetime_truncates_to_date() {
        let value = coerce(Value::DateTime(datetime("2024-03-05T17:45:10")), LeafKind::Date)
            .unwrap();
        assert_eq!(
            value,
            Value::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
    }

    #[test]
    fn date_widens_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            coerce(Value::Date(date), LeafKind::DateTime).unwrap(),
            Value::DateTime(datetime("2024-03-05T00:00:00"))
        );
    }

    #[test]
    fn unmatched_pairs_are_rejected() {
        assert_eq!(
            coerce(Value::Text("12".into()), LeafKind::Float).unwrap_err(),
            MappingError::UnsupportedCoercion {
                from: LeafKind::Text,
                to: LeafKind::Float
            }
        );
        assert!(coerce(Value::Bool(true), LeafKind::Date).is_err());
    }

    #[test]
    fn absence_is_decided_per_kind() {
        assert!(is_absent(&Value::Text(String::new())));
        assert!(!is_absent(&Value::Text("x".into())));
        assert!(is_absent(&Value::Float(0.0)));
        assert!(is_absent(&Value::Decimal(Decimal::ZERO)));
        assert!(!is_absent(&Value::Decimal(Decimal::ONE)));
        assert!(is_absent(&Value::Date(NaiveDate::default())));
        assert!(!is_absent(&Value::DateTime(datetime("2024-01-01T00:00:00"))));
        assert!(is_absent(&Value::Bool(false)));
    }
}
