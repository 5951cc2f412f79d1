// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! ISO 20022 simple types shared by every message family.
//!
//! Named string types only carry their length/pattern facet; the check runs
//! through [`Leaf::validate`] when a caller asks for it, never during
//! mapping.

use crate::engine::{Leaf, LeafKind, MappingError, Reflect, Slot, SlotMut, Value, kind_mismatch};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

fn check_length(value: &str, max: usize) -> Result<(), String> {
    let count = value.chars().count();
    if count == 0 || count > max {
        return Err(format!("length {count} outside 1..={max}"));
    }
    Ok(())
}

fn check_pattern(value: &str, pattern: &Regex) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(format!("'{value}' does not match {}", pattern.as_str()))
    }
}

macro_rules! text_leaf {
    ($(#[$meta:meta])* $name:ident, max = $max:expr) => {
        text_leaf!(@define $(#[$meta])* $name);

        impl Leaf for $name {
            text_leaf!(@access);

            fn validate(&self) -> Result<(), String> {
                check_length(&self.0, $max)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, pattern = $pattern:literal) => {
        text_leaf!(@define $(#[$meta])* $name);

        impl Leaf for $name {
            text_leaf!(@access);

            fn validate(&self) -> Result<(), String> {
                static PATTERN: Lazy<Regex> = Lazy::new(|| {
                    Regex::new(concat!("^(?:", $pattern, ")$")).expect("valid regex")
                });
                check_pattern(&self.0, &PATTERN)
            }
        }
    };
    (@define $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Reflect for $name {
            fn slot(&self) -> Slot<'_> {
                Slot::Leaf(self)
            }

            fn slot_mut(&mut self) -> SlotMut<'_> {
                SlotMut::Leaf(self)
            }
        }
    };
    (@access) => {
        fn kind(&self) -> LeafKind {
            LeafKind::Text
        }

        fn value(&self) -> Value {
            Value::Text(self.0.clone())
        }

        fn assign(&mut self, value: Value) -> Result<(), MappingError> {
            match value {
                Value::Text(v) => {
                    self.0 = v;
                    Ok(())
                }
                other => Err(kind_mismatch(&other, LeafKind::Text)),
            }
        }
    };
}

text_leaf!(Max5Text, max = 5);
text_leaf!(Max34Text, max = 34);
text_leaf!(Max35Text, max = 35);
text_leaf!(Max140Text, max = 140);
text_leaf!(Max15NumericText, pattern = "[0-9]{1,15}");
text_leaf!(
    /// Clearing system code from the external code list, e.g. `USABA`.
    ExternalClearingSystemIdentification1Code,
    max = 5
);
text_leaf!(ExternalCashClearingSystem1Code, max = 3);
text_leaf!(
    BICFIDec2014Identifier,
    pattern = "[A-Z0-9]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?"
);
text_leaf!(
    /// Pre-2014 BIC facet used by older message versions.
    BICIdentifier,
    pattern = "[A-Z]{6}[A-Z2-9][A-NP-Z0-9]([A-Z0-9]{3})?"
);
text_leaf!(ActiveCurrencyCode, pattern = "[A-Z]{3}");
text_leaf!(ActiveOrHistoricCurrencyCode, pattern = "[A-Z]{3}");
text_leaf!(
    UUIDv4Identifier,
    pattern = "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}"
);
text_leaf!(SettlementMethod1Code, pattern = "INDA|INGA|COVE|CLRG");
text_leaf!(ChargeBearerType1Code, pattern = "DEBT|CRED|SHAR|SLEV");
text_leaf!(QueryType3Code, pattern = "ALLL|CHNG|MODF");

/// Fixed-point amount (`totalDigits` 18, `fractionDigits` 5).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalNumber(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Leaf for DecimalNumber {
    fn kind(&self) -> LeafKind {
        LeafKind::Decimal
    }

    fn value(&self) -> Value {
        Value::Decimal(self.0)
    }

    fn assign(&mut self, value: Value) -> Result<(), MappingError> {
        match value {
            Value::Decimal(v) => {
                self.0 = v;
                Ok(())
            }
            other => Err(kind_mismatch(&other, LeafKind::Decimal)),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.0.scale() > 5 {
            return Err(format!("{} has more than 5 fraction digits", self.0));
        }
        if self.0.is_sign_negative() {
            return Err(format!("{} is negative", self.0));
        }
        Ok(())
    }
}

impl Reflect for DecimalNumber {
    fn slot(&self) -> Slot<'_> {
        Slot::Leaf(self)
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Leaf(self)
    }
}

const ISO_DATE: &str = "%Y-%m-%d";

static ZONED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:Z|[+-]\d{2}:\d{2})?$").expect("valid regex")
});

/// Calendar date without time of day. Decoding also accepts an `xs:date`
/// timezone suffix, which is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ISODate(pub NaiveDate);

impl ISODate {
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        let date = ZONED_DATE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map_or(text, |m| m.as_str());
        NaiveDate::parse_from_str(date, ISO_DATE)
            .map(ISODate)
            .map_err(|err| format!("invalid ISODate '{text}': {err}"))
    }
}

impl fmt::Display for ISODate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE))
    }
}

impl Serialize for ISODate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ISODate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ISODate::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl Leaf for ISODate {
    fn kind(&self) -> LeafKind {
        LeafKind::Date
    }

    fn value(&self) -> Value {
        Value::Date(self.0)
    }

    fn assign(&mut self, value: Value) -> Result<(), MappingError> {
        match value {
            Value::Date(v) => {
                self.0 = v;
                Ok(())
            }
            other => Err(kind_mismatch(&other, LeafKind::Date)),
        }
    }
}

impl Reflect for ISODate {
    fn slot(&self) -> Slot<'_> {
        Slot::Leaf(self)
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Leaf(self)
    }
}

const ISO_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Local date and time. Decoding also accepts an RFC 3339 offset, which is
/// dropped after keeping the wall-clock reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ISODateTime(pub NaiveDateTime);

impl ISODateTime {
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        NaiveDateTime::parse_from_str(text, ISO_DATE_TIME)
            .or_else(|_| DateTime::parse_from_rfc3339(text).map(|dt| dt.naive_local()))
            .map(ISODateTime)
            .map_err(|err| format!("invalid ISODateTime '{text}': {err}"))
    }
}

impl fmt::Display for ISODateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_TIME))
    }
}

impl Serialize for ISODateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ISODateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ISODateTime::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl Leaf for ISODateTime {
    fn kind(&self) -> LeafKind {
        LeafKind::DateTime
    }

    fn value(&self) -> Value {
        Value::DateTime(self.0)
    }

    fn assign(&mut self, value: Value) -> Result<(), MappingError> {
        match value {
            Value::DateTime(v) => {
                self.0 = v;
                Ok(())
            }
            other => Err(kind_mismatch(&other, LeafKind::DateTime)),
        }
    }
}

impl Reflect for ISODateTime {
    fn slot(&self) -> Slot<'_> {
        Slot::Leaf(self)
    }

    fn slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Leaf(self)
    }
}
