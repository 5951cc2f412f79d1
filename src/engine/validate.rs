// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::engine::reflect::{Reflect, Slot};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub leaf_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every populated leaf's own validation hook, returning a list of
/// human-readable errors keyed by path (or empty when valid).
pub fn validate_document(root: &dyn Reflect) -> ValidationReport {
    let mut report = ValidationReport::default();
    visit(root, &mut String::new(), &mut report);
    report
}

fn visit(node: &dyn Reflect, path: &mut String, report: &mut ValidationReport) {
    match node.slot() {
        Slot::Leaf(leaf) => {
            if let Err(reason) = leaf.validate() {
                let err = format!("{path}: {reason}");
                report.errors.push(err);
                report
                    .leaf_errors
                    .entry(path.clone())
                    .or_default()
                    .push(reason);
            }
        }
        Slot::Optional(optional) => {
            if let Some(inner) = optional.get() {
                visit(inner, path, report);
            }
        }
        Slot::Sequence(seq) => {
            for index in 0..seq.len() {
                if let Some(element) = seq.get(index) {
                    let mark = path.len();
                    path.push_str(&format!("[{index}]"));
                    visit(element, path, report);
                    path.truncate(mark);
                }
            }
        }
        Slot::Record(record) => {
            for name in record.field_names() {
                if let Some(field) = record.field(name) {
                    let mark = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(name);
                    visit(field, path, report);
                    path.truncate(mark);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::MappingError;
    use crate::engine::reflect::{Leaf, SlotMut, kind_mismatch};
    use crate::engine::value::{LeafKind, Value};
    use crate::impl_record;

    #[derive(Debug, Default, Clone)]
    struct Code(String);

    impl Leaf for Code {
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

        fn validate(&self) -> Result<(), String> {
            if self.0.len() == 3 {
                Ok(())
            } else {
                Err(format!("'{}' is not a three letter code", self.0))
            }
        }
    }

    impl Reflect for Code {
        fn slot(&self) -> Slot<'_> {
            Slot::Leaf(self)
        }

        fn slot_mut(&mut self) -> SlotMut<'_> {
            SlotMut::Leaf(self)
        }
    }

    #[derive(Debug, Default)]
    struct Amount {
        ccy: Code,
    }
    impl_record!(Amount { "Ccy" => ccy });

    #[derive(Debug, Default)]
    struct Tx {
        amounts: Vec<Amount>,
        fallback: Option<Amount>,
    }
    impl_record!(Tx { "Amt" => amounts, "Fallback" => fallback });

    #[test]
    fn collects_leaf_failures_by_path() {
        let tx = Tx {
            amounts: vec![
                Amount {
                    ccy: Code("USD".into()),
                },
                Amount {
                    ccy: Code("DOLLARS".into()),
                },
            ],
            fallback: None,
        };
        let report = validate_document(&tx);
        assert!(!report.is_clean());
        assert_eq!(
            report.errors,
            vec!["Amt[1].Ccy: 'DOLLARS' is not a three letter code"]
        );
        assert!(report.leaf_errors.contains_key("Amt[1].Ccy"));
    }

    #[test]
    fn absent_optionals_are_not_visited() {
        let tx = Tx::default();
        assert!(validate_document(&tx).is_clean());
    }
}
