// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Declarative mapping tables and the compiler that turns one into the
//! concrete, presence-filtered list of path pairs for a given source value.
//!
//! Tables are authored once per message version in the model-to-schema
//! direction:
//!
//! ```json
//! {
//!   "MessageId": "AcctRptgReq.GrpHdr.MsgId",
//!   "Sequences : AcctRptgReq.RptgReq[0].RptgSeq.FrToSeq": {
//!     "FromSeq": "FrSeq",
//!     "ToSeq": "ToSeq"
//!   }
//! }
//! ```
//!
//! A `"model : schema"` key with an object value is a repeated composite:
//! the sub-table is applied to every element of the source sequence, with
//! paths relative to the element.  An empty sub-table maps the elements
//! themselves.  Reading a document back uses the same table with
//! `reverse = true`.

use crate::engine::accessor;
use crate::engine::error::MappingError;
use crate::engine::path::{FieldPath, parse_path};
use crate::engine::reflect::Reflect;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;

const REPEATED_SEPARATOR: &str = " : ";

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Field {
        model: FieldPath,
        schema: FieldPath,
    },
    Repeated {
        model: FieldPath,
        schema: FieldPath,
        fields: MappingTable,
    },
}

impl Entry {
    fn oriented(&self, reverse: bool) -> (&FieldPath, &FieldPath) {
        let (model, schema) = match self {
            Entry::Field { model, schema } | Entry::Repeated { model, schema, .. } => {
                (model, schema)
            }
        };
        if reverse {
            (schema, model)
        } else {
            (model, schema)
        }
    }
}

/// Ordered set of model-path/schema-path correspondences. Paths are parsed
/// when the table is built, so a loaded table never holds a malformed path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct MappingTable {
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Path(String),
    Table(RawTable),
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawTable(IndexMap<String, RawEntry>);

impl TryFrom<RawTable> for MappingTable {
    type Error = MappingError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        let mut table = MappingTable::new();
        for (key, entry) in raw.0 {
            match entry {
                RawEntry::Path(schema) => table.push_field(&key, &schema)?,
                RawEntry::Table(sub) => {
                    let Some((model, schema)) = key.split_once(REPEATED_SEPARATOR) else {
                        return Err(MappingError::MalformedPath {
                            path: key.clone(),
                            reason: format!(
                                "repeated entry key must read 'model{REPEATED_SEPARATOR}schema'"
                            ),
                        });
                    };
                    let fields = MappingTable::try_from(sub)?;
                    table.push_repeated(model.trim(), schema.trim(), fields)?;
                }
            }
        }
        Ok(table)
    }
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON table.
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        serde_json::from_str(json).map_err(|err| MappingError::Table {
            reason: err.to_string(),
        })
    }

    pub fn push_field(&mut self, model: &str, schema: &str) -> Result<(), MappingError> {
        let (model_path, schema_path) = parse_pair(model, schema)?;
        self.entries.push(Entry::Field {
            model: model_path,
            schema: schema_path,
        });
        Ok(())
    }

    pub fn push_repeated(
        &mut self,
        model: &str,
        schema: &str,
        fields: MappingTable,
    ) -> Result<(), MappingError> {
        let (model_path, schema_path) = parse_pair(model, schema)?;
        for path in [&model_path, &schema_path] {
            if path.last().index.is_some() {
                return Err(MappingError::MalformedPath {
                    path: path.to_string(),
                    reason: "repeated entry must name the sequence without an index"
                        .to_string(),
                }
                .for_pair(model, schema));
            }
        }
        self.entries.push(Entry::Repeated {
            model: model_path,
            schema: schema_path,
            fields,
        });
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_pair(model: &str, schema: &str) -> Result<(FieldPath, FieldPath), MappingError> {
    let model_path = parse_path(model).map_err(|err| err.for_pair(model, schema))?;
    let schema_path = parse_path(schema).map_err(|err| err.for_pair(model, schema))?;
    Ok((model_path, schema_path))
}

/// One concrete copy instruction: read `source`, write `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub source: FieldPath,
    pub target: FieldPath,
}

impl fmt::Display for PathPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Compile `table` against `source` into the ordered pairs worth executing.
///
/// With `reverse` the stored direction is swapped, so the table written for
/// model-to-document serves document-to-model too.  Pairs whose source leaf
/// is absent or empty are dropped, and repeated entries are expanded once
/// per element currently present in the source sequence.
pub fn remake_mapping(
    table: &MappingTable,
    source: &dyn Reflect,
    reverse: bool,
) -> Result<Vec<PathPair>, MappingError> {
    let mut pairs = Vec::new();
    expand(table, source, reverse, None, &mut pairs)?;
    Ok(pairs)
}

fn expand(
    table: &MappingTable,
    source: &dyn Reflect,
    reverse: bool,
    prefix: Option<(&FieldPath, &FieldPath)>,
    pairs: &mut Vec<PathPair>,
) -> Result<(), MappingError> {
    for entry in table.entries() {
        let (from, to) = entry.oriented(reverse);
        let (from, to) = match prefix {
            Some((source_base, target_base)) => (source_base.join(from), target_base.join(to)),
            None => (from.clone(), to.clone()),
        };

        match entry {
            Entry::Field { .. } => push_if_present(source, from, to, pairs)?,
            Entry::Repeated { fields, .. } => {
                let count = accessor::len(source, &from)
                    .map_err(|err| err.for_pair(&from, &to))?
                    .unwrap_or(0);
                for index in 0..count {
                    let element_from = from.indexed(index).map_err(|err| err.for_pair(&from, &to))?;
                    let element_to = to.indexed(index).map_err(|err| err.for_pair(&from, &to))?;
                    if fields.is_empty() {
                        push_if_present(source, element_from, element_to, pairs)?;
                    } else {
                        expand(
                            fields,
                            source,
                            reverse,
                            Some((&element_from, &element_to)),
                            pairs,
                        )?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn push_if_present(
    source: &dyn Reflect,
    from: FieldPath,
    to: FieldPath,
    pairs: &mut Vec<PathPair>,
) -> Result<(), MappingError> {
    match accessor::probe(source, &from).map_err(|err| err.for_pair(&from, &to))? {
        Some(_) => pairs.push(PathPair {
            source: from,
            target: to,
        }),
        None => tracing::debug!(source = %from, target = %to, "source absent, pair dropped"),
    }
    Ok(())
}

/// Copy every pair's leaf from `source` into `target`.
pub fn apply(
    pairs: &[PathPair],
    source: &dyn Reflect,
    target: &mut dyn Reflect,
) -> Result<(), MappingError> {
    for pair in pairs {
        let value = accessor::get(source, &pair.source)
            .map_err(|err| err.for_pair(&pair.source, &pair.target))?;
        let Some(value) = value else {
            continue;
        };
        accessor::set(target, &pair.target, value)
            .map_err(|err| err.for_pair(&pair.source, &pair.target))?;
    }
    Ok(())
}

/// Compile and apply in one step.
pub fn convert(
    table: &MappingTable,
    source: &dyn Reflect,
    target: &mut dyn Reflect,
    reverse: bool,
) -> Result<(), MappingError> {
    let pairs = remake_mapping(table, source, reverse)?;
    tracing::debug!(pairs = pairs.len(), entries = table.len(), reverse, "mapping compiled");
    apply(&pairs, source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::AccessFault;
    use crate::impl_record;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Model {
        message_id: String,
        tax_id: String,
        from_seq: String,
        ranges: Vec<Range>,
        notes: Vec<String>,
    }
    impl_record!(Model {
        "MessageId" => message_id,
        "TaxId" => tax_id,
        "FromSeq" => from_seq,
        "Ranges" => ranges,
        "Notes" => notes,
    });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Range {
        from: String,
        to: String,
    }
    impl_record!(Range { "From" => from, "To" => to });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct GroupHeader {
        msg_id: String,
    }
    impl_record!(GroupHeader { "MsgId" => msg_id });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Tax {
        id: String,
    }
    impl_record!(Tax { "Id" => id });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Remittance {
        tax: Option<Tax>,
        ustrd: Vec<String>,
    }
    impl_record!(Remittance { "Tax" => tax, "Ustrd" => ustrd });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct SequenceRange {
        fr_seq: String,
        to_seq: String,
    }
    impl_record!(SequenceRange { "FrSeq" => fr_seq, "ToSeq" => to_seq });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct ReportingSequence {
        fr_to_seq: Vec<SequenceRange>,
    }
    impl_record!(ReportingSequence { "FrToSeq" => fr_to_seq });

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Doc {
        grp_hdr: GroupHeader,
        rmt_inf: Option<Remittance>,
        rptg_seq: Option<ReportingSequence>,
    }
    impl_record!(Doc { "GrpHdr" => grp_hdr, "RmtInf" => rmt_inf, "RptgSeq" => rptg_seq });

    fn table(json: &str) -> MappingTable {
        MappingTable::from_json(json).unwrap()
    }

    fn write(table: &MappingTable, model: &Model) -> Doc {
        let mut doc = Doc::default();
        convert(table, model, &mut doc, false).unwrap();
        doc
    }

    #[test]
    fn simple_required_field() {
        let t = table(r#"{"MessageId": "GrpHdr.MsgId"}"#);
        let model = Model {
            message_id: "ABC123".into(),
            ..Default::default()
        };
        assert_eq!(write(&t, &model).grp_hdr.msg_id, "ABC123");
    }

    #[test]
    fn empty_optional_source_leaves_segment_unset() {
        let t = table(r#"{"TaxId": "RmtInf.Tax.Id"}"#);
        let doc = write(&t, &Model::default());
        assert!(doc.rmt_inf.is_none());
    }

    #[test]
    fn indexed_composite_creates_one_element() {
        let t = table(r#"{"FromSeq": "RptgSeq.FrToSeq[0].FrSeq"}"#);
        let model = Model {
            from_seq: "000002".into(),
            ..Default::default()
        };
        let doc = write(&t, &model);
        let ranges = &doc.rptg_seq.as_ref().unwrap().fr_to_seq;
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].fr_seq, "000002");
    }

    #[test]
    fn empty_sources_shorten_the_compiled_list() {
        let t = table(
            r#"{"MessageId": "GrpHdr.MsgId", "TaxId": "RmtInf.Tax.Id", "FromSeq": "RptgSeq.FrToSeq[0].FrSeq"}"#,
        );
        let model = Model {
            message_id: "M1".into(),
            ..Default::default()
        };
        let pairs = remake_mapping(&t, &model, false).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].to_string(), "MessageId -> GrpHdr.MsgId");
    }

    #[test]
    fn compiled_order_follows_the_table() {
        let t = table(r#"{"TaxId": "RmtInf.Tax.Id", "MessageId": "GrpHdr.MsgId"}"#);
        let model = Model {
            message_id: "M1".into(),
            tax_id: "T1".into(),
            ..Default::default()
        };
        let targets: Vec<String> = remake_mapping(&t, &model, false)
            .unwrap()
            .iter()
            .map(|p| p.target.to_string())
            .collect();
        assert_eq!(targets, vec!["RmtInf.Tax.Id", "GrpHdr.MsgId"]);
    }

    #[test]
    fn reverse_reads_the_document_back() {
        let t = table(
            r#"{
                "MessageId": "GrpHdr.MsgId",
                "TaxId": "RmtInf.Tax.Id",
                "Ranges : RptgSeq.FrToSeq": {"From": "FrSeq", "To": "ToSeq"},
                "Notes : RmtInf.Ustrd": {}
            }"#,
        );
        let model = Model {
            message_id: "M1".into(),
            tax_id: "T1".into(),
            ranges: vec![
                Range {
                    from: "1".into(),
                    to: "5".into(),
                },
                Range {
                    from: "9".into(),
                    to: String::new(),
                },
            ],
            notes: vec!["first".into(), "second".into()],
            ..Default::default()
        };
        let doc = write(&t, &model);
        assert_eq!(doc.rptg_seq.as_ref().unwrap().fr_to_seq.len(), 2);
        assert_eq!(doc.rmt_inf.as_ref().unwrap().ustrd, vec!["first", "second"]);

        let mut back = Model::default();
        convert(&t, &doc, &mut back, true).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn repeated_entries_expand_per_element() {
        let t = table(r#"{"Ranges : RptgSeq.FrToSeq": {"From": "FrSeq", "To": "ToSeq"}}"#);
        let model = Model {
            ranges: vec![Range::default(), Range {
                from: "2".into(),
                to: "3".into(),
            }],
            ..Default::default()
        };
        let pairs: Vec<String> = remake_mapping(&t, &model, false)
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(
            pairs,
            vec![
                "Ranges[1].From -> RptgSeq.FrToSeq[1].FrSeq",
                "Ranges[1].To -> RptgSeq.FrToSeq[1].ToSeq",
            ]
        );
    }

    #[test]
    fn empty_elements_pad_between_but_not_after() {
        let t = table(r#"{"Ranges : RptgSeq.FrToSeq": {"From": "FrSeq", "To": "ToSeq"}}"#);
        let filled = |n: &str| Range {
            from: n.into(),
            to: n.into(),
        };
        let model = Model {
            ranges: vec![filled("1"), Range::default(), filled("3"), Range::default()],
            ..Default::default()
        };
        let doc = write(&t, &model);
        let written = &doc.rptg_seq.as_ref().unwrap().fr_to_seq;
        assert_eq!(written.len(), 3);
        assert_eq!(written[1], SequenceRange::default());

        let mut back = Model::default();
        convert(&t, &doc, &mut back, true).unwrap();
        assert_eq!(back.ranges, model.ranges[..3].to_vec());
    }

    #[test]
    fn malformed_table_paths_fail_at_load() {
        let err = MappingTable::from_json(r#"{"MessageId": "GrpHdr[x].MsgId"}"#).unwrap_err();
        assert!(err.to_string().contains("GrpHdr[x].MsgId"));

        let mut t = MappingTable::new();
        let err = t.push_field("Foo[", "GrpHdr.MsgId").unwrap_err();
        assert!(matches!(
            err.root_cause(),
            MappingError::MalformedPath { .. }
        ));
        assert!(t.push_repeated("Ranges[0]", "RptgSeq.FrToSeq", MappingTable::new()).is_err());
    }

    #[test]
    fn repeated_key_needs_separator() {
        assert!(MappingTable::from_json(r#"{"Ranges": {"From": "FrSeq"}}"#).is_err());
    }

    #[test]
    fn wrong_version_table_names_the_broken_pair() {
        let t = table(r#"{"MessageId": "GrpHdr.MessageIdentification"}"#);
        let model = Model {
            message_id: "M1".into(),
            ..Default::default()
        };
        let err = convert(&t, &model, &mut Doc::default(), false).unwrap_err();
        let MappingError::Pair {
            source_path,
            target_path,
            cause,
        } = &err
        else {
            panic!("expected a pair error, got {err:?}");
        };
        assert_eq!(source_path, "MessageId");
        assert_eq!(target_path, "GrpHdr.MessageIdentification");
        assert!(matches!(
            **cause,
            MappingError::PathWrite {
                fault: AccessFault::UnknownField { .. },
                ..
            }
        ));
        assert!(err.to_string().starts_with("MessageId -> GrpHdr.MessageIdentification: "));
    }

    #[test]
    fn tables_are_shareable_across_threads() {
        let t = table(r#"{"MessageId": "GrpHdr.MsgId"}"#);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|n| {
                    let t = &t;
                    scope.spawn(move || {
                        let model = Model {
                            message_id: format!("M{n}"),
                            ..Default::default()
                        };
                        write(t, &model).grp_hdr.msg_id
                    })
                })
                .collect();
            for (n, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), format!("M{n}"));
            }
        });
    }
}
