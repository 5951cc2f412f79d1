// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

use crate::engine::{MappingError, MappingTable};
use crate::iso::account_reporting::{camt_060_001_03, camt_060_001_05};
use crate::iso::credit_transfer::{pacs_008_001_02, pacs_008_001_08};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const CAMT_060_001_03_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/mappings/camt.060.001.03.json"
));
const CAMT_060_001_05_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/mappings/camt.060.001.05.json"
));
const PACS_008_001_02_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/mappings/pacs.008.001.02.json"
));
const PACS_008_001_08_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/mappings/pacs.008.001.08.json"
));

const EMBEDDED: &[(&str, &str)] = &[
    (camt_060_001_03::NAMESPACE, CAMT_060_001_03_JSON),
    (camt_060_001_05::NAMESPACE, CAMT_060_001_05_JSON),
    (pacs_008_001_02::NAMESPACE, PACS_008_001_02_JSON),
    (pacs_008_001_08::NAMESPACE, PACS_008_001_08_JSON),
];

static TABLES: Lazy<BTreeMap<&'static str, Result<MappingTable, MappingError>>> =
    Lazy::new(|| {
        EMBEDDED
            .iter()
            .map(|(namespace, json)| (*namespace, MappingTable::from_json(json)))
            .collect()
    });

/// Raw JSON of the table shipped for `namespace`.
pub fn embedded_json(namespace: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(ns, _)| *ns == namespace)
        .map(|(_, json)| *json)
}

/// The parsed table for `namespace`, shared for the life of the process.
pub fn table(namespace: &str) -> Result<&'static MappingTable, MappingError> {
    match TABLES.get(namespace) {
        Some(Ok(table)) => Ok(table),
        Some(Err(err)) => Err(err.clone()),
        None => Err(MappingError::UnknownNamespace {
            namespace: namespace.to_string(),
        }),
    }
}
