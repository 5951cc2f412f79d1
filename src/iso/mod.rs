// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Supported ISO 20022 message families, their schema versions and the
//! flat models they are mapped onto.

pub mod account_reporting;
pub mod components;
pub mod credit_transfer;
pub mod mappings;
pub mod types;
pub mod xml;

pub use account_reporting::{AccountReportingRequest, SequenceRange};
pub use credit_transfer::CustomerCreditTransfer;

use crate::engine::{
    Document, DocumentRegistry, MappingError, MappingTable, Reflect, ValidationReport, convert,
    validate_document,
};
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

static REGISTRY: Lazy<DocumentRegistry> =
    Lazy::new(|| account_reporting::registry().merge(credit_transfer::registry()));

/// Every supported schema version.
pub fn registry() -> &'static DocumentRegistry {
    &REGISTRY
}

pub fn supported_namespaces() -> Vec<&'static str> {
    REGISTRY.namespaces().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Family {
    AccountReporting,
    CreditTransfer,
}

impl Family {
    pub fn of(namespace: &str) -> Option<Family> {
        if account_reporting::NAMESPACES.contains(&namespace) {
            Some(Family::AccountReporting)
        } else if credit_transfer::NAMESPACES.contains(&namespace) {
            Some(Family::CreditTransfer)
        } else {
            None
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::AccountReporting => f.write_str("AccountReporting"),
            Family::CreditTransfer => f.write_str("CreditTransfer"),
        }
    }
}

/// A flat model, tagged with its family when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum Message {
    AccountReporting(AccountReportingRequest),
    CreditTransfer(CustomerCreditTransfer),
}

impl Message {
    pub fn family(&self) -> Family {
        match self {
            Message::AccountReporting(_) => Family::AccountReporting,
            Message::CreditTransfer(_) => Family::CreditTransfer,
        }
    }

    pub fn as_reflect(&self) -> &dyn Reflect {
        match self {
            Message::AccountReporting(model) => model,
            Message::CreditTransfer(model) => model,
        }
    }
}

fn family_of(namespace: &str) -> Result<Family, MappingError> {
    Family::of(namespace).ok_or_else(|| MappingError::UnknownNamespace {
        namespace: namespace.to_string(),
    })
}

fn read_model<M: Reflect + Default>(
    table: &MappingTable,
    document: &dyn Document,
) -> Result<M, MappingError> {
    let mut model = M::default();
    convert(table, document.as_reflect(), &mut model, true)?;
    Ok(model)
}

/// Map a decoded document onto its family's flat model.
pub fn read_document(document: &dyn Document) -> Result<Message> {
    let namespace = document.namespace();
    let table = mappings::table(namespace)?;
    let message = match family_of(namespace)? {
        Family::AccountReporting => Message::AccountReporting(read_model(table, document)?),
        Family::CreditTransfer => Message::CreditTransfer(read_model(table, document)?),
    };
    Ok(message)
}

/// Build the schema document for `namespace` from a flat model.
pub fn build_document(message: &Message, namespace: &str) -> Result<Box<dyn Document>> {
    let family = family_of(namespace)?;
    if family != message.family() {
        bail!(
            "{namespace} carries {family} messages, not {}",
            message.family()
        );
    }
    let table = mappings::table(namespace)?;
    let mut document = REGISTRY.create(namespace)?;
    convert(table, message.as_reflect(), document.as_reflect_mut(), false)
        .with_context(|| format!("failed to map {family} model onto {namespace}"))?;
    Ok(document)
}

/// Decode an XML payload into its namespace and flat model.
pub fn decode(payload: &str) -> Result<(String, Message)> {
    let document = REGISTRY
        .decode(payload)
        .context("failed to decode ISO 20022 payload")?;
    let namespace = document.namespace().to_string();
    let message = read_document(document.as_ref())
        .with_context(|| format!("failed to read {namespace} document"))?;
    tracing::debug!(%namespace, family = %message.family(), "decoded payload");
    Ok((namespace, message))
}

/// Encode a flat model as an XML document of version `namespace`.
pub fn encode(message: &Message, namespace: &str) -> Result<String> {
    let document = build_document(message, namespace)?;
    let xml = document
        .encode_xml()
        .with_context(|| format!("failed to serialise {namespace} document"))?;
    Ok(xml)
}

/// Decode a payload and run every leaf's type-level checks over it.
pub fn validate(payload: &str) -> Result<(String, ValidationReport)> {
    let document = REGISTRY
        .decode(payload)
        .context("failed to decode ISO 20022 payload")?;
    let report = validate_document(document.as_reflect());
    Ok((document.namespace().to_string(), report))
}
