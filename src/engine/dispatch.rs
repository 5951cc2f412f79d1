// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Selection of the schema document type for an incoming payload.
//!
//! The registry is plain data handed in by the caller: supporting a new
//! message version means registering one more namespace/factory pair next to
//! its mapping table, with no change to the engine.

use crate::engine::error::MappingError;
use crate::engine::reflect::Reflect;
use std::collections::BTreeMap;

/// A schema document that knows its namespace and its XML form.
pub trait Document: Reflect + Send + Sync {
    fn namespace(&self) -> &str;
    /// Replace the contents of `self` with the document in `payload`.
    fn decode_xml(&mut self, payload: &str) -> Result<(), MappingError>;
    fn encode_xml(&self) -> Result<String, MappingError>;
    fn as_reflect(&self) -> &dyn Reflect;
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect;
}

/// Builds an empty document of one schema version.
pub type DocumentFactory = fn() -> Box<dyn Document>;

#[derive(Clone, Default)]
pub struct DocumentRegistry {
    factories: BTreeMap<String, DocumentFactory>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `namespace`, returning any factory it replaces.
    pub fn register(
        &mut self,
        namespace: &str,
        factory: DocumentFactory,
    ) -> Option<DocumentFactory> {
        self.factories.insert(namespace.to_string(), factory)
    }

    pub fn with(mut self, namespace: &str, factory: DocumentFactory) -> Self {
        self.register(namespace, factory);
        self
    }

    /// Fold another registry into this one.
    pub fn merge(mut self, other: DocumentRegistry) -> Self {
        self.factories.extend(other.factories);
        self
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.factories.contains_key(namespace)
    }

    /// An empty document for `namespace`.
    pub fn create(&self, namespace: &str) -> Result<Box<dyn Document>, MappingError> {
        let factory = self
            .factories
            .get(namespace)
            .ok_or_else(|| MappingError::UnknownNamespace {
                namespace: namespace.to_string(),
            })?;
        Ok(factory())
    }

    /// An empty document matching the namespace declared by `payload`.
    pub fn resolve(&self, payload: &str) -> Result<Box<dyn Document>, MappingError> {
        let namespace = document_namespace(payload)?;
        tracing::debug!(%namespace, "resolving document factory");
        self.create(&namespace)
    }

    /// Resolve and decode `payload` in one step.
    pub fn decode(&self, payload: &str) -> Result<Box<dyn Document>, MappingError> {
        let (namespace, range) = locate_document(payload)?;
        let mut document = self.create(&namespace)?;
        document.decode_xml(&payload[range])?;
        Ok(document)
    }
}

/// The namespace declared on the payload's `Document` element.
pub fn document_namespace(payload: &str) -> Result<String, MappingError> {
    locate_document(payload).map(|(namespace, _)| namespace)
}

/// Find the `Document` element, looking inside business message envelopes
/// (application header + document) when the root is not the document itself.
fn locate_document(payload: &str) -> Result<(String, std::ops::Range<usize>), MappingError> {
    let doc = roxmltree::Document::parse(payload).map_err(|err| MappingError::Xml {
        operation: "parse",
        reason: err.to_string(),
    })?;
    let root = doc.root_element();
    let node = if root.tag_name().name() == "Document" {
        root
    } else {
        doc.descendants()
            .find(|node| node.is_element() && node.tag_name().name() == "Document")
            .unwrap_or(root)
    };
    let namespace = node.tag_name().namespace().unwrap_or_default().to_string();
    if namespace.is_empty() {
        return Err(MappingError::UnknownNamespace { namespace });
    }
    Ok((namespace, node.range()))
}
