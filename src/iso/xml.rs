// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! XML form of schema documents.

use crate::engine::{Document, MappingError, Reflect};
use serde::Serialize;
use serde::de::DeserializeOwned;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A serde-mapped `Document` root for one schema version.
pub trait XmlMessage:
    Reflect + Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    const NAMESPACE: &'static str;

    fn xmlns(&self) -> &str;
    fn xmlns_mut(&mut self) -> &mut String;
}

impl<T: XmlMessage> Document for T {
    fn namespace(&self) -> &str {
        T::NAMESPACE
    }

    fn decode_xml(&mut self, payload: &str) -> Result<(), MappingError> {
        let mut decoded: T = quick_xml::de::from_str(payload).map_err(|err| MappingError::Xml {
            operation: "decode",
            reason: err.to_string(),
        })?;
        let declared = decoded.xmlns();
        if !declared.is_empty() && declared != T::NAMESPACE {
            return Err(MappingError::UnknownNamespace {
                namespace: declared.to_string(),
            });
        }
        *decoded.xmlns_mut() = T::NAMESPACE.to_string();
        *self = decoded;
        Ok(())
    }

    fn encode_xml(&self) -> Result<String, MappingError> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        if self.xmlns() == T::NAMESPACE {
            self.serialize(serializer).map_err(encode_fault)?;
        } else {
            let mut stamped = self.clone();
            *stamped.xmlns_mut() = T::NAMESPACE.to_string();
            stamped.serialize(serializer).map_err(encode_fault)?;
        }
        Ok(format!("{XML_DECLARATION}\n{body}\n"))
    }

    fn as_reflect(&self) -> &dyn Reflect {
        self
    }

    fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
        self
    }
}

fn encode_fault(err: impl std::fmt::Display) -> MappingError {
    MappingError::Xml {
        operation: "encode",
        reason: err.to_string(),
    }
}

/// Factory for an empty document of type `T`, namespace already stamped.
pub fn empty<T: XmlMessage>() -> Box<dyn Document> {
    let mut document = T::default();
    *document.xmlns_mut() = T::NAMESPACE.to_string();
    Box::new(document)
}
