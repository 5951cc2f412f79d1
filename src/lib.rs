// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! isomapper converts ISO 20022 XML documents to and from flat,
//! version-independent models.
//!
//! `engine` holds the generic machinery: path parsing, field access over
//! [`engine::Reflect`] graphs, type coercion, mapping tables and document
//! dispatch by namespace.  `iso` supplies the message families and schema
//! versions the binary ships with.

pub mod engine;
pub mod iso;
