// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! FI to FI customer credit transfers (`pacs.008`), single transaction.

pub mod pacs_008_001_02;
pub mod pacs_008_001_08;

use crate::engine::DocumentRegistry;
use crate::impl_record;
use crate::iso::xml;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const NAMESPACES: &[&str] = &[pacs_008_001_02::NAMESPACE, pacs_008_001_08::NAMESPACE];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerCreditTransfer {
    pub message_id: String,
    pub created_date_time: NaiveDateTime,
    pub number_of_transactions: String,
    pub settlement_method: String,
    pub clearing_system: String,
    pub instruction_id: String,
    pub end_to_end_id: String,
    pub uetr: String,
    pub settlement_amount: f64,
    pub settlement_currency: String,
    pub settlement_date: NaiveDateTime,
    pub instructed_amount: f64,
    pub instructed_currency: String,
    pub charge_bearer: String,
    pub debtor_name: String,
    pub debtor_account: String,
    pub debtor_agent_bic: String,
    pub debtor_agent_member_id: String,
    pub creditor_agent_bic: String,
    pub creditor_agent_member_id: String,
    pub creditor_name: String,
    pub creditor_account: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remittance_lines: Vec<String>,
}
impl_record!(CustomerCreditTransfer {
    "MessageId" => message_id,
    "CreatedDateTime" => created_date_time,
    "NumberOfTransactions" => number_of_transactions,
    "SettlementMethod" => settlement_method,
    "ClearingSystem" => clearing_system,
    "InstructionId" => instruction_id,
    "EndToEndId" => end_to_end_id,
    "Uetr" => uetr,
    "SettlementAmount" => settlement_amount,
    "SettlementCurrency" => settlement_currency,
    "SettlementDate" => settlement_date,
    "InstructedAmount" => instructed_amount,
    "InstructedCurrency" => instructed_currency,
    "ChargeBearer" => charge_bearer,
    "DebtorName" => debtor_name,
    "DebtorAccount" => debtor_account,
    "DebtorAgentBic" => debtor_agent_bic,
    "DebtorAgentMemberId" => debtor_agent_member_id,
    "CreditorAgentBic" => creditor_agent_bic,
    "CreditorAgentMemberId" => creditor_agent_member_id,
    "CreditorName" => creditor_name,
    "CreditorAccount" => creditor_account,
    "RemittanceLines" => remittance_lines,
});

pub fn registry() -> DocumentRegistry {
    DocumentRegistry::new()
        .with(
            pacs_008_001_02::NAMESPACE,
            xml::empty::<pacs_008_001_02::Document>,
        )
        .with(
            pacs_008_001_08::NAMESPACE,
            xml::empty::<pacs_008_001_08::Document>,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_document;
    use crate::iso::{Message, build_document, decode, encode};
    use chrono::NaiveDate;

    fn transfer() -> CustomerCreditTransfer {
        CustomerCreditTransfer {
            message_id: "PACS8-0001".into(),
            created_date_time: NaiveDate::from_ymd_opt(2024, 7, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            number_of_transactions: "1".into(),
            settlement_method: "CLRG".into(),
            clearing_system: "TGT".into(),
            instruction_id: "INSTR-9".into(),
            end_to_end_id: "E2E-9".into(),
            uetr: "8a562c67-ca16-48ba-b074-65581be6f011".into(),
            settlement_amount: 1500.25,
            settlement_currency: "EUR".into(),
            settlement_date: NaiveDate::from_ymd_opt(2024, 7, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            instructed_amount: 1500.25,
            instructed_currency: "EUR".into(),
            charge_bearer: "SLEV".into(),
            debtor_name: "Alpha Trading Ltd".into(),
            debtor_account: "DE0000111122223333".into(),
            debtor_agent_bic: "DEUTDEFF".into(),
            debtor_agent_member_id: String::new(),
            creditor_agent_bic: "BNPAFRPP".into(),
            creditor_agent_member_id: "30004".into(),
            creditor_name: "Beta SARL".into(),
            creditor_account: "FR7630004000031234567890143".into(),
            remittance_lines: vec!["Invoice 2024-117".into(), "Ref PO-88".into()],
        }
    }

    #[test]
    fn v08_round_trips_every_field() {
        let message = Message::CreditTransfer(transfer());
        let xml = encode(&message, pacs_008_001_08::NAMESPACE).unwrap();
        assert!(xml.contains(r#"<IntrBkSttlmAmt Ccy="EUR">1500.25</IntrBkSttlmAmt>"#));
        assert!(xml.contains("<UETR>8a562c67-ca16-48ba-b074-65581be6f011</UETR>"));
        let (_, decoded) = decode(&xml).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn v02_uses_bic_and_drops_uetr() {
        let message = Message::CreditTransfer(transfer());
        let xml = encode(&message, pacs_008_001_02::NAMESPACE).unwrap();
        assert!(xml.contains("<BIC>DEUTDEFF</BIC>"));
        assert!(!xml.contains("UETR"));
        let (_, decoded) = decode(&xml).unwrap();
        let Message::CreditTransfer(decoded) = decoded else {
            panic!("expected a credit transfer");
        };
        assert!(decoded.uetr.is_empty());
        assert_eq!(decoded.remittance_lines, transfer().remittance_lines);
        assert_eq!(decoded.settlement_amount, 1500.25);
    }

    #[test]
    fn empty_member_id_is_not_written() {
        let message = Message::CreditTransfer(transfer());
        let xml = encode(&message, pacs_008_001_08::NAMESPACE).unwrap();
        assert_eq!(xml.matches("<MmbId>").count(), 1);
    }

    #[test]
    fn mapped_document_passes_leaf_validation() {
        let message = Message::CreditTransfer(transfer());
        let document = build_document(&message, pacs_008_001_08::NAMESPACE).unwrap();
        let report = validate_document(document.as_reflect());
        assert!(report.is_clean(), "{:?}", report.errors);
    }

    #[test]
    fn invalid_codes_are_reported_not_rejected() {
        let mut model = transfer();
        model.settlement_currency = "euro".into();
        let document =
            build_document(&Message::CreditTransfer(model), pacs_008_001_08::NAMESPACE).unwrap();
        let report = validate_document(document.as_reflect());
        assert_eq!(report.errors.len(), 1);
        assert!(
            report
                .leaf_errors
                .contains_key("FIToFICstmrCdtTrf.CdtTrfTxInf[0].IntrBkSttlmAmt.Ccy")
        );
    }
}
