// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! `pacs.008.001.08` FIToFICustomerCreditTransferV08.

use crate::impl_record;
use crate::iso::components::{
    ActiveCurrencyAndAmount, ActiveOrHistoricCurrencyAndAmount,
    BranchAndFinancialInstitutionIdentification6, CashAccount, ClearingSystemIdentification3Choice,
    PartyIdentification135, RemittanceInformation,
};
use crate::iso::types::{
    ChargeBearerType1Code, ISODate, ISODateTime, Max15NumericText, Max35Text,
    SettlementMethod1Code, UUIDv4Identifier,
};
use crate::iso::xml::XmlMessage;
use serde::{Deserialize, Serialize};

pub const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "FIToFICstmrCdtTrf")]
    pub fi_to_fi_cstmr_cdt_trf: FIToFICustomerCreditTransferV08,
}
impl_record!(Document { "FIToFICstmrCdtTrf" => fi_to_fi_cstmr_cdt_trf });

impl XmlMessage for Document {
    const NAMESPACE: &'static str = NAMESPACE;

    fn xmlns(&self) -> &str {
        &self.xmlns
    }

    fn xmlns_mut(&mut self) -> &mut String {
        &mut self.xmlns
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FIToFICustomerCreditTransferV08 {
    pub grp_hdr: GroupHeader93,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cdt_trf_tx_inf: Vec<CreditTransferTransaction39>,
}
impl_record!(FIToFICustomerCreditTransferV08 {
    "GrpHdr" => grp_hdr,
    "CdtTrfTxInf" => cdt_trf_tx_inf,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupHeader93 {
    pub msg_id: Max35Text,
    pub cre_dt_tm: ISODateTime,
    pub nb_of_txs: Max15NumericText,
    pub sttlm_inf: SettlementInstruction7,
}
impl_record!(GroupHeader93 {
    "MsgId" => msg_id,
    "CreDtTm" => cre_dt_tm,
    "NbOfTxs" => nb_of_txs,
    "SttlmInf" => sttlm_inf,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettlementInstruction7 {
    pub sttlm_mtd: SettlementMethod1Code,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clr_sys: Option<ClearingSystemIdentification3Choice>,
}
impl_record!(SettlementInstruction7 { "SttlmMtd" => sttlm_mtd, "ClrSys" => clr_sys });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditTransferTransaction39 {
    pub pmt_id: PaymentIdentification7,
    pub intr_bk_sttlm_amt: ActiveCurrencyAndAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intr_bk_sttlm_dt: Option<ISODate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instd_amt: Option<ActiveOrHistoricCurrencyAndAmount>,
    pub chrg_br: ChargeBearerType1Code,
    pub dbtr: PartyIdentification135,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbtr_acct: Option<CashAccount>,
    pub dbtr_agt: BranchAndFinancialInstitutionIdentification6,
    pub cdtr_agt: BranchAndFinancialInstitutionIdentification6,
    pub cdtr: PartyIdentification135,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdtr_acct: Option<CashAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmt_inf: Option<RemittanceInformation>,
}
impl_record!(CreditTransferTransaction39 {
    "PmtId" => pmt_id,
    "IntrBkSttlmAmt" => intr_bk_sttlm_amt,
    "IntrBkSttlmDt" => intr_bk_sttlm_dt,
    "InstdAmt" => instd_amt,
    "ChrgBr" => chrg_br,
    "Dbtr" => dbtr,
    "DbtrAcct" => dbtr_acct,
    "DbtrAgt" => dbtr_agt,
    "CdtrAgt" => cdtr_agt,
    "Cdtr" => cdtr,
    "CdtrAcct" => cdtr_acct,
    "RmtInf" => rmt_inf,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentIdentification7 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instr_id: Option<Max35Text>,
    pub end_to_end_id: Max35Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<Max35Text>,
    #[serde(rename = "UETR", default, skip_serializing_if = "Option::is_none")]
    pub uetr: Option<UUIDv4Identifier>,
}
impl_record!(PaymentIdentification7 {
    "InstrId" => instr_id,
    "EndToEndId" => end_to_end_id,
    "TxId" => tx_id,
    "UETR" => uetr,
});
