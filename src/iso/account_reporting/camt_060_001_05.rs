// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! `camt.060.001.05` AccountReportingRequestV05.

use crate::impl_record;
use crate::iso::components::{
    BranchAndFinancialInstitutionIdentification6, CashAccount, PartyIdentification135,
};
use crate::iso::types::{ISODate, ISODateTime, Max35Text, QueryType3Code};
use crate::iso::xml::XmlMessage;
use serde::{Deserialize, Serialize};

pub const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:camt.060.001.05";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "AcctRptgReq")]
    pub acct_rptg_req: AccountReportingRequestV05,
}
impl_record!(Document { "AcctRptgReq" => acct_rptg_req });

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
pub struct AccountReportingRequestV05 {
    pub grp_hdr: GroupHeader77,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rptg_req: Vec<ReportingRequest5>,
}
impl_record!(AccountReportingRequestV05 { "GrpHdr" => grp_hdr, "RptgReq" => rptg_req });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupHeader77 {
    pub msg_id: Max35Text,
    pub cre_dt_tm: ISODateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_sndr: Option<Party40Choice>,
}
impl_record!(GroupHeader77 {
    "MsgId" => msg_id,
    "CreDtTm" => cre_dt_tm,
    "MsgSndr" => msg_sndr,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportingRequest5 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Max35Text>,
    pub reqd_msg_nm_id: Max35Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct: Option<CashAccount>,
    pub acct_ownr: Party40Choice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct_svcr: Option<BranchAndFinancialInstitutionIdentification6>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rptg_prd: Option<ReportingPeriod2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rptg_seq: Option<SequenceRange1Choice>,
}
impl_record!(ReportingRequest5 {
    "Id" => id,
    "ReqdMsgNmId" => reqd_msg_nm_id,
    "Acct" => acct,
    "AcctOwnr" => acct_ownr,
    "AcctSvcr" => acct_svcr,
    "RptgPrd" => rptg_prd,
    "RptgSeq" => rptg_seq,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party40Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pty: Option<PartyIdentification135>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agt: Option<BranchAndFinancialInstitutionIdentification6>,
}
impl_record!(Party40Choice { "Pty" => pty, "Agt" => agt });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportingPeriod2 {
    pub fr_to_dt: DatePeriodDetails1,
    pub tp: QueryType3Code,
}
impl_record!(ReportingPeriod2 { "FrToDt" => fr_to_dt, "Tp" => tp });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatePeriodDetails1 {
    pub fr_dt: ISODate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_dt: Option<ISODate>,
}
impl_record!(DatePeriodDetails1 { "FrDt" => fr_dt, "ToDt" => to_dt });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceRange1Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr_seq: Option<Max35Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_seq: Option<Max35Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fr_to_seq: Vec<SequenceRange1>,
}
impl_record!(SequenceRange1Choice {
    "FrSeq" => fr_seq,
    "ToSeq" => to_seq,
    "FrToSeq" => fr_to_seq,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceRange1 {
    pub fr_seq: Max35Text,
    pub to_seq: Max35Text,
}
impl_record!(SequenceRange1 { "FrSeq" => fr_seq, "ToSeq" => to_seq });
