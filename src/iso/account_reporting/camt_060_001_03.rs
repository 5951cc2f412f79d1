// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! `camt.060.001.03` AccountReportingRequestV03. Predates reporting
//! sequences and the 2014 BIC facet.

use crate::impl_record;
use crate::iso::components::{CashAccount, ClearingSystemMemberIdentification2};
use crate::iso::types::{BICIdentifier, ISODate, ISODateTime, Max35Text, Max140Text, QueryType3Code};
use crate::iso::xml::XmlMessage;
use serde::{Deserialize, Serialize};

pub const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:camt.060.001.03";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "AcctRptgReq")]
    pub acct_rptg_req: AccountReportingRequestV03,
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
pub struct AccountReportingRequestV03 {
    pub grp_hdr: GroupHeader59,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rptg_req: Vec<ReportingRequest3>,
}
impl_record!(AccountReportingRequestV03 { "GrpHdr" => grp_hdr, "RptgReq" => rptg_req });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupHeader59 {
    pub msg_id: Max35Text,
    pub cre_dt_tm: ISODateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_sndr: Option<Party12Choice>,
}
impl_record!(GroupHeader59 {
    "MsgId" => msg_id,
    "CreDtTm" => cre_dt_tm,
    "MsgSndr" => msg_sndr,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportingRequest3 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Max35Text>,
    pub reqd_msg_nm_id: Max35Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct: Option<CashAccount>,
    pub acct_ownr: Party12Choice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct_svcr: Option<BranchAndFinancialInstitutionIdentification5>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rptg_prd: Option<ReportingPeriod1>,
}
impl_record!(ReportingRequest3 {
    "Id" => id,
    "ReqdMsgNmId" => reqd_msg_nm_id,
    "Acct" => acct,
    "AcctOwnr" => acct_ownr,
    "AcctSvcr" => acct_svcr,
    "RptgPrd" => rptg_prd,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party12Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pty: Option<PartyIdentification43>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agt: Option<BranchAndFinancialInstitutionIdentification5>,
}
impl_record!(Party12Choice { "Pty" => pty, "Agt" => agt });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartyIdentification43 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}
impl_record!(PartyIdentification43 { "Nm" => nm });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BranchAndFinancialInstitutionIdentification5 {
    pub fin_instn_id: FinancialInstitutionIdentification8,
}
impl_record!(BranchAndFinancialInstitutionIdentification5 { "FinInstnId" => fin_instn_id });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialInstitutionIdentification8 {
    #[serde(rename = "BICFI", default, skip_serializing_if = "Option::is_none")]
    pub bicfi: Option<BICIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clr_sys_mmb_id: Option<ClearingSystemMemberIdentification2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}
impl_record!(FinancialInstitutionIdentification8 {
    "BICFI" => bicfi,
    "ClrSysMmbId" => clr_sys_mmb_id,
    "Nm" => nm,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportingPeriod1 {
    pub fr_to_dt: DatePeriodDetails1,
    pub tp: QueryType3Code,
}
impl_record!(ReportingPeriod1 { "FrToDt" => fr_to_dt, "Tp" => tp });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatePeriodDetails1 {
    pub fr_dt: ISODate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_dt: Option<ISODate>,
}
impl_record!(DatePeriodDetails1 { "FrDt" => fr_dt, "ToDt" => to_dt });
