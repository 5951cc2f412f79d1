// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Complex types shared unchanged by several schema versions.

use crate::impl_record;
use crate::iso::types::{
    ActiveCurrencyCode, ActiveOrHistoricCurrencyCode, BICFIDec2014Identifier, DecimalNumber,
    ExternalCashClearingSystem1Code, ExternalClearingSystemIdentification1Code, Max34Text,
    Max35Text, Max140Text,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveCurrencyAndAmount {
    #[serde(rename = "@Ccy")]
    pub ccy: ActiveCurrencyCode,
    #[serde(rename = "$text")]
    pub value: DecimalNumber,
}
impl_record!(ActiveCurrencyAndAmount { "Ccy" => ccy, "Value" => value });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrHistoricCurrencyAndAmount {
    #[serde(rename = "@Ccy")]
    pub ccy: ActiveOrHistoricCurrencyCode,
    #[serde(rename = "$text")]
    pub value: DecimalNumber,
}
impl_record!(ActiveOrHistoricCurrencyAndAmount { "Ccy" => ccy, "Value" => value });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericAccountIdentification1 {
    pub id: Max34Text,
}
impl_record!(GenericAccountIdentification1 { "Id" => id });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentification4Choice {
    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<Max34Text>,
    #[serde(rename = "Othr", default, skip_serializing_if = "Option::is_none")]
    pub othr: Option<GenericAccountIdentification1>,
}
impl_record!(AccountIdentification4Choice { "IBAN" => iban, "Othr" => othr });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CashAccount {
    pub id: AccountIdentification4Choice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccy: Option<ActiveOrHistoricCurrencyCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}
impl_record!(CashAccount { "Id" => id, "Ccy" => ccy, "Nm" => nm });

/// Clearing system of a member identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClearingSystemIdentification2Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<ExternalClearingSystemIdentification1Code>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prtry: Option<Max35Text>,
}
impl_record!(ClearingSystemIdentification2Choice { "Cd" => cd, "Prtry" => prtry });

/// Clearing system used for settlement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClearingSystemIdentification3Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<ExternalCashClearingSystem1Code>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prtry: Option<Max35Text>,
}
impl_record!(ClearingSystemIdentification3Choice { "Cd" => cd, "Prtry" => prtry });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClearingSystemMemberIdentification2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clr_sys_id: Option<ClearingSystemIdentification2Choice>,
    pub mmb_id: Max35Text,
}
impl_record!(ClearingSystemMemberIdentification2 { "ClrSysId" => clr_sys_id, "MmbId" => mmb_id });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialInstitutionIdentification18 {
    #[serde(rename = "BICFI", default, skip_serializing_if = "Option::is_none")]
    pub bicfi: Option<BICFIDec2014Identifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clr_sys_mmb_id: Option<ClearingSystemMemberIdentification2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}
impl_record!(FinancialInstitutionIdentification18 {
    "BICFI" => bicfi,
    "ClrSysMmbId" => clr_sys_mmb_id,
    "Nm" => nm,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BranchAndFinancialInstitutionIdentification6 {
    pub fin_instn_id: FinancialInstitutionIdentification18,
}
impl_record!(BranchAndFinancialInstitutionIdentification6 { "FinInstnId" => fin_instn_id });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartyIdentification135 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}
impl_record!(PartyIdentification135 { "Nm" => nm });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemittanceInformation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ustrd: Vec<Max140Text>,
}
impl_record!(RemittanceInformation { "Ustrd" => ustrd });
