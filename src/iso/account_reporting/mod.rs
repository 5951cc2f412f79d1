// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

//! Account reporting requests (`camt.060`).

pub mod camt_060_001_03;
pub mod camt_060_001_05;

use crate::engine::DocumentRegistry;
use crate::impl_record;
use crate::iso::xml;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const NAMESPACES: &[&str] = &[camt_060_001_03::NAMESPACE, camt_060_001_05::NAMESPACE];

/// Version-independent view of a single-request `camt.060`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountReportingRequest {
    pub message_id: String,
    pub created_date_time: NaiveDateTime,
    pub report_request_id: String,
    pub requested_msg_name_id: String,
    pub account_other_id: String,
    pub account_owner_bic: String,
    pub account_owner_member_id: String,
    pub account_owner_clearing_system: String,
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    pub period_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sequences: Vec<SequenceRange>,
}
impl_record!(AccountReportingRequest {
    "MessageId" => message_id,
    "CreatedDateTime" => created_date_time,
    "ReportRequestId" => report_request_id,
    "RequestedMsgNameId" => requested_msg_name_id,
    "AccountOtherId" => account_other_id,
    "AccountOwnerBic" => account_owner_bic,
    "AccountOwnerMemberId" => account_owner_member_id,
    "AccountOwnerClearingSystem" => account_owner_clearing_system,
    "FromDate" => from_date,
    "ToDate" => to_date,
    "PeriodType" => period_type,
    "Sequences" => sequences,
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SequenceRange {
    pub from_seq: String,
    pub to_seq: String,
}
impl_record!(SequenceRange { "FromSeq" => from_seq, "ToSeq" => to_seq });

pub fn registry() -> DocumentRegistry {
    DocumentRegistry::new()
        .with(
            camt_060_001_03::NAMESPACE,
            xml::empty::<camt_060_001_03::Document>,
        )
        .with(
            camt_060_001_05::NAMESPACE,
            xml::empty::<camt_060_001_05::Document>,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::{Message, decode, encode};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn request() -> AccountReportingRequest {
        AccountReportingRequest {
            message_id: "MSG-0001".into(),
            created_date_time: at(2024, 3, 4, 9, 15),
            report_request_id: "REQ-1".into(),
            requested_msg_name_id: "camt.053.001.08".into(),
            account_other_id: "12345678".into(),
            account_owner_bic: "DEUTDEFF".into(),
            account_owner_member_id: "50070010".into(),
            account_owner_clearing_system: "DEBLZ".into(),
            from_date: at(2024, 3, 1, 0, 0),
            to_date: at(2024, 3, 3, 0, 0),
            period_type: "ALLL".into(),
            sequences: vec![
                SequenceRange {
                    from_seq: "1".into(),
                    to_seq: "10".into(),
                },
                SequenceRange {
                    from_seq: "20".into(),
                    to_seq: "25".into(),
                },
            ],
        }
    }

    #[test]
    fn v05_round_trips_every_field() {
        let message = Message::AccountReporting(request());
        let xml = encode(&message, camt_060_001_05::NAMESPACE).unwrap();
        assert!(xml.contains("<FrToSeq>"));
        let (namespace, decoded) = decode(&xml).unwrap();
        assert_eq!(namespace, camt_060_001_05::NAMESPACE);
        assert_eq!(decoded, message);
    }

    #[test]
    fn v03_has_no_reporting_sequences() {
        let message = Message::AccountReporting(request());
        let xml = encode(&message, camt_060_001_03::NAMESPACE).unwrap();
        assert!(!xml.contains("RptgSeq"));
        let (_, decoded) = decode(&xml).unwrap();
        let Message::AccountReporting(decoded) = decoded else {
            panic!("expected an account reporting request");
        };
        assert!(decoded.sequences.is_empty());
        assert_eq!(decoded.account_owner_bic, "DEUTDEFF");
    }

    #[test]
    fn datetimes_are_truncated_to_schema_dates() {
        let mut model = request();
        model.from_date = at(2024, 3, 1, 17, 45);
        let xml = encode(&Message::AccountReporting(model), camt_060_001_05::NAMESPACE).unwrap();
        assert!(xml.contains("<FrDt>2024-03-01</FrDt>"));
        let (_, decoded) = decode(&xml).unwrap();
        let Message::AccountReporting(decoded) = decoded else {
            panic!("expected an account reporting request");
        };
        assert_eq!(decoded.from_date, at(2024, 3, 1, 0, 0));
    }

    #[test]
    fn decodes_hand_written_payload() {
        let payload = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
  <AcctRptgReq>
    <GrpHdr>
      <MsgId>ABC-42</MsgId>
      <CreDtTm>2024-06-01T08:00:00+01:00</CreDtTm>
    </GrpHdr>
    <RptgReq>
      <ReqdMsgNmId>camt.052.001.08</ReqdMsgNmId>
      <Acct><Id><Othr><Id>998877</Id></Othr></Id></Acct>
      <AcctOwnr><Agt><FinInstnId><BICFI>BANKGB2L</BICFI></FinInstnId></Agt></AcctOwnr>
    </RptgReq>
  </AcctRptgReq>
</Document>"#;
        let (_, message) = decode(payload).unwrap();
        let Message::AccountReporting(model) = message else {
            panic!("expected an account reporting request");
        };
        assert_eq!(model.message_id, "ABC-42");
        assert_eq!(model.created_date_time, at(2024, 6, 1, 8, 0));
        assert_eq!(model.account_other_id, "998877");
        assert_eq!(model.account_owner_bic, "BANKGB2L");
        assert!(model.report_request_id.is_empty());
        assert_eq!(model.from_date, NaiveDateTime::default());
    }

    #[test]
    fn zoned_period_dates_decode() {
        let payload = r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
  <AcctRptgReq>
    <GrpHdr><MsgId>TZ-1</MsgId><CreDtTm>2024-02-10T10:00:00</CreDtTm></GrpHdr>
    <RptgReq>
      <ReqdMsgNmId>camt.053.001.08</ReqdMsgNmId>
      <Acct><Id><Othr><Id>1</Id></Othr></Id></Acct>
      <AcctOwnr><Agt><FinInstnId><BICFI>DEUTDEFF</BICFI></FinInstnId></Agt></AcctOwnr>
      <RptgPrd>
        <FrToDt><FrDt>2024-02-01+01:00</FrDt><ToDt>2024-02-09Z</ToDt></FrToDt>
        <Tp>ALLL</Tp>
      </RptgPrd>
    </RptgReq>
  </AcctRptgReq>
</Document>"#;
        let (_, Message::AccountReporting(model)) = decode(payload).unwrap() else {
            panic!("expected an account reporting request");
        };
        assert_eq!(model.from_date, at(2024, 2, 1, 0, 0));
        assert_eq!(model.to_date, at(2024, 2, 9, 0, 0));
    }
}
