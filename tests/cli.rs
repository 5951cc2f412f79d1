// SPDX-License-Identifier: AGPL-3.0-only
// Integration smoke tests for the CLI to ensure end-to-end flows keep working.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

const CAMT_060_05: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
  <AcctRptgReq>
    <GrpHdr>
      <MsgId>CLI-0001</MsgId>
      <CreDtTm>2024-02-10T10:00:00</CreDtTm>
    </GrpHdr>
    <RptgReq>
      <Id>REQ-7</Id>
      <ReqdMsgNmId>camt.053.001.08</ReqdMsgNmId>
      <Acct><Id><Othr><Id>44556677</Id></Othr></Id></Acct>
      <AcctOwnr><Agt><FinInstnId><BICFI>DEUTDEFF</BICFI></FinInstnId></Agt></AcctOwnr>
      <RptgPrd>
        <FrToDt><FrDt>2024-02-01</FrDt><ToDt>2024-02-09</ToDt></FrToDt>
        <Tp>ALLL</Tp>
      </RptgPrd>
    </RptgReq>
  </AcctRptgReq>
</Document>
"#;

fn temp_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write temp");
    file
}

#[test]
fn decodes_document_from_stdin() {
    cargo_bin_cmd!("isomapper")
        .write_stdin(CAMT_060_05)
        .assert()
        .success()
        .stdout(
            contains(r#""namespace": "urn:iso:std:iso:20022:tech:xsd:camt.060.001.05""#)
                .and(contains(r#""family": "AccountReporting""#))
                .and(contains(r#""MessageId": "CLI-0001""#)),
        );
}

#[test]
fn decodes_document_from_file_path() {
    let file = temp_with(CAMT_060_05);
    cargo_bin_cmd!("isomapper")
        .arg(file.path())
        .assert()
        .success()
        .stdout(contains(r#""AccountOtherId": "44556677""#));
}

#[test]
fn encodes_model_to_older_version() {
    let model = temp_with(
        r#"{
  "family": "AccountReporting",
  "MessageId": "CLI-0002",
  "CreatedDateTime": "2024-02-10T10:00:00",
  "RequestedMsgNameId": "camt.052.001.08",
  "AccountOwnerBic": "DEUTDEFF",
  "FromDate": "2024-02-01T00:00:00",
  "PeriodType": "ALLL"
}"#,
    );
    cargo_bin_cmd!("isomapper")
        .args([
            "--encode",
            "urn:iso:std:iso:20022:tech:xsd:camt.060.001.03",
        ])
        .arg(model.path())
        .assert()
        .success()
        .stdout(
            contains(r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.03">"#)
                .and(contains("<MsgId>CLI-0002</MsgId>"))
                .and(contains("<FrDt>2024-02-01</FrDt>")),
        );
}

#[test]
fn list_shows_supported_namespaces() {
    cargo_bin_cmd!("isomapper")
        .arg("--list")
        .assert()
        .success()
        .stdout(
            contains("urn:iso:std:iso:20022:tech:xsd:camt.060.001.05")
                .and(contains("urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08")),
        );
}

#[test]
fn unknown_namespace_fails() {
    cargo_bin_cmd!("isomapper")
        .write_stdin(r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.99"/>"#)
        .assert()
        .failure()
        .stderr(contains("unknown namespace"));
}

#[test]
fn one_bad_file_does_not_hide_the_others() {
    let good = temp_with(CAMT_060_05);
    let bad = temp_with("<Document");
    cargo_bin_cmd!("isomapper")
        .arg(good.path())
        .arg(bad.path())
        .assert()
        .failure()
        .stdout(contains("CLI-0001"))
        .stderr(contains("error:"));
}

#[test]
fn validate_reports_constraint_failures() {
    let broken = CAMT_060_05.replace("<Tp>ALLL</Tp>", "<Tp>SOME</Tp>");
    cargo_bin_cmd!("isomapper")
        .arg("--validate")
        .write_stdin(broken)
        .assert()
        .success()
        .stdout(contains("1 problem(s)").and(contains("AcctRptgReq.RptgReq[0].RptgPrd.Tp")));
}
