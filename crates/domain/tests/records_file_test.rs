use std::io::Write;

use stub_dns_domain::config::records::{table_from_entries, table_from_file, RecordFileEntry};
use stub_dns_domain::config::ConfigError;
use stub_dns_domain::{Question, RecordType};

const SAMPLE: &str = r#"[
  {
    "question": {"name": "test.com.", "type": "A"},
    "answers": [
      {"name": "test.com.", "type": "A", "ttl": 42, "data": "4.3.2.1"}
    ]
  },
  {
    "question": {"name": "alias.test.", "type": "CNAME"},
    "answers": [
      {"name": "alias.test.", "type": "CNAME", "ttl": 120, "data": "target.test."}
    ]
  }
]"#;

#[test]
fn test_parse_record_file_entries() {
    let entries: Vec<RecordFileEntry> = serde_json::from_str(SAMPLE).unwrap();
    let table = table_from_entries(entries).unwrap();

    assert_eq!(table.len(), 2);

    let hit = table
        .lookup(&Question::new("test.com.", RecordType::A))
        .unwrap();
    assert_eq!(hit.answers[0].ttl, 42);
    assert_eq!(hit.answers[0].data, "4.3.2.1");

    let cname = table
        .lookup(&Question::new("alias.test.", RecordType::CNAME))
        .unwrap();
    assert_eq!(cname.answers[0].record_type, RecordType::CNAME);
    assert_eq!(cname.answers[0].data, "target.test.");
}

#[test]
fn test_unknown_record_type_is_rejected() {
    let json = r#"[
      {
        "question": {"name": "weird.test.", "type": "SPF"},
        "answers": []
      }
    ]"#;

    let entries: Vec<RecordFileEntry> = serde_json::from_str(json).unwrap();
    let err = table_from_entries(entries).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownRecordType(t) if t == "SPF"));
}

#[test]
fn test_missing_field_fails_to_parse() {
    // Answer without ttl
    let json = r#"[
      {
        "question": {"name": "test.com.", "type": "A"},
        "answers": [{"name": "test.com.", "type": "A", "data": "1.2.3.4"}]
      }
    ]"#;

    assert!(serde_json::from_str::<Vec<RecordFileEntry>>(json).is_err());
}

#[test]
fn test_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let table = table_from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_table_from_missing_file() {
    let err = table_from_file("/nonexistent/records.json").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}
