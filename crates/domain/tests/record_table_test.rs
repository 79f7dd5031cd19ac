use stub_dns_domain::{AnswerRecord, MessageEntry, Question, RecordTable, RecordType};

fn entry(name: &str, rtype: RecordType, data: &str) -> MessageEntry {
    MessageEntry::new(
        Question::new(name, rtype),
        vec![AnswerRecord::new(name, rtype, 60, data)],
    )
}

#[test]
fn test_builtin_table_content() {
    let table = RecordTable::builtin();
    assert_eq!(table.len(), 2);

    let a = table
        .lookup(&Question::new("example.com.", RecordType::A))
        .expect("builtin A entry");
    assert_eq!(a.answers.len(), 1);
    assert_eq!(a.answers[0].name, "example.com.");
    assert_eq!(a.answers[0].record_type, RecordType::A);
    assert_eq!(a.answers[0].ttl, 60);
    assert_eq!(a.answers[0].data, "1.2.3.4");
}

#[test]
fn test_builtin_aaaa_entry_is_preserved_verbatim() {
    // The shipped table answers the AAAA question with a record typed A whose
    // data is IPv6-formatted. The table loader must not correct it.
    let table = RecordTable::builtin();
    let aaaa = table
        .lookup(&Question::new("example.com.", RecordType::AAAA))
        .expect("builtin AAAA entry");
    assert_eq!(aaaa.answers[0].record_type, RecordType::A);
    assert_eq!(aaaa.answers[0].data, "::1:2:3:4");
    assert_eq!(aaaa.answers[0].ttl, 60);
}

#[test]
fn test_lookup_requires_exact_name_match() {
    let table = RecordTable::new(vec![entry("host.test.", RecordType::A, "10.0.0.1")]);

    assert!(table.lookup(&Question::new("host.test.", RecordType::A)).is_some());
    // Trailing dot and case both matter.
    assert!(table.lookup(&Question::new("host.test", RecordType::A)).is_none());
    assert!(table.lookup(&Question::new("HOST.test.", RecordType::A)).is_none());
}

#[test]
fn test_lookup_requires_matching_type() {
    let table = RecordTable::new(vec![entry("host.test.", RecordType::A, "10.0.0.1")]);
    assert!(table.lookup(&Question::new("host.test.", RecordType::AAAA)).is_none());
}

#[test]
fn test_first_match_wins_on_duplicate_question() {
    let table = RecordTable::new(vec![
        entry("dup.test.", RecordType::A, "10.0.0.1"),
        entry("dup.test.", RecordType::A, "10.0.0.2"),
    ]);

    let hit = table
        .lookup(&Question::new("dup.test.", RecordType::A))
        .unwrap();
    assert_eq!(hit.answers[0].data, "10.0.0.1");
}

#[test]
fn test_empty_table_answers_nothing() {
    let table = RecordTable::new(Vec::new());
    assert!(table.is_empty());
    assert!(table.lookup(&Question::new("example.com.", RecordType::A)).is_none());
}

#[test]
fn test_answers_keep_table_order() {
    let question = Question::new("multi.test.", RecordType::A);
    let answers = vec![
        AnswerRecord::new("multi.test.", RecordType::A, 30, "10.0.0.1"),
        AnswerRecord::new("multi.test.", RecordType::A, 30, "10.0.0.2"),
        AnswerRecord::new("multi.test.", RecordType::A, 30, "10.0.0.3"),
    ];
    let table = RecordTable::new(vec![MessageEntry::new(question.clone(), answers.clone())]);

    let hit = table.lookup(&question).unwrap();
    assert_eq!(hit.answers, answers);
}
