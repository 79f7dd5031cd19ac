use std::sync::Arc;

use stub_dns_application::ResolveQueryUseCase;
use stub_dns_domain::{AnswerRecord, MessageEntry, Question, RecordTable, RecordType};

fn use_case_with(entries: Vec<MessageEntry>) -> ResolveQueryUseCase {
    ResolveQueryUseCase::new(Arc::new(RecordTable::new(entries)))
}

fn entry(name: &str, rtype: RecordType, data: &str) -> MessageEntry {
    MessageEntry::new(
        Question::new(name, rtype),
        vec![AnswerRecord::new(name, rtype, 60, data)],
    )
}

// ── matches ────────────────────────────────────────────────────────────────

#[test]
fn test_match_returns_entry_answers_in_order() {
    let question = Question::new("multi.test.", RecordType::A);
    let answers = vec![
        AnswerRecord::new("multi.test.", RecordType::A, 60, "10.0.0.1"),
        AnswerRecord::new("multi.test.", RecordType::A, 60, "10.0.0.2"),
    ];
    let use_case = use_case_with(vec![MessageEntry::new(question.clone(), answers.clone())]);

    assert_eq!(use_case.execute(&question), answers.as_slice());
}

#[test]
fn test_first_entry_wins_for_duplicate_questions() {
    let use_case = use_case_with(vec![
        entry("dup.test.", RecordType::A, "10.0.0.1"),
        entry("dup.test.", RecordType::A, "10.0.0.2"),
    ]);

    let answers = use_case.execute(&Question::new("dup.test.", RecordType::A));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data, "10.0.0.1");
}

#[test]
fn test_resolution_is_idempotent() {
    let use_case = use_case_with(vec![entry("host.test.", RecordType::A, "10.0.0.1")]);
    let question = Question::new("host.test.", RecordType::A);

    let first: Vec<_> = use_case.execute(&question).to_vec();
    let second: Vec<_> = use_case.execute(&question).to_vec();
    assert_eq!(first, second);
}

// ── misses ─────────────────────────────────────────────────────────────────

#[test]
fn test_unmatched_name_yields_no_answers() {
    let use_case = use_case_with(vec![entry("host.test.", RecordType::A, "10.0.0.1")]);
    assert!(use_case
        .execute(&Question::new("other.test.", RecordType::A))
        .is_empty());
}

#[test]
fn test_type_mismatch_yields_no_answers() {
    let use_case = use_case_with(vec![entry("host.test.", RecordType::A, "10.0.0.1")]);
    assert!(use_case
        .execute(&Question::new("host.test.", RecordType::AAAA))
        .is_empty());
}

#[test]
fn test_builtin_table_resolves_example_com() {
    let use_case = ResolveQueryUseCase::new(Arc::new(RecordTable::builtin()));

    let answers = use_case.execute(&Question::new("example.com.", RecordType::A));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data, "1.2.3.4");
    assert_eq!(answers[0].ttl, 60);
}
