use super::dns_record::{AnswerRecord, RecordType};
use super::question::Question;

/// A configured question together with the answers it should receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub question: Question,
    pub answers: Vec<AnswerRecord>,
}

impl MessageEntry {
    pub fn new(question: Question, answers: Vec<AnswerRecord>) -> Self {
        Self { question, answers }
    }
}

/// Ordered question→answers mapping, built once at startup and never mutated.
/// Shared across both transport workers without locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    entries: Vec<MessageEntry>,
}

impl RecordTable {
    pub fn new(entries: Vec<MessageEntry>) -> Self {
        Self { entries }
    }

    /// The built-in table used when no record file is supplied: A and AAAA
    /// lookups for `example.com.`. The AAAA entry answers with a record typed
    /// A carrying IPv6-formatted data; this is the table content as shipped
    /// and is kept as-is.
    pub fn builtin() -> Self {
        Self::new(vec![
            MessageEntry::new(
                Question::new("example.com.", RecordType::A),
                vec![AnswerRecord::new(
                    "example.com.",
                    RecordType::A,
                    60,
                    "1.2.3.4",
                )],
            ),
            MessageEntry::new(
                Question::new("example.com.", RecordType::AAAA),
                vec![AnswerRecord::new(
                    "example.com.",
                    RecordType::A,
                    60,
                    "::1:2:3:4",
                )],
            ),
        ])
    }

    /// First entry whose question equals `question` exactly, in table order.
    /// With duplicate questions the first one wins and later entries are
    /// unreachable.
    pub fn lookup(&self, question: &Question) -> Option<&MessageEntry> {
        self.entries.iter().find(|entry| {
            entry.question.name == question.name
                && entry.question.record_type == question.record_type
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
