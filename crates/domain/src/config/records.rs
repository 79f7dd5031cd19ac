//! Record table file format.
//!
//! The table is a JSON array of entries, one per configured question:
//!
//! ```json
//! [{"question": {"name": "test.com.", "type": "A"},
//!   "answers": [{"name": "test.com.", "type": "A", "ttl": 42, "data": "4.3.2.1"}]}]
//! ```
//!
//! Validation happens entirely here; the record table handed to the server
//! only ever contains well-formed entries.

use super::errors::ConfigError;
use crate::dns_record::{AnswerRecord, RecordType};
use crate::question::Question;
use crate::record_table::{MessageEntry, RecordTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawQuestion {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAnswer {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub ttl: u32,

    pub data: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordFileEntry {
    pub question: RawQuestion,
    pub answers: Vec<RawAnswer>,
}

impl RecordFileEntry {
    fn into_entry(self) -> Result<MessageEntry, ConfigError> {
        let question = Question::new(self.question.name, parse_type(&self.question.record_type)?);

        let mut answers = Vec::with_capacity(self.answers.len());
        for answer in self.answers {
            answers.push(AnswerRecord::new(
                answer.name,
                parse_type(&answer.record_type)?,
                answer.ttl,
                answer.data,
            ));
        }

        Ok(MessageEntry::new(question, answers))
    }
}

fn parse_type(raw: &str) -> Result<RecordType, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::UnknownRecordType(raw.to_string()))
}

/// Build a table from already-parsed file entries.
pub fn table_from_entries(entries: Vec<RecordFileEntry>) -> Result<RecordTable, ConfigError> {
    let entries = entries
        .into_iter()
        .map(RecordFileEntry::into_entry)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RecordTable::new(entries))
}

/// Load a table from a JSON record file.
pub fn table_from_file(path: &str) -> Result<RecordTable, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
    let entries: Vec<RecordFileEntry> =
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    table_from_entries(entries)
}
