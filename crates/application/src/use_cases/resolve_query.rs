use std::sync::Arc;

use stub_dns_domain::{AnswerRecord, Question, RecordTable};
use tracing::debug;

const NO_ANSWERS: &[AnswerRecord] = &[];

/// Resolves a question against the shared record table.
///
/// The table is immutable after construction, so one use case instance is
/// shared by every transport worker without synchronization.
pub struct ResolveQueryUseCase {
    table: Arc<RecordTable>,
}

impl ResolveQueryUseCase {
    pub fn new(table: Arc<RecordTable>) -> Self {
        Self { table }
    }

    /// Answers of the first entry whose (name, type) equals the question,
    /// in table order. An unmatched question yields an empty slice; the
    /// caller reports that as a successful no-data reply.
    pub fn execute(&self, question: &Question) -> &[AnswerRecord] {
        match self.table.lookup(question) {
            Some(entry) => {
                debug!(
                    name = %question.name,
                    record_type = %question.record_type,
                    answers = entry.answers.len(),
                    "Question matched"
                );
                &entry.answers
            }
            None => {
                debug!(
                    name = %question.name,
                    record_type = %question.record_type,
                    "No entry for question"
                );
                NO_ANSWERS
            }
        }
    }
}
