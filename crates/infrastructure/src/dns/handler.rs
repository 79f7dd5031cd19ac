//! Per-request resolution boundary shared by both transport loops.

use std::sync::Arc;

use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use stub_dns_application::ResolveQueryUseCase;
use stub_dns_domain::{DomainError, Question, RecordType};
use tracing::{debug, error, warn};

use super::wire;

/// Answers decoded requests from the shared table.
///
/// Every decodable request gets exactly one well-formed reply. Failures while
/// assembling the answer section are confined to that request: they are
/// logged and reported to the client as SERVFAIL, and the owning listener
/// loop keeps serving.
pub struct QueryHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl QueryHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode a request, resolve it, and encode the reply. `None` means the
    /// bytes were not a DNS message, so there is nothing to answer with.
    pub fn handle(&self, wire_bytes: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(wire_bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, len = wire_bytes.len(), "Dropping undecodable request");
                return None;
            }
        };

        let reply = self.respond(&request);

        match wire::serialize(&reply) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, id = request.id(), "Failed to encode reply");
                None
            }
        }
    }

    /// Build the reply for a decoded request. No match is a successful empty
    /// answer; anything that goes wrong while building the answer section
    /// becomes SERVFAIL for this request only.
    pub fn respond(&self, request: &Message) -> Message {
        let Some(query) = request.queries().first() else {
            debug!(id = request.id(), "Request without question section");
            return wire::build_reply(request, Vec::new(), ResponseCode::FormErr);
        };

        let name = query.name().to_utf8();
        let type_code = u16::from(query.query_type());

        match self.answers_for(&name, type_code) {
            Ok(answers) => {
                debug!(name = %name, answers = answers.len(), "Sending reply");
                wire::build_reply(request, answers, ResponseCode::NoError)
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Resolution failed, answering SERVFAIL");
                wire::build_reply(request, Vec::new(), ResponseCode::ServFail)
            }
        }
    }

    fn answers_for(&self, name: &str, type_code: u16) -> Result<Vec<Record>, DomainError> {
        let record_type =
            RecordType::from_u16(type_code).ok_or(DomainError::UnknownQueryType(type_code))?;
        let question = Question::new(name, record_type);

        self.use_case
            .execute(&question)
            .iter()
            .map(wire::answer_record)
            .collect()
    }
}
