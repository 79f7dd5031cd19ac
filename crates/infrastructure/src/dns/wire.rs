//! Reply construction in DNS wire format using `hickory-proto`.
//!
//! The rdata encoders form a closed set: A, AAAA and CNAME. Anything else in
//! an answer record takes the default arm and surfaces as an error, which the
//! request handler turns into a SERVFAIL reply.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use stub_dns_domain::{AnswerRecord, DomainError, RecordType};

/// Translate one configured answer into a wire resource record.
///
/// `data` is parsed here, at reply-build time: a record whose text does not
/// parse for its type is a per-request failure, not a startup failure.
pub fn answer_record(record: &AnswerRecord) -> Result<Record, DomainError> {
    let name = Name::from_str(&record.name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", record.name, e)))?;

    let rdata = match record.record_type {
        RecordType::A => {
            let addr = record
                .data
                .parse::<Ipv4Addr>()
                .map_err(|e| invalid_rdata(record, e))?;
            RData::A(rdata::A(addr))
        }
        RecordType::AAAA => {
            let addr = record
                .data
                .parse::<Ipv6Addr>()
                .map_err(|e| invalid_rdata(record, e))?;
            RData::AAAA(rdata::AAAA(addr))
        }
        RecordType::CNAME => {
            let target =
                Name::from_str(&record.data).map_err(|e| invalid_rdata(record, e))?;
            RData::CNAME(rdata::CNAME(target))
        }
        other => return Err(DomainError::UnsupportedRecordType(other)),
    };

    Ok(Record::from_rdata(name, record.ttl, rdata))
}

fn invalid_rdata(record: &AnswerRecord, reason: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidRdata {
        record_type: record.record_type,
        data: record.data.clone(),
        reason: reason.to_string(),
    }
}

/// Build the reply for `request`: echoed id and question section, standard
/// reply flags, the given answers and response code. The response code is set
/// exactly once, here.
pub fn build_reply(request: &Message, answers: Vec<Record>, rcode: ResponseCode) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
    reply.set_authoritative(true);
    reply.set_recursion_desired(request.recursion_desired());
    reply.set_recursion_available(true);
    reply.set_response_code(rcode);

    for query in request.queries() {
        reply.add_query(query.clone());
    }
    for answer in answers {
        reply.add_answer(answer);
    }

    reply
}

/// Serialize a message to wire format bytes.
pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::Encode(e.to_string()))?;

    Ok(buf)
}
