use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No rdata encoder for record type {0}")]
    UnsupportedRecordType(RecordType),

    #[error("Invalid {record_type} rdata '{data}': {reason}")]
    InvalidRdata {
        record_type: RecordType,
        data: String,
        reason: String,
    },

    #[error("Unknown query type code {0}")]
    UnknownQueryType(u16),

    #[error("Failed to encode DNS message: {0}")]
    Encode(String),
}
