use super::RecordType;

/// One canned answer. `data` holds the type-specific textual rdata
/// (dotted quad for A, colon-grouped for AAAA, a hostname for CNAME)
/// and is only parsed when the reply is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: String,
}

impl AnswerRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}
