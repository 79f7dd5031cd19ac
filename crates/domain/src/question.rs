use super::RecordType;

/// A (name, type) pair, either configured in the table or extracted from an
/// inbound request. Names are fully qualified with a trailing dot; matching
/// is exact on both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
