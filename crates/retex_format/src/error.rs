use thiserror::Error;

/// Errors raised while looking up or naming native formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("native format ordinal {ordinal} is outside the catalog (0..{count})")]
    OutOfRange { ordinal: i32, count: usize },

    #[error("'{name}' does not name a native format")]
    UnknownName { name: String },
}
