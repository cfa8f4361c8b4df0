use thiserror::Error;

/// Reasons a record store load rejects its source document.
///
/// Any of these aborts the whole load; nothing is committed to the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("document has no '{0}' group root")]
    MissingRoot(String),

    #[error("group root '{0}' is not a mapping")]
    RootNotMapping(String),

    #[error("group '{0}' is not a sequence of records")]
    GroupNotSequence(String),

    #[error("record #{index} of group '{group}' is not a mapping")]
    RecordNotMapping { group: String, index: usize },

    #[error("record #{index} of group '{group}' has no '{field}' field")]
    MissingSerial {
        group: String,
        index: usize,
        field: String,
    },

    #[error("record #{index} of group '{group}' has a '{field}' that is neither a string nor a number")]
    InvalidSerial {
        group: String,
        index: usize,
        field: String,
    },
}

#[derive(Error, Debug)]
pub enum DotviewError {
    #[error("no such attribute: {name}")]
    AttributeNotFound { name: String },

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("'{0}' is a key, not a mapping operation")]
    NotAnOperation(String),

    #[error("{method}() takes {expected} argument(s), got {got}")]
    InvalidArguments {
        method: &'static str,
        expected: &'static str,
        got: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DotviewError {
    pub fn attribute_not_found(name: impl Into<String>) -> Self {
        DotviewError::AttributeNotFound { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, DotviewError>;
