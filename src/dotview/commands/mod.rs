//! # Commands
//!
//! One module per CLI subcommand. Each `run` takes an already-loaded document
//! (or config directory) and returns a [`CmdResult`]; printing is left to the
//! binary.

use crate::config::DotviewConfig;
use serde_json::Value;

pub mod call;
pub mod config;
pub mod get;
pub mod keys;
pub mod records;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Values to print as JSON
    pub values: Vec<Value>,
    /// Names to print one per line
    pub listed_keys: Vec<String>,
    pub config: Option<DotviewConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = values;
        self
    }

    pub fn with_listed_keys(mut self, keys: Vec<String>) -> Self {
        self.listed_keys = keys;
        self
    }

    pub fn with_config(mut self, config: DotviewConfig) -> Self {
        self.config = Some(config);
        self
    }
}
