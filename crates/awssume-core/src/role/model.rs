//! Role domain model.

use serde::{Deserialize, Serialize};

use crate::arn::Arn;

/// A reference to an IAM Role that can be assumed through STS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Human-friendly identifier, unique within a registry.
    pub alias: String,
    pub arn: Arn,
    /// Role session name passed to `sts:AssumeRole`.
    pub session_name: String,
}

impl Role {
    pub fn new(arn: Arn, alias: impl Into<String>, session_name: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            arn,
            session_name: session_name.into(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub fn arn(&self) -> &Arn {
        &self.arn
    }

    pub fn set_arn(&mut self, arn: Arn) {
        self.arn = arn;
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    pub fn set_session_name(&mut self, session_name: impl Into<String>) {
        self.session_name = session_name.into();
    }
}
