//! Common type definitions used throughout Strongroom.
//!
//! The enums here are the closed vocabulary of the authorization layer.
//! Directory and session payloads carry free-form strings; these types are
//! only ever produced by the exact parsers below, so anything that reaches
//! the policy layer is already classified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment class of an account, derived from the directory's `sdlc` field.
///
/// Declaration order is the display order for account selection: development
/// first, production last. `Ord` follows declaration order on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentClass {
    /// Development accounts (`"dev"`).
    Dev,
    /// Quality-assurance accounts (`"qa"`).
    Qa,
    /// Production accounts (`"prod"`).
    Prod,
}

impl EnvironmentClass {
    /// Every environment class, in display order.
    pub const ALL: [EnvironmentClass; 3] = [
        EnvironmentClass::Dev,
        EnvironmentClass::Qa,
        EnvironmentClass::Prod,
    ];

    /// Parses the directory wire form. Exact and case-sensitive; anything
    /// else (including `"DEV"` or `"production"`) is unclassified.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dev" => Some(EnvironmentClass::Dev),
            "qa" => Some(EnvironmentClass::Qa),
            "prod" => Some(EnvironmentClass::Prod),
            _ => None,
        }
    }

    /// The wire form of this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentClass::Dev => "dev",
            EnvironmentClass::Qa => "qa",
            EnvironmentClass::Prod => "prod",
        }
    }
}

impl fmt::Display for EnvironmentClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Console role granted to a user by the session backend.
///
/// There is no hierarchy between roles: every (environment, role) pairing is
/// spelled out in the policy matrix rather than inferred from rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Application developers.
    Dev,
    /// Operations staff.
    Ops,
    /// Master administrators.
    Master,
}

impl Role {
    /// Every recognized role.
    pub const ALL: [Role; 3] = [Role::Dev, Role::Ops, Role::Master];

    /// Parses the session wire form. Exact and case-sensitive; `"dev"`,
    /// `"Admin"` or a misspelling like `"PROD"` all stay unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DEV" => Some(Role::Dev),
            "OPS" => Some(Role::Ops),
            "MASTER" => Some(Role::Master),
            _ => None,
        }
    }

    /// The wire form of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Dev => "DEV",
            Role::Ops => "OPS",
            Role::Master => "MASTER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A credential operation the console can gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Store a brand-new credential.
    CreateCredential,
    /// Overwrite an existing credential's secret or metadata.
    UpdateCredential,
    /// Trigger rotation against the configured source.
    RotateCredential,
    /// See credential metadata rows.
    ViewCredential,
    /// See a credential's change history.
    ViewCredentialHistory,
    /// Reveal a credential's secret value.
    ViewCredentialSecret,
    /// Delete a credential and its history.
    DeleteCredential,
}

impl Operation {
    /// Every gated operation.
    pub const ALL: [Operation; 7] = [
        Operation::CreateCredential,
        Operation::UpdateCredential,
        Operation::RotateCredential,
        Operation::ViewCredential,
        Operation::ViewCredentialHistory,
        Operation::ViewCredentialSecret,
        Operation::DeleteCredential,
    ];

    /// The configuration wire form of this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateCredential => "createCredential",
            Operation::UpdateCredential => "updateCredential",
            Operation::RotateCredential => "rotateCredential",
            Operation::ViewCredential => "viewCredential",
            Operation::ViewCredentialHistory => "viewCredentialHistory",
            Operation::ViewCredentialSecret => "viewCredentialSecret",
            Operation::DeleteCredential => "deleteCredential",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
