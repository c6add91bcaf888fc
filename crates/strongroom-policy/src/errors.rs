// Copyright 2025 Strongroom Project
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for policy configuration
//!
//! These cover loading and installing the matrix only. Authorization itself
//! is infallible: a bad input denies, it does not error.

use thiserror::Error;

/// Errors that can occur while loading or installing the policy matrix
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The configuration could not be parsed or used a key outside the
    /// closed environment/role/operation vocabulary
    #[error("Policy configuration error: {0}")]
    Config(String),

    /// The configuration file could not be read
    #[error("Policy file error: {0}")]
    Io(#[from] std::io::Error),

    /// A matrix was already installed (or defaulted) for this process
    #[error("Policy matrix already installed for this process")]
    AlreadyInstalled,
}

impl From<PolicyError> for strongroom_core::StrongroomError {
    fn from(err: PolicyError) -> Self {
        strongroom_core::StrongroomError::ConfigError(format!("Policy error: {}", err))
    }
}
