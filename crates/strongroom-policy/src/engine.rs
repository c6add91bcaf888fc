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

//! The resolver turning a user and an account into a verdict.

use crate::authorization::AuthorizationResult;
use crate::matrix::{self, PolicyMatrix};
use std::sync::Arc;
use strongroom_core::account::Account;
use strongroom_core::user::User;

/// Stateless authorization resolver over an immutable policy matrix.
///
/// The engine is cheap to clone and safe to share across threads. Call
/// [`PolicyEngine::authorize`] whenever the user or the selected account
/// changes; verdicts are never cached here, so permission state cannot go
/// stale relative to the current selection.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    matrix: Arc<PolicyMatrix>,
}

impl PolicyEngine {
    /// An engine over the process-wide matrix (installed or builtin).
    pub fn new() -> Self {
        Self {
            matrix: matrix::shared(),
        }
    }

    /// An engine over an explicit matrix, for embedding and tests.
    pub fn with_matrix(matrix: PolicyMatrix) -> Self {
        Self {
            matrix: Arc::new(matrix),
        }
    }

    /// Decides every operation for `user` against `account`.
    ///
    /// Evaluation is fail-closed and infallible. A missing user or account,
    /// a role string outside the recognized vocabulary, or an account whose
    /// environment cannot be classified each produce the all-denied verdict
    /// rather than an error. The same inputs always produce the same
    /// verdict.
    pub fn authorize(&self, user: Option<&User>, account: Option<&Account>) -> AuthorizationResult {
        let (user, account) = match (user, account) {
            (Some(user), Some(account)) => (user, account),
            _ => return AuthorizationResult::denied(),
        };

        match (user.role_class(), account.environment_class()) {
            (Some(role), Some(environment)) => {
                AuthorizationResult::from_operations(self.matrix.operations_for(environment, role))
            }
            (role, environment) => {
                tracing::debug!(
                    user = %user.name,
                    role = %user.role,
                    role_recognized = role.is_some(),
                    account = %account.alias,
                    sdlc = %account.sdlc,
                    environment_recognized = environment.is_some(),
                    "Denying all operations for unclassifiable user/account pair"
                );
                AuthorizationResult::denied()
            }
        }
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}
