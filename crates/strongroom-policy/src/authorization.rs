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

//! The per-evaluation authorization verdict.

use serde::{Deserialize, Serialize};
use strongroom_core::types::Operation;

/// Operation-by-operation verdict for one (user, account) evaluation.
///
/// A fresh verdict is built on every evaluation and starts all-denied, so a
/// permission is only ever granted by an explicit matrix entry. Consumers
/// read the flags directly; nothing here is cached or updated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationResult {
    /// May store new credentials.
    pub create_credential: bool,
    /// May overwrite existing credentials.
    pub update_credential: bool,
    /// May trigger rotation.
    pub rotate_credential: bool,
    /// May see credential metadata rows.
    pub view_credential: bool,
    /// May see change history.
    pub view_credential_history: bool,
    /// May reveal secret values.
    pub view_credential_secret: bool,
    /// May delete credentials.
    pub delete_credential: bool,
}

impl AuthorizationResult {
    /// The all-denied verdict, handed out whenever evaluation cannot match a
    /// matrix entry.
    pub fn denied() -> Self {
        Self::default()
    }

    /// Builds a verdict granting exactly the given operations.
    pub fn from_operations<'a, I>(operations: I) -> Self
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut result = Self::default();
        for operation in operations {
            result.grant(*operation);
        }
        result
    }

    /// Whether `operation` is allowed by this verdict.
    pub fn allows(&self, operation: Operation) -> bool {
        match operation {
            Operation::CreateCredential => self.create_credential,
            Operation::UpdateCredential => self.update_credential,
            Operation::RotateCredential => self.rotate_credential,
            Operation::ViewCredential => self.view_credential,
            Operation::ViewCredentialHistory => self.view_credential_history,
            Operation::ViewCredentialSecret => self.view_credential_secret,
            Operation::DeleteCredential => self.delete_credential,
        }
    }

    fn grant(&mut self, operation: Operation) {
        match operation {
            Operation::CreateCredential => self.create_credential = true,
            Operation::UpdateCredential => self.update_credential = true,
            Operation::RotateCredential => self.rotate_credential = true,
            Operation::ViewCredential => self.view_credential = true,
            Operation::ViewCredentialHistory => self.view_credential_history = true,
            Operation::ViewCredentialSecret => self.view_credential_secret = true,
            Operation::DeleteCredential => self.delete_credential = true,
        }
    }
}
