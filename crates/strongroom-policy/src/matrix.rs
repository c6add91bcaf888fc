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

//! The policy matrix: which operations each role may perform, per
//! environment class.
//!
//! The matrix is pure data. It is keyed only by the closed
//! [`EnvironmentClass`] and [`Role`] enums, so a loaded configuration can
//! never smuggle in vocabulary the engine does not understand: an unknown
//! key fails at load time, not at lookup time. Lookups themselves never
//! fail; a missing entry is a valid "no permissions" state.

use crate::errors::PolicyError;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use strongroom_core::types::{EnvironmentClass, Operation, Role};

static EMPTY_OPERATIONS: Lazy<BTreeSet<Operation>> = Lazy::new(BTreeSet::new);

static INSTALLED: OnceCell<Arc<PolicyMatrix>> = OnceCell::new();

/// The authorization table mapping (environment class, role) to the set of
/// permitted operations.
///
/// A matrix holds no behavior beyond lookup. Entries absent from the table
/// grant nothing; notably, the distinction between roles is carried entirely
/// by the data, never inferred from any ordering between them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyMatrix {
    grants: BTreeMap<EnvironmentClass, BTreeMap<Role, BTreeSet<Operation>>>,
}

impl PolicyMatrix {
    /// The reference table shipped with the console.
    ///
    /// Outside production every role may do everything. In production,
    /// developers are read-only on metadata and history, operations staff
    /// may do everything except delete, and master administrators may do
    /// everything. Master and operations differ by exactly one entry, the
    /// production delete, and that entry is spelled out here rather than
    /// derived.
    pub fn builtin() -> Self {
        let full: BTreeSet<Operation> = Operation::ALL.into_iter().collect();

        let non_prod: BTreeMap<Role, BTreeSet<Operation>> = Role::ALL
            .into_iter()
            .map(|role| (role, full.clone()))
            .collect();

        let mut prod = BTreeMap::new();
        prod.insert(
            Role::Dev,
            BTreeSet::from([Operation::ViewCredential, Operation::ViewCredentialHistory]),
        );
        prod.insert(
            Role::Ops,
            BTreeSet::from([
                Operation::CreateCredential,
                Operation::UpdateCredential,
                Operation::RotateCredential,
                Operation::ViewCredential,
                Operation::ViewCredentialHistory,
                Operation::ViewCredentialSecret,
            ]),
        );
        prod.insert(Role::Master, full);

        let mut grants = BTreeMap::new();
        grants.insert(EnvironmentClass::Dev, non_prod.clone());
        grants.insert(EnvironmentClass::Qa, non_prod);
        grants.insert(EnvironmentClass::Prod, prod);

        Self { grants }
    }

    /// Parses a matrix from its JSON configuration form.
    ///
    /// The form mirrors the in-memory shape: environment classes map to
    /// roles, roles map to operation arrays. Every key must belong to the
    /// closed vocabulary; repeated operations collapse into the set.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        serde_json::from_str(json)
            .map_err(|e| PolicyError::Config(format!("invalid policy matrix: {}", e)))
    }

    /// Builds a matrix from an already-parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, PolicyError> {
        serde_json::from_value(value)
            .map_err(|e| PolicyError::Config(format!("invalid policy matrix: {}", e)))
    }

    /// Loads a matrix from a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let matrix = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded policy matrix from file");
        Ok(matrix)
    }

    /// The operations granted to `role` within `environment_class`.
    ///
    /// Returns the empty set when either key has no entry. Never errors.
    pub fn operations_for(
        &self,
        environment_class: EnvironmentClass,
        role: Role,
    ) -> &BTreeSet<Operation> {
        self.grants
            .get(&environment_class)
            .and_then(|roles| roles.get(&role))
            .unwrap_or(&EMPTY_OPERATIONS)
    }
}

/// Installs `matrix` as the process-wide table consulted by
/// [`PolicyEngine::new`](crate::PolicyEngine::new).
///
/// Installation happens at most once, at startup. A second call, or a call
/// after something already read the default through [`shared`], fails with
/// [`PolicyError::AlreadyInstalled`] and leaves the existing table in place.
pub fn install(matrix: PolicyMatrix) -> Result<(), PolicyError> {
    let environments = matrix.grants.len();
    INSTALLED
        .set(Arc::new(matrix))
        .map_err(|_| PolicyError::AlreadyInstalled)?;
    tracing::info!(environments, "Policy matrix installed");
    Ok(())
}

/// The process-wide matrix: the installed table, or the builtin reference
/// table when nothing was installed.
pub fn shared() -> Arc<PolicyMatrix> {
    INSTALLED
        .get_or_init(|| {
            tracing::debug!("No policy matrix installed, using builtin table");
            Arc::new(PolicyMatrix::builtin())
        })
        .clone()
}
