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

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Environment- and role-aware authorization for the Strongroom console.
//!
//! This crate provides:
//! - The policy matrix mapping (environment class, role) to operation sets
//! - A fail-closed engine resolving a user and account to a verdict
//! - Matrix loading from JSON configuration, with one-time installation
//!
//! Evaluation never errors: unauthenticated sessions, unrecognized roles and
//! unclassifiable accounts all resolve to the all-denied verdict.

pub mod authorization;
pub mod engine;
pub mod errors;
pub mod matrix;

pub use authorization::AuthorizationResult;
pub use engine::PolicyEngine;
pub use errors::PolicyError;
pub use matrix::PolicyMatrix;
