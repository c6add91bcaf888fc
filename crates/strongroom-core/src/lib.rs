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

//! Core Strongroom types, traits, and utilities shared across the console.
//!
//! Everything here is backend-agnostic: accounts and users arrive as raw
//! directory/session payloads, credential storage hides behind a trait, and
//! the typed environment/role/operation vocabulary lives in [`types`].

// Core modules
pub mod account;
/// Defines the Credential model and the store interface behind it.
pub mod credential;
pub mod errors;
pub mod types;
pub mod user;

pub use errors::StrongroomError;
