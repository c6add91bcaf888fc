// crates/strongroom-core/src/credential.rs

//! Credential metadata models and the store interface behind them.
//!
//! The console only ever holds credential *metadata*; secret values live in
//! the store and are fetched one at a time, on demand. The `secret` field on
//! [`Credential`] is populated solely while composing a create or update
//! request and is skipped during serialization when absent.

use crate::errors::StrongroomError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One credential as the console lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Key unique within application, component and environment.
    pub short_key: String,
    /// Optional deployable component the credential belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Environment label within the account (free-form, e.g. `"dev"`).
    pub environment: String,
    /// Owning application identifier, uppercase by convention.
    pub application: String,
    /// Alias of the account the credential lives in.
    pub account: String,
    /// Region the credential lives in.
    pub region: String,
    /// Who last changed the credential, when the store reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    /// When the credential last changed, when the store reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,
    /// Rotation source type (e.g. `"RDS"`), when rotation is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Rotation source name, when rotation is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Secret value, present only while composing a create or update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Credential {
    /// Creates credential metadata with no component, source, or secret.
    pub fn new(
        short_key: impl Into<String>,
        application: impl Into<String>,
        account: impl Into<String>,
        region: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            short_key: short_key.into(),
            component: None,
            environment: environment.into(),
            application: application.into(),
            account: account.into(),
            region: region.into(),
            last_updated_by: None,
            last_updated_date: None,
            source_type: None,
            source: None,
            secret: None,
        }
    }

    /// Sets the component.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Sets the rotation source.
    pub fn with_source(
        mut self,
        source_type: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.source_type = Some(source_type.into());
        self.source = Some(source.into());
        self
    }

    /// Sets the secret value for an outgoing create or update.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// The store-side key: `APPLICATION.component.environment.shortKey`, with
    /// the component segment omitted when absent or empty.
    pub fn long_key(&self) -> String {
        match self.component.as_deref() {
            Some(component) if !component.is_empty() => format!(
                "{}.{}.{}.{}",
                self.application, component, self.environment, self.short_key
            ),
            _ => format!(
                "{}.{}.{}",
                self.application, self.environment, self.short_key
            ),
        }
    }

    /// Checks the fields a store request requires.
    ///
    /// `shortKey`, `application`, `account`, `region` and `environment` must
    /// be non-blank; `shortKey` and a present `component` must not contain
    /// whitespace, since both become segments of the store-side key.
    pub fn validate(&self) -> Result<(), StrongroomError> {
        require_filled("shortKey", &self.short_key)?;
        require_filled("application", &self.application)?;
        require_filled("account", &self.account)?;
        require_filled("region", &self.region)?;
        require_filled("environment", &self.environment)?;

        if self.short_key.chars().any(char::is_whitespace) {
            return Err(StrongroomError::ValidationError {
                context: "shortKey".to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }
        if let Some(component) = self.component.as_deref() {
            if component.is_empty() || component.chars().any(char::is_whitespace) {
                return Err(StrongroomError::ValidationError {
                    context: "component".to_string(),
                    message: "must be non-empty with no whitespace".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn require_filled(context: &str, value: &str) -> Result<(), StrongroomError> {
    if value.trim().is_empty() {
        return Err(StrongroomError::ValidationError {
            context: context.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}

/// One row of a credential's change history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Revision number, starting at 1 and increasing per change.
    pub revision: u32,
    /// Who made the change.
    pub updated_by: String,
    /// When the change happened, formatted by the store.
    pub updated_date: String,
}

/// The console's current search scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selected {
    /// Alias of the account to search in.
    pub account: String,
    /// Region to search in.
    pub region: String,
    /// Application whose credentials are listed.
    pub application: String,
    /// Environment filter; `"ALL"` (any case) selects everything.
    pub environment: String,
    /// Key substring filter, applied client-side.
    pub key: String,
}

/// Distinct environment labels among `credentials`, sorted ascending, with
/// `"ALL"` prepended for the unfiltered view. Blank labels are skipped.
pub fn unique_environments(credentials: &[Credential]) -> Vec<String> {
    let mut environments: Vec<String> = credentials
        .iter()
        .map(|credential| credential.environment.clone())
        .filter(|environment| !environment.is_empty())
        .collect();
    environments.sort();
    environments.dedup();
    environments.insert(0, "ALL".to_string());
    environments
}

/// The credentials whose environment matches `environment`, ignoring ASCII
/// case. `"all"` in any case returns every credential.
pub fn filter_by_environment(credentials: &[Credential], environment: &str) -> Vec<Credential> {
    if environment.eq_ignore_ascii_case("all") {
        return credentials.to_vec();
    }
    credentials
        .iter()
        .filter(|credential| credential.environment.eq_ignore_ascii_case(environment))
        .cloned()
        .collect()
}

// --- Store Interface ---

/// The credential backend. The console core never persists secrets itself.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Lists credential metadata matching the search scope.
    async fn list(&self, selected: &Selected) -> Result<Vec<Credential>, StrongroomError>;

    /// Retrieves the secret value for one credential.
    async fn secret(&self, credential: &Credential) -> Result<String, StrongroomError>;

    /// Retrieves the change history for one credential, oldest first.
    async fn history(&self, credential: &Credential)
        -> Result<Vec<HistoryEntry>, StrongroomError>;

    /// Stores a brand-new credential; fails if the key already exists.
    async fn create(&self, credential: &Credential) -> Result<(), StrongroomError>;

    /// Overwrites the secret or metadata of an existing credential.
    async fn update(&self, credential: &Credential) -> Result<(), StrongroomError>;

    /// Triggers rotation against the credential's configured source.
    async fn rotate(&self, credential: &Credential) -> Result<(), StrongroomError>;

    /// Deletes the credential and its history.
    async fn delete(&self, credential: &Credential) -> Result<(), StrongroomError>;
}
