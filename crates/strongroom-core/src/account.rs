#![warn(missing_docs)]

//! Account models and the grouping step behind the account selector.
//!
//! Accounts arrive from the directory backend as raw payloads; `sdlc` stays a
//! string so an unclassified account can still be displayed and diagnosed.
//! Classification happens exactly once, in [`Account::environment_class`].

use crate::errors::StrongroomError;
use crate::types::EnvironmentClass;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A region an account is provisioned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region name, e.g. `"us-east-1"`.
    pub name: String,
}

impl Region {
    /// Creates a region from a string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An account as supplied by the directory backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque account identifier.
    pub account_id: String,
    /// Human-readable label; unique within one environment class and the sort
    /// key for account lists.
    pub alias: String,
    /// Raw environment field exactly as the directory sent it. Recognized
    /// values are `"dev"`, `"qa"` and `"prod"`; anything else leaves the
    /// account unclassified.
    pub sdlc: String,
    /// Regions the account is provisioned in.
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Account {
    /// Creates an account with no regions.
    pub fn new(
        account_id: impl Into<String>,
        alias: impl Into<String>,
        sdlc: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            alias: alias.into(),
            sdlc: sdlc.into(),
            regions: Vec::new(),
        }
    }

    /// Sets the account's regions.
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// The typed environment class, or `None` when `sdlc` is not one of the
    /// recognized wire forms. Matching is exact and case-sensitive.
    pub fn environment_class(&self) -> Option<EnvironmentClass> {
        EnvironmentClass::parse(&self.sdlc)
    }
}

/// Accounts of one environment class, alias-sorted, ready for a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountGroup {
    /// The environment class shared by every account in the group.
    pub environment: EnvironmentClass,
    /// Accounts sorted by alias, ascending byte order.
    pub accounts: Vec<Account>,
}

/// Groups accounts by environment class and sorts each group by alias.
///
/// Groups come back in fixed environment order (dev, then qa, then prod) and
/// only for classes that actually have accounts. Within a group, aliases sort
/// by ascending byte order, so `"PROD-B"` precedes `"PROD-z"`. The sort is
/// stable: accounts sharing an alias keep their input order.
///
/// Accounts whose `sdlc` is unclassified are dropped from the result; each is
/// logged so a directory misconfiguration stays visible. The input is not
/// modified, and the same input always produces the same output.
pub fn group_and_sort(accounts: &[Account]) -> Vec<AccountGroup> {
    let mut buckets: BTreeMap<EnvironmentClass, Vec<Account>> = BTreeMap::new();
    for account in accounts {
        match account.environment_class() {
            Some(environment) => buckets.entry(environment).or_default().push(account.clone()),
            None => {
                tracing::warn!(
                    alias = %account.alias,
                    sdlc = %account.sdlc,
                    "Dropping account with unrecognized environment from selection"
                );
            }
        }
    }

    buckets
        .into_iter()
        .map(|(environment, mut accounts)| {
            accounts.sort_by(|a, b| a.alias.cmp(&b.alias));
            AccountGroup {
                environment,
                accounts,
            }
        })
        .collect()
}

/// Supplies the accounts the console can operate on.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Retrieves every account visible to the console, ungrouped and in
    /// backend order.
    async fn accounts(&self) -> Result<Vec<Account>, StrongroomError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine_accounts_shuffled() -> Vec<Account> {
        vec![
            Account::new("9", "PROD-z", "prod"),
            Account::new("4", "L-QA", "qa"),
            Account::new("2", "C-DEV", "dev"),
            Account::new("7", "PROD-A", "prod"),
            Account::new("6", "Z-QA", "qa"),
            Account::new("1", "A-DEV", "dev"),
            Account::new("8", "PROD-B", "prod"),
            Account::new("5", "A-QA", "qa"),
            Account::new("3", "L-DEV", "dev"),
        ]
    }

    fn aliases(group: &AccountGroup) -> Vec<&str> {
        group.accounts.iter().map(|a| a.alias.as_str()).collect()
    }

    #[test]
    fn test_environment_class_recognizes_exact_sdlc() {
        assert_eq!(
            Account::new("1", "A-DEV", "dev").environment_class(),
            Some(EnvironmentClass::Dev)
        );
        assert_eq!(
            Account::new("2", "A-QA", "qa").environment_class(),
            Some(EnvironmentClass::Qa)
        );
        assert_eq!(
            Account::new("3", "PROD-A", "prod").environment_class(),
            Some(EnvironmentClass::Prod)
        );
        assert_eq!(Account::new("4", "X", "PROD").environment_class(), None);
        assert_eq!(Account::new("5", "X", "staging").environment_class(), None);
        assert_eq!(Account::new("6", "X", "").environment_class(), None);
    }

    #[test]
    fn test_group_and_sort_orders_groups_dev_qa_prod() {
        let groups = group_and_sort(&nine_accounts_shuffled());

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].environment, EnvironmentClass::Dev);
        assert_eq!(groups[1].environment, EnvironmentClass::Qa);
        assert_eq!(groups[2].environment, EnvironmentClass::Prod);

        assert_eq!(aliases(&groups[0]), vec!["A-DEV", "C-DEV", "L-DEV"]);
        assert_eq!(aliases(&groups[1]), vec!["A-QA", "L-QA", "Z-QA"]);
        assert_eq!(aliases(&groups[2]), vec!["PROD-A", "PROD-B", "PROD-z"]);
    }

    #[test]
    fn test_group_and_sort_is_byte_order_not_case_insensitive() {
        // Uppercase sorts before lowercase bytewise, so "PROD-B" < "PROD-z"
        // and "PROD-Z" < "PROD-a".
        let accounts = vec![
            Account::new("1", "PROD-z", "prod"),
            Account::new("2", "PROD-a", "prod"),
            Account::new("3", "PROD-Z", "prod"),
            Account::new("4", "PROD-B", "prod"),
        ];

        let groups = group_and_sort(&accounts);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            aliases(&groups[0]),
            vec!["PROD-B", "PROD-Z", "PROD-a", "PROD-z"]
        );
    }

    #[test]
    fn test_group_and_sort_is_stable_for_duplicate_aliases() {
        let accounts = vec![
            Account::new("first", "SHARED", "dev"),
            Account::new("second", "SHARED", "dev"),
            Account::new("third", "AAA", "dev"),
        ];

        let groups = group_and_sort(&accounts);
        assert_eq!(groups.len(), 1);
        assert_eq!(aliases(&groups[0]), vec!["AAA", "SHARED", "SHARED"]);
        assert_eq!(groups[0].accounts[1].account_id, "first");
        assert_eq!(groups[0].accounts[2].account_id, "second");
    }

    #[test]
    fn test_group_and_sort_skips_unclassified_accounts() {
        let accounts = vec![
            Account::new("1", "GOOD-DEV", "dev"),
            Account::new("2", "SHOUTING", "DEV"),
            Account::new("3", "TYPO", "pord"),
            Account::new("4", "BLANK", ""),
        ];

        let groups = group_and_sort(&accounts);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].environment, EnvironmentClass::Dev);
        assert_eq!(aliases(&groups[0]), vec!["GOOD-DEV"]);
    }

    #[test]
    fn test_group_and_sort_omits_empty_groups() {
        let accounts = vec![
            Account::new("1", "ONLY-PROD", "prod"),
            Account::new("2", "OTHER-PROD", "prod"),
        ];

        let groups = group_and_sort(&accounts);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].environment, EnvironmentClass::Prod);

        assert!(group_and_sort(&[]).is_empty());
    }

    #[test]
    fn test_group_and_sort_leaves_input_unchanged() {
        let accounts = nine_accounts_shuffled();
        let before = accounts.clone();

        let first = group_and_sort(&accounts);
        let second = group_and_sort(&accounts);

        assert_eq!(accounts, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_account_deserializes_directory_payload() {
        // Directory payloads carry extra fields the console does not model.
        let json = r#"{
            "accountId": "123456789",
            "name": "",
            "alias": "PROD-A",
            "sdlc": "prod",
            "regions": [{"name": "us-east-1"}, {"name": "us-west-2"}]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_id, "123456789");
        assert_eq!(account.alias, "PROD-A");
        assert_eq!(account.sdlc, "prod");
        assert_eq!(account.regions.len(), 2);
        assert_eq!(account.regions[0].name, "us-east-1");
        assert_eq!(account.environment_class(), Some(EnvironmentClass::Prod));
    }

    #[test]
    fn test_account_regions_default_to_empty() {
        let json = r#"{"accountId": "1", "alias": "A-DEV", "sdlc": "dev"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(account.regions.is_empty());
    }

    #[test]
    fn test_account_serializes_camel_case() {
        let account = Account::new("42", "A-DEV", "dev").with_regions(vec![Region::new("us-east-1")]);
        let value = serde_json::to_value(&account).unwrap();

        assert_eq!(value["accountId"], "42");
        assert_eq!(value["alias"], "A-DEV");
        assert_eq!(value["sdlc"], "dev");
        assert_eq!(value["regions"][0]["name"], "us-east-1");
    }

    struct FixedDirectory(Vec<Account>);

    #[async_trait]
    impl AccountDirectory for FixedDirectory {
        async fn accounts(&self) -> Result<Vec<Account>, StrongroomError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_directory_accounts_feed_grouping() {
        let directory = FixedDirectory(nine_accounts_shuffled());

        let accounts = directory.accounts().await.unwrap();
        let groups = group_and_sort(&accounts);

        assert_eq!(groups.len(), 3);
        assert_eq!(aliases(&groups[2]), vec!["PROD-A", "PROD-B", "PROD-z"]);
    }
}
