//! Account hierarchy and section layout configuration.
//!
//! Both documents are JSON objects whose key order is significant: account
//! order decides how siblings are listed, section order decides how the
//! report is laid out. They are therefore deserialized into ordered vectors
//! rather than hash maps.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tally_shared::AccountId;

/// Per-account configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSettings {
    /// Parent account. Blank or missing means a root account.
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<AccountId>,
    /// Left out of the parent's rollup, and hidden, in operational reports.
    pub operational_excluded: bool,
    /// Never rendered; children are promoted to this account's depth.
    pub display_excluded: bool,
    /// Numeric cells get a double border.
    pub double_lines: bool,
}

impl AccountSettings {
    /// Sets the parent account.
    #[must_use]
    pub fn with_parent(mut self, parent: AccountId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Marks the account as excluded from operational rollups.
    #[must_use]
    pub fn excluded_from_operations(mut self) -> Self {
        self.operational_excluded = true;
        self
    }

    /// Marks the account as hidden from rendering.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.display_excluded = true;
        self
    }

    /// Marks the account's numeric cells with a double border.
    #[must_use]
    pub fn with_double_lines(mut self) -> Self {
        self.double_lines = true;
        self
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<AccountId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| AccountId::new(name).ok()))
}

/// Ordered account configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    entries: Vec<(AccountId, AccountSettings)>,
    positions: HashMap<AccountId, usize>,
}

impl AccountConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account. Re-inserting an account replaces its settings but
    /// keeps its original position.
    pub fn insert(&mut self, account: AccountId, settings: AccountSettings) {
        if let Some(&pos) = self.positions.get(&account) {
            self.entries[pos].1 = settings;
        } else {
            self.positions.insert(account.clone(), self.entries.len());
            self.entries.push((account, settings));
        }
    }

    /// Returns the settings of `account`, if configured.
    #[must_use]
    pub fn get(&self, account: &str) -> Option<&AccountSettings> {
        self.positions.get(account).map(|&pos| &self.entries[pos].1)
    }

    /// Returns true if `account` is configured.
    #[must_use]
    pub fn contains(&self, account: &str) -> bool {
        self.positions.contains_key(account)
    }

    /// Iterates over accounts in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &AccountSettings)> {
        self.entries.iter().map(|(id, settings)| (id, settings))
    }

    /// Iterates over account identifiers in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = &AccountId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Number of configured accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no account is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Operational exclusion flag; false for unknown accounts.
    #[must_use]
    pub fn is_operational_excluded(&self, account: &str) -> bool {
        self.get(account).is_some_and(|s| s.operational_excluded)
    }

    /// Display exclusion flag; false for unknown accounts.
    #[must_use]
    pub fn is_display_excluded(&self, account: &str) -> bool {
        self.get(account).is_some_and(|s| s.display_excluded)
    }

    /// Double border flag; false for unknown accounts.
    #[must_use]
    pub fn has_double_lines(&self, account: &str) -> bool {
        self.get(account).is_some_and(|s| s.double_lines)
    }
}

impl FromIterator<(AccountId, AccountSettings)> for AccountConfig {
    fn from_iter<I: IntoIterator<Item = (AccountId, AccountSettings)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (account, settings) in iter {
            config.insert(account, settings);
        }
        config
    }
}

impl Serialize for AccountConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (account, settings) in &self.entries {
            map.serialize_entry(account, settings)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AccountConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(AccountId, AccountSettings)> = ordered_entries(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

/// A named group of top-level accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title.
    pub name: String,
    /// Top-level accounts, in display order.
    pub accounts: Vec<AccountId>,
}

impl Section {
    /// Creates a section.
    #[must_use]
    pub fn new(name: impl Into<String>, accounts: Vec<AccountId>) -> Self {
        Self {
            name: name.into(),
            accounts,
        }
    }
}

/// Ordered report layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionConfig {
    sections: Vec<Section>,
}

impl SectionConfig {
    /// Creates a layout from sections in display order.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Iterates over sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the layout has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns true if `account` is listed directly in any section.
    #[must_use]
    pub fn is_top_level(&self, account: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.accounts.iter().any(|a| a.as_str() == account))
    }
}

impl Serialize for SectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, &section.accounts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(String, Vec<String>)> = ordered_entries(deserializer)?;
        let sections = entries
            .into_iter()
            .map(|(name, accounts)| {
                let accounts = accounts
                    .into_iter()
                    .filter_map(|a| AccountId::new(a).ok())
                    .collect();
                Section::new(name, accounts)
            })
            .collect();
        Ok(Self::new(sections))
    }
}

struct OrderedEntries<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for OrderedEntries<K, V>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = Vec<(K, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

/// Deserializes a map into its entries, keeping document order.
fn ordered_entries<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(OrderedEntries(PhantomData))
}
