//! Catalog file loading

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::RuleRecord;
use crate::error::{CatalogError, RuleDeckError};

/// `{ "rules": [...] }` catalog documents
#[derive(Deserialize)]
struct WrappedCatalog {
    rules: Vec<RuleRecord>,
}

fn rules_from_json(value: serde_json::Value) -> Result<Vec<RuleRecord>, serde_json::Error> {
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<WrappedCatalog>(value).map(|doc| doc.rules)
    }
}

fn rules_from_yaml(value: serde_yaml::Value) -> Result<Vec<RuleRecord>, serde_yaml::Error> {
    if value.is_sequence() {
        serde_yaml::from_value(value)
    } else {
        serde_yaml::from_value::<WrappedCatalog>(value).map(|doc| doc.rules)
    }
}

/// Ordered collection of rule records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rules: Vec<RuleRecord>,
}

impl Catalog {
    pub fn new(rules: Vec<RuleRecord>) -> Self {
        Self { rules }
    }

    /// Load a catalog from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> Result<Self, RuleDeckError> {
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path_str.clone(),
            source: e,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let rules = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .and_then(rules_from_json)
                .map_err(|e| CatalogError::Json {
                    path: path_str.clone(),
                    source: e,
                })?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .and_then(rules_from_yaml)
                .map_err(|e| CatalogError::Yaml {
                    path: path_str.clone(),
                    source: e,
                })?,
            _ => return Err(CatalogError::UnsupportedFormat { path: path_str }.into()),
        };

        let catalog = Self::new(rules);
        debug!(path = %path.display(), rules = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// All rules in file order
    pub fn rules(&self) -> &[RuleRecord] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find a rule by id, by route, or by `criteria/route`
    pub fn find(&self, key: &str) -> Option<&RuleRecord> {
        let key = key.trim().trim_start_matches('/');
        if key.is_empty() {
            return None;
        }

        self.rules
            .iter()
            .find(|r| r.id.as_str() == key)
            .or_else(|| self.rules.iter().find(|r| r.route == key))
            .or_else(|| {
                let (criteria, route) = key.split_once('/')?;
                self.rules
                    .iter()
                    .find(|r| r.criteria == criteria && r.route == route)
            })
    }
}
