//! File-backed describe payloads
//!
//! A [`Describe`] is the parsed form of a Salesforce sobject describe call,
//! typically cached on disk as JSON by whatever fetched it. It implements
//! [`TableDesc`] so the DDL generator can consume it directly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::{FieldDescriptor, TableDesc};

/// Errors raised while loading a describe payload.
#[derive(Error, Debug)]
pub enum DescribeError {
    #[error("cannot read describe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed describe payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A Salesforce sobject describe payload.
///
/// Compound components (fields carrying `compoundFieldName`, like
/// `BillingStreet` under `BillingAddress`) are excluded from the sync view:
/// the compound parent is synchronized and expanded into physical columns
/// instead, so keeping the components too would duplicate them.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawDescribe")]
pub struct Describe {
    /// Object API name (e.g. "Account").
    pub name: String,
    fields: Vec<FieldDescriptor>,
    compound_names: HashSet<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDescribe {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl From<RawDescribe> for Describe {
    fn from(raw: RawDescribe) -> Self {
        let compound_names = raw
            .fields
            .iter()
            .filter_map(|f| f.compound_field_name.clone())
            .collect();
        let fields = raw
            .fields
            .into_iter()
            .filter(|f| f.compound_field_name.is_none())
            .collect();
        Self {
            name: raw.name,
            fields,
            compound_names,
        }
    }
}

impl Describe {
    pub fn from_json(json: &str) -> Result<Self, DescribeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DescribeError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

impl TableDesc for Describe {
    fn sync_fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn indexed_sync_field_names(&self) -> HashSet<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_indexed)
            .map(|f| f.name.as_str())
            .collect()
    }

    fn is_field_compound(&self, field_name: &str) -> bool {
        self.compound_names.contains(field_name)
    }
}
