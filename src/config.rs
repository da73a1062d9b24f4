//! Sync configuration

use std::env;

/// Settings for DDL generation and database access.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Wrap identifiers in double quotes.
    pub quote_names: bool,
    /// Optional schema used to qualify table names.
    pub schema: Option<String>,
    /// Add a local SERIAL surrogate key and keep the source id as an
    /// ordinary nullable `SfId` column.
    pub rename_id: bool,
    /// Connection string for the target database.
    pub database_url: String,
    /// Default log filter directive.
    pub log_filter: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            quote_names: true,
            schema: None,
            rename_id: false,
            database_url: "postgresql://localhost/salesforce".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl SyncConfig {
    /// Load settings from the environment, keeping defaults for anything
    /// unset: `SFSYNC_QUOTE_NAMES`, `SFSYNC_SCHEMA`, `SFSYNC_RENAME_ID`,
    /// `DATABASE_URL`, `SFSYNC_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var("SFSYNC_QUOTE_NAMES") {
            config.quote_names = parse_bool(&value);
        }
        if let Ok(value) = env::var("SFSYNC_SCHEMA") {
            config.schema = (!value.is_empty()).then_some(value);
        }
        if let Ok(value) = env::var("SFSYNC_RENAME_ID") {
            config.rename_id = parse_bool(&value);
        }
        if let Ok(value) = env::var("DATABASE_URL") {
            config.database_url = value;
        }
        if let Ok(value) = env::var("SFSYNC_LOG") {
            config.log_filter = value;
        }
        config
    }

    pub fn with_quote_names(mut self, quote_names: bool) -> Self {
        self.quote_names = quote_names;
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_rename_id(mut self, rename_id: bool) -> Self {
        self.rename_id = rename_id;
        self
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
