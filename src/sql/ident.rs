//! Identifier escaping and qualification

use crate::config::SyncConfig;

use super::error::{DdlError, DdlResult};

/// Escape a table or column name according to the quoting policy.
///
/// Names containing a double quote are refused outright; doubling is a safe
/// escape for string literals but not for identifiers.
pub fn escape_name(config: &SyncConfig, name: &str) -> DdlResult<String> {
    if name.contains('"') {
        return Err(DdlError::UnsafeIdentifier(name.to_string()));
    }
    if config.quote_names {
        Ok(format!("\"{}\"", name))
    } else {
        Ok(name.to_string())
    }
}

/// Table name qualified with the configured schema, if any.
pub fn table_name(config: &SyncConfig, name: &str) -> DdlResult<String> {
    let mut result = String::new();
    if let Some(schema) = &config.schema {
        result.push_str(&escape_name(config, schema)?);
        result.push('.');
    }
    result.push_str(&escape_name(config, name)?);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_by_default() {
        let config = SyncConfig::default();
        assert_eq!(escape_name(&config, "Account").unwrap(), "\"Account\"");
    }

    #[test]
    fn test_unquoted_when_disabled() {
        let config = SyncConfig::default().with_quote_names(false);
        assert_eq!(escape_name(&config, "Account").unwrap(), "Account");
    }

    #[test]
    fn test_embedded_quote_rejected() {
        let config = SyncConfig::default();
        assert_eq!(
            escape_name(&config, "weird\"name"),
            Err(DdlError::UnsafeIdentifier("weird\"name".to_string()))
        );
        // Rejected even when quoting is off; the name is unsafe either way.
        let unquoted = SyncConfig::default().with_quote_names(false);
        assert!(escape_name(&unquoted, "weird\"name").is_err());
    }

    #[test]
    fn test_schema_qualification() {
        let config = SyncConfig::default().with_schema("salesforce");
        assert_eq!(
            table_name(&config, "Account").unwrap(),
            "\"salesforce\".\"Account\""
        );

        let bare = SyncConfig::default();
        assert_eq!(table_name(&bare, "Account").unwrap(), "\"Account\"");
    }
}
