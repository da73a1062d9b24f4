//! DDL generation from Salesforce field metadata

use log::warn;

use crate::config::SyncConfig;
use crate::schema::{FieldDescriptor, FieldType, TableDesc};

use super::encode::{not_implemented, sql_const, truthy};
use super::error::{DdlResult, SchemaWarning};
use super::ident::{escape_name, table_name};

/// Name of the source primary-key field.
const ID_FIELD: &str = "Id";

/// Replacement name for the source id column when a surrogate key is in
/// use. May be NULL during inserts, before the source id is known.
const RENAMED_ID_FIELD: &str = "SfId";

/// Fixed sub-columns an address field expands into, in emission order.
const ADDRESS_PARTS: [(&str, &str); 7] = [
    ("Street", "VARCHAR(255)"),
    ("City", "VARCHAR(40)"),
    ("State", "VARCHAR(80)"),
    ("PostalCode", "VARCHAR(20)"),
    ("Country", "VARCHAR(80)"),
    ("Latitude", "DOUBLE PRECISION"),
    ("Longitude", "DOUBLE PRECISION"),
];

/// Generated statements for one table, plus any advisory findings.
///
/// The `CREATE TABLE` statement always comes first, followed by
/// `CREATE INDEX` statements in field declaration order.
#[derive(Debug, Clone)]
pub struct TableDdl {
    pub statements: Vec<String>,
    /// Non-fatal findings; generation completes despite them.
    pub warnings: Vec<SchemaWarning>,
}

/// Generator for `CREATE TABLE` / `CREATE INDEX` statements.
pub struct DdlGenerator<'a> {
    config: &'a SyncConfig,
}

impl<'a> DdlGenerator<'a> {
    pub fn new(config: &'a SyncConfig) -> Self {
        Self { config }
    }

    /// Base column type for a field.
    ///
    /// Unrecognized types map to a clause that no database will accept, so
    /// the gap is caught at execution time instead of producing a
    /// mis-typed column.
    pub fn sql_type(&self, field: &FieldDescriptor) -> String {
        match &field.field_type {
            ty if ty.is_text() => format!("VARCHAR({})", field.byte_length),
            FieldType::Int => "INTEGER".to_string(),
            FieldType::Date => "DATE".to_string(),
            FieldType::DateTime => "TIMESTAMP".to_string(),
            FieldType::Boolean => "BOOLEAN".to_string(),
            FieldType::Currency | FieldType::Double | FieldType::Percent => {
                "DOUBLE PRECISION".to_string()
            }
            other => not_implemented(other.api_name()),
        }
    }

    /// Column definition lines for a field. Address fields expand into
    /// their fixed sub-columns; everything else yields a single line.
    pub fn column_defs(&self, field: &FieldDescriptor) -> DdlResult<Vec<String>> {
        if field.field_type == FieldType::Address {
            return self.address_columns(&field.name);
        }

        let mut clause = self.sql_type(field);
        let mut name = field.name.as_str();
        if name == ID_FIELD {
            if self.config.rename_id {
                name = RENAMED_ID_FIELD;
            } else {
                clause.push_str(" PRIMARY KEY");
            }
        } else {
            if !field.nillable {
                clause.push_str(" NOT NULL");
            }
            if truthy(&field.default_value) {
                clause.push_str(" DEFAULT ");
                clause.push_str(&sql_const(&field.default_value));
            }
            if field.unique {
                clause.push_str(" UNIQUE");
            }
        }
        Ok(vec![format!(
            " {} {}",
            escape_name(self.config, name)?,
            clause
        )])
    }

    /// Expansion of a compound address field. Constraints on the compound
    /// descriptor apply to the logical value, not to any single
    /// sub-column, so none are carried over.
    fn address_columns(&self, field_name: &str) -> DdlResult<Vec<String>> {
        let base = field_name.strip_suffix("Address").unwrap_or(field_name);
        ADDRESS_PARTS
            .iter()
            .map(|(suffix, sql_type)| {
                let column = format!("{}{}", base, suffix);
                Ok(format!(
                    " {} {}",
                    escape_name(self.config, &column)?,
                    sql_type
                ))
            })
            .collect()
    }

    /// Build the `CREATE TABLE` statement and its `CREATE INDEX`
    /// statements for a table.
    ///
    /// Calculated and compound fields still produce columns but are
    /// reported (and logged) as advisory warnings.
    pub fn create_table_statements(
        &self,
        table: &str,
        desc: &impl TableDesc,
    ) -> DdlResult<TableDdl> {
        let qualified = table_name(self.config, table)?;

        let mut warnings = Vec::new();
        let mut lines = Vec::new();
        if self.config.rename_id {
            lines.push(" id SERIAL PRIMARY KEY".to_string());
        }
        for field in desc.sync_fields() {
            if field.calculated {
                let warning = SchemaWarning::CalculatedField(field.name.clone());
                warn!("{}", warning);
                warnings.push(warning);
            }
            if desc.is_field_compound(&field.name) {
                let warning = SchemaWarning::CompoundField(field.name.clone());
                warn!("{}", warning);
                warnings.push(warning);
            }
            lines.extend(self.column_defs(field)?);
        }

        let mut statements = vec![format!(
            "CREATE TABLE {} (\n{}\n);",
            qualified,
            lines.join(",\n")
        )];

        let indexed = desc.indexed_sync_field_names();
        for field in desc.sync_fields() {
            if field.name == ID_FIELD && !self.config.rename_id {
                // Covered by the primary key.
                continue;
            }
            if !indexed.contains(field.name.as_str()) || !field.is_indexed {
                continue;
            }
            statements.push(format!(
                "CREATE INDEX {} ON {} ({});",
                escape_name(self.config, &format!("{}_{}_idx", table, field.name))?,
                qualified,
                escape_name(self.config, &field.name)?
            ));
        }

        Ok(TableDdl {
            statements,
            warnings,
        })
    }
}
