//! Salesforce field metadata modeling
//!
//! Field descriptors mirror the shape of a Salesforce sobject describe
//! payload. The [`TableDesc`] trait is the narrow contract through which the
//! DDL generator consumes metadata, so callers can back it with a cached
//! describe file, a live API client, or an in-memory fixture.

pub mod describe;

pub use describe::{Describe, DescribeError};

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

/// Salesforce field types recognized by the column mapper.
///
/// Anything outside the enumeration is carried verbatim in
/// [`FieldType::Other`] and surfaces as a visibly broken column type rather
/// than a silently wrong one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Email,
    EncryptedString,
    Id,
    MultiPicklist,
    Picklist,
    Phone,
    Reference,
    String,
    TextArea,
    Url,
    Int,
    Date,
    DateTime,
    Boolean,
    Currency,
    Double,
    Percent,
    /// Compound postal address, expanded into fixed sub-columns.
    Address,
    /// Unrecognized API type name, kept as-is.
    Other(String),
}

impl FieldType {
    /// Parse a describe `type` value. Matching is case-sensitive; Salesforce
    /// emits lowercase names.
    pub fn from_api_name(name: &str) -> Self {
        match name {
            "email" => FieldType::Email,
            "encryptedstring" => FieldType::EncryptedString,
            "id" => FieldType::Id,
            "multipicklist" => FieldType::MultiPicklist,
            "picklist" => FieldType::Picklist,
            "phone" => FieldType::Phone,
            "reference" => FieldType::Reference,
            "string" => FieldType::String,
            "textarea" => FieldType::TextArea,
            "url" => FieldType::Url,
            "int" => FieldType::Int,
            "date" => FieldType::Date,
            "datetime" => FieldType::DateTime,
            "boolean" => FieldType::Boolean,
            "currency" => FieldType::Currency,
            "double" => FieldType::Double,
            "percent" => FieldType::Percent,
            "address" => FieldType::Address,
            other => FieldType::Other(other.to_string()),
        }
    }

    /// API name as found in describe payloads.
    pub fn api_name(&self) -> &str {
        match self {
            FieldType::Email => "email",
            FieldType::EncryptedString => "encryptedstring",
            FieldType::Id => "id",
            FieldType::MultiPicklist => "multipicklist",
            FieldType::Picklist => "picklist",
            FieldType::Phone => "phone",
            FieldType::Reference => "reference",
            FieldType::String => "string",
            FieldType::TextArea => "textarea",
            FieldType::Url => "url",
            FieldType::Int => "int",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Boolean => "boolean",
            FieldType::Currency => "currency",
            FieldType::Double => "double",
            FieldType::Percent => "percent",
            FieldType::Address => "address",
            FieldType::Other(name) => name,
        }
    }

    /// True for types stored as variable-length text columns.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldType::Email
                | FieldType::EncryptedString
                | FieldType::Id
                | FieldType::MultiPicklist
                | FieldType::Picklist
                | FieldType::Phone
                | FieldType::Reference
                | FieldType::String
                | FieldType::TextArea
                | FieldType::Url
        )
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(FieldType::from_api_name(&name))
    }
}

/// Metadata for a single field, one entry of a describe payload's `fields`
/// array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Storage length for text columns; ignored for everything else.
    #[serde(default)]
    pub byte_length: u32,
    #[serde(default = "default_nillable")]
    pub nillable: bool,
    #[serde(default)]
    pub unique: bool,
    /// `Null` when the field has no default.
    #[serde(default)]
    pub default_value: Value,
    /// Computed by the source rather than stored.
    #[serde(default)]
    pub calculated: bool,
    /// Whether the source maintains an index over this field.
    #[serde(default)]
    pub is_indexed: bool,
    /// Name of the compound field this one is a component of, if any.
    #[serde(default)]
    pub compound_field_name: Option<String>,
}

fn default_nillable() -> bool {
    true
}

impl FieldDescriptor {
    /// Create a descriptor with describe defaults (nillable, no length, no
    /// default value).
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            byte_length: 0,
            nillable: true,
            unique: false,
            default_value: Value::Null,
            calculated: false,
            is_indexed: false,
            compound_field_name: None,
        }
    }

    pub fn with_byte_length(mut self, byte_length: u32) -> Self {
        self.byte_length = byte_length;
        self
    }

    pub fn with_nillable(mut self, nillable: bool) -> Self {
        self.nillable = nillable;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_calculated(mut self, calculated: bool) -> Self {
        self.calculated = calculated;
        self
    }

    pub fn with_indexed(mut self, indexed: bool) -> Self {
        self.is_indexed = indexed;
        self
    }
}

/// Read-only view of the fields to synchronize for one table.
///
/// Field order is the declaration order of the source object and is
/// preserved all the way into the generated column list.
pub trait TableDesc {
    /// Fields in declaration order.
    fn sync_fields(&self) -> &[FieldDescriptor];

    /// Names of fields that should receive a secondary index.
    fn indexed_sync_field_names(&self) -> HashSet<&str>;

    /// Whether the named field is a compound value that should be assembled
    /// locally. Semantic classification, distinct from the syntactic
    /// [`FieldType::Address`] check.
    fn is_field_compound(&self, field_name: &str) -> bool;
}
