//! SQL generation for Salesforce table sync
//!
//! This module turns Salesforce field metadata into PostgreSQL DDL and
//! encodes field values for SQL literals and CSV export.
//!
//! # Overview
//!
//! The generation process involves:
//! 1. Loading field metadata for an object (see [`crate::schema`])
//! 2. Mapping each field to one or more column definitions, including
//!    constraints and compound-field expansion
//! 3. Assembling the column list into a `CREATE TABLE` statement followed by
//!    `CREATE INDEX` statements
//!
//! Unrecognized field types never abort generation: they map to a visibly
//! broken type clause so a dry run shows the whole table and the database
//! rejects the statement with a specific error.
//!
//! # Example
//!
//! ```rust
//! use sfsync::{Describe, DdlGenerator, SyncConfig};
//!
//! let desc = Describe::from_json(r#"{
//!     "name": "Account",
//!     "fields": [
//!         {"name": "Id", "type": "id", "byteLength": 18, "nillable": false},
//!         {"name": "Name", "type": "string", "byteLength": 255}
//!     ]
//! }"#).unwrap();
//!
//! let config = SyncConfig::default();
//! let ddl = DdlGenerator::new(&config)
//!     .create_table_statements("Account", &desc)
//!     .unwrap();
//!
//! assert!(ddl.statements[0].starts_with("CREATE TABLE \"Account\""));
//! assert!(ddl.statements[0].contains("\"Id\" VARCHAR(18) PRIMARY KEY"));
//! ```

pub mod ddl;
pub mod encode;
pub mod error;
pub mod ident;

pub use ddl::{DdlGenerator, TableDdl};
pub use encode::{csv_cell, sql_const, sql_str};
pub use error::{DdlError, DdlResult, SchemaWarning};
pub use ident::{escape_name, table_name};
