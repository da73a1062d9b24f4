pub mod config;
pub mod db;
pub mod schema;
pub mod sql;

pub use config::SyncConfig;
pub use schema::{Describe, DescribeError, FieldDescriptor, FieldType, TableDesc};
pub use sql::{csv_cell, sql_const, DdlError, DdlGenerator, DdlResult, SchemaWarning, TableDdl};
