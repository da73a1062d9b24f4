//! Database access for statement execution
//!
//! The connection is an explicitly owned handle passed by the caller; there
//! is no process-wide state.

use log::debug;
use postgres::{Client, NoTls};

use crate::config::SyncConfig;

/// Open a connection to the configured database.
pub fn connect(config: &SyncConfig) -> Result<Client, postgres::Error> {
    debug!("Opening new connection to {}", config.database_url);
    Client::connect(&config.database_url, NoTls)
}

/// Execute DDL statements inside a single transaction.
///
/// Nothing is committed unless every statement succeeds; a failure rolls
/// the whole batch back and surfaces the database error verbatim.
pub fn execute_ddl(client: &mut Client, statements: &[String]) -> Result<(), postgres::Error> {
    let mut transaction = client.transaction()?;
    for statement in statements {
        debug!("Executing: {}", statement);
        transaction.batch_execute(statement)?;
    }
    transaction.commit()
}
