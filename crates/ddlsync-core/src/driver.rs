mod capability;
pub use capability::{Capability, StorageTypes};

mod dialect;
pub use dialect::Dialect;

mod row;
pub use row::Row;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Opens connections to a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the dialect the driver speaks.
    fn capability(&self) -> &'static Capability;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// The SQL transport consumed by the reconciliation engine.
///
/// Statements are plain SQL text. Each call completes before the engine builds
/// the next statement; implementations do not need to support pipelining.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Describes the dialect spoken over this connection.
    fn capability(&self) -> &'static Capability;

    /// Executes a statement and returns the number of affected rows.
    ///
    /// A rejected `ADD COLUMN` for an existing column must be reported as
    /// [`Error::duplicate_column`](crate::Error::duplicate_column).
    async fn exec(&mut self, sql: &str) -> Result<u64>;

    /// Runs a query and returns its first row, or `None` when it produced no
    /// rows.
    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>>;
}

#[async_trait]
impl<C: Connection + ?Sized> Connection for Box<C> {
    fn capability(&self) -> &'static Capability {
        (**self).capability()
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        (**self).exec(sql).await
    }

    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>> {
        (**self).query_row(sql).await
    }
}
