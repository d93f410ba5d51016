use crate::{
    driver::{Capability, Connection, Row},
    Result,
};

use async_trait::async_trait;
use tracing::info;

/// A connection that records schema changes instead of executing them.
///
/// Queries still reach the wrapped connection, so the recorded statements are
/// the ones a real run would start with. Later steps of a column that depend
/// on an earlier, unexecuted change are planned against the state before it.
#[derive(Debug)]
pub struct DryRun<C> {
    inner: C,
    planned: Vec<String>,
}

impl<C: Connection> DryRun<C> {
    pub fn new(inner: C) -> DryRun<C> {
        DryRun {
            inner,
            planned: vec![],
        }
    }

    /// Statements that would have been executed, in order.
    pub fn planned(&self) -> &[String] {
        &self.planned
    }

    pub fn into_planned(self) -> Vec<String> {
        self.planned
    }
}

#[async_trait]
impl<C: Connection> Connection for DryRun<C> {
    fn capability(&self) -> &'static Capability {
        self.inner.capability()
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        info!(%sql, "dry run; not executing");
        self.planned.push(sql.to_string());
        Ok(0)
    }

    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>> {
        self.inner.query_row(sql).await
    }
}
