use crate::{
    driver::{Connection, Row},
    schema::{KeyRole, LiveColumnInfo, LiveIndexInfo},
    Result,
};

use ddlsync_sql::{Serializer, Statement};
use tracing::debug;

/// Reads the live state of columns and indices.
///
/// Each lookup runs a fresh query; nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct Introspector {
    serializer: Serializer,
}

impl Introspector {
    pub fn new(serializer: Serializer) -> Introspector {
        Introspector { serializer }
    }

    /// Returns the live column, or `None` when it does not exist.
    pub async fn column_info(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        column: &str,
    ) -> Result<Option<LiveColumnInfo>> {
        let Some(row) = self.query(conn, &Statement::column_info(table, column)).await? else {
            return Ok(None);
        };

        let info = LiveColumnInfo {
            name: row.get_str(0)?.to_string(),
            raw_type: row.get_str(1)?.to_string(),
            nullable: row.get_str(2)?.eq_ignore_ascii_case("yes"),
            key: row.get(3).map(KeyRole::parse).unwrap_or_default(),
            default: row.get(4).map(str::to_string),
            extra: row.get(5).unwrap_or_default().to_string(),
        };

        debug!(table, ?info, "introspected column");
        Ok(Some(info))
    }

    /// Returns the column's conventional index, or `None` when it does not
    /// exist.
    pub async fn index_info(
        &self,
        conn: &mut dyn Connection,
        table: &str,
        column: &str,
    ) -> Result<Option<LiveIndexInfo>> {
        let Some(row) = self.query(conn, &Statement::index_info(table, column)).await? else {
            return Ok(None);
        };

        let info = LiveIndexInfo {
            table: row.get_str(0)?.to_string(),
            name: row.get_str(1)?.to_string(),
            column: row.get_str(2)?.to_string(),
        };

        debug!(?info, "introspected index");
        Ok(Some(info))
    }

    async fn query(&self, conn: &mut dyn Connection, stmt: &Statement) -> Result<Option<Row>> {
        let sql = self.serializer.serialize(stmt);
        conn.query_row(&sql).await
    }
}
