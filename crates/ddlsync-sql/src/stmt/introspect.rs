use super::Statement;

use ddlsync_core::schema;

/// Looks up a live column.
///
/// The result row has the cells `name, type, is_nullable, key, default,
/// extra`, whatever the dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub table: String,
    pub column: String,
}

/// Looks up the conventional index of a column.
///
/// The result row has the cells `table, index, column`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexInfo {
    pub table: String,
    pub column: String,
    pub index: String,
}

impl Statement {
    pub fn column_info(table: &str, column: &str) -> Self {
        ColumnInfo {
            table: table.to_string(),
            column: column.to_string(),
        }
        .into()
    }

    pub fn index_info(table: &str, column: &str) -> Self {
        IndexInfo {
            table: table.to_string(),
            column: column.to_string(),
            index: schema::index_name(column),
        }
        .into()
    }
}

impl From<ColumnInfo> for Statement {
    fn from(value: ColumnInfo) -> Self {
        Self::ColumnInfo(value)
    }
}

impl From<IndexInfo> for Statement {
    fn from(value: IndexInfo) -> Self {
        Self::IndexInfo(value)
    }
}
