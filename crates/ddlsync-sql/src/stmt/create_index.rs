use super::Statement;

use ddlsync_core::schema;

/// A single column, non-unique index.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    pub name: String,
    pub table: String,
    pub column: String,
}

impl Statement {
    /// Creates the conventional `index_<column>` index.
    pub fn create_index(table: &str, column: &str) -> Self {
        CreateIndex {
            name: schema::index_name(column),
            table: table.to_string(),
            column: column.to_string(),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
