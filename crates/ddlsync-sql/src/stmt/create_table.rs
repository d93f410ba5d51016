use super::{ColumnDef, Statement};

use ddlsync_core::schema::TableDescriptor;

/// `CREATE TABLE IF NOT EXISTS` with the identity column inline.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub table: String,
    pub identity: ColumnDef,
}

impl Statement {
    pub fn create_table(table: &TableDescriptor) -> Self {
        CreateTable {
            table: table.name.clone(),
            identity: ColumnDef::from_field(&table.identity),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
