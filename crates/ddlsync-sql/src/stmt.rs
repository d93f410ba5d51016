mod add_column;
pub use add_column::AddColumn;

mod alter_column;
pub use alter_column::{AlterColumn, AlterColumnChange};

mod column_def;
pub use column_def::ColumnDef;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod drop_column;
pub use drop_column::DropColumn;

mod introspect;
pub use introspect::{ColumnInfo, IndexInfo};

/// A statement the engine sends to the database.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddColumn(AddColumn),
    AlterColumn(AlterColumn),
    ColumnInfo(ColumnInfo),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropColumn(DropColumn),
    IndexInfo(IndexInfo),
}

impl Statement {
    /// Returns `true` for statements that change the schema.
    pub fn is_ddl(&self) -> bool {
        !self.is_query()
    }

    /// Returns `true` for introspection queries.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::ColumnInfo(_) | Statement::IndexInfo(_))
    }
}
