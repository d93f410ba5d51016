use super::Statement;

use ddlsync_core::schema::{FieldDescriptor, Type};

/// A single change to an existing column.
///
/// Dialects that restate the whole column definition to change it need the
/// column's type and the state it should keep, so those travel with the
/// change.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterColumn {
    pub table: String,
    pub column: String,
    pub ty: Type,

    /// The column is, or is about to be, `NOT NULL`.
    pub not_null: bool,

    /// A default the column already has and must keep.
    pub keep_default: Option<String>,

    pub change: AlterColumnChange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterColumnChange {
    SetNotNull,
    AddUnique,
    SetDefault(String),
}

impl Statement {
    pub fn alter_column(table: &str, field: &FieldDescriptor, change: AlterColumnChange) -> Self {
        AlterColumn::new(table, field, change).into()
    }
}

impl AlterColumn {
    pub fn new(table: &str, field: &FieldDescriptor, change: AlterColumnChange) -> AlterColumn {
        AlterColumn {
            table: table.to_string(),
            column: field.column.clone(),
            ty: field.ty.clone(),
            not_null: matches!(change, AlterColumnChange::SetNotNull),
            keep_default: None,
            change,
        }
    }

    pub fn not_null(mut self, not_null: bool) -> Self {
        self.not_null |= not_null;
        self
    }

    pub fn keep_default(mut self, default: Option<String>) -> Self {
        self.keep_default = default;
        self
    }
}

impl From<AlterColumn> for Statement {
    fn from(value: AlterColumn) -> Self {
        Self::AlterColumn(value)
    }
}
