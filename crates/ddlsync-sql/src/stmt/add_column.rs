use super::Statement;

use ddlsync_core::schema::{FieldDescriptor, Type};

/// Adds a bare column. Constraints, defaults and indices are applied by
/// later statements.
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumn {
    pub table: String,
    pub column: String,
    pub ty: Type,
}

impl Statement {
    pub fn add_column(table: &str, field: &FieldDescriptor) -> Self {
        AddColumn {
            table: table.to_string(),
            column: field.column.clone(),
            ty: field.ty.clone(),
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
