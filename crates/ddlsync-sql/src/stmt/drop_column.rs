use super::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct DropColumn {
    pub table: String,
    pub column: String,
}

impl Statement {
    pub fn drop_column(table: &str, column: &str) -> Self {
        DropColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
        .into()
    }
}

impl From<DropColumn> for Statement {
    fn from(value: DropColumn) -> Self {
        Self::DropColumn(value)
    }
}
