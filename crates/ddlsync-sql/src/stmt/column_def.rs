use ddlsync_core::schema::{Constraint, FieldDescriptor, Type};

/// A column definition as written inside `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,

    /// Constraint attributes rendered after the type. Only constraints with a
    /// known SQL spelling are kept.
    pub constraints: Vec<Constraint>,

    pub default: Option<String>,
}

impl ColumnDef {
    pub fn from_field(field: &FieldDescriptor) -> ColumnDef {
        ColumnDef {
            name: field.column.clone(),
            ty: field.ty.clone(),
            constraints: field
                .tag
                .constraints
                .iter()
                .filter(|constraint| !matches!(constraint, Constraint::Other(_)))
                .cloned()
                .collect(),
            default: field.tag.default.clone(),
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        self.constraints.contains(&Constraint::AutoIncrement)
    }
}
