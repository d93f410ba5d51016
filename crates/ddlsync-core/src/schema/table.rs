use super::{FieldDescriptor, ModelDescriptor, Naming};
use crate::{driver::Dialect, Error, Result};

use std::collections::HashSet;

/// A model resolved into the table the engine converges the database to.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    pub name: String,

    /// The model's first field, created inline with the table.
    pub identity: FieldDescriptor,

    /// Remaining fields in declaration order, excluded fields removed.
    pub columns: Vec<FieldDescriptor>,
}

impl TableDescriptor {
    pub fn from_model(
        model: &ModelDescriptor,
        naming: &Naming,
        dialect: Dialect,
        text_width: u64,
    ) -> Result<TableDescriptor> {
        let invalid = |message: String| Error::invalid_model(model.name(), message);

        let Some((first, rest)) = model.fields().split_first() else {
            return Err(invalid("model has no fields".to_string()));
        };

        let identity = FieldDescriptor::resolve(first, naming, dialect, text_width).ok_or_else(
            || invalid(format!("identity field `{}` cannot be excluded", first.name)),
        )?;

        let columns: Vec<_> = rest
            .iter()
            .filter_map(|field| FieldDescriptor::resolve(field, naming, dialect, text_width))
            .collect();

        let mut seen = HashSet::new();
        for field in std::iter::once(&identity).chain(&columns) {
            if field.column.trim().is_empty() {
                return Err(invalid(format!(
                    "field `{}` resolves to an empty column name",
                    field.name
                )));
            }

            if !seen.insert(field.column.as_str()) {
                return Err(invalid(format!(
                    "column `{}` is declared more than once",
                    field.column
                )));
            }
        }

        Ok(TableDescriptor {
            name: naming.table_name(model.name()),
            identity,
            columns,
        })
    }

    pub fn column(&self, name: &str) -> Option<&FieldDescriptor> {
        std::iter::once(&self.identity)
            .chain(&self.columns)
            .find(|field| field.column == name)
    }
}
