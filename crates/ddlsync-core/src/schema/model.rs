use super::{ColumnKind, ColumnTag, ScalarKind};
use crate::{Error, Result};

/// Declared shape of a model: its name and fields in declaration order.
///
/// The first field is the model's identity and becomes the table's primary
/// key column.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    name: String,
    fields: Vec<FieldDef>,
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub kind: ScalarKind,
    pub tag: ColumnTag,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> ModelDescriptor {
        ModelDescriptor {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Adds a field, parsing its tag.
    pub fn field(self, name: impl Into<String>, kind: ScalarKind, tag: &str) -> Result<Self> {
        let name = name.into();
        let tag = ColumnTag::parse(tag).map_err(|err| {
            err.context(Error::invalid_model(
                &self.name,
                format!("field `{name}` has an invalid tag"),
            ))
        })?;

        Ok(self.field_with(name, kind, tag))
    }

    /// Adds a field with an already parsed tag.
    pub fn field_with(mut self, name: impl Into<String>, kind: ScalarKind, tag: ColumnTag) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            kind,
            tag,
        });
        self
    }

    /// Adds a field whose kind is derived from the Rust type `T`.
    pub fn typed_field<T: ColumnKind>(self, name: impl Into<String>, tag: &str) -> Result<Self> {
        self.field(name, T::KIND, tag)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}
