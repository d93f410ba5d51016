use super::{tag, ColumnTag, FieldDef, Naming, ScalarKind, Type};
use crate::driver::Dialect;

/// A model field resolved against a dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub name: String,

    /// Column name after the naming rules were applied.
    pub column: String,

    pub kind: ScalarKind,

    pub tag: ColumnTag,

    /// Storage type: the `type:` tag when present, otherwise derived from
    /// the kind.
    pub ty: Type,
}

impl FieldDescriptor {
    /// Resolves a field. Returns `None` when it is excluded, either by a
    /// `column:-` tag or because its name resolves to `-`.
    pub(super) fn resolve(
        field: &FieldDef,
        naming: &Naming,
        dialect: Dialect,
        text_width: u64,
    ) -> Option<FieldDescriptor> {
        let column = match field.tag.column.as_deref() {
            Some(tag::EXCLUDE) => return None,
            Some(column) => column.to_string(),
            None if field.name.trim() == tag::EXCLUDE => return None,
            None => naming.column_name(&field.name),
        };

        if column == tag::EXCLUDE {
            return None;
        }

        let ty = match &field.tag.ty {
            Some(raw) => Type::parse(raw, dialect),
            None => Type::from_kind(field.kind, dialect, text_width),
        };

        Some(FieldDescriptor {
            name: field.name.clone(),
            column,
            kind: field.kind,
            tag: field.tag.clone(),
            ty,
        })
    }

    pub fn default(&self) -> Option<&str> {
        self.tag.default.as_deref()
    }

    pub fn is_indexed(&self) -> bool {
        self.tag.index
    }
}
