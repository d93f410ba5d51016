mod field;
pub use field::FieldDescriptor;

pub mod kind;
pub use kind::{ColumnKind, ScalarKind};

mod live;
pub use live::{KeyRole, LiveColumnInfo, LiveIndexInfo};

mod model;
pub use model::{FieldDef, ModelDescriptor};

mod name;
pub use name::Naming;

mod table;
pub use table::TableDescriptor;

pub mod tag;
pub use tag::{ColumnTag, Constraint};

mod ty;
pub use ty::Type;

/// Name of the index the engine maintains for an indexed column.
pub fn index_name(column: &str) -> String {
    format!("index_{column}")
}

/// Name of the unique constraint added to an existing column on dialects that
/// express uniqueness as a named table constraint.
pub fn unique_constraint_name(table: &str, column: &str) -> String {
    format!("unique_{table}_{column}")
}
