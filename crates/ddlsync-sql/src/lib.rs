pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;

use ddlsync_core::{
    driver::Dialect,
    schema::{ScalarKind, Type},
};

/// Maps a field kind to the SQL type `dialect` declares it with.
pub fn map_type(kind: ScalarKind, dialect: Dialect, text_width: u64) -> String {
    Serializer::new(dialect).ty(&Type::from_kind(kind, dialect, text_width))
}
