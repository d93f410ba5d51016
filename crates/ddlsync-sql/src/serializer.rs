#[macro_use]
mod fmt;
use fmt::ToSql;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod literal;
use literal::{DefaultValue, Literal};

// Fragment serializers
mod column_def;
mod statement;
mod ty;

use crate::stmt::Statement;

use ddlsync_core::driver::{Capability, Dialect};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        match dialect {
            Dialect::Mysql => Serializer::mysql(),
            Dialect::Postgresql => Serializer::postgresql(),
        }
    }

    pub fn for_capability(capability: &Capability) -> Serializer {
        Serializer::new(capability.dialect)
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Renders a storage type as this dialect declares it.
    pub fn ty(&self, ty: &ddlsync_core::schema::Type) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        ty.to_sql(&mut fmt);
        ret
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }

    fn is_postgresql(&self) -> bool {
        matches!(self.flavor, Flavor::Postgresql)
    }
}
