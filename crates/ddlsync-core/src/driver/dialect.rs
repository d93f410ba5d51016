use super::Capability;
use crate::Error;

use std::{fmt, str::FromStr};

/// A target SQL engine.
///
/// The dialect is fixed for the lifetime of an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Mysql,
    Postgresql,
}

impl Dialect {
    pub fn capability(self) -> &'static Capability {
        match self {
            Dialect::Mysql => &Capability::MYSQL,
            Dialect::Postgresql => &Capability::POSTGRESQL,
        }
    }

    /// Resolves the dialect of a connection URL scheme.
    pub fn from_scheme(scheme: &str) -> Option<Dialect> {
        match scheme {
            "mysql" | "mariadb" => Some(Dialect::Mysql),
            "postgres" | "postgresql" => Some(Dialect::Postgresql),
            _ => None,
        }
    }

    pub fn is_mysql(self) -> bool {
        matches!(self, Dialect::Mysql)
    }

    pub fn is_postgresql(self) -> bool {
        matches!(self, Dialect::Postgresql)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "postgres" | "postgresql" => Ok(Dialect::Postgresql),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Mysql => f.write_str("mysql"),
            Dialect::Postgresql => f.write_str("postgres"),
        }
    }
}
