use crate::Result;

use ddlsync_core::{
    driver::{Capability, Dialect},
    schema::Naming,
    Error,
};

/// Migration settings.
///
/// ```
/// use ddlsync::{driver::Dialect, Config};
///
/// let config = Config::new(Dialect::Postgresql)
///     .table_prefix("app_")
///     .default_text_width(128);
///
/// assert_eq!(config.naming().table_name("User"), "app_user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target SQL engine
    pub dialect: Dialect,

    /// Convert model and field names to snake case
    pub snake_case: bool,

    /// Prepended to every table name
    pub table_prefix: String,

    /// Width of `VARCHAR` columns mapped from string fields
    pub default_text_width: u64,
}

impl Config {
    /// Default width of `VARCHAR` columns mapped from string fields.
    pub const DEFAULT_TEXT_WIDTH: u64 = 255;

    pub fn new(dialect: Dialect) -> Config {
        Config {
            dialect,
            snake_case: true,
            table_prefix: String::new(),
            default_text_width: Self::DEFAULT_TEXT_WIDTH,
        }
    }

    /// Creates a configuration from a dialect name such as `postgres` or
    /// `mysql`. Unsupported names, `sqlite` included, are rejected.
    pub fn for_dialect_name(name: &str) -> Result<Config> {
        Ok(Config::new(name.parse()?))
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn snake_case(mut self, snake_case: bool) -> Self {
        self.snake_case = snake_case;
        self
    }

    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    pub fn default_text_width(mut self, width: u64) -> Self {
        self.default_text_width = width;
        self
    }

    pub fn naming(&self) -> Naming {
        Naming {
            snake_case: self.snake_case,
            table_prefix: self.table_prefix.clone(),
        }
    }

    /// Checks the configuration against the capabilities of the connection it
    /// will be used with.
    pub(crate) fn verify(&self, capability: &Capability) -> Result<()> {
        if capability.dialect != self.dialect {
            return Err(Error::invalid_configuration(format!(
                "configured for {} but connected to {}",
                self.dialect, capability.dialect
            )));
        }

        let max = capability.storage_types.varchar;
        if self.default_text_width == 0 || self.default_text_width > max {
            return Err(Error::invalid_configuration(format!(
                "default text width {} is outside 1..={max} supported by {}",
                self.default_text_width, capability.dialect
            )));
        }

        Ok(())
    }
}
