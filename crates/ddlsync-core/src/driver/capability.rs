use super::Dialect;

/// Static description of how a dialect expresses DDL.
///
/// The reconciliation engine branches on these flags rather than on the
/// dialect itself wherever the difference is a single behavior.
#[derive(Debug)]
pub struct Capability {
    pub dialect: Dialect,

    /// Column storage limits of the database.
    pub storage_types: StorageTypes,

    /// Column changes are expressed by restating the whole column definition
    /// (`MODIFY COLUMN`) instead of one `ALTER COLUMN` clause per change.
    pub modify_column: bool,

    /// `auto_increment` on an integer identity is expressed through a serial
    /// pseudo-type rather than a column attribute.
    pub serial_types: bool,

    /// Character used to quote identifiers.
    pub identifier_quote: char,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// Upper bound for `VARCHAR(n)`.
    pub varchar: u64,

    /// Booleans are stored as `TINYINT(1)`, which is also how the database
    /// reports a column declared `BOOLEAN`.
    pub bool_as_tinyint: bool,
}

impl Capability {
    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
        storage_types: StorageTypes::POSTGRESQL,
        modify_column: false,
        serial_types: true,
        identifier_quote: '"',
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,
        storage_types: StorageTypes::MYSQL,
        modify_column: true,
        serial_types: false,
        identifier_quote: '`',
    };
}

impl StorageTypes {
    pub const POSTGRESQL: StorageTypes = StorageTypes {
        // The maximum n you can specify is 10 485 760 characters.
        varchar: 10_485_760,
        bool_as_tinyint: false,
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        // Bounded by the 65,535 byte row size shared among all columns.
        varchar: 65_535,
        bool_as_tinyint: true,
    };
}
