mod connect;
pub use connect::Connect;

use crate::{
    driver::{Capability, Connection, Driver},
    Config, Migrator, Result,
};

/// An open database connection.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,
}

impl Db {
    /// Connects to the database at `url`.
    ///
    /// The scheme selects the driver: `mysql://` (or `mariadb://`),
    /// `postgres://` or `postgresql://`. Each driver is behind the cargo
    /// feature of the same name.
    pub async fn connect(url: &str) -> Result<Db> {
        let connection = Connect::new(url)?.connect().await?;
        Ok(Db { connection })
    }

    pub fn from_connection(connection: Box<dyn Connection>) -> Db {
        Db { connection }
    }

    pub fn capability(&self) -> &'static Capability {
        self.connection.capability()
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        &mut *self.connection
    }

    pub fn into_connection(self) -> Box<dyn Connection> {
        self.connection
    }

    /// Creates a migrator running on this connection.
    pub fn migrator(&mut self, config: Config) -> Result<Migrator<'_>> {
        Migrator::new(config, &mut *self.connection)
    }
}
