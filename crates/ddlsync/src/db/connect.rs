use crate::{
    driver::{Capability, Connection, Dialect, Driver},
    Error, Result,
};

use async_trait::async_trait;
use url::Url;

/// A driver chosen by the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    dialect: Dialect,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!("{err}"))
        })?;

        let Some(dialect) = Dialect::from_scheme(url.scheme()) else {
            return Err(Error::invalid_connection_url(format!(
                "unsupported database scheme `{}`",
                url.scheme()
            )));
        };

        Ok(Self { url, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

#[async_trait]
impl Driver for Connect {
    fn capability(&self) -> &'static Capability {
        self.dialect.capability()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.dialect {
            Dialect::Mysql => connect_mysql(&self.url).await,
            Dialect::Postgresql => connect_postgresql(&self.url).await,
        }
    }
}

#[cfg(feature = "mysql")]
async fn connect_mysql(url: &Url) -> Result<Box<dyn Connection>> {
    let driver = ddlsync_driver_mysql::MySql::new(url.as_str())?;
    driver.connect().await
}

#[cfg(not(feature = "mysql"))]
async fn connect_mysql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_configuration("`mysql` feature not enabled"))
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &Url) -> Result<Box<dyn Connection>> {
    let driver = ddlsync_driver_postgresql::PostgreSql::new(url.as_str())?;
    driver.connect().await
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &Url) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_configuration(
        "`postgresql` feature not enabled",
    ))
}
