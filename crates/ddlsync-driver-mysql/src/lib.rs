mod value;
pub(crate) use value::Value;

use ddlsync_core::{
    async_trait,
    driver::{Capability, Driver, Row},
    Error, Result,
};
use mysql_async::{prelude::Queryable, Conn, Opts};
use url::Url;

/// `ER_DUP_FIELDNAME`
const DUPLICATE_COLUMN: u16 = 1060;

#[derive(Debug)]
pub struct MySql {
    opts: Opts,
}

impl MySql {
    /// Validates a `mysql://` (or `mariadb://`) URL naming a host and a
    /// database. No connection is made until [`Driver::connect`].
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let mut url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}")))?;

        if !matches!(url.scheme(), "mysql" | "mariadb") {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; scheme={}",
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(
                "missing host in connection URL",
            ));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(
                "no database specified - missing path in connection URL",
            ));
        }

        if url.set_scheme("mysql").is_err() {
            return Err(Error::invalid_connection_url("cannot rewrite URL scheme"));
        }

        let opts = Opts::from_url(url.as_str())
            .map_err(|err| Error::invalid_connection_url(format!("{err}")))?;

        Ok(Self { opts })
    }
}

impl From<Opts> for MySql {
    fn from(opts: Opts) -> Self {
        Self { opts }
    }
}

#[async_trait]
impl Driver for MySql {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn connect(&self) -> Result<Box<dyn ddlsync_core::Connection>> {
        let conn = Conn::new(self.opts.clone())
            .await
            .map_err(Error::connection)?;

        tracing::debug!(
            host = %self.opts.ip_or_hostname(),
            db = ?self.opts.db_name(),
            "connected to mysql"
        );

        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ddlsync_core::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::MYSQL
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.conn.query_drop(sql).await.map_err(classify)?;
        Ok(self.conn.affected_rows())
    }

    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>> {
        let row: Option<mysql_async::Row> = self.conn.query_first(sql).await.map_err(classify)?;

        Ok(row.map(|row| {
            row.unwrap()
                .into_iter()
                .map(|value| Value::from(value).into_cell())
                .collect()
        }))
    }
}

fn classify(err: mysql_async::Error) -> Error {
    match &err {
        mysql_async::Error::Server(server) if server.code == DUPLICATE_COLUMN => {
            Error::duplicate_column(err)
        }
        mysql_async::Error::Server(_) => Error::query(err),
        _ => Error::connection(err),
    }
}
