use ddlsync_core::{
    async_trait,
    driver::{Capability, Driver, Row},
    Error, Result,
};
use tokio_postgres::{error::SqlState, tls::MakeTlsConnect, Client, Config, NoTls, Socket};
use url::Url;

#[derive(Debug)]
pub struct PostgreSql {
    config: Config,
}

impl PostgreSql {
    /// Validates a `postgres://` (or `postgresql://`) URL naming a host and a
    /// database. No connection is made until [`Driver::connect`].
    pub fn new(url: &str) -> Result<Self> {
        let url =
            Url::parse(url).map_err(|err| Error::invalid_connection_url(format!("{err}")))?;

        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `postgresql` scheme; scheme={}",
                url.scheme()
            )));
        }

        let host = url
            .host_str()
            .ok_or_else(|| Error::invalid_connection_url("missing host in connection URL"))?;

        let dbname = url.path().trim_start_matches('/');
        if dbname.is_empty() {
            return Err(Error::invalid_connection_url(
                "no database specified - missing path in connection URL",
            ));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(dbname);

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Connects using `tls` instead of a plain socket.
    pub async fn connect_with_tls<T>(&self, tls: T) -> Result<Connection>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send + 'static,
    {
        let (client, connection) = self.config.connect(tls).await.map_err(Error::connection)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "postgres connection error");
            }
        });

        tracing::debug!(db = ?self.config.get_dbname(), "connected to postgres");

        Ok(Connection::new(client))
    }
}

#[async_trait]
impl Driver for PostgreSql {
    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn connect(&self) -> Result<Box<dyn ddlsync_core::Connection>> {
        Ok(Box::new(self.connect_with_tls(NoTls).await?))
    }
}

#[derive(Debug)]
pub struct Connection {
    client: Client,
}

impl Connection {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl From<Client> for Connection {
    fn from(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ddlsync_core::Connection for Connection {
    fn capability(&self) -> &'static Capability {
        &Capability::POSTGRESQL
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.client.execute(sql, &[]).await.map_err(classify)
    }

    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>> {
        let rows = self.client.query(sql, &[]).await.map_err(classify)?;

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        // Every introspection column is cast to text.
        let cells = (0..row.len())
            .map(|i| row.try_get::<_, Option<String>>(i))
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(Error::query)?;

        Ok(Some(Row::new(cells)))
    }
}

fn classify(err: tokio_postgres::Error) -> Error {
    if err.code() == Some(&SqlState::DUPLICATE_COLUMN) {
        Error::duplicate_column(err)
    } else if err.as_db_error().is_some() {
        Error::query(err)
    } else {
        Error::connection(err)
    }
}
