use crate::{
    driver::Connection,
    schema::{ModelDescriptor, Naming, TableDescriptor},
    Config, Model, Reconciler, Result,
};

use tracing::info;

/// Applies model descriptors to a database.
///
/// Models are migrated in the order given. For each one the table is created
/// if missing, then every remaining field is reconciled in declaration order.
/// The first error stops the run.
#[derive(Debug)]
pub struct Migrator<'a> {
    config: Config,
    naming: Naming,
    reconciler: Reconciler<'a>,
}

impl<'a> Migrator<'a> {
    /// Creates a migrator that runs against `conn`.
    ///
    /// Fails if the configuration does not fit the connection's dialect.
    pub fn new(config: Config, conn: &'a mut dyn Connection) -> Result<Migrator<'a>> {
        config.verify(conn.capability())?;

        Ok(Migrator {
            naming: config.naming(),
            config,
            reconciler: Reconciler::new(conn),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves a model into the table it converges to, without touching the
    /// database.
    pub fn table(&self, model: &ModelDescriptor) -> Result<TableDescriptor> {
        TableDescriptor::from_model(
            model,
            &self.naming,
            self.config.dialect,
            self.config.default_text_width,
        )
    }

    pub async fn migrate<M: Model>(&mut self) -> Result<()> {
        self.migrate_model(&M::describe()?).await
    }

    pub async fn migrate_models(&mut self, models: &[ModelDescriptor]) -> Result<()> {
        for model in models {
            self.migrate_model(model).await?;
        }

        Ok(())
    }

    pub async fn migrate_model(&mut self, model: &ModelDescriptor) -> Result<()> {
        let table = self.table(model)?;

        info!(
            model = model.name(),
            table = %table.name,
            columns = table.columns.len() + 1,
            "migrating model"
        );

        self.reconciler.create_table(&table).await?;

        for field in &table.columns {
            self.reconciler.reconcile(&table.name, field).await?;
        }

        Ok(())
    }
}
