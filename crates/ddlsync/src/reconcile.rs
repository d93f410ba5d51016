use crate::{
    driver::{Capability, Connection},
    err,
    schema::{self, Constraint, FieldDescriptor, LiveColumnInfo, TableDescriptor},
    Introspector, Result,
};

use ddlsync_sql::{
    stmt::{AlterColumn, AlterColumnChange},
    Serializer, Statement,
};
use tracing::{debug, warn};

/// Converges one table at a time to its descriptor.
///
/// Every statement is executed as soon as it is built, and the live state is
/// read back whenever a later step depends on what an earlier one changed.
/// Nothing is wrapped in a transaction: a failure leaves the column as far
/// as it got, and running again picks up from there.
#[derive(Debug)]
pub struct Reconciler<'a> {
    conn: &'a mut dyn Connection,
    capability: &'static Capability,
    serializer: Serializer,
    introspector: Introspector,
}

impl<'a> Reconciler<'a> {
    pub fn new(conn: &'a mut dyn Connection) -> Reconciler<'a> {
        let capability = conn.capability();
        let serializer = Serializer::for_capability(capability);

        Reconciler {
            conn,
            capability,
            serializer,
            introspector: Introspector::new(serializer),
        }
    }

    /// Creates the table, if missing, with its identity column.
    pub async fn create_table(&mut self, table: &TableDescriptor) -> Result<()> {
        for constraint in &table.identity.tag.constraints {
            if let Constraint::Other(token) = constraint {
                warn!(
                    table = %table.name,
                    column = %table.identity.column,
                    constraint = %token,
                    "ignoring unknown constraint"
                );
            }
        }

        self.exec(&Statement::create_table(table))
            .await
            .map_err(|e| e.context(err!("creating table {}", table.name)))
    }

    /// Converges a non-identity column.
    pub async fn reconcile(&mut self, table: &str, field: &FieldDescriptor) -> Result<()> {
        self.reconcile_column(table, field)
            .await
            .map_err(|e| e.context(err!("reconciling column {table}.{}", field.column)))
    }

    async fn reconcile_column(&mut self, table: &str, field: &FieldDescriptor) -> Result<()> {
        let mut live = self.column_info(table, field).await?;

        if let Some(info) = &live {
            if !field.ty.matches_live(&info.raw_type, self.capability.dialect) {
                warn!(
                    table,
                    column = %field.column,
                    live = %info.raw_type,
                    desired = %self.serializer.ty(&field.ty),
                    "column type changed; dropping column"
                );

                self.exec(&Statement::drop_column(table, &field.column)).await?;
                live = None;
            }
        }

        if live.is_none() {
            self.add_column(table, field).await?;
            live = self.column_info(table, field).await?;
        }

        if self.apply_constraints(table, field, live.as_ref()).await? {
            live = self.column_info(table, field).await?;
        }

        if let Some(default) = field.default() {
            let satisfied = live
                .as_ref()
                .is_some_and(|info| info.default_matches(default));

            if !satisfied {
                let change = AlterColumnChange::SetDefault(default.to_string());
                self.alter(table, field, change, None).await?;
            }
        }

        if field.is_indexed() {
            let expected = schema::index_name(&field.column);
            let index = self
                .introspector
                .index_info(self.conn, table, &field.column)
                .await?;

            if !index.is_some_and(|index| index.name == expected) {
                self.exec(&Statement::create_index(table, &field.column)).await?;
            }
        }

        Ok(())
    }

    async fn add_column(&mut self, table: &str, field: &FieldDescriptor) -> Result<()> {
        match self.exec(&Statement::add_column(table, field)).await {
            Err(e) if e.is_duplicate_column() => {
                debug!(table, column = %field.column, "column already exists");
                Ok(())
            }
            res => res,
        }
    }

    /// Applies the column's constraints. Returns `true` if any statement was
    /// executed.
    async fn apply_constraints(
        &mut self,
        table: &str,
        field: &FieldDescriptor,
        live: Option<&LiveColumnInfo>,
    ) -> Result<bool> {
        let mut changed = false;
        let mut not_null_applied = false;

        for constraint in &field.tag.constraints {
            let change = match constraint {
                Constraint::NotNull if not_null_applied => continue,
                Constraint::NotNull => AlterColumnChange::SetNotNull,
                Constraint::Unique => AlterColumnChange::AddUnique,
                other => {
                    warn!(
                        table,
                        column = %field.column,
                        constraint = %other,
                        "ignoring unsupported constraint"
                    );
                    continue;
                }
            };

            if live.is_some_and(|info| info.satisfies(constraint)) {
                continue;
            }

            // A restated column definition keeps the default it already has.
            let keep_default = field
                .default()
                .filter(|default| live.is_some_and(|info| info.default_matches(default)))
                .map(str::to_string);

            let restates_not_null =
                self.capability.modify_column && field.tag.has(&Constraint::NotNull);
            not_null_applied |= restates_not_null || change == AlterColumnChange::SetNotNull;

            self.alter(table, field, change, keep_default).await?;
            changed = true;
        }

        Ok(changed)
    }

    async fn alter(
        &mut self,
        table: &str,
        field: &FieldDescriptor,
        change: AlterColumnChange,
        keep_default: Option<String>,
    ) -> Result<()> {
        let stmt = AlterColumn::new(table, field, change)
            .not_null(field.tag.has(&Constraint::NotNull))
            .keep_default(keep_default);

        self.exec(&stmt.into()).await
    }

    async fn column_info(
        &mut self,
        table: &str,
        field: &FieldDescriptor,
    ) -> Result<Option<LiveColumnInfo>> {
        self.introspector
            .column_info(self.conn, table, &field.column)
            .await
    }

    async fn exec(&mut self, stmt: &Statement) -> Result<()> {
        let sql = self.serializer.serialize(stmt);
        debug!(%sql, "executing");
        self.conn.exec(&sql).await?;
        Ok(())
    }
}
