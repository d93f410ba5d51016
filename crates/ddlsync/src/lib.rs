mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

mod dry_run;
pub use dry_run::DryRun;

mod introspect;
pub use introspect::Introspector;

mod migrator;
pub use migrator::Migrator;

mod model;
pub use model::Model;

mod reconcile;
pub use reconcile::Reconciler;

pub use ddlsync_core::{bail, driver, err, schema, Error, Result};
