use ddlsync_core::{
    driver::Dialect,
    schema::{FieldDescriptor, ModelDescriptor, Naming, ScalarKind, TableDescriptor},
};
use ddlsync_sql::{
    stmt::{AlterColumn, AlterColumnChange},
    Serializer, Statement,
};
use pretty_assertions::assert_eq;

fn field(kind: ScalarKind, tag: &str, dialect: Dialect) -> FieldDescriptor {
    let model = ModelDescriptor::new("User")
        .field("ID", ScalarKind::Int, "")
        .unwrap()
        .field("Role", kind, tag)
        .unwrap();

    TableDescriptor::from_model(&model, &Naming::default(), dialect, 255)
        .unwrap()
        .columns
        .remove(0)
}

fn serialize(dialect: Dialect, stmt: impl Into<Statement>) -> String {
    Serializer::new(dialect).serialize(&stmt.into())
}

#[test]
fn add_and_drop_column() {
    let role = field(ScalarKind::String, "", Dialect::Postgresql);

    assert_eq!(
        serialize(Dialect::Postgresql, Statement::add_column("users", &role)),
        r#"ALTER TABLE "users" ADD COLUMN "role" VARCHAR(255);"#
    );
    assert_eq!(
        serialize(Dialect::Mysql, Statement::drop_column("users", "role")),
        "ALTER TABLE `users` DROP COLUMN `role`;"
    );
}

#[test]
fn postgresql_constraints() {
    let role = field(ScalarKind::String, "", Dialect::Postgresql);

    assert_eq!(
        serialize(
            Dialect::Postgresql,
            Statement::alter_column("users", &role, AlterColumnChange::SetNotNull)
        ),
        r#"ALTER TABLE "users" ALTER COLUMN "role" SET NOT NULL;"#
    );
    assert_eq!(
        serialize(
            Dialect::Postgresql,
            Statement::alter_column("users", &role, AlterColumnChange::AddUnique)
        ),
        r#"ALTER TABLE "users" ADD CONSTRAINT "unique_users_role" UNIQUE ("role");"#
    );
}

#[test]
fn mysql_constraints_restate_the_column() {
    let role = field(ScalarKind::String, "", Dialect::Mysql);

    assert_eq!(
        serialize(
            Dialect::Mysql,
            Statement::alter_column("users", &role, AlterColumnChange::SetNotNull)
        ),
        "ALTER TABLE `users` MODIFY COLUMN `role` VARCHAR(255) NOT NULL;"
    );
    assert_eq!(
        serialize(
            Dialect::Mysql,
            Statement::alter_column("users", &role, AlterColumnChange::AddUnique)
        ),
        "ALTER TABLE `users` MODIFY COLUMN `role` VARCHAR(255) UNIQUE;"
    );

    let unique = AlterColumn::new("users", &role, AlterColumnChange::AddUnique)
        .not_null(true)
        .keep_default(Some("user".to_string()));

    assert_eq!(
        serialize(Dialect::Mysql, unique),
        "ALTER TABLE `users` MODIFY COLUMN `role` VARCHAR(255) NOT NULL DEFAULT 'user' UNIQUE;"
    );
}

#[test]
fn string_defaults_are_quoted() {
    let role = field(ScalarKind::String, "", Dialect::Postgresql);
    let set_default = |value: &str| {
        Statement::alter_column(
            "users",
            &role,
            AlterColumnChange::SetDefault(value.to_string()),
        )
    };

    assert_eq!(
        serialize(Dialect::Postgresql, set_default("user")),
        r#"ALTER TABLE "users" ALTER COLUMN "role" SET DEFAULT 'user';"#
    );
    assert_eq!(
        serialize(Dialect::Postgresql, set_default("it's")),
        r#"ALTER TABLE "users" ALTER COLUMN "role" SET DEFAULT 'it''s';"#
    );
    assert_eq!(
        serialize(Dialect::Postgresql, set_default("'quoted'")),
        r#"ALTER TABLE "users" ALTER COLUMN "role" SET DEFAULT 'quoted';"#
    );
}

#[test]
fn other_defaults_are_literal() {
    let count = field(ScalarKind::I32, "", Dialect::Mysql);
    let stmt = Statement::alter_column(
        "users",
        &count,
        AlterColumnChange::SetDefault("0".to_string()),
    );
    assert_eq!(
        serialize(Dialect::Mysql, stmt),
        "ALTER TABLE `users` MODIFY COLUMN `role` INT DEFAULT 0;"
    );

    let created = field(ScalarKind::Time, "", Dialect::Postgresql);
    let stmt = Statement::alter_column(
        "users",
        &created,
        AlterColumnChange::SetDefault("now()".to_string()),
    );
    assert_eq!(
        serialize(Dialect::Postgresql, stmt),
        r#"ALTER TABLE "users" ALTER COLUMN "role" SET DEFAULT now();"#
    );
}

#[test]
fn index_naming() {
    assert_eq!(
        serialize(Dialect::Mysql, Statement::create_index("users", "username")),
        "CREATE INDEX `index_username` ON `users` (`username`);"
    );
    assert_eq!(
        serialize(Dialect::Postgresql, Statement::create_index("users", "username")),
        r#"CREATE INDEX "index_username" ON "users" ("username");"#
    );
}

#[test]
fn identifiers_are_escaped() {
    assert_eq!(
        serialize(Dialect::Mysql, Statement::drop_column("we`ird", "col")),
        "ALTER TABLE `we``ird` DROP COLUMN `col`;"
    );
}
