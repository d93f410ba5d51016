use ddlsync_core::{
    driver::Dialect,
    schema::{ModelDescriptor, Naming, ScalarKind, TableDescriptor},
};
use ddlsync_sql::{Serializer, Statement};
use pretty_assertions::assert_eq;

fn create_table(identity_tag: &str, dialect: Dialect) -> String {
    let model = ModelDescriptor::new("User")
        .field("ID", ScalarKind::Int, identity_tag)
        .unwrap();
    let table = TableDescriptor::from_model(&model, &Naming::default(), dialect, 255).unwrap();

    Serializer::new(dialect).serialize(&Statement::create_table(&table))
}

#[test]
fn postgresql_serial_identity() {
    assert_eq!(
        create_table(
            "constraints:primary key,not null,unique,auto_increment",
            Dialect::Postgresql
        ),
        r#"CREATE TABLE IF NOT EXISTS "user" ("id" SERIAL PRIMARY KEY NOT NULL UNIQUE);"#
    );
}

#[test]
fn mysql_auto_increment_identity() {
    assert_eq!(
        create_table(
            "constraints:primary key,not null,unique,auto_increment",
            Dialect::Mysql
        ),
        "CREATE TABLE IF NOT EXISTS `user` (`id` INT PRIMARY KEY NOT NULL UNIQUE AUTO_INCREMENT);"
    );
}

#[test]
fn postgresql_plain_identity() {
    assert_eq!(
        create_table("constraints:primary key", Dialect::Postgresql),
        r#"CREATE TABLE IF NOT EXISTS "user" ("id" INTEGER PRIMARY KEY);"#
    );
}

#[test]
fn big_serial() {
    let model = ModelDescriptor::new("Event")
        .field("ID", ScalarKind::I64, "constraints:auto_increment,primary key")
        .unwrap();
    let table =
        TableDescriptor::from_model(&model, &Naming::default(), Dialect::Postgresql, 255).unwrap();

    assert_eq!(
        Serializer::postgresql().serialize(&Statement::create_table(&table)),
        r#"CREATE TABLE IF NOT EXISTS "event" ("id" BIGSERIAL PRIMARY KEY);"#
    );
}

#[test]
fn unknown_constraint_tokens_are_not_rendered() {
    assert_eq!(
        create_table("constraints:primary key,check (id > 0)", Dialect::Mysql),
        "CREATE TABLE IF NOT EXISTS `user` (`id` INT PRIMARY KEY);"
    );
}

#[test]
fn type_override_and_prefix() {
    let model = ModelDescriptor::new("ApiKey")
        .field("Key", ScalarKind::String, "type:char(32);constraints:primary key")
        .unwrap();
    let naming = Naming {
        snake_case: true,
        table_prefix: "app_".to_string(),
    };
    let table = TableDescriptor::from_model(&model, &naming, Dialect::Mysql, 255).unwrap();

    assert_eq!(
        Serializer::mysql().serialize(&Statement::create_table(&table)),
        "CREATE TABLE IF NOT EXISTS `app_api_key` (`key` CHAR(32) PRIMARY KEY);"
    );
}
