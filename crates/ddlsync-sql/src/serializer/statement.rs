use super::{DefaultValue, Ident, Literal, ToSql};

use crate::stmt::{
    AddColumn, AlterColumn, AlterColumnChange, ColumnInfo, CreateIndex, CreateTable, DropColumn,
    IndexInfo, Statement,
};

use ddlsync_core::schema;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::AlterColumn(stmt) => stmt.to_sql(f),
            Statement::ColumnInfo(stmt) => stmt.to_sql(f),
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropColumn(stmt) => stmt.to_sql(f),
            Statement::IndexInfo(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.table);

        fmt!(f, "CREATE TABLE IF NOT EXISTS ", name, " (", &self.identity, ")");
    }
}

impl ToSql for &AddColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let column = Ident(&self.column);

        fmt!(f, "ALTER TABLE ", table, " ADD COLUMN ", column, " ", &self.ty);
    }
}

impl ToSql for &DropColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let column = Ident(&self.column);

        fmt!(f, "ALTER TABLE ", table, " DROP COLUMN ", column);
    }
}

impl ToSql for &AlterColumn {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let column = Ident(&self.column);

        if f.serializer.is_mysql() {
            fmt!(f, "ALTER TABLE ", table, " MODIFY COLUMN ", column, " ", &self.ty);

            if self.not_null {
                fmt!(f, " NOT NULL");
            }

            let default = match &self.change {
                AlterColumnChange::SetDefault(value) => Some(value),
                _ => self.keep_default.as_ref(),
            };

            if let Some(value) = default {
                fmt!(f, " DEFAULT ", DefaultValue { value, ty: &self.ty });
            }

            if let AlterColumnChange::AddUnique = self.change {
                fmt!(f, " UNIQUE");
            }

            return;
        }

        match &self.change {
            AlterColumnChange::SetNotNull => {
                fmt!(f, "ALTER TABLE ", table, " ALTER COLUMN ", column, " SET NOT NULL")
            }
            AlterColumnChange::AddUnique => {
                let constraint = Ident(schema::unique_constraint_name(&self.table, &self.column));
                fmt!(f, "ALTER TABLE ", table, " ADD CONSTRAINT ", constraint, " UNIQUE (", column, ")")
            }
            AlterColumnChange::SetDefault(value) => {
                let value = DefaultValue { value, ty: &self.ty };
                fmt!(f, "ALTER TABLE ", table, " ALTER COLUMN ", column, " SET DEFAULT ", value)
            }
        }
    }
}

impl ToSql for &CreateIndex {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let table = Ident(&self.table);
        let column = Ident(&self.column);

        fmt!(f, "CREATE INDEX ", name, " ON ", table, " (", column, ")");
    }
}

impl ToSql for &ColumnInfo {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Literal(&self.table);
        let column = Literal(&self.column);

        if f.serializer.is_mysql() {
            fmt!(
                f,
                "SELECT COLUMN_NAME, COLUMN_TYPE, IS_NULLABLE, COLUMN_KEY, COLUMN_DEFAULT, EXTRA \
                 FROM information_schema.COLUMNS \
                 WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ",
                table,
                " AND COLUMN_NAME = ",
                column,
            );
            return;
        }

        fmt!(
            f,
            "SELECT c.column_name::text, \
             CASE \
             WHEN c.character_maximum_length IS NOT NULL \
             THEN c.data_type || '(' || c.character_maximum_length || ')' \
             WHEN c.data_type = 'numeric' AND c.numeric_precision IS NOT NULL \
             THEN c.data_type || '(' || c.numeric_precision || ',' || c.numeric_scale || ')' \
             ELSE c.data_type \
             END::text, \
             c.is_nullable::text, \
             (SELECT tc.constraint_type \
             FROM information_schema.table_constraints tc \
             JOIN information_schema.key_column_usage kcu \
             ON kcu.constraint_name = tc.constraint_name \
             AND kcu.table_schema = tc.table_schema \
             AND kcu.table_name = tc.table_name \
             WHERE tc.table_schema = c.table_schema \
             AND tc.table_name = c.table_name \
             AND kcu.column_name = c.column_name \
             AND tc.constraint_type IN ('PRIMARY KEY', 'UNIQUE') \
             ORDER BY tc.constraint_type \
             LIMIT 1)::text, \
             c.column_default::text, \
             CASE WHEN c.column_default LIKE 'nextval(%' THEN 'auto_increment' ELSE '' END \
             FROM information_schema.columns c \
             WHERE c.table_schema = current_schema() AND c.table_name = ",
            table,
            " AND c.column_name = ",
            column,
        );
    }
}

impl ToSql for &IndexInfo {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Literal(&self.table);
        let column = Literal(&self.column);
        let index = Literal(&self.index);

        if f.serializer.is_mysql() {
            fmt!(
                f,
                "SELECT TABLE_NAME, INDEX_NAME, COLUMN_NAME \
                 FROM information_schema.STATISTICS \
                 WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ",
                table,
                " AND COLUMN_NAME = ",
                column,
                " AND INDEX_NAME = ",
                index,
            );
            return;
        }

        fmt!(
            f,
            "SELECT t.relname::text, i.relname::text, a.attname::text \
             FROM pg_class t \
             JOIN pg_index ix ON t.oid = ix.indrelid \
             JOIN pg_class i ON i.oid = ix.indexrelid \
             JOIN pg_attribute a ON a.attrelid = t.oid AND a.attnum = ANY(ix.indkey) \
             WHERE t.relkind = 'r' \
             AND t.relnamespace = current_schema()::regnamespace \
             AND t.relname = ",
            table,
            " AND a.attname = ",
            column,
            " AND i.relname = ",
            index,
        );
    }
}
