use super::{Formatter, ToSql};

use ddlsync_core::schema::Type;

impl ToSql for &Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mysql = f.serializer.is_mysql();

        match self {
            Type::Boolean if mysql => fmt!(f, "TINYINT(1)"),
            Type::Boolean => fmt!(f, "BOOLEAN"),
            Type::Integer(1) if mysql => fmt!(f, "TINYINT"),
            Type::Integer(1 | 2) => fmt!(f, "SMALLINT"),
            Type::Integer(3) if mysql => fmt!(f, "MEDIUMINT"),
            Type::Integer(3 | 4) if mysql => fmt!(f, "INT"),
            Type::Integer(n) if *n <= 4 => fmt!(f, "INTEGER"),
            Type::Integer(_) => fmt!(f, "BIGINT"),
            Type::Serial(n) if mysql => (&Type::Integer(*n)).to_sql(f),
            Type::Serial(1 | 2) => fmt!(f, "SMALLSERIAL"),
            Type::Serial(n) if *n <= 4 => fmt!(f, "SERIAL"),
            Type::Serial(_) => fmt!(f, "BIGSERIAL"),
            Type::Float(n) if *n <= 4 && mysql => fmt!(f, "FLOAT"),
            Type::Float(n) if *n <= 4 => fmt!(f, "REAL"),
            Type::Float(_) if mysql => fmt!(f, "DOUBLE"),
            Type::Float(_) => fmt!(f, "DOUBLE PRECISION"),
            Type::Numeric(None) if mysql => fmt!(f, "DECIMAL"),
            Type::Numeric(None) => fmt!(f, "NUMERIC"),
            Type::Numeric(Some((precision, scale))) => {
                let name = if mysql { "DECIMAL" } else { "NUMERIC" };
                fmt!(f, name, &format!("({precision}, {scale})"));
            }
            Type::Text => fmt!(f, "TEXT"),
            Type::VarChar(size) => fmt!(f, &format!("VARCHAR({size})")),
            Type::VarCharUnbounded => fmt!(f, "VARCHAR"),
            Type::Char(size) => fmt!(f, &format!("CHAR({size})")),
            Type::Blob if mysql => fmt!(f, "BLOB"),
            Type::Blob => fmt!(f, "BYTEA"),
            Type::Binary(size) if mysql => fmt!(f, &format!("BINARY({size})")),
            Type::Binary(_) => fmt!(f, "BYTEA"),
            Type::Uuid if mysql => fmt!(f, "BINARY(16)"),
            Type::Uuid => fmt!(f, "UUID"),
            Type::DateTime if mysql => fmt!(f, "DATETIME"),
            Type::DateTime | Type::Timestamp => fmt!(f, "TIMESTAMP"),
            Type::TimestampTz if mysql => fmt!(f, "TIMESTAMP"),
            Type::TimestampTz => fmt!(f, "TIMESTAMPTZ"),
            Type::TimeTz if mysql => fmt!(f, "TIME"),
            Type::TimeTz => fmt!(f, "TIMETZ"),
            Type::Time => fmt!(f, "TIME"),
            Type::Date => fmt!(f, "DATE"),
            Type::Year if mysql => fmt!(f, "YEAR"),
            Type::Year | Type::Interval => fmt!(f, "INTERVAL"),
            Type::Custom(custom) => fmt!(f, custom),
        }
    }
}
