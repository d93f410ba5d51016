use super::ScalarKind;
use crate::driver::Dialect;

/// Database-level storage type of a column.
///
/// Types come from three places: the mapping of a field's [`ScalarKind`]
/// ([`Type::from_kind`]), an explicit `type:` tag, and the type spelling the
/// database reports for a live column. The last two go through
/// [`Type::parse`], so all three can be compared with each other once reduced
/// to what the dialect actually stores ([`Type::storage`]).
///
/// Rendering a type as SQL is the serializer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An auto-incrementing integer of `n` bytes
    Serial(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Decimal number with optional precision and scale.
    Numeric(Option<(u32, u32)>),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Variable length text with no declared maximum. Postgres only.
    VarCharUnbounded,

    /// Fixed length text
    Char(u64),

    /// Unconstrained binary type
    Blob,

    /// Fixed-size binary type of `n` bytes
    Binary(u64),

    /// 128-bit universally unique identifier
    Uuid,

    /// A civil datetime without time zone
    DateTime,

    /// Time of day with time zone
    TimeTz,

    /// An instant in time without time zone
    Timestamp,

    /// An instant in time with time zone
    TimestampTz,

    /// Time of day
    Time,

    /// A civil date
    Date,

    /// A calendar year
    Year,

    /// A time span
    Interval,

    /// Unrecognized type, kept in its normalized spelling.
    Custom(String),
}

impl Type {
    /// Maps a field kind to the storage type used by `dialect`.
    ///
    /// `text_width` is the width of `VARCHAR` columns holding strings.
    pub fn from_kind(kind: ScalarKind, dialect: Dialect, text_width: u64) -> Type {
        use ScalarKind::*;

        match (kind, dialect) {
            (Bool, _) => Type::Boolean,
            (Int | I32 | U32, _) => Type::Integer(4),
            (I8 | U8, Dialect::Mysql) => Type::Integer(1),
            (I8 | U8 | I16 | U16, _) => Type::Integer(2),
            (I64 | U64, _) => Type::Integer(8),
            (F32, _) => Type::Float(4),
            (F64, _) => Type::Float(8),
            (String, _) => Type::VarChar(text_width),
            (Bytes, _) => Type::Blob,
            (Time, Dialect::Mysql) => Type::DateTime,
            (Time, Dialect::Postgresql) => Type::TimeTz,
            (Uuid, Dialect::Mysql) => Type::Binary(16),
            (Uuid, Dialect::Postgresql) => Type::Uuid,
            (Year, Dialect::Mysql) => Type::Year,
            (Year, Dialect::Postgresql) => Type::Interval,
        }
    }

    /// Parses a type spelling, either user supplied or reported by the
    /// database.
    ///
    /// Parsing is case and whitespace insensitive. MySQL display widths
    /// (`int(11)`) are ignored, except for `tinyint(1)` which is how MySQL
    /// reports booleans.
    pub fn parse(raw: &str, dialect: Dialect) -> Type {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        let (base, args, rest) = match normalized.find('(') {
            Some(open) => match normalized[open..].find(')') {
                Some(close) => (
                    normalized[..open].trim(),
                    Some(normalized[open + 1..open + close].trim()),
                    normalized[open + close + 1..].trim(),
                ),
                None => return Type::Custom(normalized),
            },
            None => (normalized.as_str(), None, ""),
        };

        let name = match rest {
            "" => base.to_string(),
            "with time zone" | "without time zone" => format!("{base} {rest}"),
            _ => return Type::Custom(normalized),
        };

        Type::from_parts(&name, args, dialect).unwrap_or(Type::Custom(normalized))
    }

    fn from_parts(name: &str, args: Option<&str>, dialect: Dialect) -> Option<Type> {
        let ty = match (name, args) {
            ("boolean" | "bool", None) => Type::Boolean,
            ("tinyint", Some("1")) if dialect.is_mysql() => Type::Boolean,
            ("tinyint", _) => Type::Integer(1),
            ("smallint" | "int2", _) => Type::Integer(2),
            ("mediumint", _) => Type::Integer(3),
            ("int" | "integer" | "int4", _) => Type::Integer(4),
            ("bigint" | "int8", _) => Type::Integer(8),
            ("smallserial" | "serial2", None) => Type::Serial(2),
            ("serial" | "serial4", None) => Type::Serial(4),
            ("bigserial" | "serial8", None) => Type::Serial(8),
            ("real" | "float4", None) => Type::Float(4),
            ("double" | "double precision" | "float8", None) => Type::Float(8),
            ("float", None) if dialect.is_mysql() => Type::Float(4),
            ("float", None) => Type::Float(8),
            ("float", Some(precision)) => match precision.parse::<u32>().ok()? {
                0..=24 => Type::Float(4),
                _ => Type::Float(8),
            },
            ("numeric" | "decimal", None) if dialect.is_mysql() => Type::Numeric(Some((10, 0))),
            ("numeric" | "decimal", None) => Type::Numeric(None),
            ("numeric" | "decimal", Some(args)) => Type::Numeric(Some(precision_scale(args)?)),
            ("text", None) => Type::Text,
            ("varchar" | "character varying", None) => Type::VarCharUnbounded,
            ("varchar" | "character varying", Some(len)) => Type::VarChar(len.parse().ok()?),
            ("char" | "character" | "bpchar", None) => Type::Char(1),
            ("char" | "character" | "bpchar", Some(len)) => Type::Char(len.parse().ok()?),
            ("blob" | "bytea", None) => Type::Blob,
            ("binary", None) => Type::Binary(1),
            ("binary", Some(len)) => Type::Binary(len.parse().ok()?),
            ("uuid", None) => Type::Uuid,
            ("datetime", _) => Type::DateTime,
            ("timestamp" | "timestamp without time zone", _) => Type::Timestamp,
            ("timestamptz" | "timestamp with time zone", _) => Type::TimestampTz,
            ("time" | "time without time zone", _) => Type::Time,
            ("timetz" | "time with time zone", _) => Type::TimeTz,
            ("date", None) => Type::Date,
            ("year", _) => Type::Year,
            ("interval", None) => Type::Interval,
            _ => return None,
        };

        Some(ty)
    }

    /// Reduces the type to what `dialect` stores for it.
    ///
    /// Aliases collapse onto one representation: a serial column is an
    /// integer column with a sequence default, MySQL stores UUIDs as
    /// `BINARY(16)`, Postgres has no one-byte integer, and so on.
    pub fn storage(&self, dialect: Dialect) -> Type {
        match (self, dialect) {
            (Type::Serial(1), Dialect::Postgresql) => Type::Integer(2),
            (Type::Serial(n), _) => Type::Integer(*n),
            (Type::Integer(1), Dialect::Postgresql) => Type::Integer(2),
            (Type::Integer(3), Dialect::Postgresql) => Type::Integer(4),
            (Type::Binary(_), Dialect::Postgresql) => Type::Blob,
            (Type::Year, Dialect::Postgresql) => Type::Interval,
            (Type::DateTime, Dialect::Postgresql) => Type::Timestamp,
            (Type::Uuid, Dialect::Mysql) => Type::Binary(16),
            (Type::TimeTz, Dialect::Mysql) => Type::Time,
            (Type::TimestampTz, Dialect::Mysql) => Type::Timestamp,
            (Type::Numeric(None), Dialect::Mysql) => Type::Numeric(Some((10, 0))),
            _ => self.clone(),
        }
    }

    /// Returns `true` when a live column reported as `raw` stores this type.
    pub fn matches_live(&self, raw: &str, dialect: Dialect) -> bool {
        self.storage(dialect) == Type::parse(raw, dialect).storage(dialect)
    }

    /// Returns `true` for character types, whose default values are string
    /// literals.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            Type::Text | Type::VarChar(_) | Type::VarCharUnbounded | Type::Char(_)
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer(_) | Type::Serial(_))
    }

    /// The serial form of an integer type. Other types are returned unchanged.
    pub fn to_serial(&self) -> Type {
        match self {
            Type::Integer(1) => Type::Serial(2),
            Type::Integer(n) => Type::Serial(*n),
            _ => self.clone(),
        }
    }
}

fn precision_scale(args: &str) -> Option<(u32, u32)> {
    match args.split_once(',') {
        Some((precision, scale)) => Some((precision.trim().parse().ok()?, scale.trim().parse().ok()?)),
        None => Some((args.parse().ok()?, 0)),
    }
}
