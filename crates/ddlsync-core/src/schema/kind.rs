//! Declared value kinds of model fields.

use crate::{Error, Result};

use std::{fmt, str::FromStr};

/// The declared scalar kind of a model field.
///
/// Kinds are dialect independent; [`Type::from_kind`](super::Type::from_kind)
/// maps them to storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    /// Platform sized signed integer; stored as a 4-byte integer.
    Int,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    /// A point in time.
    Time,
    Uuid,
    /// A calendar year.
    Year,
}

impl ScalarKind {
    /// Resolves a kind from a type name.
    ///
    /// Both Rust (`i32`, `String`, `Vec<u8>`, `chrono::DateTime<Utc>`) and
    /// Go style (`int32`, `string`, `[]byte`, `time.Time`) spellings are
    /// understood. Names ending in `Time` are points in time, names mentioning
    /// a UUID or a year resolve to those kinds.
    pub fn from_name(name: &str) -> Result<ScalarKind> {
        let trimmed = name.trim();
        let base = trimmed
            .split_once('<')
            .map(|(base, _)| base)
            .unwrap_or(trimmed);
        let last = base.rsplit(['.', ':']).next().unwrap_or(base);

        if last.ends_with("Time") || last == "DateTime" || last == "NaiveDateTime" {
            return Ok(ScalarKind::Time);
        }

        if base.contains("Uuid") || base.contains("UUID") {
            return Ok(ScalarKind::Uuid);
        }

        if last.contains("Bool") {
            return Ok(ScalarKind::Bool);
        }

        if last.contains("Year") {
            return Ok(ScalarKind::Year);
        }

        let kind = match trimmed {
            "Vec<u8>" | "[]byte" | "[]uint8" | "bytes" => ScalarKind::Bytes,
            _ => match last {
                "bool" => ScalarKind::Bool,
                "int" | "isize" => ScalarKind::Int,
                "int8" | "i8" => ScalarKind::I8,
                "int16" | "i16" => ScalarKind::I16,
                "int32" | "i32" | "rune" => ScalarKind::I32,
                "int64" | "i64" => ScalarKind::I64,
                "uint8" | "u8" | "byte" => ScalarKind::U8,
                "uint16" | "u16" => ScalarKind::U16,
                "uint" | "usize" | "uint32" | "u32" => ScalarKind::U32,
                "uint64" | "u64" => ScalarKind::U64,
                "float32" | "f32" => ScalarKind::F32,
                "float64" | "f64" => ScalarKind::F64,
                "string" | "String" | "str" => ScalarKind::String,
                "time" | "timestamp" => ScalarKind::Time,
                "uuid" => ScalarKind::Uuid,
                "year" => ScalarKind::Year,
                _ => return Err(Error::unsupported_kind(trimmed)),
            },
        };

        Ok(kind)
    }

    pub fn is_textual(self) -> bool {
        matches!(self, ScalarKind::String)
    }
}

impl FromStr for ScalarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScalarKind::from_name(s)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int => "int",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Time => "time",
            ScalarKind::Uuid => "uuid",
            ScalarKind::Year => "year",
        };

        f.write_str(name)
    }
}

/// Rust types usable as model fields.
pub trait ColumnKind {
    const KIND: ScalarKind;
}

macro_rules! impl_column_kind {
    ( $( $ty:ty => $kind:ident, )* ) => {
        $(
            impl ColumnKind for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )*
    };
}

impl_column_kind! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Int,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    std::time::SystemTime => Time,
}

impl ColumnKind for &str {
    const KIND: ScalarKind = ScalarKind::String;
}

impl<T: ColumnKind> ColumnKind for Option<T> {
    const KIND: ScalarKind = T::KIND;
}
