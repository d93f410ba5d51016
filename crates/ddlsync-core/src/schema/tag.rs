//! Column tags.
//!
//! A tag is a `;` separated list of `key:value` items attached to a model
//! field, e.g. `type:varchar(100);constraints:not null,unique;index`.

use crate::{Error, Result};

use indexmap::IndexMap;
use std::fmt;

/// Value of the `column` key that excludes a field from the table.
pub const EXCLUDE: &str = "-";

/// Typed form of a column tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTag {
    /// Explicit SQL type, overriding the one derived from the field's kind.
    pub ty: Option<String>,

    /// Constraint tokens in declaration order.
    pub constraints: Vec<Constraint>,

    /// Raw default value.
    pub default: Option<String>,

    /// Whether the column gets a secondary index.
    pub index: bool,

    /// Explicit column name. [`EXCLUDE`] drops the field.
    pub column: Option<String>,
}

/// A single token of a `constraints:` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    Unique,
    PrimaryKey,
    AutoIncrement,

    /// Anything else, kept verbatim so it can be reported.
    Other(String),
}

impl ColumnTag {
    /// Parses a tag, rejecting unknown keys and malformed items.
    pub fn parse(tag: &str) -> Result<ColumnTag> {
        for item in items(tag) {
            let (key, has_value) = match item.split_once(':') {
                Some((key, _)) => (key.trim(), true),
                None => (item, false),
            };

            match (key.to_ascii_lowercase().as_str(), has_value) {
                ("index", _) => {}
                (_, false) => {
                    return Err(Error::invalid_tag(
                        tag,
                        format!("item `{item}` has no value"),
                    ))
                }
                ("type" | "constraints" | "default" | "column", true) => {}
                (_, true) => {
                    return Err(Error::invalid_tag(tag, format!("unknown key `{key}`")))
                }
            }
        }

        let mut ret = ColumnTag::default();

        for (key, value) in parse_pairs(tag) {
            match key.as_str() {
                "index" => ret.index = !value.eq_ignore_ascii_case("false"),
                "type" => ret.ty = non_empty(&value),
                "constraints" => {
                    ret.constraints = value
                        .split(',')
                        .map(str::trim)
                        .filter(|token| !token.is_empty())
                        .map(Constraint::parse)
                        .collect();
                }
                "default" => ret.default = non_empty(&value),
                "column" => ret.column = non_empty(&value),
                _ => {}
            }
        }

        Ok(ret)
    }

    /// Returns `true` if the field is excluded from the table.
    pub fn is_excluded(&self) -> bool {
        self.column.as_deref() == Some(EXCLUDE)
    }

    pub fn has(&self, constraint: &Constraint) -> bool {
        self.constraints.contains(constraint)
    }

    pub fn is_auto_increment(&self) -> bool {
        self.has(&Constraint::AutoIncrement)
    }
}

impl std::str::FromStr for ColumnTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColumnTag::parse(s)
    }
}

impl Constraint {
    pub fn parse(token: &str) -> Constraint {
        let normalized = token
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        match normalized.as_str() {
            "not null" => Constraint::NotNull,
            "unique" => Constraint::Unique,
            "primary key" => Constraint::PrimaryKey,
            "auto_increment" => Constraint::AutoIncrement,
            _ => Constraint::Other(token.trim().to_string()),
        }
    }

    /// The SQL keyword(s) for this constraint, as written in a column
    /// definition.
    pub fn keyword(&self) -> &str {
        match self {
            Constraint::NotNull => "NOT NULL",
            Constraint::Unique => "UNIQUE",
            Constraint::PrimaryKey => "PRIMARY KEY",
            Constraint::AutoIncrement => "AUTO_INCREMENT",
            Constraint::Other(token) => token,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NotNull => f.write_str("not null"),
            Constraint::Unique => f.write_str("unique"),
            Constraint::PrimaryKey => f.write_str("primary key"),
            Constraint::AutoIncrement => f.write_str("auto_increment"),
            Constraint::Other(token) => f.write_str(token),
        }
    }
}

/// Splits a tag into its raw key/value mapping.
///
/// This is the lenient form that [`ColumnTag::parse`] builds on once the
/// items are validated: items without a `:` are dropped, except `index` which
/// maps to an empty value. Keys are lowercased and later keys overwrite
/// earlier ones.
pub fn parse_pairs(tag: &str) -> IndexMap<String, String> {
    let mut pairs = IndexMap::new();

    for item in items(tag) {
        match item.split_once(':') {
            Some((key, value)) => {
                pairs.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
            }
            None if item.eq_ignore_ascii_case("index") => {
                pairs.insert("index".to_string(), String::new());
            }
            None => {}
        }
    }

    pairs
}

fn items(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(';').map(str::trim).filter(|item| !item.is_empty())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
