use super::Constraint;

/// A column as the database currently reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveColumnInfo {
    pub name: String,

    /// Type as spelled by the database, e.g. `varchar(255)` or
    /// `character varying(255)`.
    pub raw_type: String,

    pub nullable: bool,

    pub key: KeyRole,

    /// Default expression as spelled by the database.
    pub default: Option<String>,

    /// Extra flags such as `auto_increment`.
    pub extra: String,
}

/// Key participation of a live column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyRole {
    #[default]
    None,
    Unique,
    Primary,
}

/// An index as the database currently reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveIndexInfo {
    pub table: String,
    pub name: String,
    pub column: String,
}

impl LiveColumnInfo {
    pub fn is_unique(&self) -> bool {
        matches!(self.key, KeyRole::Unique | KeyRole::Primary)
    }

    /// Returns `true` if the column already enforces `constraint`.
    pub fn satisfies(&self, constraint: &Constraint) -> bool {
        match constraint {
            Constraint::NotNull => !self.nullable,
            Constraint::Unique => self.is_unique(),
            Constraint::PrimaryKey => self.key == KeyRole::Primary,
            Constraint::AutoIncrement => self.extra.to_ascii_lowercase().contains("auto_increment"),
            Constraint::Other(_) => false,
        }
    }

    /// Returns `true` if the live default is equivalent to `desired`.
    ///
    /// Both sides are normalized first: casts, quoting and the spelling of
    /// well-known keywords are ignored.
    pub fn default_matches(&self, desired: &str) -> bool {
        let desired = normalize_default(desired);

        match &self.default {
            Some(live) => normalize_default(live) == desired,
            None => desired == "null",
        }
    }
}

impl KeyRole {
    /// Parses a key role as reported by either dialect (`PRI`, `UNI`,
    /// `PRIMARY KEY`, `UNIQUE`). Anything else, including non-unique index
    /// markers such as `MUL`, is [`KeyRole::None`].
    pub fn parse(raw: &str) -> KeyRole {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PRI" | "PRIMARY" | "PRIMARY KEY" => KeyRole::Primary,
            "UNI" | "UNIQUE" => KeyRole::Unique,
            _ => KeyRole::None,
        }
    }
}

/// Reduces a default expression to a canonical spelling.
pub(crate) fn normalize_default(raw: &str) -> String {
    let mut value = raw.trim();

    while let Some(stripped) = strip_cast(value) {
        value = stripped;
    }

    if let Some(inner) = value
        .strip_prefix('\'')
        .and_then(|value| value.strip_suffix('\''))
    {
        return inner.replace("''", "'");
    }

    let lower = value.to_ascii_lowercase();

    match lower.as_str() {
        "now()" | "current_timestamp" | "current_timestamp()" | "localtimestamp" => {
            "current_timestamp".to_string()
        }
        "true" => "1".to_string(),
        "false" => "0".to_string(),
        "null" => lower,
        _ => value.to_string(),
    }
}

/// Strips a trailing Postgres `::type` cast that is not inside quotes or
/// parentheses.
fn strip_cast(value: &str) -> Option<&str> {
    let (expr, ty) = value.rsplit_once("::")?;

    let is_type_name = !ty.is_empty()
        && ty
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '"' | '[' | ']'));

    if !is_type_name || expr.matches('\'').count() % 2 != 0 {
        return None;
    }

    Some(expr.trim_end())
}
