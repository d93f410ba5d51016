//! An in-memory database that understands the statements the engine emits.
//!
//! DDL is applied to a small table model and introspection queries are
//! answered from it, spelled the way each dialect reports them.

#![allow(dead_code)]

use async_trait::async_trait;
use ddlsync::{
    driver::{Capability, Connection, Dialect, Row},
    err,
    schema::KeyRole,
    Error, Result,
};

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Column {
    pub ty: String,
    pub nullable: bool,
    pub key: KeyRole,
    pub default: Option<String>,
    pub extra: String,
}

#[derive(Debug, Default)]
struct Table {
    columns: HashMap<String, Column>,

    /// `(index name, column)`
    indices: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct FakeDb {
    capability: &'static Capability,
    tables: HashMap<String, Table>,
    executed: Vec<String>,
    queries: Vec<String>,
    fail_on: Option<String>,
    hidden: Vec<String>,
}

impl FakeDb {
    pub fn new(dialect: Dialect) -> FakeDb {
        FakeDb {
            capability: dialect.capability(),
            tables: HashMap::new(),
            executed: vec![],
            queries: vec![],
            fail_on: None,
            hidden: vec![],
        }
    }

    pub fn mysql() -> FakeDb {
        FakeDb::new(Dialect::Mysql)
    }

    pub fn postgresql() -> FakeDb {
        FakeDb::new(Dialect::Postgresql)
    }

    pub fn dialect(&self) -> Dialect {
        self.capability.dialect
    }

    /// Statements executed so far, clearing the log.
    pub fn take_executed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.executed)
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Fails every statement containing `needle`.
    pub fn fail_on(&mut self, needle: &str) {
        self.fail_on = Some(needle.to_string());
    }

    /// Makes introspection report `column` as missing even though it exists.
    pub fn hide_column(&mut self, column: &str) {
        self.hidden.push(column.to_string());
    }

    /// Seeds a column as the database would report it.
    pub fn insert_column(&mut self, table: &str, column: &str, ty: &str) {
        self.tables.entry(table.to_string()).or_default().columns.insert(
            column.to_string(),
            Column {
                ty: ty.to_string(),
                nullable: true,
                key: KeyRole::None,
                default: None,
                extra: String::new(),
            },
        );
    }

    pub fn insert_index(&mut self, table: &str, name: &str, column: &str) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .indices
            .push((name.to_string(), column.to_string()));
    }

    pub fn column(&self, table: &str, column: &str) -> Option<&Column> {
        self.tables.get(table)?.columns.get(column)
    }

    pub fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn index_names(&self, table: &str) -> Vec<&str> {
        self.tables
            .get(table)
            .map(|table| table.indices.iter().map(|(name, _)| name.as_str()).collect())
            .unwrap_or_default()
    }

    fn apply(&mut self, sql: &str) -> Result<()> {
        let tokens = tokenize(sql, self.capability.identifier_quote);
        let mut p = Parser { tokens, pos: 0 };

        if p.eat(&["CREATE", "TABLE", "IF", "NOT", "EXISTS"]) {
            let table = p.ident()?;
            p.punct('(')?;
            let column = p.ident()?;
            let def = p.column_def()?;
            p.punct(')')?;

            if self.tables.contains_key(&table) {
                return Ok(());
            }

            let mut column_info = self.new_column(&table, &column, &def.ty);
            column_info.nullable = !(def.not_null || def.primary_key);
            if def.primary_key {
                column_info.key = KeyRole::Primary;
            } else if def.unique {
                column_info.key = KeyRole::Unique;
            }
            if def.auto_increment {
                column_info.extra = "auto_increment".to_string();
            }
            if let Some(default) = &def.default {
                column_info.default = Some(self.report_default(default, &column_info.ty));
            }

            let mut new_table = Table::default();
            new_table.columns.insert(column, column_info);
            self.tables.insert(table, new_table);
            return Ok(());
        }

        if p.eat(&["CREATE", "INDEX"]) {
            let name = p.ident()?;
            p.word("ON")?;
            let table = p.ident()?;
            p.punct('(')?;
            let column = p.ident()?;
            p.punct(')')?;

            let t = self.table_mut(&table)?;
            if t.indices.iter().any(|(existing, _)| *existing == name) {
                return Err(query_error(format!("relation \"{name}\" already exists")));
            }
            t.indices.push((name, column));
            return Ok(());
        }

        p.word("ALTER")?;
        p.word("TABLE")?;
        let table = p.ident()?;

        if p.eat(&["ADD", "COLUMN"]) {
            let column = p.ident()?;
            let def = p.column_def()?;
            let info = self.new_column(&table, &column, &def.ty);

            let t = self.table_mut(&table)?;
            if t.columns.contains_key(&column) {
                return Err(Error::duplicate_column(std::io::Error::other(format!(
                    "Duplicate column name '{column}'"
                ))));
            }
            t.columns.insert(column, info);
            return Ok(());
        }

        if p.eat(&["DROP", "COLUMN"]) {
            let column = p.ident()?;
            let t = self.table_mut(&table)?;
            t.columns
                .remove(&column)
                .ok_or_else(|| query_error(format!("column \"{column}\" does not exist")))?;
            t.indices.retain(|(_, indexed)| *indexed != column);
            return Ok(());
        }

        if p.eat(&["MODIFY", "COLUMN"]) {
            let column = p.ident()?;
            let def = p.column_def()?;
            let ty = self.report_type(&def.ty);
            let default = def
                .default
                .as_deref()
                .map(|value| self.report_default(value, &ty));

            let info = self.column_mut(&table, &column)?;
            info.ty = ty;
            info.nullable = !def.not_null;
            info.default = default;
            if def.unique && info.key == KeyRole::None {
                info.key = KeyRole::Unique;
            }
            return Ok(());
        }

        if p.eat(&["ALTER", "COLUMN"]) {
            let column = p.ident()?;

            if p.eat(&["SET", "NOT", "NULL"]) {
                self.column_mut(&table, &column)?.nullable = false;
                return Ok(());
            }

            p.word("SET")?;
            p.word("DEFAULT")?;
            let value = p.value();
            let ty = self.column_mut(&table, &column)?.ty.clone();
            let default = self.report_default(&value, &ty);
            self.column_mut(&table, &column)?.default = Some(default);
            return Ok(());
        }

        if p.eat(&["ADD", "CONSTRAINT"]) {
            let _name = p.ident()?;
            p.word("UNIQUE")?;
            p.punct('(')?;
            let column = p.ident()?;
            p.punct(')')?;

            let info = self.column_mut(&table, &column)?;
            if info.key == KeyRole::None {
                info.key = KeyRole::Unique;
            }
            return Ok(());
        }

        Err(err!("fake database cannot execute: {sql}"))
    }

    fn new_column(&self, table: &str, column: &str, ty: &str) -> Column {
        let lower = ty.to_ascii_lowercase();
        let default = matches!(lower.as_str(), "serial" | "bigserial" | "smallserial")
            .then(|| format!("nextval('{table}_{column}_seq'::regclass)"));

        Column {
            ty: self.report_type(ty),
            nullable: true,
            key: KeyRole::None,
            extra: if default.is_some() {
                "auto_increment".to_string()
            } else {
                String::new()
            },
            default,
        }
    }

    fn report_type(&self, ty: &str) -> String {
        let lower = ty.to_ascii_lowercase();

        if self.dialect().is_mysql() {
            return lower;
        }

        if let Some(len) = lower
            .strip_prefix("varchar(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return format!("character varying({len})");
        }

        if let Some(len) = lower
            .strip_prefix("char(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return format!("character({len})");
        }

        match lower.as_str() {
            "varchar" => "character varying".to_string(),
            "timetz" => "time with time zone".to_string(),
            "timestamptz" => "timestamp with time zone".to_string(),
            "timestamp" => "timestamp without time zone".to_string(),
            "smallserial" => "smallint".to_string(),
            "serial" => "integer".to_string(),
            "bigserial" => "bigint".to_string(),
            _ => lower,
        }
    }

    fn report_default(&self, value: &str, reported_ty: &str) -> String {
        let quoted = value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2;

        if self.dialect().is_postgresql() {
            // Postgres casts to the bare type name, without its length.
            let cast = reported_ty.split('(').next().unwrap_or(reported_ty);
            return if quoted {
                format!("{value}::{cast}")
            } else {
                value.to_string()
            };
        }

        if quoted {
            return value[1..value.len() - 1].replace("''", "'");
        }

        match value.to_ascii_lowercase().as_str() {
            "now()" | "current_timestamp" => "CURRENT_TIMESTAMP".to_string(),
            "true" => "1".to_string(),
            "false" => "0".to_string(),
            _ => value.to_string(),
        }
    }

    fn table_mut(&mut self, table: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| query_error(format!("table \"{table}\" does not exist")))
    }

    fn column_mut(&mut self, table: &str, column: &str) -> Result<&mut Column> {
        self.table_mut(table)?
            .columns
            .get_mut(column)
            .ok_or_else(|| query_error(format!("column \"{column}\" does not exist")))
    }

    fn answer(&self, sql: &str) -> Option<Row> {
        let literals: Vec<String> = tokenize(sql, self.capability.identifier_quote)
            .into_iter()
            .filter_map(|token| match token {
                Token::Str(value) => Some(value),
                _ => None,
            })
            .collect();

        let mysql = self.dialect().is_mysql();

        if sql.contains("STATISTICS") || sql.contains("pg_index") {
            let [table, column, index] = &literals[literals.len().saturating_sub(3)..] else {
                return None;
            };

            let t = self.tables.get(table)?;
            if !t
                .indices
                .iter()
                .any(|(name, indexed)| name == index && indexed == column)
            {
                return None;
            }

            return Some(Row::new(vec![
                Some(table.clone()),
                Some(index.clone()),
                Some(column.clone()),
            ]));
        }

        let [table, column] = &literals[literals.len().saturating_sub(2)..] else {
            return None;
        };

        if self.hidden.contains(column) {
            return None;
        }

        let info = self.tables.get(table)?.columns.get(column)?;
        let key = match (info.key, mysql) {
            (KeyRole::Primary, true) => Some("PRI"),
            (KeyRole::Unique, true) => Some("UNI"),
            (KeyRole::None, true) => Some(""),
            (KeyRole::Primary, false) => Some("PRIMARY KEY"),
            (KeyRole::Unique, false) => Some("UNIQUE"),
            (KeyRole::None, false) => None,
        };

        Some(Row::new(vec![
            Some(column.clone()),
            Some(info.ty.clone()),
            Some(if info.nullable { "YES" } else { "NO" }.to_string()),
            key.map(str::to_string),
            info.default.clone(),
            Some(info.extra.clone()),
        ]))
    }
}

#[async_trait]
impl Connection for FakeDb {
    fn capability(&self) -> &'static Capability {
        self.capability
    }

    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.executed.push(sql.to_string());

        if let Some(needle) = &self.fail_on {
            if sql.contains(needle.as_str()) {
                return Err(query_error("injected failure".to_string()));
            }
        }

        self.apply(sql.trim_end_matches(';'))?;
        Ok(0)
    }

    async fn query_row(&mut self, sql: &str) -> Result<Option<Row>> {
        self.queries.push(sql.to_string());
        Ok(self.answer(sql))
    }
}

fn query_error(message: String) -> Error {
    Error::query(std::io::Error::other(message))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Word(String),
    Str(String),
    Punct(char),
}

fn tokenize(sql: &str, quote: char) -> Vec<Token> {
    let mut tokens = vec![];
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            c if c == quote || c == '\'' => {
                let mut value = String::new();
                while let Some(next) = chars.next() {
                    if next == c {
                        if chars.peek() == Some(&c) {
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    value.push(next);
                }
                tokens.push(if c == '\'' {
                    Token::Str(value)
                } else {
                    Token::Ident(value)
                });
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut word = c.to_string();
                while let Some(&next) = chars.peek() {
                    if !(next.is_alphanumeric() || next == '_') {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
            c => tokens.push(Token::Punct(c)),
        }
    }

    tokens
}

#[derive(Debug, Default)]
struct ColumnDef {
    ty: String,
    primary_key: bool,
    not_null: bool,
    unique: bool,
    auto_increment: bool,
    default: Option<String>,
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn is_word(&self, offset: usize, expected: &str) -> bool {
        matches!(
            self.tokens.get(self.pos + offset),
            Some(Token::Word(word)) if word.eq_ignore_ascii_case(expected)
        )
    }

    /// Consumes `words` if they come next.
    fn eat(&mut self, words: &[&str]) -> bool {
        if words
            .iter()
            .enumerate()
            .all(|(offset, word)| self.is_word(offset, word))
        {
            self.pos += words.len();
            true
        } else {
            false
        }
    }

    fn word(&mut self, expected: &str) -> Result<()> {
        if self.eat(&[expected]) {
            Ok(())
        } else {
            Err(err!("expected `{expected}`, found {:?}", self.peek()))
        }
    }

    fn punct(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(Token::Punct(c)) if *c == expected => {
                self.pos += 1;
                Ok(())
            }
            other => Err(err!("expected `{expected}`, found {other:?}")),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.peek().cloned() {
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(name)
            }
            other => Err(err!("expected identifier, found {other:?}")),
        }
    }

    fn column_def(&mut self) -> Result<ColumnDef> {
        let mut def = ColumnDef::default();
        let mut ty = vec![];
        let mut depth = 0;

        while let Some(token) = self.peek() {
            let stop = match token {
                Token::Punct('(') => {
                    depth += 1;
                    false
                }
                Token::Punct(')') if depth == 0 => true,
                Token::Punct(')') => {
                    depth -= 1;
                    false
                }
                Token::Word(word) if depth == 0 => matches!(
                    word.to_ascii_uppercase().as_str(),
                    "PRIMARY" | "NOT" | "UNIQUE" | "AUTO_INCREMENT" | "DEFAULT"
                ),
                _ => false,
            };

            if stop {
                break;
            }

            ty.push(token.clone());
            self.pos += 1;
        }

        def.ty = join(&ty);

        loop {
            if self.eat(&["PRIMARY", "KEY"]) {
                def.primary_key = true;
            } else if self.eat(&["NOT", "NULL"]) {
                def.not_null = true;
            } else if self.eat(&["UNIQUE"]) {
                def.unique = true;
            } else if self.eat(&["AUTO_INCREMENT"]) {
                def.auto_increment = true;
            } else if self.eat(&["DEFAULT"]) {
                def.default = Some(self.value());
            } else {
                break;
            }
        }

        if def.ty.is_empty() {
            return Err(err!("column definition without a type"));
        }

        Ok(def)
    }

    /// A default value: everything up to `UNIQUE` or the end of the
    /// statement.
    fn value(&mut self) -> String {
        let start = self.pos;

        while self.peek().is_some() && !self.is_word(0, "UNIQUE") {
            self.pos += 1;
        }

        join(&self.tokens[start..self.pos])
    }
}

fn join(tokens: &[Token]) -> String {
    let mut ret = String::new();
    let mut prev_word = false;

    for token in tokens {
        let is_word = matches!(token, Token::Word(_) | Token::Str(_));
        if is_word && prev_word {
            ret.push(' ');
        }

        match token {
            Token::Word(word) => ret.push_str(word),
            Token::Str(value) => {
                ret.push('\'');
                ret.push_str(&value.replace('\'', "''"));
                ret.push('\'');
            }
            Token::Ident(name) => ret.push_str(name),
            Token::Punct(c) => ret.push(*c),
        }

        prev_word = is_word;
    }

    ret
}
