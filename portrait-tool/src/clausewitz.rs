//! Ordered value tree and writer for the game's brace-delimited config syntax.
//!
//! Keys are bare identifiers, blocks use `{ }`, sequences render as brace
//! blocks with one item per line, and scalar strings are only quoted when
//! the literal needs it (whitespace, path separators) or when the key is
//! registered as always quoted.

use crate::constants::{ALWAYS_QUOTED_KEYS, INDENT_WIDTH};
use std::collections::HashSet;

/// A config value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
    Block(Block),
    List(Vec<Value>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Block> for Value {
    fn from(value: Block) -> Self {
        Value::Block(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items.into_iter().map(Value::Text).collect())
    }
}

/// Ordered key/value mapping. Insertion order is output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    entries: Vec<(String, Value)>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Block::set`].
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Replaces the value of an existing key in place, or appends a new entry.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders [`Block`] trees as config text.
#[derive(Debug, Clone)]
pub struct ClausewitzWriter {
    indent: usize,
    quoted_keys: HashSet<String>,
}

impl Default for ClausewitzWriter {
    fn default() -> Self {
        Self::new(ALWAYS_QUOTED_KEYS.iter().map(|key| key.to_string()))
    }
}

impl ClausewitzWriter {
    pub fn new(quoted_keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            indent: INDENT_WIDTH,
            quoted_keys: quoted_keys.into_iter().collect(),
        }
    }

    /// Renders the top-level entries at column 0, lines joined with `\n`,
    /// without a trailing newline.
    pub fn render(&self, root: &Block) -> String {
        let mut lines = Vec::new();
        self.write_block(root, 0, &mut lines);
        lines.join("\n")
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent)
    }

    fn write_block(&self, block: &Block, depth: usize, lines: &mut Vec<String>) {
        let pad = self.pad(depth);
        for (key, value) in block.entries() {
            match value {
                Value::Block(inner) if inner.is_empty() => {
                    lines.push(format!("{pad}{key} = {{}}"));
                }
                Value::List(items) if items.is_empty() => {
                    lines.push(format!("{pad}{key} = {{}}"));
                }
                Value::Block(inner) => {
                    lines.push(format!("{pad}{key} = {{"));
                    self.write_block(inner, depth + 1, lines);
                    lines.push(format!("{pad}}}"));
                }
                Value::List(items) => {
                    lines.push(format!("{pad}{key} = {{"));
                    self.write_items(items, depth + 1, lines);
                    lines.push(format!("{pad}}}"));
                }
                scalar => {
                    let rendered = self.scalar(Some(key.as_str()), scalar);
                    lines.push(format!("{pad}{key} = {rendered}"));
                }
            }
        }
    }

    fn write_items(&self, items: &[Value], depth: usize, lines: &mut Vec<String>) {
        let pad = self.pad(depth);
        for item in items {
            match item {
                Value::Block(inner) if inner.is_empty() => lines.push(format!("{pad}{{}}")),
                Value::List(inner) if inner.is_empty() => lines.push(format!("{pad}{{}}")),
                Value::Block(inner) => {
                    lines.push(format!("{pad}{{"));
                    self.write_block(inner, depth + 1, lines);
                    lines.push(format!("{pad}}}"));
                }
                Value::List(inner) => {
                    lines.push(format!("{pad}{{"));
                    self.write_items(inner, depth + 1, lines);
                    lines.push(format!("{pad}}}"));
                }
                scalar => lines.push(format!("{pad}{}", self.scalar(None, scalar))),
            }
        }
    }

    fn scalar(&self, key: Option<&str>, value: &Value) -> String {
        match value {
            Value::Text(text) => {
                let forced = key.is_some_and(|key| self.quoted_keys.contains(key));
                if forced || needs_quotes(text) {
                    quote(text)
                } else {
                    text.clone()
                }
            }
            Value::Bool(true) => "yes".to_string(),
            Value::Bool(false) => "no".to_string(),
            Value::Int(number) => number.to_string(),
            Value::Block(_) | Value::List(_) => String::new(),
        }
    }
}

/// Literals with whitespace or path separators must stay quoted.
pub fn needs_quotes(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || trimmed
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\')
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}
