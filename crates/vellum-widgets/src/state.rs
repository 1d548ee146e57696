//! Reactive state for scene objects.
//!
//! A [`StateBag`] stores an object's named fields as loosely typed
//! [`Value`]s.  Fields can be declared numeric, after which every assignment
//! is coerced to an integer.  [`Bindings`] maps field keys to handlers that
//! project a field onto the object's nodes; owners call
//! [`Bindings::fire`] from their single setter so every mutation, whatever its
//! origin, is reflected the same way.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A string.
    Str(String),
    /// An integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
}

impl Value {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Kind of value, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "number",
            Value::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Errors raised when assigning a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A numeric field received a string with no leading integer.
    #[error("field `{field}` expects a number, got {value:?}")]
    NotANumber {
        /// Field key.
        field: String,
        /// Rejected input.
        value: String,
    },
    /// A field received a value of the wrong kind.
    #[error("field `{field}` expects a {expected}, got a {found}")]
    TypeMismatch {
        /// Field key.
        field: String,
        /// Expected kind.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },
}

/// Parse the leading integer of `s`, the way a numeric text field is read.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit, so `"16px"` and `"16.7"` both read as `16`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Named field storage with numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateBag {
    values: BTreeMap<String, Value>,
    numeric: BTreeSet<String>,
}

impl StateBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `key` numeric and coerce its current value, if any.
    pub fn declare_number(&mut self, key: &str) -> Result<(), FieldError> {
        if let Some(current) = self.values.get(key).cloned() {
            let coerced = coerce_number(key, current)?;
            self.values.insert(key.to_owned(), coerced);
        }
        self.numeric.insert(key.to_owned());
        Ok(())
    }

    /// Whether `key` was declared numeric.
    pub fn is_numeric(&self, key: &str) -> bool {
        self.numeric.contains(key)
    }

    /// Coerce `value` according to the declaration of `key`.
    pub fn coerce(&self, key: &str, value: Value) -> Result<Value, FieldError> {
        if self.is_numeric(key) {
            coerce_number(key, value)
        } else {
            Ok(value)
        }
    }

    /// Store `value` under `key` after coercion.
    ///
    /// Returns the stored value when it differs from the previous one, or
    /// `None` when nothing changed.  On error the field is left untouched.
    pub fn set(&mut self, key: &str, value: Value) -> Result<Option<&Value>, FieldError> {
        let value = self.coerce(key, value)?;
        if self.values.get(key) == Some(&value) {
            return Ok(None);
        }
        self.values.insert(key.to_owned(), value);
        Ok(self.values.get(key))
    }

    /// Remove a field, returning its last value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// The raw value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integer value of `key`, if present and an integer.
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Boolean value of `key`, if present and a boolean.
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn coerce_number(key: &str, value: Value) -> Result<Value, FieldError> {
    match value {
        Value::Int(_) => Ok(value),
        Value::Str(s) => match parse_leading_int(&s) {
            Some(n) => Ok(Value::Int(n)),
            None => Err(FieldError::NotANumber {
                field: key.to_owned(),
                value: s,
            }),
        },
        other => Err(FieldError::TypeMismatch {
            field: key.to_owned(),
            expected: "number",
            found: other.type_name(),
        }),
    }
}

/// A handler projecting a field value onto a node tree `N`.
pub type Handler<N> = fn(&Value, &mut N);

/// Field key to handler map.
///
/// Handlers are registered once, at construction, and invoked by the owner
/// whenever the field changes.
pub struct Bindings<N> {
    handlers: BTreeMap<&'static str, Vec<Handler<N>>>,
}

impl<N> Bindings<N> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// Register `handler` for `key`. Several handlers may share a key; they
    /// run in registration order.
    pub fn on(&mut self, key: &'static str, handler: Handler<N>) -> &mut Self {
        self.handlers.entry(key).or_default().push(handler);
        self
    }

    /// Whether any handler is registered for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Run the handlers of `key`. Returns whether any ran.
    pub fn fire(&self, key: &str, value: &Value, node: &mut N) -> bool {
        match self.handlers.get(key) {
            Some(handlers) => {
                for handler in handlers {
                    handler(value, node);
                }
                true
            }
            None => false,
        }
    }

    /// Run the handler of every field present in `state`.
    pub fn fire_all(&self, state: &StateBag, node: &mut N) {
        for (key, value) in state.iter() {
            self.fire(key, value, node);
        }
    }

    /// Registered keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

impl<N> Default for Bindings<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for Bindings<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
