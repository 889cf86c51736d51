//! Runtime value representation.
//!
//! Every Monkey value at evaluation time is an [`Object`]. Unlike the AST,
//! objects don't carry their originating token; they carry only the data
//! needed to keep evaluating. `TRUE`, `FALSE`, and `NULL` are process-wide
//! singletons (see [`TRUE`], [`FALSE`], [`NULL`]) so that `==`/`!=` on
//! booleans and null can be reference comparisons, matching the reference
//! implementation's singleton instances.
//!
//! [`Object::Error`] is a first-class value, not a `Result::Err`: runtime
//! failures flow through ordinary evaluation so that an error can be
//! returned from or passed into a function just like any other value. See
//! [`crate::error::ParseError`] for the separate, `Result`-based parse-time
//! failure channel.

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;
use std::fmt;
use std::rc::Rc;

pub type BuiltinFn = fn(&[Object]) -> Object;

#[derive(Debug, Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A key usable in a Monkey hash literal: integers, booleans, and strings
/// hash and compare structurally, which is exactly what `derive(Hash, Eq)`
/// gives for free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Array(Vec<Object>),
    Hash(std::collections::HashMap<HashKey, HashPair>),
    ReturnValue(Box<Object>),
    Function(Rc<Function>),
    Builtin(Builtin),
    Error(String),
    Null,
}

impl Object {
    /// The uppercase type name used in error messages, e.g. `not a
    /// function: BOOLEAN` or `unknown operator: INTEGER + STRING`.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Str(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Hash(_) => "HASH",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Error(_) => "ERROR",
            Object::Null => "NULL",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    /// Converts to a [`HashKey`] if this object is usable as one.
    /// Returns `None` for non-hashable types (arrays, hashes, functions...).
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(i) => Some(HashKey::Integer(*i)),
            Object::Boolean(b) => Some(HashKey::Boolean(*b)),
            Object::Str(s) => Some(HashKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(i) => write!(f, "{}", i),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Str(s) => write!(f, "{}", s),
            Object::Null => write!(f, "null"),
            Object::ReturnValue(v) => write!(f, "{}", v),
            Object::Error(msg) => write!(f, "Error: {}", msg),
            Object::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Object::Hash(pairs) => {
                let items: Vec<String> = pairs
                    .values()
                    .map(|pair| format!("{}: {}", pair.key, pair.value))
                    .collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Object::Function(func) => {
                let params: Vec<String> = func.parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_returns_uppercase_type_names() {
        assert_eq!(Object::Integer(5).kind(), "INTEGER");
        assert_eq!(Object::Boolean(true).kind(), "BOOLEAN");
        assert_eq!(Object::Null.kind(), "NULL");
        assert_eq!(Object::Str("hi".into()).kind(), "STRING");
        assert_eq!(Object::Error("oops".into()).kind(), "ERROR");
    }

    #[test]
    fn null_and_false_are_not_truthy() {
        assert!(!Object::Null.is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(Object::Boolean(true).is_truthy());
        assert!(Object::Integer(0).is_truthy());
    }

    #[test]
    fn displays_values_per_pretty_print_contract() {
        assert_eq!(Object::Integer(5).to_string(), "5");
        assert_eq!(Object::Boolean(true).to_string(), "true");
        assert_eq!(Object::Null.to_string(), "null");
        assert_eq!(Object::Error("bad".into()).to_string(), "Error: bad");
        assert_eq!(
            Object::Array(vec![Object::Integer(1), Object::Integer(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn only_integers_booleans_and_strings_are_hashable() {
        assert!(Object::Integer(1).hash_key().is_some());
        assert!(Object::Boolean(true).hash_key().is_some());
        assert!(Object::Str("x".into()).hash_key().is_some());
        assert!(Object::Array(vec![]).hash_key().is_none());
    }
}
