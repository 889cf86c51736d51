//! Host-implemented functions resolved by name when an identifier isn't
//! bound in any environment frame. Mirrors `BUILTINS` in the reference
//! implementation's `builtins` module: a fixed, case-sensitive name table,
//! each entry a plain function from an argument slice to a result object.

use crate::object::{Builtin, Object};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::Write;

pub(crate) static BUILTINS: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let entries: [(&'static str, crate::object::BuiltinFn); 6] = [
        ("len", len),
        ("first", first),
        ("last", last),
        ("rest", rest),
        ("push", push),
        ("puts", puts),
    ];
    entries
        .into_iter()
        .map(|(name, func)| (name, Builtin { name, func }))
        .collect()
});

/// Looks up `name` in the builtin table.
pub fn lookup(name: &str) -> Option<Object> {
    BUILTINS.get(name).cloned().map(Object::Builtin)
}

fn wrong_arity(got: usize, want: usize) -> Object {
    Object::Error(format!(
        "wrong number of arguments. got={}, want={}",
        got, want
    ))
}

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Str(s) => Object::Integer(s.len() as i64),
        Object::Array(items) => Object::Integer(items.len() as i64),
        other => Object::Error(format!(
            "argument to `len` not supported, got {}",
            other.kind()
        )),
    }
}

fn first(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(items) => items.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn last(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(items) => items.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn rest(args: &[Object]) -> Object {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }
    match &args[0] {
        Object::Array(items) => {
            if items.is_empty() {
                Object::Null
            } else {
                Object::Array(items[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn push(args: &[Object]) -> Object {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }
    match &args[0] {
        Object::Array(items) => {
            let mut next = items.clone();
            next.push(args[1].clone());
            Object::Array(next)
        }
        other => Object::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.kind()
        )),
    }
}

fn puts(args: &[Object]) -> Object {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for arg in args {
        let _ = writeln!(handle, "{}", arg);
    }
    Object::Null
}
