//! The tree-walking evaluator.
//!
//! `eval` recurses over the AST, threading an [`Environment`] and returning
//! an [`Object`]. Error propagation is eager rather than `Result`-based:
//! every intermediate result is checked for [`Object::Error`] before it is
//! used further, matching the runtime-error channel described in
//! `crate::error`. A `RETURN_VALUE` envelope carries an explicit `return`
//! up through nested block statements without being mistaken for a normal
//! fall-through value; it is unwrapped at the `Program` level and at the
//! function-call boundary, but left intact at `BlockStatement` boundaries
//! in between.

use crate::ast::{Expression, Program, Statement};
use crate::builtins;
use crate::environment::Environment;
use crate::object::{HashPair, Object};
use std::collections::HashMap;

pub fn eval_program(program: &Program, env: &Environment) -> Object {
    let mut result = Object::Null;
    for stmt in &program.statements {
        result = eval_statement(stmt, env);
        match result {
            Object::ReturnValue(inner) => return *inner,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_block_statement(statements: &[Statement], env: &Environment) -> Object {
    let mut result = Object::Null;
    for stmt in statements {
        result = eval_statement(stmt, env);
        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Environment) -> Object {
    match stmt {
        Statement::Let(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            env.set(s.name.value.clone(), value.clone());
            value
        }
        Statement::Return(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Expression(s) => eval_expression(&s.expression, env),
        Statement::Block(s) => eval_block_statement(&s.statements, env),
    }
}

fn eval_expression(expr: &Expression, env: &Environment) -> Object {
    match expr {
        Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
        Expression::StringLiteral(lit) => Object::Str(lit.value.clone()),
        Expression::Boolean(lit) => Object::Boolean(lit.value),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => {
            let condition = eval_expression(&expr.condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block_statement(&expr.consequence.statements, env)
            } else if let Some(alt) = &expr.alternative {
                eval_block_statement(&alt.statements, env)
            } else {
                Object::Null
            }
        }
        Expression::FunctionLiteral(lit) => Object::Function(std::rc::Rc::new(crate::object::Function {
            parameters: lit.parameters.clone(),
            body: lit.body.clone(),
            env: env.clone(),
        })),
        Expression::Call(expr) => {
            let function = eval_expression(&expr.function, env);
            if function.is_error() {
                return function;
            }
            let args = match eval_expressions(&expr.arguments, env) {
                Ok(args) => args,
                Err(err) => return err,
            };
            apply_function(function, args)
        }
        Expression::ArrayLiteral(lit) => match eval_expressions(&lit.elements, env) {
            Ok(elements) => Object::Array(elements),
            Err(err) => err,
        },
        Expression::Index(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&expr.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        Expression::HashLiteral(lit) => eval_hash_literal(lit, env),
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return builtin;
    }
    Object::Error(format!("identifier not found: {}", name))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(value) => Object::Integer(-value),
            other => Object::Error(format!("unknown operator: -{}", other.kind())),
        },
        other => Object::Error(format!("unknown operator: {}{}", other, right.kind())),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Str(l), Object::Str(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => Object::Boolean(reference_equal(&left, &right)),
        _ if operator == "!=" => Object::Boolean(!reference_equal(&left, &right)),
        _ if left.kind() != right.kind() => Object::Error(format!(
            "type mismatch: {} {} {}",
            left.kind(),
            operator,
            right.kind()
        )),
        _ => Object::Error(format!(
            "unknown operator: {} {} {}",
            left.kind(),
            operator,
            right.kind()
        )),
    }
}

/// Identity comparison for the singleton-backed `==`/`!=` fallback. For the
/// scalar kinds that reach here (booleans, null), value equality already
/// coincides with singleton identity, so structural `PartialEq` suffices.
fn reference_equal(left: &Object, right: &Object) -> bool {
    left == right
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => Object::Integer(left.div_euclid(right)),
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => Object::Error(format!("unknown operator: INTEGER {} INTEGER", other)),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::Str(format!("{}{}", left, right)),
        other => Object::Error(format!("unknown operator: STRING {} STRING", other)),
    }
}

fn eval_expressions(
    exprs: &[Expression],
    env: &Environment,
) -> Result<Vec<Object>, Object> {
    let mut result = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let evaluated = eval_expression(expr, env);
        if evaluated.is_error() {
            return Err(evaluated);
        }
        result.push(evaluated);
    }
    Ok(result)
}

fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function(func) => {
            let call_env = Environment::new_enclosed(func.env.clone());
            for (param, arg) in func.parameters.iter().zip(args) {
                call_env.set(param.value.clone(), arg);
            }
            match eval_block_statement(&func.body.statements, &call_env) {
                Object::ReturnValue(inner) => *inner,
                other => other,
            }
        }
        Object::Builtin(builtin) => (builtin.func)(&args),
        other => Object::Error(format!("not a function: {}", other.kind())),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(items), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= items.len() {
                Object::Null
            } else {
                items[*i as usize].clone()
            }
        }
        (Object::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null),
            None => Object::Error(format!("unusable as hash key: {}", key.kind())),
        },
        _ => Object::Error(format!("index operator not supported: {}", left.kind())),
    }
}

fn eval_hash_literal(lit: &crate::ast::HashLiteral, env: &Environment) -> Object {
    let mut pairs = HashMap::new();
    for (key_expr, value_expr) in &lit.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Object::Error(format!("unusable as hash key: {}", key.kind())),
        };
        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }
        pairs.insert(hash_key, HashPair { key, value });
    }
    Object::Hash(pairs)
}

/// Convenience entry point: parses and evaluates `input` against `env`.
pub fn eval_source(input: &str, env: &Environment) -> Result<Object, crate::error::ParseError> {
    let lexer = crate::lexer::Lexer::new(input);
    let mut parser = crate::parser::Parser::new(lexer);
    let program = parser.parse_program()?;
    Ok(eval_program(&program, env))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> Object {
        let env = Environment::new();
        eval_source(input, &env).expect("program should parse")
    }

    #[test]
    fn evaluates_integer_arithmetic() {
        assert_eq!(
            eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"),
            Object::Integer(50)
        );
    }

    #[test]
    fn nested_return_unwraps_at_the_right_boundary() {
        let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
        assert_eq!(eval(input), Object::Integer(10));
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let input =
            "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);";
        assert_eq!(eval(input), Object::Integer(4));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            eval(r#""Hello" + " " + "World!""#),
            Object::Str("Hello World!".into())
        );
    }

    #[test]
    fn function_key_in_hash_index_is_unusable() {
        assert_eq!(
            eval(r#"{"name": "Monkey"}[fn(x){x}]"#),
            Object::Error("unusable as hash key: FUNCTION".into())
        );
    }

    #[test]
    fn error_short_circuits_through_containing_expressions() {
        assert_eq!(
            eval("5 + true;"),
            Object::Error("type mismatch: INTEGER + BOOLEAN".into())
        );
        assert_eq!(
            eval("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }"),
            Object::Error("unknown operator: BOOLEAN + BOOLEAN".into())
        );
    }

    #[test]
    fn singleton_equality_matches_reference_identity() {
        assert_eq!(eval("true == true"), Object::Boolean(true));
        assert_eq!(eval("false == false"), Object::Boolean(true));
        assert_eq!(eval("true != false"), Object::Boolean(true));
    }

    #[test]
    fn array_out_of_range_yields_null_not_an_error() {
        assert_eq!(eval("[1, 2, 3][3]"), Object::Null);
        assert_eq!(eval("[1, 2, 3][-1]"), Object::Null);
    }

    #[test]
    fn push_does_not_mutate_the_source_array() {
        assert_eq!(
            eval("let a = [1, 2]; let b = push(a, 3); len(a);"),
            Object::Integer(2)
        );
    }

    #[test]
    fn unbound_identifier_falls_back_to_builtins_then_errors() {
        assert_eq!(eval("len(\"hi\")"), Object::Integer(2));
        assert_eq!(
            eval("nonexistent"),
            Object::Error("identifier not found: nonexistent".into())
        );
    }

    #[test]
    fn integer_division_floors_toward_negative_infinity() {
        assert_eq!(eval("5 / 2"), Object::Integer(2));
        assert_eq!(eval("-7 / 2"), Object::Integer(-4));
    }

    #[test]
    fn hash_literal_with_mixed_key_kinds() {
        assert_eq!(
            eval(r#"{"one": 1, true: 5, 4: 4}[true]"#),
            Object::Integer(5)
        );
        assert_eq!(eval("{}[\"foo\"]"), Object::Null);
    }

    #[test]
    fn extra_call_arguments_are_ignored() {
        assert_eq!(eval("let f = fn(x) { x }; f(1, 2, 3);"), Object::Integer(1));
    }

    #[test]
    fn missing_call_arguments_leave_parameters_unbound() {
        assert_eq!(
            eval("let f = fn(x) { x }; f();"),
            Object::Error("identifier not found: x".into())
        );
    }

    #[test]
    fn not_a_function_error_names_the_offending_kind() {
        assert_eq!(
            eval("let notAFunction = 5; notAFunction();"),
            Object::Error("not a function: INTEGER".into())
        );
    }
}
