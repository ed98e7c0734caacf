//! Default operations provider with a small built-in library.

use parking_lot::RwLock;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::sync::Arc;
use weave_core::DependencyLogger;
use weave_core::contracts::{LogRecord, Operation, OperationsProvider};

/// Operations looked up by name, seeded with [`builtin_operations`].
///
/// Evaluating an unknown operation logs a warning through the container's
/// logger and yields `None`.
pub struct DefaultOperations<D> {
    dependencies: D,
    operations: RwLock<HashMap<String, Operation>>,
}

impl<D> DefaultOperations<D> {
    /// Create a provider with the built-in operations registered.
    pub fn new(dependencies: D) -> Self {
        let operations = builtin_operations()
            .into_iter()
            .map(|(name, op)| (name.to_owned(), op))
            .collect();
        Self {
            dependencies,
            operations: RwLock::new(operations),
        }
    }
}

impl<D> OperationsProvider for DefaultOperations<D>
where
    D: DependencyLogger + Send + Sync,
{
    fn register(&self, name: &str, operation: Operation) {
        self.operations.write().insert(name.to_owned(), operation);
    }

    fn is_registered(&self, name: &str) -> bool {
        self.operations.read().contains_key(name)
    }

    fn evaluate(&self, name: &str, args: &[Value]) -> Option<Value> {
        let operation = self.operations.read().get(name).cloned();
        match operation {
            Some(operation) => Some(operation(args)),
            None => {
                self.dependencies.logger().log(&LogRecord::warning(
                    "operations",
                    format!("unknown operation `{name}`"),
                ));
                None
            }
        }
    }
}

fn numbers(args: &[Value]) -> Option<Vec<f64>> {
    args.iter().map(Value::as_f64).collect()
}

fn bools(args: &[Value]) -> Option<Vec<bool>> {
    args.iter().map(Value::as_bool).collect()
}

/// Whole results come back as integers so `6 / 3` equals `2`.
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

fn arithmetic(args: &[Value], fold: fn(f64, f64) -> Option<f64>) -> Value {
    numbers(args)
        .and_then(|ns| {
            let (first, rest) = ns.split_first()?;
            rest.iter().try_fold(*first, |acc, n| fold(acc, *n))
        })
        .map_or(Value::Null, number)
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn op(operation: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Operation {
    Arc::new(operation)
}

/// The operations every [`DefaultOperations`] starts with.
///
/// Type mismatches yield [`Value::Null`].
pub fn builtin_operations() -> Vec<(&'static str, Operation)> {
    vec![
        ("sum", op(|args| arithmetic(args, |a, b| Some(a + b)))),
        ("subtract", op(|args| arithmetic(args, |a, b| Some(a - b)))),
        ("multiply", op(|args| arithmetic(args, |a, b| Some(a * b)))),
        (
            "divide",
            op(|args| arithmetic(args, |a, b| (b != 0.0).then(|| a / b))),
        ),
        (
            "condition",
            op(|args| match args {
                [Value::Bool(cond), then, otherwise] => {
                    if *cond { then.clone() } else { otherwise.clone() }
                }
                _ => Value::Null,
            }),
        ),
        (
            "not",
            op(|args| match args {
                [Value::Bool(b)] => Value::Bool(!b),
                _ => Value::Null,
            }),
        ),
        (
            "and",
            op(|args| {
                bools(args).map_or(Value::Null, |bs| Value::Bool(bs.iter().all(|b| *b)))
            }),
        ),
        (
            "or",
            op(|args| {
                bools(args).map_or(Value::Null, |bs| Value::Bool(bs.iter().any(|b| *b)))
            }),
        ),
        (
            "concat",
            op(|args| {
                args.iter()
                    .map(|v| v.as_str().map(str::to_owned))
                    .collect::<Option<String>>()
                    .map_or(Value::Null, Value::String)
            }),
        ),
        (
            "isEmpty",
            op(|args| match args {
                [value] => Value::Bool(is_empty(value)),
                _ => Value::Null,
            }),
        ),
        (
            "length",
            op(|args| match args {
                [Value::String(s)] => Value::from(s.chars().count()),
                [Value::Array(items)] => Value::from(items.len()),
                [Value::Object(map)] => Value::from(map.len()),
                _ => Value::Null,
            }),
        ),
    ]
}
