//! Report which fields of an order document fail simple checks
//!
//! The checks walk the document through a tracked view and attach the
//! resolved path to every failure, so the report points at the exact field
//! without the checks threading keys and indices around themselves.
//!
//! Run with `RUST_LOG=trace` to watch the navigation:
//! ```text
//! cargo run --example validation_report
//! ```

use anyhow::{anyhow, Result};
use pathtrace::{wrap, PathSegment, TrackedView, ValuePath};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

struct Failure {
    path: ValuePath,
    message: String,
}

fn dotted(path: &ValuePath) -> String {
    path.iter()
        .map(|segment| match segment {
            PathSegment::Key(key) => key.clone(),
            PathSegment::Index(index) => index.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn check_line(line: &TrackedView<'_, Value>, failures: &mut Vec<Failure>) {
    let (quantity, path) = line.resolve("quantity").into_tuple();
    match quantity.and_then(Value::as_i64) {
        Some(n) if n > 0 => {}
        Some(n) => failures.push(Failure {
            path,
            message: format!("quantity must be positive, got {}", n),
        }),
        None => failures.push(Failure {
            path,
            message: "quantity is required".into(),
        }),
    }

    let (sku, path) = line.resolve("sku").into_tuple();
    if sku.and_then(Value::as_str).map_or(true, str::is_empty) {
        failures.push(Failure {
            path,
            message: "sku must be a non-empty string".into(),
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let order = json!({
        "id": "ord-1001",
        "customer": { "email": "" },
        "lines": [
            { "sku": "A-1", "quantity": 2 },
            { "sku": "", "quantity": 0 },
            { "quantity": 1 }
        ]
    });

    let root = wrap(&order)?;
    let mut failures = Vec::new();

    let customer = root
        .navigate("customer")
        .into_view()
        .ok_or_else(|| anyhow!("order has no customer object"))?;
    let (email, path) = customer.resolve("email").into_tuple();
    if !email.and_then(Value::as_str).is_some_and(|e| e.contains('@')) {
        failures.push(Failure {
            path,
            message: "email must contain '@'".into(),
        });
    }

    let lines = root
        .navigate("lines")
        .into_view()
        .ok_or_else(|| anyhow!("order has no lines array"))?;
    let count = lines.node().as_array().map_or(0, Vec::len);
    for index in 0..count {
        if let Some(line) = lines.navigate(index).into_view() {
            check_line(&line, &mut failures);
        }
    }

    if failures.is_empty() {
        println!("order is valid");
        return Ok(());
    }
    for failure in &failures {
        println!("{}: {}", dotted(&failure.path), failure.message);
    }
    Err(anyhow!("{} field(s) failed validation", failures.len()))
}
