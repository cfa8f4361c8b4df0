use crate::commands::CmdResult;
use crate::error::{DotviewError, Result};
use crate::view::{wrap, Attr};
use serde_json::Value;

/// Invoke a mapping operation (`keys`, `get`, `len`, ...) on the mapping at `path`.
///
/// Each argument is parsed as JSON when it can be, and taken as a plain
/// string otherwise, so `get name` and `get '"name"'` mean the same thing.
pub fn run(document: &Value, path: &str, method: &str, args: &[String]) -> Result<CmdResult> {
    let target = wrap(document).path(path)?;
    let view = target
        .as_view()
        .ok_or_else(|| DotviewError::attribute_not_found(method))?;

    match view.get(method)? {
        Attr::Method(bound) => {
            tracing::debug!(method = bound.method().name(), path, "calling mapping operation");
            let args: Vec<Value> = args.iter().map(|a| parse_arg(a)).collect();
            let value = bound.call(&args)?;
            Ok(CmdResult::default().with_values(vec![value]))
        }
        Attr::Value(_) => Err(DotviewError::NotAnOperation(method.to_string())),
    }
}

fn parse_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}
