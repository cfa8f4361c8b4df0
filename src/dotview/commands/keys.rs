use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::view::{wrap, Wrapped};
use serde_json::Value;

/// List the attribute names of the mapping at `path`, after renaming.
pub fn run(document: &Value, path: &str) -> Result<CmdResult> {
    let found = wrap(document).path(path)?;
    let mut result = CmdResult::default();
    match &found {
        Wrapped::View(view) => {
            let keys = view.keys().into_iter().map(str::to_string).collect();
            result = result.with_listed_keys(keys);
        }
        Wrapped::Seq(items) => result.add_message(CmdMessage::warning(format!(
            "'{}' is a sequence of {} items, not a mapping",
            path,
            items.len()
        ))),
        Wrapped::Raw(_) => result.add_message(CmdMessage::warning(format!(
            "'{}' is a scalar, not a mapping",
            path
        ))),
    }
    Ok(result)
}
