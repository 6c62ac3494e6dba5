//! 动作注册辅助
//! Action registry helpers
//!
//! Aggregates the schemas of a set of actions into the collection shapes a
//! tool-calling API wants: a name-keyed lookup table or an ordered list.

use crate::action::DescribedAction;
use crate::error::ActionResult;
use crate::schema::FunctionSchema;
use std::collections::HashMap;

/// Build a name-keyed lookup from each action's schema.
///
/// If two actions resolve to the same name, the later one in input order
/// silently overwrites the earlier. Keeping names unique is the caller's
/// responsibility; this helper does not enforce it.
pub fn map_functions(
    actions: &[&dyn DescribedAction],
) -> ActionResult<HashMap<String, FunctionSchema>> {
    let mut functions = HashMap::with_capacity(actions.len());
    for action in actions {
        let schema = action.schema()?;
        functions.insert(schema.name.clone(), schema);
    }
    Ok(functions)
}

/// Return the ordered sequence of schemas, one per action.
///
/// Preserves input order and duplicates exactly.
pub fn list_functions(actions: &[&dyn DescribedAction]) -> ActionResult<Vec<FunctionSchema>> {
    actions.iter().map(|action| action.schema()).collect()
}
