use super::errors::TranslateError;
use crate::graphql_parser::ast::{FragmentTable, Selection};

/// Replace fragment spreads with the selections of the named fragment.
///
/// Only one level is expanded: spreads nested inside an expanded fragment are
/// kept as they are. Inline fragments and fields pass through untouched.
pub fn extract_selections(
    selections: &[Selection],
    fragments: &FragmentTable,
) -> Result<Vec<Selection>, TranslateError> {
    let mut flattened = Vec::with_capacity(selections.len());

    for selection in selections {
        match selection {
            Selection::FragmentSpread(spread) => {
                let fragment = fragments
                    .get(&spread.name)
                    .ok_or_else(|| TranslateError::FragmentNotFound(spread.name.clone()))?;
                log::debug!(
                    "Expanding fragment `{}` ({} selections)",
                    spread.name,
                    fragment.selection_set.len()
                );
                flattened.extend(fragment.selection_set.iter().cloned());
            }
            other => flattened.push(other.clone()),
        }
    }

    Ok(flattened)
}
