use super::literal::filter_map_literal;
use crate::config::TranslatorConfig;
use crate::graphql_parser::ast::Selection;

/// Inline filter literal from the first selection's non-pagination arguments.
///
/// Returns `""` when there is no selection or every argument is a pagination
/// argument. List values render as list literals; membership (`IN`) filters
/// are not expressed here.
pub fn inner_filter_params(selections: &[Selection]) -> String {
    inner_filter_params_with(selections, &TranslatorConfig::default())
}

pub fn inner_filter_params_with(selections: &[Selection], config: &TranslatorConfig) -> String {
    let Some(head) = selections.first() else {
        return String::new();
    };

    let mut filters = head
        .arguments()
        .iter()
        .filter(|arg| !config.is_pagination_argument(&arg.name))
        .peekable();

    if filters.peek().is_none() {
        return String::new();
    }
    filter_map_literal(filters.map(|arg| (arg.name.as_str(), &arg.value)))
}
