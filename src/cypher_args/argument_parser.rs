use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::graphql_parser::ast::{Argument, Value};

/// Variable values resolved for the current request.
pub type Variables = JsonMap<String, JsonValue>;

/// Parameters handed to the Cypher executor, in insertion order.
pub type ParamMap = JsonMap<String, JsonValue>;

/// Flatten request arguments into a parameter map.
///
/// Literals are coerced by kind. A variable argument is looked up under the
/// *argument's* name, which callers bind to the same key as the variable; an
/// unbound one is left out of the map rather than defaulted.
pub fn parse_args(args: &[Argument], variables: &Variables) -> ParamMap {
    let mut params = ParamMap::new();

    for arg in args {
        let value = match &arg.value {
            Value::Variable(variable) => match variables.get(&arg.name) {
                Some(bound) => bound.clone(),
                None => {
                    log::debug!(
                        "No binding for argument `{}` (variable ${}), leaving it unset",
                        arg.name,
                        variable
                    );
                    continue;
                }
            },
            literal => match literal.to_json(variables) {
                Some(value) => value,
                None => continue,
            },
        };
        params.insert(arg.name.clone(), value);
    }

    params
}
