//! Reference pages for JavaScript built-ins

use std::collections::HashMap;

/// Base URL of the MDN global objects reference
pub const MDN_GLOBAL_OBJECTS: &str =
    "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/";

/// Built-in names paired with their page under [`MDN_GLOBAL_OBJECTS`]
const GLOBAL_OBJECTS: &[(&str, &str)] = &[
    ("Arguments", "arguments"),
    ("Array", "Array"),
    ("Boolean", "Boolean"),
    ("Date", "Date"),
    ("Error", "Error"),
    ("EvalError", "EvalError"),
    ("Function", "Function"),
    ("Infinity", "Infinity"),
    ("JSON", "JSON"),
    ("Map", "Map"),
    ("Math", "Math"),
    ("NaN", "NaN"),
    ("Number", "Number"),
    ("Object", "Object"),
    ("Promise", "Promise"),
    ("RangeError", "RangeError"),
    ("ReferenceError", "ReferenceError"),
    ("RegExp", "RegExp"),
    ("Set", "Set"),
    ("String", "String"),
    ("Symbol", "Symbol"),
    ("SyntaxError", "SyntaxError"),
    ("TypeError", "TypeError"),
    ("URIError", "URIError"),
    ("boolean", "Boolean"),
    ("number", "Number"),
    ("string", "String"),
    ("undefined", "undefined"),
];

const NULL_PAGE: &str = "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/null";

/// The built-in extern link table
///
/// Covers every native primitive the type formatter links.
#[must_use]
pub fn default_externs() -> HashMap<String, String> {
    let mut externs: HashMap<String, String> = GLOBAL_OBJECTS
        .iter()
        .map(|(name, page)| ((*name).to_string(), format!("{MDN_GLOBAL_OBJECTS}{page}")))
        .collect();
    externs.insert("null".to_string(), NULL_PAGE.to_string());
    externs
}
