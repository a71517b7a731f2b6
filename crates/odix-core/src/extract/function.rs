//! Function-argument matcher: a bare field name as the sole argument of a
//! recognized scalar function call, e.g. `tolower(Name)` or `year(Start)`.

use regex::Regex;
use std::sync::LazyLock;

/// Scalar functions whose single argument is taken as a field name.
/// Matching is case-insensitive.
pub(crate) const FUNCTIONS: [&str; 15] = [
    "tolower",
    "toupper",
    "trim",
    "substring",
    "concat",
    "year",
    "month",
    "day",
    "hour",
    "minute",
    "second",
    "round",
    "floor",
    "ceiling",
    "cast",
];

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = FUNCTIONS.join("|");
    Regex::new(&format!(r"(?i)(?:{alternation})\((\w+)\)")).expect("function pattern is valid")
});

/// Scans `value` for function-wrapped references and appends each newly seen
/// field name to `fields` in match order.
pub(super) fn scan(value: &str, fields: &mut Vec<String>) {
    for caps in PATTERN.captures_iter(value) {
        super::push_unique(fields, &caps[1]);
    }
}
