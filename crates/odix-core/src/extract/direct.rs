//! Direct-comparison matcher: a bare field name immediately preceding a
//! comparison or string operator, e.g. `Name eq 'x'` or `Price gt 10`.

use regex::Regex;
use std::sync::LazyLock;

/// Operator keywords that may follow a field name. Matching is
/// case-insensitive; the keywords themselves are never field names.
pub(crate) const OPERATORS: [&str; 11] = [
    "eq",
    "ne",
    "gt",
    "ge",
    "lt",
    "le",
    "has",
    "in",
    "startswith",
    "endswith",
    "contains",
];

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = OPERATORS.join("|");
    Regex::new(&format!(r"(?i)(\w+)\s+(?:{alternation})\s")).expect("operator pattern is valid")
});

fn is_operator(word: &str) -> bool {
    OPERATORS.iter().any(|op| word.eq_ignore_ascii_case(op))
}

/// Scans `value` for direct comparisons and appends each newly seen field
/// name to `fields` in match order.
pub(super) fn scan(value: &str, fields: &mut Vec<String>) {
    for caps in PATTERN.captures_iter(value) {
        let name = &caps[1];
        if is_operator(name) {
            continue;
        }
        super::push_unique(fields, name);
    }
}
