//! Attribute names as callers spell them (`aria_label`,
//! `data_turbo_method`) versus how they appear in markup
//! (`aria-label`, `data-turbo-method`).

/// Replace underscores by dashes. Case is left alone, SVG has
/// case-sensitive attribute names like `viewBox`.
pub fn dasherize(name: &str) -> String {
    name.replace('_', "-")
}

/// Whether `name` can be printed as an attribute name as is: not
/// empty, no whitespace, control characters, quotes, `<`, `>`, `/` or
/// `=`.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| c.is_whitespace() || c.is_control()
                             || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}
