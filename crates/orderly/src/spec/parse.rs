use crate::spec::{Direction, SortKey, SortSpec};

const DIRECTIVE_SEPARATOR: char = ',';
const DESCENDING_TOKEN: &str = "DESC";

/// True when `s` is empty or consists only of whitespace.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// Parse a sort expression; blank input falls back to the default expression.
pub(super) fn parse(expression: &str, default_expression: &str) -> SortSpec {
    let expression = if is_blank(expression) {
        default_expression
    } else {
        expression
    };

    expression
        .split(DIRECTIVE_SEPARATOR)
        .filter(|directive| !is_blank(directive))
        .map(parse_directive)
        .collect()
}

// Parse one `field [direction]` directive.
//
// A direction is honoured only when exactly two tokens are present; any other
// shape keeps the first token as the field and sorts ascending.
fn parse_directive(directive: &str) -> SortKey {
    let mut tokens = directive.split_whitespace();
    let field = tokens.next().unwrap_or_default();

    let direction = match (tokens.next(), tokens.next()) {
        (Some(token), None) if token.eq_ignore_ascii_case(DESCENDING_TOKEN) => Direction::Desc,
        _ => Direction::Asc,
    };

    SortKey::new(field, direction)
}
