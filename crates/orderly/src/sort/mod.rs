//! Composed entry points: parse an expression, order, and optionally page.
//!
//! Every function here degrades to the input order when a requested field
//! does not resolve; use [`crate::order::try_apply`] to observe the failure.


use crate::{
    config::SortConfig,
    error::ConfigError,
    order::{self, OrderOptions},
    page::{PageSpec, Paged},
    spec::{Direction, SortKey, SortSpec, is_blank},
    traits::Sortable,
};

/// Order `rows` by `expression`.
/// A blank expression leaves `rows` unsorted.
#[must_use]
pub fn sort<T: Sortable>(rows: Vec<T>, expression: &str) -> Vec<T> {
    order::apply(rows, &SortSpec::parse(expression, ""))
}

/// Order `rows` by `expression`, or by `default_key` ascending when the
/// expression is blank.
#[must_use]
pub fn sort_or<T: Sortable>(rows: Vec<T>, expression: &str, default_key: &str) -> Vec<T> {
    sort_or_with(rows, expression, default_key, Direction::Asc)
}

/// Order `rows` by `expression`, or by `default_key` in `direction` when the
/// expression is blank.
#[must_use]
pub fn sort_or_with<T: Sortable>(
    rows: Vec<T>,
    expression: &str,
    default_key: &str,
    direction: Direction,
) -> Vec<T> {
    let spec = if is_blank(expression) {
        single_key(default_key, direction)
    } else {
        SortSpec::parse(expression, "")
    };

    order::apply(rows, &spec)
}

/// Order `rows` by a single field path.
#[must_use]
pub fn order_by<T: Sortable>(rows: Vec<T>, field: &str, direction: Direction) -> Vec<T> {
    order::apply(rows, &single_key(field, direction))
}

/// Order `rows` by `expression` (or `default_expression` when blank), then
/// cut the `[start, start + size)` page.
#[must_use]
pub fn sort_page<T: Sortable>(
    rows: Vec<T>,
    expression: &str,
    default_expression: &str,
    start: i64,
    size: i64,
) -> Vec<T> {
    let sorted = order::apply(rows, &SortSpec::parse(expression, default_expression));

    PageSpec::new(start, size).apply(sorted)
}

// A blank field yields the empty (pass-through) spec.
fn single_key(field: &str, direction: Direction) -> SortSpec {
    if is_blank(field) {
        return SortSpec::new();
    }

    SortSpec::new().then(SortKey::new(field.trim(), direction))
}

///
/// Sorter
///
/// Configured front door for list endpoints.
/// Applies the configured default expression, unknown-field policy, text
/// collation and page-size cap to every request.
///

#[derive(Clone, Debug, Default)]
pub struct Sorter {
    config: SortConfig,
    options: OrderOptions,
}

impl Sorter {
    #[must_use]
    pub fn new(config: SortConfig) -> Self {
        let options = config.order_options();

        Self { config, options }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        SortConfig::from_toml_str(s).map(Self::new)
    }

    #[must_use]
    pub const fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Parse `expression` with the configured default as fallback.
    #[must_use]
    pub fn spec(&self, expression: &str) -> SortSpec {
        SortSpec::parse(expression, self.config.default_sort())
    }

    /// Page spec for a raw request, capped at the configured maximum.
    #[must_use]
    pub fn page_spec(&self, start: i64, size: i64) -> PageSpec {
        let page = PageSpec::new(start, size);

        match self.config.max_page_size {
            Some(max) => page.with_max_size(max),
            None => page,
        }
    }

    #[must_use]
    pub fn sort<T: Sortable>(&self, rows: Vec<T>, expression: &str) -> Vec<T> {
        order::apply_with(rows, &self.spec(expression), self.options)
    }

    #[must_use]
    pub fn sort_page<T: Sortable>(
        &self,
        rows: Vec<T>,
        expression: &str,
        start: i64,
        size: i64,
    ) -> Vec<T> {
        self.page_spec(start, size).apply(self.sort(rows, expression))
    }

    /// Like [`Self::sort_page`], keeping the totals of the full sequence.
    #[must_use]
    pub fn paged<T: Sortable>(
        &self,
        rows: Vec<T>,
        expression: &str,
        start: i64,
        size: i64,
    ) -> Paged<T> {
        self.page_spec(start, size).paged(self.sort(rows, expression))
    }
}
