//! Core runtime for orderly: sort expressions, field-path resolution, the
//! multi-key ordering plan, pagination, and the ergonomics exported via the
//! `prelude`.
#![warn(unreachable_pub)]

extern crate self as orderly;

// public exports are one module level down
pub mod config;
pub mod error;
pub mod model;
pub mod obs;
pub mod order;
pub mod page;
pub mod resolve;
pub mod sort;
pub mod spec;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use orderly_derive::Sortable;
pub use traits::Sortable;

///
/// Prelude
///
/// Prelude contains the vocabulary needed to sort and page records.
/// Metrics, caches, and model internals are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        Sortable,
        config::{SortConfig, UnknownFieldPolicy},
        error::{FieldNotFoundError, SortError},
        order::{OrderPlan, apply, try_apply},
        page::{PageSpec, Paged, page},
        sort::{Sorter, order_by, sort, sort_or, sort_or_with, sort_page},
        spec::{Direction, SortKey, SortSpec},
        value::Value,
    };
}
