//! Question bank: static categories and lookups into them.

pub mod data;
pub mod types;

pub use data::{all_categories, find_category, ALL_CATEGORIES};
pub use types::{Category, ContentError, Question};
