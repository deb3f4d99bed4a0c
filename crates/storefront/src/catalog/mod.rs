//! Product search, filter, and sort pipeline.
//!
//! The mobile app drives this per keystroke: the raw search string is parsed
//! into a [`SearchIntent`] by [`intent::interpret`], which is then combined
//! with the explicit category/sort selections and applied to the in-memory
//! product list by [`filter::apply`]. Everything here is pure and
//! synchronous; catalog data arrives already fetched.

pub mod filter;
pub mod intent;

pub use filter::{CategoryFilter, SortMode, apply, best_selling};
pub use intent::{SearchIntent, interpret};
