pub mod filter_sort;

pub use filter_sort::{apply, matches_search};
