// Domain types and value objects
mod asset;
mod category;
mod filter;

// Re-export commonly used types to the world
pub use asset::{Asset, AssetDetail};
pub use category::{Category, CategoryFilter, CategoryInfo};
pub use filter::{FilterDescriptor, SortDirection, SortKey};
