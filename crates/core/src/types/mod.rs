//! Domain types shared across Sparkshop crates.

mod catalog;
mod id;
mod order;
mod settings;

pub use catalog::{Banner, Category, Product};
pub use id::{BannerId, CategoryId, OrderId, ProductId};
pub use order::{Order, OrderItem, TimelineStep};
pub use settings::StoreSettings;
