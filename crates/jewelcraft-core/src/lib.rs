//! Core design types, pricing, and saved-design records for Jewelcraft.

pub mod error;
pub mod pricing;
pub mod record;
pub mod selection;

pub use error::CoreError;
pub use pricing::{format_price, price};
pub use record::DesignRecord;
pub use selection::{
    CustomShapeId, DesignSelection, GemType, JewelryType, MetalType, Shape, format_gem_size,
};
