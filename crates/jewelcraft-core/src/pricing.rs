//! Price estimation from a design selection.
//!
//! `price = base[type] × metal[metal]`, then for a gem
//! `× (1 + gem[gem] × carats × 0.5) × (1 + count × 0.2)`, rounded to cents.
//! Numeric fields are clamped before pricing, so any selection has a price.

use crate::selection::{DesignSelection, GemType, JewelryType, MetalType};

/// Base price in dollars before metal and gem adjustments.
pub fn base_price(jewelry_type: JewelryType) -> f64 {
    match jewelry_type {
        JewelryType::Ring => 200.0,
        JewelryType::Necklace => 300.0,
        JewelryType::Earrings => 250.0,
        JewelryType::Bracelet => 350.0,
    }
}

pub fn metal_multiplier(metal: MetalType) -> f64 {
    match metal {
        MetalType::Gold => 1.5,
        MetalType::Silver => 1.0,
        MetalType::Platinum => 2.0,
        MetalType::RoseGold => 1.7,
        MetalType::WhiteGold => 1.6,
        MetalType::Titanium => 1.3,
    }
}

pub fn gem_multiplier(gem: GemType) -> f64 {
    match gem {
        GemType::Diamond => 3.0,
        GemType::Ruby => 2.5,
        GemType::Sapphire => 2.2,
        GemType::Emerald => 2.7,
        GemType::Amethyst => 1.5,
        GemType::Topaz => 1.3,
    }
}

/// Estimated price in dollars, rounded to two decimal places.
pub fn price(selection: &DesignSelection) -> f64 {
    let s = selection.clamped();
    let mut price = base_price(s.jewelry_type) * metal_multiplier(s.metal_type);

    if let Some(gem) = s.gem_type {
        price *= 1.0 + gem_multiplier(gem) * s.gem_size * 0.5;
        price *= 1.0 + f64::from(s.gem_count) * 0.2;
    }

    round_cents(price)
}

/// Two-decimal rendering used in descriptions and saved records: `"300.00"`.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
