//! The design selection: every option a customer can pick for one piece.
//!
//! Enum values serialise in kebab-case (`rose-gold`) and the selection itself
//! uses camelCase keys, so a selection round-trips through the same JSON shape
//! the design UI stores. Missing keys fall back to [`DesignSelection::default`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const MIN_GEM_SIZE: f64 = 0.5;
pub const MAX_GEM_SIZE: f64 = 3.0;
pub const DEFAULT_GEM_SIZE: f64 = 1.0;

pub const MIN_GEM_COUNT: u32 = 1;
pub const MAX_GEM_COUNT: u32 = 7;
pub const DEFAULT_GEM_COUNT: u32 = 1;

pub const MIN_RING_SIZE: f64 = 4.0;
pub const MAX_RING_SIZE: f64 = 13.0;
pub const DEFAULT_RING_SIZE: f64 = 7.0;

/// Engravings longer than this are cut, never rejected.
pub const MAX_ENGRAVING_CHARS: usize = 20;

/// Prefix shared by every freehand shape id.
pub const CUSTOM_SHAPE_PREFIX: &str = "custom-";

// ── Enumerations ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JewelryType {
    #[default]
    Ring,
    Necklace,
    Earrings,
    Bracelet,
}

impl JewelryType {
    pub const ALL: [Self; 4] = [Self::Ring, Self::Necklace, Self::Earrings, Self::Bracelet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Necklace => "necklace",
            Self::Earrings => "earrings",
            Self::Bracelet => "bracelet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ring => "Ring",
            Self::Necklace => "Necklace",
            Self::Earrings => "Earrings",
            Self::Bracelet => "Bracelet",
        }
    }
}

impl FromStr for JewelryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownJewelryType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetalType {
    #[default]
    Gold,
    Silver,
    Platinum,
    RoseGold,
    WhiteGold,
    Titanium,
}

impl MetalType {
    pub const ALL: [Self; 6] = [
        Self::Gold,
        Self::Silver,
        Self::Platinum,
        Self::RoseGold,
        Self::WhiteGold,
        Self::Titanium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Platinum => "platinum",
            Self::RoseGold => "rose-gold",
            Self::WhiteGold => "white-gold",
            Self::Titanium => "titanium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Platinum => "Platinum",
            Self::RoseGold => "Rose Gold",
            Self::WhiteGold => "White Gold",
            Self::Titanium => "Titanium",
        }
    }
}

impl FromStr for MetalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownMetal(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GemType {
    Diamond,
    Ruby,
    Sapphire,
    Emerald,
    Amethyst,
    Topaz,
}

impl GemType {
    pub const ALL: [Self; 6] = [
        Self::Diamond,
        Self::Ruby,
        Self::Sapphire,
        Self::Emerald,
        Self::Amethyst,
        Self::Topaz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Ruby => "ruby",
            Self::Sapphire => "sapphire",
            Self::Emerald => "emerald",
            Self::Amethyst => "amethyst",
            Self::Topaz => "topaz",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Diamond => "Diamond",
            Self::Ruby => "Ruby",
            Self::Sapphire => "Sapphire",
            Self::Emerald => "Emerald",
            Self::Amethyst => "Amethyst",
            Self::Topaz => "Topaz",
        }
    }
}

impl FromStr for GemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownGem(s.to_string()))
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(JewelryType, MetalType, GemType);

// ── Shapes ──

/// Opaque reference to externally stored freehand art, e.g. `custom-1`.
///
/// The contents behind the id are never read here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomShapeId(String);

impl CustomShapeId {
    /// Wrap an id. Ids missing the `custom-` prefix get it prepended.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.starts_with(CUSTOM_SHAPE_PREFIX) {
            Self(id)
        } else {
            Self(format!("{CUSTOM_SHAPE_PREFIX}{id}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Gem (or motif) outline: one of the stock shapes or a custom drawing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shape {
    #[default]
    Round,
    Square,
    Triangle,
    Heart,
    Hexagon,
    Custom(CustomShapeId),
}

impl Shape {
    pub const STANDARD: [Self; 5] = [
        Self::Round,
        Self::Square,
        Self::Triangle,
        Self::Heart,
        Self::Hexagon,
    ];

    /// The placeholder custom shape used when text asks for a custom design
    /// without naming a drawing.
    pub fn custom_placeholder() -> Self {
        Self::Custom(CustomShapeId::new("custom-1"))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Heart => "heart",
            Self::Hexagon => "hexagon",
            Self::Custom(id) => id.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Heart => "Heart",
            Self::Hexagon => "Hexagon",
            Self::Custom(_) => "Custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(CUSTOM_SHAPE_PREFIX) && s.len() > CUSTOM_SHAPE_PREFIX.len() {
            return Ok(Self::Custom(CustomShapeId::new(s)));
        }
        Self::STANDARD
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| CoreError::UnknownShape(s.to_string()))
    }
}

impl TryFrom<String> for Shape {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shape> for String {
    fn from(shape: Shape) -> Self {
        shape.as_str().to_string()
    }
}

// ── Selection ──

/// A complete jewelry configuration.
///
/// Gem fields are kept even when `gem_type` is `None`, and `ring_size` is kept
/// for non-rings; consumers ignore them when irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignSelection {
    pub jewelry_type: JewelryType,
    pub metal_type: MetalType,
    pub gem_type: Option<GemType>,
    /// Carats per stone.
    pub gem_size: f64,
    pub gem_count: u32,
    pub ring_size: f64,
    pub shape: Shape,
    pub engraving_text: String,
}

impl Default for DesignSelection {
    fn default() -> Self {
        Self {
            jewelry_type: JewelryType::default(),
            metal_type: MetalType::default(),
            gem_type: None,
            gem_size: DEFAULT_GEM_SIZE,
            gem_count: DEFAULT_GEM_COUNT,
            ring_size: DEFAULT_RING_SIZE,
            shape: Shape::default(),
            engraving_text: String::new(),
        }
    }
}

impl DesignSelection {
    pub fn has_gem(&self) -> bool {
        self.gem_type.is_some()
    }

    pub fn has_engraving(&self) -> bool {
        !self.engraving_text.trim().is_empty()
    }

    /// Copy with every numeric field forced into its domain and the engraving
    /// cut to [`MAX_ENGRAVING_CHARS`].
    pub fn clamped(&self) -> Self {
        Self {
            gem_size: clamp_gem_size(self.gem_size),
            gem_count: clamp_gem_count(u64::from(self.gem_count)),
            ring_size: clamp_ring_size(self.ring_size),
            engraving_text: truncate_engraving(&self.engraving_text),
            ..self.clone()
        }
    }
}

/// Clamp a carat weight to `[0.5, 3.0]`. NaN becomes the default size.
pub fn clamp_gem_size(size: f64) -> f64 {
    if size.is_nan() {
        return DEFAULT_GEM_SIZE;
    }
    size.clamp(MIN_GEM_SIZE, MAX_GEM_SIZE)
}

pub fn clamp_gem_count(count: u64) -> u32 {
    count.clamp(u64::from(MIN_GEM_COUNT), u64::from(MAX_GEM_COUNT)) as u32
}

/// Clamp a ring size to `[4, 13]`. NaN becomes the default size.
pub fn clamp_ring_size(size: f64) -> f64 {
    if size.is_nan() {
        return DEFAULT_RING_SIZE;
    }
    size.clamp(MIN_RING_SIZE, MAX_RING_SIZE)
}

/// Keep at most [`MAX_ENGRAVING_CHARS`] characters (not bytes).
pub fn truncate_engraving(text: &str) -> String {
    text.chars().take(MAX_ENGRAVING_CHARS).collect()
}

/// Carats to one decimal, halves rounded up: `1.25` is `"1.3"`.
///
/// `{:.1}` alone rounds exact halves to even.
pub fn format_gem_size(size: f64) -> String {
    format!("{:.1}", (size * 10.0).round() / 10.0)
}
