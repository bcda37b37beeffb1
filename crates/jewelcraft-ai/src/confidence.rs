//! Per-field confidence scoring for extracted designs.
//!
//! Each field has a fixed base confidence reflecting how unambiguous its cue is
//! (an engraving in quotes is nearly certain; a bare number after "size" much
//! less so). A bounded jitter is added to every score so repeated analyses of
//! the same text don't look falsely precise. The jitter source is injectable:
//! [`RandomJitter`] in production, [`FixedJitter`] when a test needs exact
//! values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Largest absolute jitter added to a base confidence.
pub const MAX_JITTER: f64 = 0.15;

/// Base confidences, highest first.
pub mod base {
    pub const ENGRAVING: f64 = 0.9;
    pub const JEWELRY_TYPE: f64 = 0.8;
    pub const METAL_TYPE: f64 = 0.7;
    pub const GEM_TYPE: f64 = 0.6;
    pub const GEM_SIZE: f64 = 0.5;
    pub const GEM_COUNT: f64 = 0.5;
    pub const SHAPE: f64 = 0.5;
    pub const RING_SIZE: f64 = 0.4;
}

/// Source of the jitter added to base confidences.
pub trait JitterSource {
    /// Next offset. Values outside `[-MAX_JITTER, MAX_JITTER]` are clamped by
    /// the scorer.
    fn next_jitter(&mut self) -> f64;
}

/// Uniform jitter in `[-MAX_JITTER, MAX_JITTER]` drawn from an RNG.
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible jitter sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen_range(-MAX_JITTER..=MAX_JITTER)
    }
}

/// The same offset every time. `FixedJitter(0.0)` yields the bare base values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        self.0
    }
}

/// Score one field: `base + jitter`, clamped to `[0, 1]`, or exactly `0` when
/// the field resolved to nothing.
pub fn score(base: f64, present: bool, jitter: &mut impl JitterSource) -> f64 {
    if !present {
        return 0.0;
    }
    let offset = jitter.next_jitter().clamp(-MAX_JITTER, MAX_JITTER);
    (base + offset).clamp(0.0, 1.0)
}

/// One confidence in `[0, 1]` per selection field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceMap {
    pub jewelry_type: f64,
    pub metal_type: f64,
    pub gem_type: f64,
    pub gem_size: f64,
    pub gem_count: f64,
    pub shape: f64,
    pub ring_size: f64,
    pub engraving_text: f64,
}

impl ConfidenceMap {
    /// `(field name, confidence)` pairs in display order, keyed as in JSON.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("jewelryType", self.jewelry_type),
            ("metalType", self.metal_type),
            ("gemType", self.gem_type),
            ("gemSize", self.gem_size),
            ("gemCount", self.gem_count),
            ("shape", self.shape),
            ("ringSize", self.ring_size),
            ("engravingText", self.engraving_text),
        ]
    }
}

/// Coarse bucket used when showing a confidence to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    /// 0.7 and above.
    High,
    /// 0.4 up to 0.7.
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Whole-number percentage, e.g. `0.836` → `84`.
pub fn percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}
