//! Design inference: rule-based extraction from free text, confidence scoring,
//! and prose descriptions.

pub mod confidence;
pub mod describe;
pub mod extract;
mod rules;

pub use confidence::{ConfidenceLevel, ConfidenceMap, FixedJitter, JitterSource, RandomJitter};
pub use describe::describe;
pub use extract::{EXAMPLE_PROMPTS, ExtractionResult, Extractor, extract};
