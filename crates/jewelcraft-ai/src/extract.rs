//! Free-text design extraction.
//!
//! Turns a description like "a rose gold necklace with three small rubies"
//! into a [`DesignSelection`]. Each field resolves through the same fallback
//! chain: a cue in the text, then the caller's current selection, whose own
//! values default to the reset design. Extraction never fails; text with no
//! recognisable cues simply returns the fallback.

use jewelcraft_core::selection::{
    clamp_gem_count, clamp_gem_size, clamp_ring_size, truncate_engraving,
};
use jewelcraft_core::{DesignSelection, GemType, JewelryType, MetalType, Shape};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::confidence::{self, ConfidenceMap, JitterSource, RandomJitter, base};
use crate::rules::{
    self, ARRANGEMENT_CUES, CARAT_SIZE, ENGRAVING_LEAD_INS, EXPLICIT_GEM_COUNT,
    GEM_COUNT_WORD_RULES, GEM_RULES, GEM_SIZE_WORD_RULES, JEWELRY_TYPE_RULES, METAL_RULES,
    NO_GEM_CUES, PLURAL_GEM_CUES, QUOTED, RING_SIZE, SHAPE_RULES,
};

/// Prompts shown to people unsure how to phrase a design.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "A gold engagement ring with a 1 carat round diamond",
    "Silver earrings with small sapphires in a triangle shape",
    "A rose gold necklace with a heart pendant and small diamonds",
    "Platinum wedding band with custom engraving 'Forever Yours'",
    "A white gold bracelet with alternating emeralds and diamonds",
    "A minimalist titanium ring with no gemstones",
];

/// An extracted selection and how sure the extractor is of each field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub selection: DesignSelection,
    pub confidence: ConfidenceMap,
}

impl ExtractionResult {
    /// The selection to apply to the caller's design.
    pub fn into_selection(self) -> DesignSelection {
        self.selection
    }
}

/// What the text says about gemstones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GemMention {
    Named(GemType),
    /// "no gemstones", "gemless", ...
    Excluded,
    Silent,
}

/// Rule-based extractor with an injectable confidence jitter.
pub struct Extractor<J: JitterSource = RandomJitter<StdRng>> {
    jitter: J,
}

impl Extractor {
    /// Extractor with entropy-seeded jitter.
    pub fn new() -> Self {
        Self::with_jitter(RandomJitter::from_entropy())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> Extractor<J> {
    pub fn with_jitter(jitter: J) -> Self {
        Self { jitter }
    }

    /// Extract a selection from `text`, using `fallback` for anything the text
    /// doesn't mention.
    pub fn extract(&mut self, text: &str, fallback: &DesignSelection) -> ExtractionResult {
        let fallback = fallback.clamped();
        let lower = text.to_lowercase();

        let jewelry_type = jewelry_type(&lower).unwrap_or_else(|| {
            debug!(field = "jewelryType", "no cue, using fallback");
            fallback.jewelry_type
        });
        let metal_type = metal_type(&lower).unwrap_or_else(|| {
            debug!(field = "metalType", "no cue, using fallback");
            fallback.metal_type
        });
        let gem_type = match gem_mention(&lower) {
            GemMention::Named(gem) => Some(gem),
            GemMention::Excluded => None,
            GemMention::Silent => {
                debug!(field = "gemType", "no cue, using fallback");
                fallback.gem_type
            }
        };
        let gem_size = gem_size(&lower).unwrap_or_else(|| {
            debug!(field = "gemSize", "no cue, using fallback");
            fallback.gem_size
        });
        let gem_count = gem_count(&lower, fallback.gem_count).unwrap_or_else(|| {
            debug!(field = "gemCount", "no cue, using fallback");
            fallback.gem_count
        });
        let shape = shape(&lower).unwrap_or_else(|| {
            debug!(field = "shape", "no cue, using fallback");
            fallback.shape.clone()
        });
        let ring_size = ring_size(&lower).unwrap_or_else(|| {
            debug!(field = "ringSize", "no cue, using fallback");
            fallback.ring_size
        });
        let engraving_text = engraving(text).unwrap_or_else(|| {
            debug!(field = "engravingText", "no cue, using fallback");
            fallback.engraving_text.clone()
        });

        let selection = DesignSelection {
            jewelry_type,
            metal_type,
            gem_type,
            gem_size,
            gem_count,
            ring_size,
            shape,
            engraving_text,
        };
        let confidence = self.score(&selection);

        debug!(
            jewelry_type = %selection.jewelry_type,
            metal_type = %selection.metal_type,
            gem_type = ?selection.gem_type,
            shape = %selection.shape,
            "extracted design"
        );

        ExtractionResult {
            selection,
            confidence,
        }
    }

    fn score(&mut self, s: &DesignSelection) -> ConfidenceMap {
        let jitter = &mut self.jitter;
        ConfidenceMap {
            jewelry_type: confidence::score(base::JEWELRY_TYPE, true, jitter),
            metal_type: confidence::score(base::METAL_TYPE, true, jitter),
            gem_type: confidence::score(base::GEM_TYPE, s.has_gem(), jitter),
            gem_size: confidence::score(base::GEM_SIZE, true, jitter),
            gem_count: confidence::score(base::GEM_COUNT, true, jitter),
            shape: confidence::score(base::SHAPE, true, jitter),
            ring_size: confidence::score(base::RING_SIZE, true, jitter),
            engraving_text: confidence::score(base::ENGRAVING, s.has_engraving(), jitter),
        }
    }
}

/// Extract with entropy-seeded jitter.
pub fn extract(text: &str, fallback: &DesignSelection) -> ExtractionResult {
    Extractor::new().extract(text, fallback)
}

// ── Field detectors (input is already lower-cased unless noted) ──

fn jewelry_type(text: &str) -> Option<JewelryType> {
    rules::first_match(JEWELRY_TYPE_RULES, text)
}

fn metal_type(text: &str) -> Option<MetalType> {
    rules::first_match(METAL_RULES, text)
}

fn gem_mention(text: &str) -> GemMention {
    if let Some(gem) = rules::first_match(GEM_RULES, text) {
        GemMention::Named(gem)
    } else if rules::any_cue(NO_GEM_CUES, text) {
        GemMention::Excluded
    } else {
        GemMention::Silent
    }
}

/// A number of carats wins over a size word.
fn gem_size(text: &str) -> Option<f64> {
    if let Some(number) = rules::capture(&CARAT_SIZE, text) {
        return number.parse().ok().map(clamp_gem_size);
    }
    rules::first_match(GEM_SIZE_WORD_RULES, text)
}

/// Signals are applied in order: an explicit "N stones" settles the count
/// outright; otherwise a number word replaces `start`, a plural noun raises it
/// to at least 2, and an arrangement word to at least 3. `None` when the text
/// has none of these.
fn gem_count(text: &str, start: u32) -> Option<u32> {
    if let Some(digits) = rules::capture(&EXPLICIT_GEM_COUNT, text) {
        let count = digits.parse::<u64>().unwrap_or(u64::MAX);
        return Some(clamp_gem_count(count));
    }

    let word = rules::first_match(GEM_COUNT_WORD_RULES, text);
    let plural = rules::any_cue(PLURAL_GEM_CUES, text);
    let arranged = rules::any_cue(ARRANGEMENT_CUES, text);
    if word.is_none() && !plural && !arranged {
        return None;
    }

    let mut count = word.unwrap_or(start);
    if plural {
        count = count.max(2);
    }
    if arranged {
        count = count.max(3);
    }
    Some(clamp_gem_count(u64::from(count)))
}

fn shape(text: &str) -> Option<Shape> {
    rules::first_match(SHAPE_RULES, text).and_then(|id| id.parse().ok())
}

fn ring_size(text: &str) -> Option<f64> {
    rules::capture(&RING_SIZE, text)
        .and_then(|number| number.parse().ok())
        .map(clamp_ring_size)
}

/// Works on the original text so the engraving keeps its case. Quoted text
/// wins over lead-in phrases.
fn engraving(text: &str) -> Option<String> {
    if let Some(quoted) = rules::capture(&QUOTED, text) {
        return Some(truncate_engraving(quoted));
    }
    ENGRAVING_LEAD_INS
        .iter()
        .find_map(|lead_in| rules::capture(lead_in, text))
        .map(|phrase| truncate_engraving(phrase.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::FixedJitter;
    use jewelcraft_core::CustomShapeId;

    fn run(text: &str) -> ExtractionResult {
        run_with(text, &DesignSelection::default())
    }

    fn run_with(text: &str, fallback: &DesignSelection) -> ExtractionResult {
        Extractor::with_jitter(FixedJitter(0.0)).extract(text, fallback)
    }

    #[test]
    fn engagement_ring_example() {
        let r = run("A gold engagement ring with a 1 carat round diamond");
        let s = &r.selection;
        assert_eq!(s.jewelry_type, JewelryType::Ring);
        assert_eq!(s.metal_type, MetalType::Gold);
        assert_eq!(s.gem_type, Some(GemType::Diamond));
        assert_eq!(s.gem_size, 1.0);
        assert_eq!(s.shape, Shape::Round);
        assert!(r.confidence.gem_size > 0.0);
        assert!(r.confidence.jewelry_type > 0.0);
    }

    #[test]
    fn earrings_example() {
        let s = run("Silver earrings with small sapphires in a triangle shape").selection;
        assert_eq!(s.jewelry_type, JewelryType::Earrings);
        assert_eq!(s.metal_type, MetalType::Silver);
        assert_eq!(s.gem_type, Some(GemType::Sapphire));
        assert_eq!(s.gem_size, 0.5);
        assert!(s.gem_count >= 2);
        assert_eq!(s.shape, Shape::Triangle);
    }

    #[test]
    fn gemless_example() {
        let r = run("A minimalist titanium ring with no gemstones");
        assert_eq!(r.selection.metal_type, MetalType::Titanium);
        assert_eq!(r.selection.gem_type, None);
        assert_eq!(r.confidence.gem_type, 0.0);
    }

    #[test]
    fn quoted_engraving_example() {
        let s = run("Platinum wedding band with custom engraving 'Forever Yours'").selection;
        assert_eq!(s.engraving_text, "Forever Yours");
        assert_eq!(s.metal_type, MetalType::Platinum);
    }

    #[test]
    fn every_example_prompt_extracts() {
        for prompt in EXAMPLE_PROMPTS {
            let r = run(prompt);
            for (field, c) in r.confidence.entries() {
                assert!((0.0..=1.0).contains(&c), "{prompt}: {field} = {c}");
            }
        }
        let necklace = run(EXAMPLE_PROMPTS[2]).selection;
        assert_eq!(necklace.jewelry_type, JewelryType::Necklace);
        assert_eq!(necklace.metal_type, MetalType::RoseGold);
        assert_eq!(necklace.shape, Shape::Heart);
        let bracelet = run(EXAMPLE_PROMPTS[4]).selection;
        assert_eq!(bracelet.metal_type, MetalType::WhiteGold);
        assert_eq!(bracelet.gem_type, Some(GemType::Diamond));
        assert_eq!(bracelet.gem_count, 3);
    }

    #[test]
    fn empty_text_returns_fallback() {
        let fallback = DesignSelection {
            jewelry_type: JewelryType::Bracelet,
            metal_type: MetalType::Silver,
            gem_type: Some(GemType::Topaz),
            gem_size: 2.0,
            gem_count: 4,
            ring_size: 9.5,
            shape: Shape::Hexagon,
            engraving_text: "J+K".into(),
        };
        assert_eq!(run_with("", &fallback).selection, fallback);
        assert_eq!(run("").selection, DesignSelection::default());
    }

    #[test]
    fn ring_is_a_whole_word() {
        assert_eq!(run("gold earrings").selection.jewelry_type, JewelryType::Earrings);
        let fallback = DesignSelection {
            jewelry_type: JewelryType::Bracelet,
            ..Default::default()
        };
        assert_eq!(
            run_with("a string of silver", &fallback).selection.jewelry_type,
            JewelryType::Bracelet
        );
        assert_eq!(run("rings and a necklace").selection.jewelry_type, JewelryType::Ring);
        assert_eq!(run("a heart pendant").selection.jewelry_type, JewelryType::Necklace);
    }

    #[test]
    fn compound_metals_win_over_gold() {
        assert_eq!(run("white gold band").selection.metal_type, MetalType::WhiteGold);
        assert_eq!(run("gold with rose accents").selection.metal_type, MetalType::RoseGold);
        assert_eq!(run("gold and silver").selection.metal_type, MetalType::Gold);
    }

    #[test]
    fn gem_priority_and_exclusion() {
        assert_eq!(run("a ruby and a sapphire").selection.gem_type, Some(GemType::Ruby));
        assert_eq!(
            run("emeralds, no stones otherwise").selection.gem_type,
            Some(GemType::Emerald)
        );
        let fallback = DesignSelection {
            gem_type: Some(GemType::Amethyst),
            ..Default::default()
        };
        assert_eq!(run_with("a gemless band", &fallback).selection.gem_type, None);
        assert_eq!(
            run_with("a silver band", &fallback).selection.gem_type,
            Some(GemType::Amethyst)
        );
    }

    #[test]
    fn gem_size_numbers_then_words() {
        assert_eq!(run("a 2-carat ruby").selection.gem_size, 2.0);
        assert_eq!(run("a 0.2 ct ruby").selection.gem_size, 0.5);
        assert_eq!(run("a 5 carat ruby").selection.gem_size, 3.0);
        assert_eq!(run("a large 1.5ct ruby").selection.gem_size, 1.5);
        assert_eq!(run("a tiny ruby").selection.gem_size, 0.5);
        assert_eq!(run("a medium ruby").selection.gem_size, 1.5);
        assert_eq!(run("a big ruby").selection.gem_size, 2.5);
        assert_eq!(run("a small yet big ruby").selection.gem_size, 0.5);
        assert_eq!(run("a ruby").selection.gem_size, 1.0);
    }

    #[test]
    fn gem_count_explicit_number_wins() {
        assert_eq!(run("3 diamonds in a cluster").selection.gem_count, 3);
        assert_eq!(run("12 stones").selection.gem_count, 7);
        assert_eq!(run("0 gems").selection.gem_count, 1);
    }

    #[test]
    fn gem_count_words_and_floors() {
        assert_eq!(run("five rubies").selection.gem_count, 5);
        assert_eq!(run("a pair of rubies").selection.gem_count, 2);
        assert_eq!(run("a single ruby").selection.gem_count, 1);
        assert_eq!(run("diamonds").selection.gem_count, 2);
        assert_eq!(run("a cluster of rubies").selection.gem_count, 3);
        // A number word is still raised by an arrangement word.
        assert_eq!(run("two diamonds surrounding a ruby").selection.gem_count, 3);
        // Plural floor keeps a larger fallback.
        let fallback = DesignSelection {
            gem_count: 6,
            ..Default::default()
        };
        assert_eq!(run_with("with sapphires", &fallback).selection.gem_count, 6);
    }

    #[test]
    fn shape_priority_and_custom() {
        assert_eq!(run("square and heart").selection.shape, Shape::Square);
        assert_eq!(run("triangular setting").selection.shape, Shape::Triangle);
        assert_eq!(run("heart-shaped ruby").selection.shape, Shape::Heart);
        assert_eq!(run("hexagon cut").selection.shape, Shape::Hexagon);
        assert_eq!(
            run("a unique shape please").selection.shape,
            Shape::Custom(CustomShapeId::new("custom-1"))
        );
        let fallback = DesignSelection {
            shape: Shape::Custom(CustomShapeId::new("custom-9")),
            ..Default::default()
        };
        assert_eq!(run_with("a silver band", &fallback).selection.shape.as_str(), "custom-9");
    }

    #[test]
    fn ring_size_parsed_and_clamped() {
        assert_eq!(run("ring size 6.5").selection.ring_size, 6.5);
        assert_eq!(run("size 20").selection.ring_size, 13.0);
        assert_eq!(run("size 2").selection.ring_size, 4.0);
        assert_eq!(run("no sizing info").selection.ring_size, 7.0);
    }

    #[test]
    fn engraving_sources() {
        assert_eq!(run(r#"engraved "Always""#).selection.engraving_text, "Always");
        assert_eq!(
            run("a band engraved with Love You Forever, in gold").selection.engraving_text,
            "Love You Forever"
        );
        assert_eq!(
            run("a locket that says Home Is Here.").selection.engraving_text,
            "Home Is Here"
        );
        assert_eq!(
            run("inscribed with Per Aspera Ad Astra Semper").selection.engraving_text,
            "Per Aspera Ad Astra "
        );
        assert_eq!(
            run("'This engraving is far too long'").selection.engraving_text,
            "This engraving is fa"
        );
    }

    #[test]
    fn engraving_keeps_case_and_falls_back() {
        let fallback = DesignSelection {
            engraving_text: "Old".into(),
            ..Default::default()
        };
        assert_eq!(run_with("a gold ring", &fallback).selection.engraving_text, "Old");
        assert_eq!(run("TEXT READING HELLO").selection.engraving_text, "HELLO");
    }

    #[test]
    fn confidence_uses_base_values_without_jitter() {
        let r = run("a gold ring engraved 'Hi' with a ruby");
        assert_eq!(r.confidence.engraving_text, base::ENGRAVING);
        assert_eq!(r.confidence.jewelry_type, base::JEWELRY_TYPE);
        assert_eq!(r.confidence.metal_type, base::METAL_TYPE);
        assert_eq!(r.confidence.gem_type, base::GEM_TYPE);
        assert_eq!(r.confidence.ring_size, base::RING_SIZE);
    }

    #[test]
    fn confidence_zero_iff_absent() {
        let mut extractor = Extractor::with_jitter(RandomJitter::seeded(11));
        for text in [
            "a plain silver band",
            "a ruby ring engraved 'x'",
            "no gem, nothing else",
            "",
        ] {
            let r = extractor.extract(text, &DesignSelection::default());
            for (field, c) in r.confidence.entries() {
                assert!((0.0..=1.0).contains(&c), "{field}");
                let absent = match field {
                    "gemType" => r.selection.gem_type.is_none(),
                    "engravingText" => r.selection.engraving_text.trim().is_empty(),
                    _ => false,
                };
                assert_eq!(c == 0.0, absent, "{text:?}: {field} = {c}");
            }
        }
    }

    #[test]
    fn into_selection_returns_extracted_design() {
        let r = run("a silver bracelet");
        let expected = r.selection.clone();
        assert_eq!(r.into_selection(), expected);
    }

    #[test]
    fn gem_count_reports_when_text_is_silent() {
        assert_eq!(gem_count("a plain gold band", 4), None);
        assert_eq!(gem_count("three rubies", 1), Some(3));
        assert_eq!(gem_count("a cluster of sapphires", 1), Some(3));
        assert_eq!(gem_count("with diamonds", 1), Some(2));
        assert_eq!(gem_count("5 stones", 1), Some(5));
    }

    #[test]
    fn silent_numeric_fields_keep_fallback() {
        let fallback = DesignSelection {
            gem_type: Some(GemType::Emerald),
            gem_size: 2.0,
            gem_count: 4,
            ring_size: 9.5,
            engraving_text: "Ours".into(),
            ..Default::default()
        };
        let s = run_with("make it platinum", &fallback).selection;
        assert_eq!(s.metal_type, MetalType::Platinum);
        assert_eq!(s.gem_size, 2.0);
        assert_eq!(s.gem_count, 4);
        assert_eq!(s.ring_size, 9.5);
        assert_eq!(s.engraving_text, "Ours");
    }
}
