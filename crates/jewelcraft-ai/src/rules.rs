//! Ordered cue tables for design extraction.
//!
//! Every field is resolved by walking its table top to bottom; the first rule
//! with a matching cue wins. Table order is the tie-break, so "rose gold" is
//! listed before "gold" and "ring" before "earring".

use std::sync::LazyLock;

use jewelcraft_core::{GemType, JewelryType, MetalType};
use regex::Regex;

/// A textual signal, tested against lower-cased input.
#[derive(Debug, Clone, Copy)]
pub enum Cue {
    /// Substring anywhere, including inside longer words.
    Contains(&'static str),
    /// Standalone word, optionally pluralised with a trailing `s`.
    Word(&'static str),
    /// Every listed substring present, in any order.
    AllOf(&'static [&'static str]),
}

impl Cue {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains(needle) => text.contains(needle),
            Self::Word(word) => contains_word(text, word),
            Self::AllOf(needles) => needles.iter().all(|n| text.contains(n)),
        }
    }
}

pub struct Rule<T> {
    pub value: T,
    pub cues: &'static [Cue],
}

/// Value of the first rule with any matching cue.
pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.cues.iter().any(|cue| cue.matches(text)))
        .map(|rule| rule.value)
}

fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(start, _)| {
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let mut rest = text[start + word.len()..].chars().peekable();
        if rest.peek() == Some(&'s') {
            rest.next();
        }
        let after_ok = rest.next().is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

use Cue::{AllOf, Contains, Word};

pub const JEWELRY_TYPE_RULES: &[Rule<JewelryType>] = &[
    Rule {
        value: JewelryType::Ring,
        cues: &[Word("ring")],
    },
    Rule {
        value: JewelryType::Necklace,
        cues: &[Contains("necklace"), Contains("pendant")],
    },
    Rule {
        value: JewelryType::Earrings,
        cues: &[Contains("earring")],
    },
    Rule {
        value: JewelryType::Bracelet,
        cues: &[Contains("bracelet")],
    },
];

pub const METAL_RULES: &[Rule<MetalType>] = &[
    Rule {
        value: MetalType::RoseGold,
        cues: &[AllOf(&["gold", "rose"])],
    },
    Rule {
        value: MetalType::WhiteGold,
        cues: &[AllOf(&["gold", "white"])],
    },
    Rule {
        value: MetalType::Gold,
        cues: &[Contains("gold")],
    },
    Rule {
        value: MetalType::Silver,
        cues: &[Contains("silver")],
    },
    Rule {
        value: MetalType::Platinum,
        cues: &[Contains("platinum")],
    },
    Rule {
        value: MetalType::Titanium,
        cues: &[Contains("titanium")],
    },
];

pub const GEM_RULES: &[Rule<GemType>] = &[
    Rule {
        value: GemType::Diamond,
        cues: &[Contains("diamond")],
    },
    Rule {
        value: GemType::Ruby,
        cues: &[Contains("ruby")],
    },
    Rule {
        value: GemType::Sapphire,
        cues: &[Contains("sapphire")],
    },
    Rule {
        value: GemType::Emerald,
        cues: &[Contains("emerald")],
    },
    Rule {
        value: GemType::Amethyst,
        cues: &[Contains("amethyst")],
    },
    Rule {
        value: GemType::Topaz,
        cues: &[Contains("topaz")],
    },
];

/// Phrases that explicitly ask for no gemstone.
pub const NO_GEM_CUES: &[Cue] = &[
    Contains("no gem"),
    Contains("without gem"),
    Contains("no stone"),
    Contains("gemless"),
];

/// Descriptive carat sizes, consulted only when no number is given.
pub const GEM_SIZE_WORD_RULES: &[Rule<f64>] = &[
    Rule {
        value: 0.5,
        cues: &[Contains("small"), Contains("tiny")],
    },
    Rule {
        value: 1.5,
        cues: &[Contains("medium")],
    },
    Rule {
        value: 2.5,
        cues: &[Contains("large"), Contains("big")],
    },
];

pub const GEM_COUNT_WORD_RULES: &[Rule<u32>] = &[
    Rule {
        value: 1,
        cues: &[Contains("one")],
    },
    Rule {
        value: 2,
        cues: &[Contains("two")],
    },
    Rule {
        value: 3,
        cues: &[Contains("three")],
    },
    Rule {
        value: 4,
        cues: &[Contains("four")],
    },
    Rule {
        value: 5,
        cues: &[Contains("five")],
    },
    Rule {
        value: 6,
        cues: &[Contains("six")],
    },
    Rule {
        value: 7,
        cues: &[Contains("seven")],
    },
    Rule {
        value: 1,
        cues: &[Contains("single")],
    },
    Rule {
        value: 2,
        cues: &[Contains("couple")],
    },
    Rule {
        value: 2,
        cues: &[Contains("pair")],
    },
    Rule {
        value: 3,
        cues: &[Contains("few")],
    },
    Rule {
        value: 4,
        cues: &[Contains("several")],
    },
    Rule {
        value: 5,
        cues: &[Contains("many")],
    },
];

/// Plural nouns implying at least two stones.
pub const PLURAL_GEM_CUES: &[Cue] = &[
    Contains("diamonds"),
    Contains("rubies"),
    Contains("sapphires"),
    Contains("emeralds"),
    Contains("gems"),
    Contains("stones"),
];

/// Arrangement words implying at least three stones.
pub const ARRANGEMENT_CUES: &[Cue] = &[
    Contains("alternating"),
    Contains("surrounding"),
    Contains("cluster"),
    Contains("multiple"),
];

/// Shape ids in priority order; the last entry is the custom placeholder.
pub const SHAPE_RULES: &[Rule<&str>] = &[
    Rule {
        value: "round",
        cues: &[Contains("round")],
    },
    Rule {
        value: "square",
        cues: &[Contains("square")],
    },
    Rule {
        value: "triangle",
        cues: &[Contains("triangle"), Contains("triangular")],
    },
    Rule {
        value: "heart",
        cues: &[Contains("heart"), Contains("heart-shaped")],
    },
    Rule {
        value: "hexagon",
        cues: &[Contains("hexagon")],
    },
    Rule {
        value: "custom-1",
        cues: &[
            Contains("custom shape"),
            Contains("custom design"),
            Contains("unique shape"),
        ],
    },
];

pub fn any_cue(cues: &[Cue], text: &str) -> bool {
    cues.iter().any(|cue| cue.matches(text))
}

// ── Numeric and free-text patterns ──

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => {
            tracing::error!(%err, pattern, "extraction pattern failed to compile");
            match Regex::new(r"$^") {
                Ok(fallback) => fallback,
                Err(fallback_err) => {
                    panic!("hardcoded fallback regex must compile: {fallback_err}")
                }
            }
        }
    }
}

/// `1 carat`, `0.5ct`, `2-carat`.
pub static CARAT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)(\d+(?:\.\d+)?)\s*(?:-|\s)?(?:carat|ct)"));

/// `3 diamonds`, `5 stones`.
pub static EXPLICIT_GEM_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex(r"(?i)(\d+)\s+(?:gem|stone|diamond|ruby|sapphire|emerald|amethyst|topaz)")
});

/// `size 6`, `ring size 7.5`.
pub static RING_SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(r"(?i)(?:ring\s+)?size\s+(\d+(?:\.\d+)?)"));

/// Text between a pair of single or double quotes.
pub static QUOTED: LazyLock<Regex> = LazyLock::new(|| compile_regex(r#"["']([^"']+)["']"#));

/// Lead-in phrases for unquoted engravings, in priority order. Each captures
/// up to the next comma or period.
pub static ENGRAVING_LEAD_INS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)engrav(?:e|ed|ing)(?:\s+with)?\s+([^,.]+)",
        r"(?i)saying\s+([^,.]+)",
        r"(?i)that\s+says\s+([^,.]+)",
        r"(?i)inscrib(?:e|ed|ing)(?:\s+with)?\s+([^,.]+)",
        r"(?i)text\s+(?:(?:saying|reading)\s+)?([^,.]+)",
    ]
    .into_iter()
    .map(compile_regex)
    .collect()
});

/// First capture group of `regex` in `text`.
pub fn capture<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
