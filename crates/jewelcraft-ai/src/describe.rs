//! Prose descriptions of a design.
//!
//! The output is a pure function of the selection and the price string:
//! the same inputs always produce byte-identical text. Paragraphs are
//! separated by a blank line.

use jewelcraft_core::{DesignSelection, GemType, JewelryType, MetalType, Shape, format_gem_size};

pub fn metal_phrase(metal: MetalType) -> &'static str {
    match metal {
        MetalType::Gold => "lustrous 18k gold",
        MetalType::Silver => "polished sterling silver",
        MetalType::Platinum => "premium platinum",
        MetalType::RoseGold => "romantic rose gold",
        MetalType::WhiteGold => "elegant white gold",
        MetalType::Titanium => "durable titanium",
    }
}

pub fn shape_phrase(shape: &Shape) -> &'static str {
    match shape {
        Shape::Round => "perfectly round",
        Shape::Square => "contemporary square",
        Shape::Heart => "romantic heart-shaped",
        Shape::Triangle => "geometric triangular",
        Shape::Hexagon => "distinctive hexagonal",
        Shape::Custom(_) => "custom-designed",
    }
}

pub fn gem_colour(gem: GemType) -> &'static str {
    match gem {
        GemType::Diamond => "brilliant and clear",
        GemType::Ruby => "rich red",
        GemType::Sapphire => "deep blue",
        GemType::Emerald => "vivid green",
        GemType::Amethyst => "purple",
        GemType::Topaz => "golden",
    }
}

pub fn gem_quality(gem: GemType) -> &'static str {
    match gem {
        GemType::Diamond => "exceptional clarity",
        GemType::Ruby => "profound depth of color",
        GemType::Sapphire => "remarkable intensity",
        GemType::Emerald => "lush saturation",
        GemType::Amethyst => "royal hue",
        GemType::Topaz => "warm brilliance",
    }
}

/// Full multi-paragraph description ending with `Estimated value: ${price}.`
///
/// Out-of-range numbers are clamped before rendering.
pub fn describe(selection: &DesignSelection, price: &str) -> String {
    let s = selection.clamped();
    let metal = metal_phrase(s.metal_type);
    let shape = shape_phrase(&s.shape);

    let mut out = format!("Exquisite {} crafted from {metal}", s.jewelry_type);
    match s.gem_type {
        Some(gem) => {
            let multiple = s.gem_count > 1;
            let count = if multiple {
                format!("{} ", s.gem_count)
            } else {
                String::new()
            };
            let plural = if multiple { "s" } else { "" };
            let each = if multiple { " each" } else { "" };
            out.push_str(&format!(
                " featuring {count}{shape} {gem}{plural} ({} ct{each})",
                format_gem_size(s.gem_size)
            ));
        }
        None => out.push_str(&format!(" with a {shape} design")),
    }
    out.push('.');

    out.push_str("\n\n");
    out.push_str(&type_paragraph(&s));

    if !s.engraving_text.is_empty() {
        out.push_str(&format!(
            "\n\nPersonalized with the engraving: \"{}\".",
            s.engraving_text
        ));
    }

    out.push_str(&format!("\n\nEstimated value: ${price}."));
    out
}

/// `"{colour} {gem} of {quality}"`, e.g. "deep blue sapphire of remarkable intensity".
fn gem_phrase(gem: GemType) -> String {
    format!("{} {gem} of {}", gem_colour(gem), gem_quality(gem))
}

fn type_paragraph(s: &DesignSelection) -> String {
    let metal = metal_phrase(s.metal_type);
    let shape = shape_phrase(&s.shape);
    let multiple = s.gem_count > 1;
    let (its, is) = if multiple {
        ("their", "s are")
    } else {
        ("its", " is")
    };

    match s.jewelry_type {
        JewelryType::Ring => {
            let intro = format!(
                "This ring features a band crafted from {metal} and is available in size {}. ",
                s.ring_size
            );
            let detail = match s.gem_type {
                Some(gem) => format!(
                    "The {shape} {gem}{is} meticulously set to showcase {its} {}.",
                    gem_phrase(gem)
                ),
                None => format!("The {shape} design offers a timeless appeal."),
            };
            intro + &detail
        }
        JewelryType::Necklace => {
            let intro = format!("This necklace features a delicate chain crafted from {metal}. ");
            let detail = match s.gem_type {
                Some(gem) => {
                    let accents = if multiple { " and accents are" } else { " is" };
                    format!(
                        "The {shape} {gem} pendant{accents} carefully positioned to highlight {its} {}.",
                        gem_phrase(gem)
                    )
                }
                None => format!("The {shape} pendant creates an elegant focal point."),
            };
            intro + &detail
        }
        JewelryType::Earrings => {
            let intro = format!("These earrings are meticulously crafted from {metal}. ");
            let detail = match s.gem_type {
                Some(gem) => {
                    let stones = if multiple {
                        format!("multiple {shape} {gem}s")
                    } else {
                        format!("a {shape} {gem}")
                    };
                    let verb = if multiple { "capture" } else { "captures" };
                    format!(
                        "Each earring showcases {stones} that {verb} the {}.",
                        gem_phrase(gem)
                    )
                }
                None => format!("Their {shape} design offers a sophisticated finish."),
            };
            intro + &detail
        }
        JewelryType::Bracelet => {
            let intro = format!("This bracelet is expertly crafted from {metal}. ");
            let detail = match s.gem_type {
                Some(gem) => format!(
                    "The {shape} {gem}{is} artfully arranged to showcase {its} {}.",
                    gem_phrase(gem)
                ),
                None => format!("The {shape} elements create a striking pattern along its length."),
            };
            intro + &detail
        }
    }
}
