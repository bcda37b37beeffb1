//! Card display for extraction results and selections.
//!
//! Rows irrelevant to the design are skipped: gem size and count without a
//! gem, ring size for anything but a ring, an empty engraving.

use jewelcraft_ai::confidence::percent;
use jewelcraft_ai::{ConfidenceLevel, ExtractionResult};
use jewelcraft_core::{DesignSelection, JewelryType, format_gem_size};

/// Print an extraction result with a confidence badge per row.
pub fn print_extraction_card(result: &ExtractionResult) {
    print!("{}", render_extraction_card(result));
}

pub fn render_extraction_card(result: &ExtractionResult) -> String {
    let s = &result.selection;
    let c = &result.confidence;
    let mut out = String::from("=== Recognized Parameters ===\n");

    for row in rows(s) {
        let score = match row.field {
            Field::JewelryType => c.jewelry_type,
            Field::Metal => c.metal_type,
            Field::Gem => c.gem_type,
            Field::GemSize => c.gem_size,
            Field::GemCount => c.gem_count,
            Field::Shape => c.shape,
            Field::RingSize => c.ring_size,
            Field::Engraving => c.engraving_text,
        };
        out.push_str(&format!(
            "  {:<14} {:<22} {}\n",
            row.label,
            row.value,
            badge(score)
        ));
    }

    out.push_str(
        "\nThese parameters are automatically detected. \
         You can adjust them after creating the design.\n",
    );
    out
}

/// Render a selection without confidences.
pub fn render_selection_card(selection: &DesignSelection) -> String {
    let mut out = String::new();
    for row in rows(selection) {
        out.push_str(&format!("  {:<14} {}\n", row.label, row.value));
    }
    out
}

/// `[84% high]`
fn badge(score: f64) -> String {
    format!(
        "[{}% {}]",
        percent(score),
        ConfidenceLevel::from_score(score).as_str()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    JewelryType,
    Metal,
    Gem,
    GemSize,
    GemCount,
    Shape,
    RingSize,
    Engraving,
}

struct Row {
    field: Field,
    label: &'static str,
    value: String,
}

fn rows(s: &DesignSelection) -> Vec<Row> {
    let mut rows = vec![
        Row {
            field: Field::JewelryType,
            label: "Jewelry Type",
            value: s.jewelry_type.display_name().to_string(),
        },
        Row {
            field: Field::Metal,
            label: "Metal",
            value: s.metal_type.display_name().to_string(),
        },
        Row {
            field: Field::Gem,
            label: "Gemstone",
            value: s
                .gem_type
                .map_or("None", |gem| gem.display_name())
                .to_string(),
        },
    ];

    if s.has_gem() {
        rows.push(Row {
            field: Field::GemSize,
            label: "Gem Size",
            value: format!("{} ct", format_gem_size(s.gem_size)),
        });
        rows.push(Row {
            field: Field::GemCount,
            label: "Gem Count",
            value: s.gem_count.to_string(),
        });
    }

    rows.push(Row {
        field: Field::Shape,
        label: "Shape",
        value: s.shape.display_name().to_string(),
    });

    if s.jewelry_type == JewelryType::Ring {
        rows.push(Row {
            field: Field::RingSize,
            label: "Ring Size",
            value: s.ring_size.to_string(),
        });
    }

    if s.has_engraving() {
        rows.push(Row {
            field: Field::Engraving,
            label: "Engraving",
            value: format!("\"{}\"", s.engraving_text),
        });
    }

    rows
}
