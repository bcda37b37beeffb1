//! Saved-design snapshot handed to whatever stores named designs.
//!
//! Nothing here writes to disk or a database; the record is only the value a
//! storage collaborator keeps and later hands back.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pricing::{format_price, price};
use crate::selection::{
    DEFAULT_GEM_COUNT, DEFAULT_GEM_SIZE, DesignSelection, GemType, JewelryType, MetalType, Shape,
};

/// A named design as stored by the design library.
///
/// Gem size and count are stored as `0` when no gem is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRecord {
    /// Milliseconds since the Unix epoch at save time, as a string.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub jewelry_type: JewelryType,
    pub metal: MetalType,
    pub gem: Option<GemType>,
    pub gem_size: f64,
    pub gem_count: u32,
    pub ring_size: f64,
    pub engraving: String,
    #[serde(default)]
    pub shape: Option<Shape>,
    /// Two-decimal price at save time.
    pub price: String,
    /// RFC 3339 timestamp string.
    pub saved_at: String,
    /// Opaque drawing data for custom shapes (e.g. a PNG data URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shape_data: Option<String>,
}

impl DesignRecord {
    /// Snapshot `selection` under `name`.
    ///
    /// `custom_shape_data` is only kept when the selection uses a custom shape.
    pub fn snapshot(
        name: &str,
        selection: &DesignSelection,
        custom_shape_data: Option<String>,
        saved_at: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::BlankDesignName);
        }

        let s = selection.clamped();
        let (gem_size, gem_count) = if s.has_gem() {
            (s.gem_size, s.gem_count)
        } else {
            (0.0, 0)
        };
        let custom_shape_data = custom_shape_data.filter(|_| s.shape.is_custom());

        tracing::debug!(design = name, shape = %s.shape, "snapshotting design");

        Ok(Self {
            id: saved_at.timestamp_millis().to_string(),
            name: name.to_string(),
            jewelry_type: s.jewelry_type,
            metal: s.metal_type,
            gem: s.gem_type,
            gem_size,
            gem_count,
            ring_size: s.ring_size,
            engraving: s.engraving_text.clone(),
            price: format_price(price(&s)),
            saved_at: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            shape: Some(s.shape),
            custom_shape_data,
        })
    }

    /// Restore the selection this record was saved from.
    ///
    /// Zeroed gem fields come back as the defaults so the result stays in
    /// domain; a missing shape comes back as round.
    pub fn to_selection(&self) -> DesignSelection {
        let (gem_size, gem_count) = match self.gem {
            Some(_) => (self.gem_size, self.gem_count),
            None => (DEFAULT_GEM_SIZE, DEFAULT_GEM_COUNT),
        };
        DesignSelection {
            jewelry_type: self.jewelry_type,
            metal_type: self.metal,
            gem_type: self.gem,
            gem_size,
            gem_count,
            ring_size: self.ring_size,
            shape: self.shape.clone().unwrap_or_default(),
            engraving_text: self.engraving.clone(),
        }
        .clamped()
    }

    /// Drawing data paired with the record's custom shape, if any.
    pub fn custom_shape(&self) -> Option<(&str, &str)> {
        match (&self.shape, &self.custom_shape_data) {
            (Some(Shape::Custom(id)), Some(data)) => Some((id.as_str(), data.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::CustomShapeId;
    use chrono::TimeZone;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 21, 10, 0, 0).unwrap()
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = DesignRecord::snapshot("   ", &DesignSelection::default(), None, saved_at());
        assert_eq!(err, Err(CoreError::BlankDesignName));
    }

    #[test]
    fn snapshot_without_gem_zeroes_gem_fields() {
        let record =
            DesignRecord::snapshot("Plain band", &DesignSelection::default(), None, saved_at())
                .unwrap();
        assert_eq!(record.gem, None);
        assert_eq!(record.gem_size, 0.0);
        assert_eq!(record.gem_count, 0);
        assert_eq!(record.price, "300.00");
        assert_eq!(record.saved_at, "2026-02-21T10:00:00.000Z");
        assert_eq!(record.id, saved_at().timestamp_millis().to_string());
    }

    #[test]
    fn restore_yields_in_domain_selection() {
        let record =
            DesignRecord::snapshot("Plain band", &DesignSelection::default(), None, saved_at())
                .unwrap();
        assert_eq!(record.to_selection(), DesignSelection::default());
    }

    #[test]
    fn restore_keeps_gem_fields() {
        let selection = DesignSelection {
            jewelry_type: JewelryType::Necklace,
            gem_type: Some(GemType::Ruby),
            gem_size: 2.0,
            gem_count: 3,
            shape: Shape::Heart,
            engraving_text: "Mum".into(),
            ..Default::default()
        };
        let record = DesignRecord::snapshot("Gift", &selection, None, saved_at()).unwrap();
        assert_eq!(record.to_selection(), selection);
    }

    #[test]
    fn custom_shape_data_only_kept_for_custom_shapes() {
        let round = DesignRecord::snapshot(
            "Round",
            &DesignSelection::default(),
            Some("data:image/png;base64,AAAA".into()),
            saved_at(),
        )
        .unwrap();
        assert_eq!(round.custom_shape_data, None);
        assert_eq!(round.custom_shape(), None);

        let custom = DesignSelection {
            shape: Shape::Custom(CustomShapeId::new("custom-5")),
            ..Default::default()
        };
        let record = DesignRecord::snapshot(
            "Drawn",
            &custom,
            Some("data:image/png;base64,AAAA".into()),
            saved_at(),
        )
        .unwrap();
        assert_eq!(
            record.custom_shape(),
            Some(("custom-5", "data:image/png;base64,AAAA"))
        );
    }

    #[test]
    fn record_json_uses_saved_design_keys() {
        let record =
            DesignRecord::snapshot("Plain band", &DesignSelection::default(), None, saved_at())
                .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "ring");
        assert_eq!(json["metal"], "gold");
        assert!(json["gem"].is_null());
        assert_eq!(json["savedAt"], "2026-02-21T10:00:00.000Z");
        assert!(json.get("customShapeData").is_none());
    }

    #[test]
    fn missing_shape_restores_as_round() {
        let json = r#"{
            "id": "1", "name": "Old", "type": "bracelet", "metal": "silver",
            "gem": null, "gemSize": 0, "gemCount": 0, "ringSize": 7,
            "engraving": "", "price": "350.00", "savedAt": "2026-02-21T10:00:00.000Z"
        }"#;
        let record: DesignRecord = serde_json::from_str(json).unwrap();
        let s = record.to_selection();
        assert_eq!(s.shape, Shape::Round);
        assert_eq!(s.jewelry_type, JewelryType::Bracelet);
    }
}
