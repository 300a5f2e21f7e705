use serde::{Deserialize, Serialize};

use super::art::ArtPos;

/// Gun mount list written verbatim into every generated plane.
pub const GUN_MOUNTS: &str = "[{Name: Piddler, Location: [0, 0]}]";

/// Loot table written verbatim into every generated plane.
pub const LOOT_TABLE: &str = "[{Weight: 2}, {Weight: 1, Health: 2}]";

/// One plane card preset: stats plus the placement of its three art pieces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaneConfig {
    pub rotation_rate: u32,
    pub speed: u32,
    pub hit_points: u32,
    #[serde(rename = "AIRange")]
    pub ai_range: u32,
    pub fuselage: ArtPos,
    pub wing: ArtPos,
    pub stabilizer: ArtPos,
    pub gun_mounts: String,
    pub loot_table: String,
}

/// A single field value as it appears in the text output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(u32),
    Art(&'a ArtPos),
    Literal(&'a str),
}

impl PlaneConfig {
    /// Fields in output order, keyed by their config names.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); 9] {
        [
            ("RotationRate", FieldValue::Int(self.rotation_rate)),
            ("Speed", FieldValue::Int(self.speed)),
            ("HitPoints", FieldValue::Int(self.hit_points)),
            ("AIRange", FieldValue::Int(self.ai_range)),
            ("Fuselage", FieldValue::Art(&self.fuselage)),
            ("Wing", FieldValue::Art(&self.wing)),
            ("Stabilizer", FieldValue::Art(&self.stabilizer)),
            ("GunMounts", FieldValue::Literal(&self.gun_mounts)),
            ("LootTable", FieldValue::Literal(&self.loot_table)),
        ]
    }
}

/// A generated plane together with the index used for its label.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecord {
    pub index: i64,
    pub config: PlaneConfig,
}

impl GeneratedRecord {
    /// Card name under which the plane is registered, e.g. `Generated5`.
    pub fn label(&self) -> String {
        format!("Generated{}", self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlaneConfig {
        PlaneConfig {
            rotation_rate: 55,
            speed: 12,
            hit_points: 4,
            ai_range: 30,
            fuselage: ArtPos::centered((1.0, 1.5)),
            wing: ArtPos::new((0.1, 0.2), (1.0, 1.0)),
            stabilizer: ArtPos::new((0.0, -0.9), (1.0, 1.0)),
            gun_mounts: GUN_MOUNTS.to_string(),
            loot_table: LOOT_TABLE.to_string(),
        }
    }

    #[test]
    fn fields_in_output_order() {
        let plane = sample();
        let names: Vec<&str> = plane.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "RotationRate",
                "Speed",
                "HitPoints",
                "AIRange",
                "Fuselage",
                "Wing",
                "Stabilizer",
                "GunMounts",
                "LootTable",
            ]
        );
    }

    #[test]
    fn serde_uses_card_field_names() {
        let text = ron::to_string(&sample()).unwrap();
        assert!(text.contains("RotationRate:"));
        assert!(text.contains("AIRange:"));
        assert!(text.contains("LootTable:"));
        assert!(!text.contains("rotation_rate"));
    }

    #[test]
    fn label_includes_index() {
        let record = GeneratedRecord {
            index: -3,
            config: sample(),
        };
        assert_eq!(record.label(), "Generated-3");
    }
}
