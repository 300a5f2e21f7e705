//! Sampling ranges for every randomized plane field, loadable from RON.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid range for '{field}': [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: String,
        max: String,
    },
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Inclusive float range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Every knob the generator draws from.
///
/// Missing fields in a RON file fall back to the defaults, so a file only
/// needs to list what it changes:
///
/// ```ron
/// (
///     speed: (min: 10, max: 25),
///     ai_range: 45,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorRanges {
    pub rotation_rate: IntRange,
    pub speed: IntRange,
    pub hit_points: IntRange,
    /// Not randomized; every plane gets this value.
    pub ai_range: u32,
    pub fuselage_width: FloatRange,
    pub fuselage_length: FloatRange,
    pub wing_offset_y: FloatRange,
    pub wing_width: FloatRange,
    pub wing_length: FloatRange,
    /// Fraction of the fuselage length the stabilizer sits behind the origin.
    pub stabilizer_offset: FloatRange,
    pub stabilizer_width: FloatRange,
    pub stabilizer_length: FloatRange,
}

impl Default for GeneratorRanges {
    fn default() -> Self {
        Self {
            rotation_rate: IntRange::new(40, 70),
            speed: IntRange::new(5, 20),
            hit_points: IntRange::new(3, 7),
            ai_range: 30,
            fuselage_width: FloatRange::new(0.8, 1.5),
            fuselage_length: FloatRange::new(1.0, 2.0),
            wing_offset_y: FloatRange::new(-0.5, 0.7),
            wing_width: FloatRange::new(0.4, 1.5),
            wing_length: FloatRange::new(0.6, 2.0),
            stabilizer_offset: FloatRange::new(0.3, 1.0),
            stabilizer_width: FloatRange::new(0.5, 2.0),
            stabilizer_length: FloatRange::new(0.5, 2.0),
        }
    }
}

impl GeneratorRanges {
    /// Load ranges from a RON file and validate them.
    pub fn load_from_ron(path: &Path) -> Result<GeneratorRanges, RangesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse ranges from a RON string and validate them.
    pub fn parse_ron(input: &str) -> Result<GeneratorRanges, RangesError> {
        let ranges: GeneratorRanges = ron::from_str(input)?;
        ranges.validate()?;
        Ok(ranges)
    }

    /// Reject inverted and non-finite ranges; sampling them would panic.
    pub fn validate(&self) -> Result<(), RangesError> {
        let ints = [
            ("rotation_rate", self.rotation_rate),
            ("speed", self.speed),
            ("hit_points", self.hit_points),
        ];
        for (field, range) in ints {
            if range.min > range.max {
                return Err(RangesError::InvalidRange {
                    field,
                    min: range.min.to_string(),
                    max: range.max.to_string(),
                });
            }
        }

        let floats = [
            ("fuselage_width", self.fuselage_width),
            ("fuselage_length", self.fuselage_length),
            ("wing_offset_y", self.wing_offset_y),
            ("wing_width", self.wing_width),
            ("wing_length", self.wing_length),
            ("stabilizer_offset", self.stabilizer_offset),
            ("stabilizer_width", self.stabilizer_width),
            ("stabilizer_length", self.stabilizer_length),
        ];
        for (field, range) in floats {
            let width = range.max - range.min;
            if !range.min.is_finite()
                || !range.max.is_finite()
                || range.min > range.max
                || !width.is_finite()
            {
                return Err(RangesError::InvalidRange {
                    field,
                    min: range.min.to_string(),
                    max: range.max.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults_are_valid() {
        assert!(GeneratorRanges::default().validate().is_ok());
    }

    #[test]
    fn int_range_is_inclusive() {
        let range = IntRange::new(3, 4);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 2];
        for _ in 0..200 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v));
            seen[(v - 3) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn degenerate_ranges_sample_their_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(IntRange::new(30, 30).sample(&mut rng), 30);
        assert_eq!(FloatRange::new(0.5, 0.5).sample(&mut rng), 0.5);
    }

    #[test]
    fn float_range_stays_in_bounds() {
        let range = FloatRange::new(-0.5, 0.7);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let ranges = GeneratorRanges::parse_ron("(speed: (min: 10, max: 25), ai_range: 45)").unwrap();
        assert_eq!(ranges.speed, IntRange::new(10, 25));
        assert_eq!(ranges.ai_range, 45);
        assert_eq!(ranges.rotation_rate, GeneratorRanges::default().rotation_rate);
        assert_eq!(ranges.wing_width, GeneratorRanges::default().wing_width);
    }

    #[test]
    fn empty_ron_is_default() {
        let ranges = GeneratorRanges::parse_ron("()").unwrap();
        assert_eq!(ranges, GeneratorRanges::default());
    }

    #[test]
    fn inverted_int_range_rejected() {
        let err = GeneratorRanges::parse_ron("(hit_points: (min: 9, max: 2))").unwrap_err();
        assert!(matches!(err, RangesError::InvalidRange { field: "hit_points", .. }));
    }

    #[test]
    fn inverted_float_range_rejected() {
        let mut ranges = GeneratorRanges::default();
        ranges.wing_length = FloatRange::new(2.0, 0.6);
        let err = ranges.validate().unwrap_err();
        assert!(err.to_string().contains("wing_length"));
    }

    #[test]
    fn non_finite_range_rejected() {
        let mut ranges = GeneratorRanges::default();
        ranges.stabilizer_offset = FloatRange::new(0.3, f64::INFINITY);
        assert!(ranges.validate().is_err());
    }

    #[test]
    fn wide_range_rejected() {
        let err = GeneratorRanges::parse_ron("(wing_width: (min: -1e308, max: 1e308))").unwrap_err();
        assert!(matches!(err, RangesError::InvalidRange { field: "wing_width", .. }));
    }

    #[test]
    fn misspelled_field_rejected() {
        assert!(matches!(
            GeneratorRanges::parse_ron("(sped: (min: 99, max: 99))"),
            Err(RangesError::Ron(_))
        ));
    }

    #[test]
    fn malformed_ron_is_error() {
        assert!(matches!(
            GeneratorRanges::parse_ron("(speed: fast)"),
            Err(RangesError::Ron(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::path::PathBuf::from("tests/fixtures/does_not_exist.ron");
        assert!(matches!(
            GeneratorRanges::load_from_ron(&path),
            Err(RangesError::Io(_))
        ));
    }

    #[test]
    fn load_fixture_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/fast_planes.ron");
        let ranges = GeneratorRanges::load_from_ron(&path).unwrap();
        assert_eq!(ranges.speed, IntRange::new(15, 30));
        assert_eq!(ranges.hit_points, IntRange::new(1, 2));
        assert_eq!(ranges.ai_range, 50);
    }
}
