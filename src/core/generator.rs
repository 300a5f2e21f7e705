//! The plane generator: draws random stats and art placement per record.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::ranges::{GeneratorRanges, RangesError};
use crate::core::render::{self, OutputFormat, RenderError};
use crate::schema::art::ArtPos;
use crate::schema::plane::{GeneratedRecord, PlaneConfig, GUN_MOUNTS, LOOT_TABLE};

/// Fuselage width at which the wing root sits on the centerline.
pub const WING_ROOT_INSET: f64 = 0.8;
/// Share of the remaining fuselage width the wing root is pushed out by.
pub const WING_ROOT_SCALE: f64 = 0.5;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("ranges error: {0}")]
    Ranges(#[from] RangesError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces randomized plane cards. Built via `ConfigGenerator::builder()`.
pub struct ConfigGenerator {
    ranges: GeneratorRanges,
    rng: StdRng,
    generated: u64,
}

/// Builder for constructing a `ConfigGenerator`.
pub struct ConfigGeneratorBuilder {
    seed: Option<u64>,
    ranges_path: Option<PathBuf>,
    /// Directly provided ranges (takes precedence over `ranges_path`).
    ranges: Option<GeneratorRanges>,
}

impl ConfigGenerator {
    pub fn builder() -> ConfigGeneratorBuilder {
        ConfigGeneratorBuilder {
            seed: None,
            ranges_path: None,
            ranges: None,
        }
    }

    pub fn ranges(&self) -> &GeneratorRanges {
        &self.ranges
    }

    /// Number of planes generated over this generator's lifetime.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate one plane.
    ///
    /// Draw order is fixed so a seeded generator is reproducible: stats,
    /// then fuselage, wing, and stabilizer.
    pub fn generate_config(&mut self) -> PlaneConfig {
        let r = &self.ranges;
        let rng = &mut self.rng;

        let rotation_rate = r.rotation_rate.sample(rng);
        let speed = r.speed.sample(rng);
        let hit_points = r.hit_points.sample(rng);

        let fuselage = ArtPos::centered((
            r.fuselage_width.sample(rng),
            r.fuselage_length.sample(rng),
        ));

        let wing_x = (fuselage.size.0 - WING_ROOT_INSET) * WING_ROOT_SCALE;
        let wing_y = r.wing_offset_y.sample(rng);
        let wing = ArtPos::new(
            (wing_x, wing_y),
            (r.wing_width.sample(rng), r.wing_length.sample(rng)),
        );

        let tail_y = -fuselage.size.1 * r.stabilizer_offset.sample(rng);
        let stabilizer = ArtPos::new(
            (0.0, tail_y),
            (r.stabilizer_width.sample(rng), r.stabilizer_length.sample(rng)),
        );

        self.generated += 1;

        PlaneConfig {
            rotation_rate,
            speed,
            hit_points,
            ai_range: r.ai_range,
            fuselage,
            wing,
            stabilizer,
            gun_mounts: GUN_MOUNTS.to_string(),
            loot_table: LOOT_TABLE.to_string(),
        }
    }

    /// Generate `count` planes labelled from `start_index` upward.
    pub fn generate(&mut self, count: u32, start_index: i64) -> Vec<GeneratedRecord> {
        (0..count)
            .map(|i| self.next_record(start_index + i64::from(i)))
            .collect()
    }

    fn next_record(&mut self, index: i64) -> GeneratedRecord {
        let config = self.generate_config();
        debug!(
            index,
            rotation_rate = config.rotation_rate,
            speed = config.speed,
            hit_points = config.hit_points,
            "generated plane"
        );
        GeneratedRecord { index, config }
    }

    /// Generate `count` planes and write them to `out` in `format`.
    ///
    /// Text output streams one block per plane; RON output is written once
    /// all planes are generated.
    pub fn write_batch<W: Write>(
        &mut self,
        count: u32,
        start_index: i64,
        format: OutputFormat,
        mut out: W,
    ) -> Result<(), GeneratorError> {
        info!(count, start_index, ?format, "generating planes");
        match format {
            OutputFormat::Text => {
                for i in 0..count {
                    let record = self.next_record(start_index + i64::from(i));
                    render::write_text_block(&mut out, &record)?;
                }
            }
            OutputFormat::Ron => {
                let records = self.generate(count, start_index);
                render::write_ron(&mut out, &records)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl ConfigGeneratorBuilder {
    /// Fix the RNG seed. Without one the generator is seeded from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load sampling ranges from a RON file when `build` runs.
    pub fn ranges_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ranges_path = Some(path.into());
        self
    }

    /// Provide sampling ranges directly.
    pub fn with_ranges(mut self, ranges: GeneratorRanges) -> Self {
        self.ranges = Some(ranges);
        self
    }

    pub fn build(self) -> Result<ConfigGenerator, GeneratorError> {
        let ranges = match (self.ranges, self.ranges_path) {
            (Some(ranges), _) => ranges,
            (None, Some(path)) => {
                debug!(path = %path.display(), "loading ranges");
                GeneratorRanges::load_from_ron(&path)?
            }
            (None, None) => GeneratorRanges::default(),
        };
        ranges.validate()?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(ConfigGenerator {
            ranges,
            rng,
            generated: 0,
        })
    }
}
