//! Output formatting for generated planes.
//!
//! The text format is the YAML-flavoured block the game's config loader
//! reads from `Planes/`; the RON format is for tooling that wants to load
//! the records back with serde.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;
use thiserror::Error;

use crate::schema::art::ArtPos;
use crate::schema::plane::{FieldValue, GeneratedRecord, PlaneConfig};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON serialization error: {0}")]
    Ron(#[from] ron::Error),
}

/// How records are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled YAML-style blocks, one per plane.
    #[default]
    Text,
    /// A single RON map from label to plane.
    Ron,
}

const FIELD_INDENT: &str = "    ";
const ART_INDENT: &str = "        ";

/// Write one `Generated<N>:` block.
pub fn write_text_block<W: Write + ?Sized>(
    out: &mut W,
    record: &GeneratedRecord,
) -> std::io::Result<()> {
    writeln!(out, "{}:", record.label())?;
    for (name, value) in record.config.fields() {
        match value {
            FieldValue::Int(v) => writeln!(out, "{FIELD_INDENT}{name}: {v}")?,
            FieldValue::Literal(s) => writeln!(out, "{FIELD_INDENT}{name}: {s}")?,
            FieldValue::Art(art) => {
                writeln!(out, "{FIELD_INDENT}{name}:")?;
                write_art(out, art)?;
            }
        }
    }
    Ok(())
}

fn write_art<W: Write + ?Sized>(out: &mut W, art: &ArtPos) -> std::io::Result<()> {
    writeln!(
        out,
        "{ART_INDENT}Pos: [{:.6}, {:.6}]",
        art.position.0, art.position.1
    )?;
    writeln!(out, "{ART_INDENT}Size: [{:.6}, {:.6}]", art.size.0, art.size.1)
}

/// Render one record to a string in the text format.
pub fn text_block(record: &GeneratedRecord) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_text_block(&mut buf, record)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Serializes as a map keyed by label, in record order.
struct LabelledRecords<'a>(&'a [GeneratedRecord]);

impl Serialize for LabelledRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for record in self.0 {
            map.serialize_entry(&record.label(), &record.config)?;
        }
        map.end()
    }
}

/// Write all records as one pretty-printed RON map.
pub fn write_ron<W: Write + ?Sized>(
    out: &mut W,
    records: &[GeneratedRecord],
) -> Result<(), RenderError> {
    let text = ron::ser::to_string_pretty(
        &LabelledRecords(records),
        ron::ser::PrettyConfig::default(),
    )?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Parse RON produced by [`write_ron`] back into label/plane pairs, sorted by label.
pub fn parse_ron(input: &str) -> Result<Vec<(String, PlaneConfig)>, ron::error::SpannedError> {
    let map: std::collections::BTreeMap<String, PlaneConfig> = ron::from_str(input)?;
    Ok(map.into_iter().collect())
}
