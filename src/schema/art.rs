use serde::{Deserialize, Serialize};

/// Placement of one sprite piece of a plane, relative to the plane origin.
///
/// Positions and sizes are in world units; `y` points toward the nose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtPos {
    #[serde(rename = "Pos")]
    pub position: (f64, f64),
    #[serde(rename = "Size")]
    pub size: (f64, f64),
}

impl ArtPos {
    pub fn new(position: (f64, f64), size: (f64, f64)) -> Self {
        Self { position, size }
    }

    /// An art piece anchored at the origin.
    pub fn centered(size: (f64, f64)) -> Self {
        Self::new((0.0, 0.0), size)
    }
}
