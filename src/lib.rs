//! Plane Config Generator — randomized plane presets for game config files.
//!
//! Each generated plane gets random combat stats plus placement for its
//! fuselage, wing, and stabilizer art, with the wing and tail positioned
//! relative to the fuselage it was drawn with.

pub mod cli;
pub mod core;
pub mod schema;
