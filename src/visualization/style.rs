//! How a body's world position maps to what is drawn on screen.
//!
//! The view looks down the z axis: x/y pick the spot in the window, z sets
//! both grey level and disc size, so bodies nearer the far wall appear
//! brighter and larger.

use crate::simulation::states::{NVec3, WorldBox};

/// Grey level for a light body: `z / 3`, truncated and clamped to a byte
pub fn body_shade(pos: &NVec3) -> u8 {
    ((pos.z / 3.0) as i64).clamp(0, 255) as u8
}

/// Disc radius in pixels for a light body: `z / 20`, truncated, never negative
pub fn body_radius(pos: &NVec3) -> f32 {
    ((pos.z / 20.0) as i64).max(0) as f32
}

/// Radius of the red anchor marker: `y / 10`, truncated, never negative
pub fn anchor_radius(pos: &NVec3) -> f32 {
    ((pos.y / 10.0) as i64).max(0) as f32
}

/// Map world x/y (origin top left, y down) to Bevy 2D coordinates
/// (origin at the window center, y up)
pub fn to_screen(pos: &NVec3, world: &WorldBox) -> (f32, f32) {
    let x = pos.x - 0.5 * world.width;
    let y = 0.5 * world.height - pos.y;
    (x as f32, y as f32)
}
