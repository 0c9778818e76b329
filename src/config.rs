//! Construction-time configuration for the card scene.
//!
//! Everything here is read once while the scene is being built; nothing is
//! hot-reloadable. Counts of zero are valid and degrade to empty draws.

use glam::Vec3;

/// Top-level tuning knobs for the card.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Number of points in the foliage field.
    pub particle_count: u32,
    /// Total ornament count, split evenly between boxes and spheres.
    pub ornament_count: u32,
    /// Radius of the scattered-state sphere.
    pub scatter_radius: f32,
    /// Ornaments scatter over a slightly wider sphere than the foliage so
    /// the two layers read separately while dispersed.
    pub ornament_scatter_factor: f32,
    /// Initial orbit distance of the camera.
    pub camera_distance: f32,
    /// Rate of the scatter/tree transition, per second.
    pub transition_speed: f32,
    /// How far ornament targets are pushed out from the trunk axis so they
    /// sit proud of the foliage shell instead of z-fighting inside it.
    pub ornament_offset: f32,
    /// Dimensions of the mushroom target solid.
    pub mushroom: MushroomParams,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            particle_count: 15_000,
            ornament_count: 500,
            scatter_radius: 30.0,
            ornament_scatter_factor: 1.2,
            camera_distance: 20.0,
            transition_speed: 1.8,
            ornament_offset: 0.8,
            mushroom: MushroomParams::default(),
        }
    }
}

/// Dimensions of the mushroom solid the particles converge to.
#[derive(Debug, Clone, Copy)]
pub struct MushroomParams {
    /// Radius of the cap shell.
    pub cap_radius: f32,
    /// Vertical extent of the cap above the stem top.
    pub cap_height: f32,
    /// Base radius of the stem cylinder.
    pub stem_radius: f32,
    /// Full height of the stem; it spans [-stem_height/2, +stem_height/2].
    pub stem_height: f32,
    /// Symmetric radial jitter giving cap and stem an organic edge.
    pub noise_strength: f32,
}

impl Default for MushroomParams {
    fn default() -> Self {
        Self {
            cap_radius: 7.0,
            cap_height: 5.0,
            stem_radius: 1.5,
            stem_height: 8.0,
            noise_strength: 0.6,
        }
    }
}

/// Background and fog color, a violet so deep it reads as black.
pub const BACKGROUND: Vec3 = Vec3::new(0.008, 0.0, 0.02);

/// Fog band: fully clear closer than this...
pub const FOG_NEAR: f32 = 15.0;
/// ...fully background past this.
pub const FOG_FAR: f32 = 50.0;

/// Ornament tints: deep gold, rich magenta, sky blue, violet, pink,
/// crimson, spring green.
pub const ORNAMENT_PALETTE: [Vec3; 7] = [
    Vec3::new(1.0, 0.753, 0.0),
    Vec3::new(0.902, 0.0, 0.361),
    Vec3::new(0.0, 0.749, 1.0),
    Vec3::new(0.4, 0.0, 0.8),
    Vec3::new(1.0, 0.078, 0.576),
    Vec3::new(0.863, 0.078, 0.235),
    Vec3::new(0.0, 0.98, 0.604),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sane() {
        let config = CardConfig::default();
        assert!(config.particle_count > 0);
        assert_eq!(config.ornament_count % 2, 0);
        assert!(config.scatter_radius > config.mushroom.cap_radius);
        assert!(config.transition_speed > 0.0);
    }

    #[test]
    fn test_palette_in_unit_range() {
        for color in ORNAMENT_PALETTE {
            for channel in [color.x, color.y, color.z] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
