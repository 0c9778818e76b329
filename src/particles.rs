//! The foliage point cloud.
//!
//! Per-point attributes are generated once and never mutated; the rendered
//! position and color are recomputed from scratch every frame as pure
//! functions of (endpoints, progress, time, seed). The only continuous
//! state in the field is the shared progress scalar. The CPU functions here
//! mirror the point shader in [`crate::gpu`] exactly, which is what makes
//! the motion and color logic testable.

use crate::config::CardConfig;
use crate::sampler::ShapeSampler;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Progress error below which the field snaps to its target and stops
/// stepping, instead of chasing sub-pixel differences forever.
const PROGRESS_EPSILON: f32 = 1e-3;

/// Immutable attributes of one point, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Home position in the dispersed cloud.
    pub scatter_position: Vec3,
    /// Home position on the mushroom solid.
    pub target_position: Vec3,
    /// In [0, 1); selects the color zone and offsets every motion phase.
    pub seed: f32,
    /// Base point size before attenuation and twinkle.
    pub size: f32,
}

/// One point as the GPU consumes it: two vec4s, endpoints in xyz with seed
/// and size packed into the w lanes.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub scatter_seed: [f32; 4],
    pub target_size: [f32; 4],
}

/// The field itself: a fixed set of points plus the smoothed morph progress.
pub struct ParticleField {
    particles: Vec<Particle>,
    progress: f32,
    transition_speed: f32,
}

impl ParticleField {
    /// Sample `config.particle_count` points. Scatter and target positions
    /// are drawn independently - nothing pairs them beyond sharing an index.
    pub fn generate(config: &CardConfig, sampler: &mut ShapeSampler) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                scatter_position: sampler.scatter_position(config.scatter_radius),
                target_position: sampler.mushroom_position(&config.mushroom),
                seed: sampler.random(),
                size: sampler.random_range(1.0, 3.5),
            })
            .collect();

        Self {
            particles,
            progress: 0.0,
            transition_speed: config.transition_speed,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Smoothed progress: 0 fully scattered, 1 fully tree-shaped.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Step the smoothed progress toward `target` (0 or 1).
    ///
    /// The step fraction is clamped to [0, 1] so an oversized delta after a
    /// stall cannot overshoot, and a delta of zero is a no-op. Within
    /// [`PROGRESS_EPSILON`] of the target the value snaps and holds.
    pub fn update(&mut self, target: f32, delta: f32) {
        if (target - self.progress).abs() <= PROGRESS_EPSILON {
            self.progress = target;
            return;
        }
        let step = (delta * self.transition_speed).clamp(0.0, 1.0);
        self.progress += (target - self.progress) * step;
    }

    /// Flat instance data for the one-time GPU upload.
    pub fn instance_data(&self) -> Vec<ParticleInstance> {
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                scatter_seed: [
                    p.scatter_position.x,
                    p.scatter_position.y,
                    p.scatter_position.z,
                    p.seed,
                ],
                target_size: [
                    p.target_position.x,
                    p.target_position.y,
                    p.target_position.z,
                    p.size,
                ],
            })
            .collect()
    }
}

/// Where a point sits this frame.
///
/// Linear blend of the two endpoints by `progress`, plus a breathing
/// oscillation, a positional wave, and a chaotic drift that fades out as
/// the shape solidifies. Mirrors `vs_main` of [`crate::gpu::PARTICLE_SHADER`].
pub fn animated_position(
    scatter: Vec3,
    target: Vec3,
    progress: f32,
    time: f32,
    seed: f32,
) -> Vec3 {
    let mut pos = scatter.lerp(target, progress);

    let breathe = (time + seed * 15.0).sin() * 0.2;
    let wave = (pos.x * 0.5 + time).cos() * 0.1;
    let drift = (time * 0.3 + seed * 30.0).sin() * (1.0 - progress) * 2.0;

    pos.x += breathe * 0.3 + drift;
    pos.y += breathe + wave + drift;
    pos.z += breathe * 0.3 + drift;
    pos
}

/// Size pulse applied on top of distance attenuation.
pub fn twinkle(time: f32, seed: f32) -> f32 {
    1.0 + (time * 3.0 + seed * 20.0).sin() * 0.3
}

/// Per-point color: five zones keyed on seed ranges, two of them blending
/// between a pair of hues over time. A function of the seed alone plus a
/// time phase - no per-point color storage. Mirrors `fs_main` of
/// [`crate::gpu::PARTICLE_SHADER`].
pub fn zone_color(seed: f32, time: f32) -> Vec3 {
    const GOLD: Vec3 = Vec3::new(1.0, 0.7, 0.0);
    const MAGENTA: Vec3 = Vec3::new(0.9, 0.0, 0.4);
    const CYAN: Vec3 = Vec3::new(0.0, 0.8, 1.0);
    const PURPLE: Vec3 = Vec3::new(0.5, 0.0, 0.8);
    const EMERALD: Vec3 = Vec3::new(0.0, 0.8, 0.4);

    let blend = (time + seed * 5.0).sin() * 0.5 + 0.5;
    let color = if seed < 0.2 {
        GOLD.lerp(MAGENTA, blend)
    } else if seed < 0.4 {
        PURPLE.lerp(CYAN, blend)
    } else if seed < 0.6 {
        EMERALD
    } else if seed < 0.8 {
        GOLD
    } else {
        MAGENTA
    };

    color * 1.2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(count: u32) -> ParticleField {
        let config = CardConfig {
            particle_count: count,
            ..CardConfig::default()
        };
        let mut sampler = ShapeSampler::from_seed(7);
        ParticleField::generate(&config, &mut sampler)
    }

    #[test]
    fn test_generate_three_distinct_particles() {
        let field = small_field(3);
        assert_eq!(field.len(), 3);

        let p = field.particles();
        for particle in p {
            assert!((0.0..1.0).contains(&particle.seed));
            assert!((1.0..3.5).contains(&particle.size));
        }
        assert_ne!(p[0].scatter_position, p[1].scatter_position);
        assert_ne!(p[1].scatter_position, p[2].scatter_position);
        assert_ne!(p[0].target_position, p[1].target_position);
        assert_ne!(p[1].target_position, p[2].target_position);
    }

    #[test]
    fn test_empty_field_is_valid() {
        let mut field = small_field(0);
        assert!(field.is_empty());
        assert!(field.instance_data().is_empty());
        field.update(1.0, 0.016);
        assert!(field.progress() >= 0.0);
    }

    #[test]
    fn test_progress_converges_monotonically() {
        let mut field = small_field(1);
        let mut last = field.progress();
        let mut steps = 0;
        while field.progress() < 1.0 - 1e-3 {
            field.update(1.0, 1.0 / 60.0);
            assert!(field.progress() >= last);
            assert!(field.progress() <= 1.0);
            last = field.progress();
            steps += 1;
            assert!(steps < 10_000, "did not converge");
        }
        // One more step snaps onto the target.
        field.update(1.0, 1.0 / 60.0);
        assert_eq!(field.progress(), 1.0);
    }

    #[test]
    fn test_progress_never_leaves_unit_interval() {
        let mut field = small_field(1);
        // Huge delta: the clamped fraction lands on the target at most.
        field.update(1.0, 1000.0);
        assert!(field.progress() <= 1.0);
        field.update(0.0, 1000.0);
        assert!(field.progress() >= 0.0);
    }

    #[test]
    fn test_zero_delta_is_a_noop() {
        let mut field = small_field(1);
        field.update(1.0, 0.25);
        let before = field.progress();
        field.update(1.0, 0.0);
        assert_eq!(field.progress(), before);
    }

    #[test]
    fn test_animated_position_tracks_endpoints() {
        let scatter = Vec3::new(10.0, -4.0, 2.0);
        let target = Vec3::new(0.0, 6.0, 0.0);

        // Fully formed: only breathing and wave remain, all small.
        let settled = animated_position(scatter, target, 1.0, 2.3, 0.5);
        assert!((settled - target).length() < 0.6);

        // Scattered: the chaotic drift term may push much further out.
        let loose = animated_position(scatter, target, 0.0, 2.3, 0.5);
        assert!((loose - scatter).length() < 4.0);
    }

    #[test]
    fn test_twinkle_stays_positive() {
        for i in 0..100 {
            let t = i as f32 * 0.37;
            let factor = twinkle(t, (i as f32 * 0.017) % 1.0);
            assert!(factor >= 0.7 && factor <= 1.3);
        }
    }

    #[test]
    fn test_zone_color_partitions_by_seed() {
        // Fixed zones are time-invariant.
        assert_eq!(zone_color(0.5, 0.0), zone_color(0.5, 9.0));
        assert_eq!(zone_color(0.7, 1.0), Vec3::new(1.0, 0.7, 0.0) * 1.2);
        assert_eq!(zone_color(0.9, 1.0), Vec3::new(0.9, 0.0, 0.4) * 1.2);

        // Blending zones move with time but stay between their endpoints.
        let a = zone_color(0.1, 0.0);
        let b = zone_color(0.1, 1.0);
        assert_ne!(a, b);
        for c in [a, b] {
            assert!(c.min_element() >= 0.0);
            assert!(c.max_element() <= 1.2 + 1e-6);
        }
    }
}
