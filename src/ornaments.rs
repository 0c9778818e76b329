//! Rigid decorative instances - boxes and spheres scattered through the
//! cloud and hung on the tree.
//!
//! Unlike the foliage, ornaments carry genuine per-frame state: each one
//! keeps a current position that eases toward whichever endpoint the app
//! state selects, so their motion depends on history rather than on a
//! formula over the clock. Every frame the field emits one transform and
//! color per ornament, batched per shape class for instanced drawing.

use crate::config::{CardConfig, ORNAMENT_PALETTE};
use crate::sampler::ShapeSampler;
use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// The two ornament geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    Box,
    Sphere,
}

/// One ornament. Everything except `current_position` is fixed at creation.
#[derive(Debug, Clone)]
pub struct Ornament {
    pub shape: ShapeClass,
    pub scatter_position: Vec3,
    pub target_position: Vec3,
    /// Eases toward the active endpoint every frame; starts scattered.
    pub current_position: Vec3,
    /// Euler angles the continuous rotation is offset from.
    pub rotation_base: Vec3,
    /// Signed angular rate, radians per second before per-axis weighting.
    pub rotation_speed: f32,
    pub scale: f32,
    pub color: Vec3,
}

/// One instance as the ornament pipeline consumes it.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct OrnamentInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// The ornament set plus its per-frame instance batches.
pub struct OrnamentField {
    ornaments: Vec<Ornament>,
    transition_speed: f32,
    box_instances: Vec<OrnamentInstance>,
    sphere_instances: Vec<OrnamentInstance>,
}

impl OrnamentField {
    /// Generate `config.ornament_count` ornaments, the first half boxes and
    /// the rest spheres. Targets are pushed outward from the trunk axis by
    /// `config.ornament_offset` so they sit proud of the foliage shell.
    pub fn generate(config: &CardConfig, sampler: &mut ShapeSampler) -> Self {
        let total = config.ornament_count;
        let box_count = total / 2;

        let ornaments = (0..total)
            .map(|i| {
                let shape = if i < box_count {
                    ShapeClass::Box
                } else {
                    ShapeClass::Sphere
                };

                let mut target = sampler.mushroom_position(&config.mushroom);
                // Horizontal radial push; zero when the sample happens to
                // land exactly on the axis.
                let radial = Vec3::new(target.x, 0.0, target.z).normalize_or_zero();
                target += radial * config.ornament_offset;

                let scatter = sampler
                    .scatter_position(config.scatter_radius * config.ornament_scatter_factor);

                Ornament {
                    shape,
                    scatter_position: scatter,
                    target_position: target,
                    current_position: scatter,
                    rotation_base: Vec3::new(
                        sampler.random_range(0.0, PI),
                        sampler.random_range(0.0, PI),
                        0.0,
                    ),
                    rotation_speed: sampler.random_range(-0.75, 0.75),
                    scale: sampler.random_range(0.3, 0.8),
                    color: sampler.pick(&ORNAMENT_PALETTE),
                }
            })
            .collect();

        Self {
            ornaments,
            transition_speed: config.transition_speed,
            box_instances: Vec::with_capacity(box_count as usize),
            sphere_instances: Vec::with_capacity((total - box_count) as usize),
        }
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    /// Instance batch for the box pipeline, valid after [`Self::update`].
    pub fn box_instances(&self) -> &[OrnamentInstance] {
        &self.box_instances
    }

    /// Instance batch for the sphere pipeline, valid after [`Self::update`].
    pub fn sphere_instances(&self) -> &[OrnamentInstance] {
        &self.sphere_instances
    }

    /// Ease every ornament toward its active endpoint and rebuild the two
    /// instance batches.
    ///
    /// The interpolation fraction is clamped to [0, 1]: after a pause or a
    /// long stall the ornament lands on its target at most, never past it.
    /// On top of the eased position each ornament gets a vertical float, a
    /// slow three-axis tumble and a scale pulse, all phase-keyed by index.
    pub fn update(&mut self, elapsed: f32, is_tree: bool, delta: f32) {
        let fraction = (delta * self.transition_speed).clamp(0.0, 1.0);

        self.box_instances.clear();
        self.sphere_instances.clear();

        for (i, ornament) in self.ornaments.iter_mut().enumerate() {
            let target = if is_tree {
                ornament.target_position
            } else {
                ornament.scatter_position
            };
            ornament.current_position = ornament.current_position.lerp(target, fraction);

            let phase = i as f32;
            let mut position = ornament.current_position;
            position.y += (elapsed * 0.5 + phase).sin() * 0.05;

            let spin = elapsed * ornament.rotation_speed;
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                ornament.rotation_base.x + spin * 0.3,
                ornament.rotation_base.y + spin * 0.3,
                ornament.rotation_base.z + spin * 0.1,
            );

            let pulse = 1.0 + (elapsed * 2.0 + phase).sin() * 0.1;
            let scale = Vec3::splat(ornament.scale * pulse);

            let instance = OrnamentInstance {
                model: Mat4::from_scale_rotation_translation(scale, rotation, position)
                    .to_cols_array_2d(),
                color: [ornament.color.x, ornament.color.y, ornament.color.z, 1.0],
            };

            match ornament.shape {
                ShapeClass::Box => self.box_instances.push(instance),
                ShapeClass::Sphere => self.sphere_instances.push(instance),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field(count: u32) -> OrnamentField {
        let config = CardConfig {
            ornament_count: count,
            ..CardConfig::default()
        };
        let mut sampler = ShapeSampler::from_seed(11);
        OrnamentField::generate(&config, &mut sampler)
    }

    #[test]
    fn test_even_split_between_shapes() {
        let field = small_field(2);
        assert_eq!(field.ornaments()[0].shape, ShapeClass::Box);
        assert_eq!(field.ornaments()[1].shape, ShapeClass::Sphere);
    }

    #[test]
    fn test_current_position_starts_scattered() {
        let field = small_field(6);
        for ornament in field.ornaments() {
            assert_eq!(ornament.current_position, ornament.scatter_position);
        }
    }

    #[test]
    fn test_converges_to_scatter_without_overshoot() {
        let mut field = small_field(2);
        // Kick both ornaments toward the tree first so there is distance
        // to cover on the way back.
        for _ in 0..30 {
            field.update(0.0, true, 1.0 / 60.0);
        }

        let mut last: Vec<f32> = field
            .ornaments()
            .iter()
            .map(|o| (o.current_position - o.scatter_position).length())
            .collect();

        for frame in 0..600 {
            field.update(frame as f32 / 60.0, false, 1.0 / 60.0);
            for (o, prev) in field.ornaments().iter().zip(last.iter_mut()) {
                let dist = (o.current_position - o.scatter_position).length();
                assert!(dist <= *prev + 1e-5, "distance grew: {dist} > {prev}");
                *prev = dist;
            }
        }

        for dist in last {
            assert!(dist < 1e-2, "did not converge: {dist}");
        }
    }

    #[test]
    fn test_huge_delta_lands_on_target() {
        let mut field = small_field(2);
        field.update(0.0, true, 1000.0);
        for ornament in field.ornaments() {
            assert_eq!(ornament.current_position, ornament.target_position);
        }
    }

    #[test]
    fn test_targets_pushed_off_axis() {
        let config = CardConfig::default();
        let field = small_field(40);
        for ornament in field.ornaments() {
            let radial = Vec3::new(
                ornament.target_position.x,
                0.0,
                ornament.target_position.z,
            )
            .length();
            // Stem base radius is the tightest case; every pushed target
            // clears at least the offset itself.
            assert!(radial >= config.ornament_offset * 0.9, "radial {radial}");
        }
    }

    #[test]
    fn test_update_fills_instance_batches() {
        let mut field = small_field(10);
        field.update(1.0, false, 1.0 / 60.0);
        assert_eq!(field.box_instances().len(), 5);
        assert_eq!(field.sphere_instances().len(), 5);

        for instance in field.box_instances() {
            assert!(instance.model.iter().flatten().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_empty_field_updates_cleanly() {
        let mut field = small_field(0);
        field.update(1.0, true, 1.0 / 60.0);
        assert!(field.box_instances().is_empty());
        assert!(field.sphere_instances().is_empty());
    }
}
