//! Random shape sampling for the card's two target volumes.
//!
//! [`ShapeSampler`] wraps a small RNG with the sampling operations the
//! fields need: a volume-uniform scatter sphere and the composite mushroom
//! solid. Every operation is total - a bounded number of draws, always a
//! finite point, no rejection loops.

use crate::config::MushroomParams;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Fraction of mushroom samples that land on the cap; the rest fill the stem.
const CAP_FRACTION: f32 = 0.7;

/// Random point source for scene construction.
///
/// One sampler is created per scene build and threaded through all field
/// constructors, so a seeded sampler makes an entire card reproducible.
pub struct ShapeSampler {
    rng: SmallRng,
}

impl ShapeSampler {
    /// Sampler seeded from OS entropy; every run lays the card out fresh.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic sampler for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 in [0, 1).
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    /// Volume-uniform point inside a sphere of `radius`, centered at origin.
    ///
    /// Polar angle comes from an inverse cosine so samples don't cluster at
    /// the poles; the cube root on the radial draw compensates for shell
    /// volume growing with r^2, so density is uniform rather than piling up
    /// at the center.
    pub fn scatter_position(&mut self, radius: f32) -> Vec3 {
        let theta = self.rng.gen_range(0.0..TAU);
        let phi = self.rng.gen_range(-1.0_f32..1.0).acos();
        let r = radius * self.rng.gen::<f32>().cbrt();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Random point on the mushroom solid: the cap shell with probability
    /// [`CAP_FRACTION`], otherwise the stem volume.
    ///
    /// The cap is a flattened semi-ellipsoid sitting on top of the stem;
    /// the stem is a cylinder centered vertically at the origin, tapering
    /// to 70% of its base radius at the top. Both get a small symmetric
    /// radial jitter so the silhouette stays organic.
    pub fn mushroom_position(&mut self, params: &MushroomParams) -> Vec3 {
        if self.rng.gen::<f32>() < CAP_FRACTION {
            let theta = self.rng.gen_range(0.0..TAU);
            let phi = self.rng.gen_range(0.0..FRAC_PI_2);
            let r = params.cap_radius + (self.rng.gen::<f32>() - 0.5) * params.noise_strength;

            Vec3::new(
                r * phi.sin() * theta.cos(),
                params.cap_height * phi.cos() + params.stem_height * 0.5,
                r * phi.sin() * theta.sin(),
            )
        } else {
            let theta = self.rng.gen_range(0.0..TAU);
            let h = (self.rng.gen::<f32>() - 0.5) * params.stem_height;
            let taper = 1.0 - (h / params.stem_height + 0.5) * 0.3;
            let r = (params.stem_radius
                + (self.rng.gen::<f32>() - 0.5) * params.noise_strength * 0.5)
                * taper;

            Vec3::new(r * theta.cos(), h, r * theta.sin())
        }
    }
}

impl Default for ShapeSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 4000;

    #[test]
    fn test_scatter_stays_inside_radius() {
        let mut sampler = ShapeSampler::from_seed(1);
        for _ in 0..SAMPLES {
            let pos = sampler.scatter_position(30.0);
            assert!(pos.length() <= 30.0 + 1e-3);
            assert!(pos.is_finite());
        }
    }

    #[test]
    fn test_scatter_is_volume_uniform() {
        // If density is uniform by volume, (|p| / R)^3 is uniform on [0, 1),
        // so its mean sits near 0.5. A uniform-radius sampler would land
        // near 0.25 instead.
        let mut sampler = ShapeSampler::from_seed(2);
        let mean: f32 = (0..SAMPLES)
            .map(|_| (sampler.scatter_position(10.0).length() / 10.0).powi(3))
            .sum::<f32>()
            / SAMPLES as f32;
        assert!((mean - 0.5).abs() < 0.03, "mean cubed radius {mean}");
    }

    #[test]
    fn test_mushroom_stays_inside_envelope() {
        let params = MushroomParams::default();
        let mut sampler = ShapeSampler::from_seed(3);

        let half_noise = params.noise_strength * 0.5;
        let y_min = -params.stem_height * 0.5 - 1e-3;
        let y_max = params.stem_height * 0.5 + params.cap_height + 1e-3;
        let r_max = params.cap_radius + half_noise + 1e-3;

        for _ in 0..SAMPLES {
            let pos = sampler.mushroom_position(&params);
            assert!(pos.y >= y_min && pos.y <= y_max, "y out of bounds: {pos}");
            let radial = (pos.x * pos.x + pos.z * pos.z).sqrt();
            assert!(radial <= r_max, "radius out of bounds: {pos}");
        }
    }

    #[test]
    fn test_mushroom_populates_both_regions() {
        let params = MushroomParams::default();
        let mut sampler = ShapeSampler::from_seed(4);
        let half_stem = params.stem_height * 0.5;

        let mut cap = 0usize;
        for _ in 0..SAMPLES {
            // Cap points sit strictly above the stem top, stem points
            // strictly below, so the y coordinate separates the regions.
            if sampler.mushroom_position(&params).y > half_stem {
                cap += 1;
            }
        }
        let cap_share = cap as f32 / SAMPLES as f32;
        assert!(cap_share > 0.65 && cap_share < 0.75, "cap share {cap_share}");
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let mut a = ShapeSampler::from_seed(42);
        let mut b = ShapeSampler::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.scatter_position(5.0), b.scatter_position(5.0));
        }
    }

    #[test]
    fn test_pick_covers_palette() {
        let mut sampler = ShapeSampler::from_seed(5);
        let items = [1, 2, 3];
        for _ in 0..64 {
            assert!(items.contains(&sampler.pick(&items)));
        }
    }
}
