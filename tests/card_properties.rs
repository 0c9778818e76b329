//! Integration tests: shader validity and full morph-cycle behavior.
//!
//! The WGSL sources live in Rust string constants, so a typo would
//! otherwise only surface at pipeline creation on a live GPU; parsing and
//! validating them with naga catches that in CI.

use sporeling::config::CardConfig;
use sporeling::gpu::{ORNAMENT_SHADER, PARTICLE_SHADER, POST_SHADER};
use sporeling::morph::MorphController;
use sporeling::ornaments::OrnamentField;
use sporeling::particles::{animated_position, ParticleField};
use sporeling::sampler::ShapeSampler;

fn validate_wgsl(label: &str, source: &str) {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{label} failed to parse: {e}"));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("{label} failed validation: {e:?}"));
}

#[test]
fn particle_shader_is_valid_wgsl() {
    validate_wgsl("particle shader", PARTICLE_SHADER);
}

#[test]
fn ornament_shader_is_valid_wgsl() {
    validate_wgsl("ornament shader", ORNAMENT_SHADER);
}

#[test]
fn post_shader_is_valid_wgsl() {
    validate_wgsl("post-process shader", POST_SHADER);
}

/// Drive a small scene through a full toggle cycle the way the render loop
/// does, checking that both fields settle where the state says.
#[test]
fn full_morph_cycle_settles_both_fields() {
    let config = CardConfig {
        particle_count: 64,
        ornament_count: 8,
        ..CardConfig::default()
    };
    let mut sampler = ShapeSampler::from_seed(99);
    let mut particles = ParticleField::generate(&config, &mut sampler);
    let mut ornaments = OrnamentField::generate(&config, &mut sampler);
    let mut morph = MorphController::new();

    let dt = 1.0 / 60.0;
    let mut elapsed = 0.0;
    let frame = |particles: &mut ParticleField,
                     ornaments: &mut OrnamentField,
                     morph: &MorphController,
                     elapsed: &mut f32| {
        *elapsed += dt;
        particles.update(morph.target_progress(), dt);
        ornaments.update(*elapsed, morph.is_tree(), dt);
        assert!(particles.progress() >= 0.0 && particles.progress() <= 1.0);
    };

    // Crystallize.
    morph.toggle();
    for _ in 0..600 {
        frame(&mut particles, &mut ornaments, &morph, &mut elapsed);
    }
    assert_eq!(particles.progress(), 1.0);
    for ornament in ornaments.ornaments() {
        let dist = (ornament.current_position - ornament.target_position).length();
        assert!(dist < 0.05, "ornament stuck {dist} from tree position");
    }

    // Dissolve again.
    morph.toggle();
    for _ in 0..600 {
        frame(&mut particles, &mut ornaments, &morph, &mut elapsed);
    }
    assert_eq!(particles.progress(), 0.0);
    for ornament in ornaments.ornaments() {
        let dist = (ornament.current_position - ornament.scatter_position).length();
        assert!(dist < 0.05, "ornament stuck {dist} from scatter position");
    }

    // Rendered particle positions stay finite across the whole cycle.
    for particle in particles.particles() {
        let pos = animated_position(
            particle.scatter_position,
            particle.target_position,
            particles.progress(),
            elapsed,
            particle.seed,
        );
        assert!(pos.is_finite());
    }
}

/// A pause (delta 0) followed by a huge catch-up delta must not throw any
/// state past its target.
#[test]
fn stalled_frame_recovers_without_overshoot() {
    let config = CardConfig {
        particle_count: 16,
        ornament_count: 4,
        ..CardConfig::default()
    };
    let mut sampler = ShapeSampler::from_seed(5);
    let mut particles = ParticleField::generate(&config, &mut sampler);
    let mut ornaments = OrnamentField::generate(&config, &mut sampler);

    particles.update(1.0, 0.0);
    ornaments.update(0.0, true, 0.0);
    assert_eq!(particles.progress(), 0.0);

    particles.update(1.0, 3600.0);
    ornaments.update(0.1, true, 3600.0);
    assert!(particles.progress() <= 1.0);
    for ornament in ornaments.ornaments() {
        assert_eq!(ornament.current_position, ornament.target_position);
    }
}
