//! Benchmarks for the CPU side of a frame.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sporeling::config::CardConfig;
use sporeling::ornaments::OrnamentField;
use sporeling::particles::{animated_position, zone_color, ParticleField};
use sporeling::sampler::ShapeSampler;

fn bench_ornament_update(c: &mut Criterion) {
    let config = CardConfig::default();
    let mut sampler = ShapeSampler::from_seed(1);
    let mut field = OrnamentField::generate(&config, &mut sampler);

    let mut elapsed = 0.0_f32;
    c.bench_function("ornament_field_update_500", |b| {
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            field.update(elapsed, true, 1.0 / 60.0);
            black_box(field.box_instances().len())
        })
    });
}

fn bench_particle_mirror(c: &mut Criterion) {
    let config = CardConfig::default();
    let mut sampler = ShapeSampler::from_seed(2);
    let field = ParticleField::generate(&config, &mut sampler);

    c.bench_function("particle_cpu_mirror_15000", |b| {
        b.iter(|| {
            let mut acc = 0.0_f32;
            for p in field.particles() {
                let pos = animated_position(
                    p.scatter_position,
                    p.target_position,
                    0.5,
                    black_box(2.0),
                    p.seed,
                );
                let color = zone_color(p.seed, 2.0);
                acc += pos.y + color.x;
            }
            black_box(acc)
        })
    });
}

fn bench_field_generation(c: &mut Criterion) {
    let config = CardConfig::default();

    c.bench_function("particle_field_generate_15000", |b| {
        b.iter(|| {
            let mut sampler = ShapeSampler::from_seed(3);
            black_box(ParticleField::generate(&config, &mut sampler).len())
        })
    });
}

criterion_group!(
    benches,
    bench_ornament_update,
    bench_particle_mirror,
    bench_field_generation
);
criterion_main!(benches);
