use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettyclip::gamut::{find_cusp, HueDirection};
use prettyclip::{ClipStrategy, Float, GamutClipper};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(665);
    let uniform = Uniform::new_inclusive(-0.5 as Float, 1.5 as Float)
        .expect("need valid range for random coordinates");
    let colors: Vec<[Float; 3]> = core::iter::repeat_with(|| {
        [
            uniform.sample(&mut rng),
            uniform.sample(&mut rng),
            uniform.sample(&mut rng),
        ]
    })
    .take(1_000)
    .collect();

    let mut group = c.benchmark_group("gamut-clip");

    for strategy in [
        ClipStrategy::PreserveChroma,
        ClipStrategy::ProjectToMidGray,
        ClipStrategy::ProjectToCusp,
        ClipStrategy::AdaptiveToMidGray,
        ClipStrategy::AdaptiveToCusp,
    ] {
        let clipper = GamutClipper::new(strategy);
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                for color in &colors {
                    black_box(clipper.clip(black_box(color)));
                }
            })
        });
    }

    group.bench_function("find-cusp", |b| {
        let hue = HueDirection::from_degrees(200.0);
        b.iter(|| find_cusp(black_box(hue)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
