//! Benchmarks for dichroma operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use dichroma_bench::gradient_image;
use dichroma_color::Simulator;
use dichroma_core::Rgb;
use dichroma_ops::{PipelineOptions, parallel, simulate_image};
use dichroma_transfer::srgb;

/// Benchmark sRGB transfer functions.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark single color simulation.
fn bench_simulate_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_color");
    let sim = Simulator::protanopia();

    let colors: Vec<Rgb> = (0..=255u8)
        .step_by(5)
        .flat_map(|r| (0..=255u8).step_by(51).map(move |g| Rgb::from_u8(r, g, 255 - r)))
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("simulate", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&rgb| sim.simulate(black_box(rgb)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("simulate_detailed", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|&rgb| sim.simulate_detailed(black_box(rgb)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark whole image simulation, sequential vs parallel.
fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("image");
    group.sample_size(20);
    let sim = Simulator::protanopia();

    for size in [64u32, 256, 512].iter() {
        let img = gradient_image(*size, *size);
        group.throughput(Throughput::Elements((*size as u64) * (*size as u64)));

        group.bench_with_input(BenchmarkId::new("sequential", size), &img, |b, img| {
            b.iter(|| simulate_image(black_box(img), sim, PipelineOptions::default()))
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &img, |b, img| {
            b.iter(|| parallel::simulate_image(black_box(img), sim, PipelineOptions::default()))
        });

        group.bench_with_input(BenchmarkId::new("parallel_no_rmsd", size), &img, |b, img| {
            b.iter(|| {
                parallel::simulate_image(
                    black_box(img),
                    sim,
                    PipelineOptions { compute_rmsd: false },
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_simulate_color, bench_image);
criterion_main!(benches);
