use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stripctl::{Color, Frame};

fn parse_color(c: &mut Criterion) {
    c.bench_function("parse_color", |b| {
        b.iter(|| black_box("#00FF00").parse::<Color>().unwrap())
    });
}

fn build_frame(c: &mut Criterion) {
    let color = Color::new(0, 255, 0);
    for length in [60, 300] {
        c.bench_function(&format!("build_frame_{length}"), |b| {
            b.iter(|| Frame::solid(black_box(color), 10, length).unwrap())
        });
    }
}

criterion_group!(benches, parse_color, build_frame);
criterion_main!(benches);
