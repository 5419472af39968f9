use criterion::{criterion_group, criterion_main, Criterion};
use rasterkit_image::{Image, ImageSize};
use std::hint::black_box;

fn sample_image() -> Image<u8, 4> {
    Image::from_size_val(
        ImageSize {
            width: 1920,
            height: 1080,
        },
        127,
    )
    .unwrap()
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("Image");

    group.bench_function("split_channels", |b| {
        let image = sample_image();
        b.iter(|| black_box(&image).split_channels().unwrap())
    });

    group.bench_function("cast_i32", |b| {
        let image = sample_image();
        b.iter(|| black_box(&image).cast::<i32>().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_image);
criterion_main!(benches);
