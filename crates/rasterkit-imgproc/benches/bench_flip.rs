use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterkit_image::Image;
use std::hint::black_box;
use rasterkit_imgproc::{flip, threshold};

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flip");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 4>::from_size_val(image_size, 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("horizontal_flip", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(flip::horizontal_flip(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("vertical_flip", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(flip::vertical_flip(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("threshold_binary", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(threshold::threshold_binary(i, 128))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flip);
criterion_main!(benches);
