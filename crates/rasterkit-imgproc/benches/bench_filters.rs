use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterkit_image::Image;
use std::hint::black_box;
use rasterkit_imgproc::filter::{filter2d_with, kernels, BorderPolicy};
use rasterkit_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter2d");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let image_size = [*width, *height].into();
        let gray = Image::<u8, 1>::from_size_val(image_size, 127).unwrap();
        let rgba = Image::<u8, 4>::from_size_val(image_size, 127).unwrap();

        for (name, kernel) in [
            ("box3", kernels::box_3x3()),
            ("box5", kernels::box_5x5()),
            ("gaussian3", kernels::gaussian_3x3()),
        ] {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * kernel.size() * kernel.size()) as u64,
            ));

            let parameter_string = format!("{}x{}_{}", width, height, name);

            for (strategy_name, strategy) in [
                ("serial", ExecutionStrategy::Serial),
                ("parallel_rows", ExecutionStrategy::ParallelRows),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(format!("gray_{strategy_name}"), &parameter_string),
                    &gray,
                    |b, i| {
                        b.iter(|| {
                            black_box(filter2d_with(
                                i,
                                &kernel,
                                BorderPolicy::ZeroPadded,
                                strategy,
                            ))
                        })
                    },
                );
            }

            group.bench_with_input(
                BenchmarkId::new("rgba_parallel_rows", &parameter_string),
                &rgba,
                |b, i| {
                    b.iter(|| {
                        black_box(filter2d_with(
                            i,
                            &kernel,
                            BorderPolicy::ZeroPadded,
                            ExecutionStrategy::ParallelRows,
                        ))
                    })
                },
            );
        }

        let gaussian_f32 = kernels::gaussian_kernel(5, 1.5).unwrap();
        group.bench_with_input(
            BenchmarkId::new("gray_gaussian_f32", format!("{}x{}", width, height)),
            &gray,
            |b, i| {
                b.iter(|| {
                    black_box(filter2d_with(
                        i,
                        &gaussian_f32,
                        BorderPolicy::Cropped,
                        ExecutionStrategy::ParallelRows,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
