use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use filtra_image::Image;
use filtra_imgproc::filter::{filter_3x3, FilterKind};

fn bench_filter_3x3(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter3x3");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for num_threads in [1, 2, 4, 8].iter() {
            group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

            let parameter_string = format!("{}x{}x{}", width, height, num_threads);

            let image_data = (0..width * height * 3).map(|i| (i % 256) as u8).collect();
            let image_size = [*width, *height].into();

            let image = Image::<u8, 3>::new(image_size, image_data).unwrap();
            let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();
            let kernel = FilterKind::GaussianBlur.kernel();

            group.bench_with_input(
                BenchmarkId::new("gaussian_3x3", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(filter_3x3(src, &mut dst, &kernel, *num_threads)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filter_3x3);
criterion_main!(benches);
