use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, ImageFormat};
use jpg_resize::{final_name, process_single_image, ImageCrateBackend, ResizeMode, StageOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_image(width: u32, height: u32) -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let temp = root.path().join("work");
    let output = root.path().join("out");
    for dir in [&input, &temp, &output] {
        fs::create_dir_all(dir).unwrap();
    }

    DynamicImage::new_rgb8(width, height)
        .save_with_format(input.join("bench.jpg"), ImageFormat::Jpeg)
        .unwrap();

    (root, input, temp, output)
}

fn bench_naming(c: &mut Criterion) {
    c.bench_function("final_name", |b| {
        b.iter(|| final_name(black_box("holiday-photo-0042.jpg")))
    });
}

fn bench_target_dimensions(c: &mut Criterion) {
    let modes = [
        ("width", ResizeMode::Width(800)),
        ("height", ResizeMode::Height(600)),
        ("fit", ResizeMode::Fit { width: 800, height: 800 }),
    ];

    let mut group = c.benchmark_group("target_dimensions");
    for (name, mode) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(name), &mode, |b, mode| {
            b.iter(|| mode.target_dimensions(black_box(4000), black_box(3000)))
        });
    }
    group.finish();
}

fn bench_single_file_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_file_pipeline");
    group.sample_size(10);

    for (width, height) in [(640, 480), (1920, 1080)] {
        let (_root, input, temp, output) = create_test_image(width, height);
        let options = StageOptions {
            input_dir: &input,
            temp_dir: &temp,
            output_dir: &output,
            mode: ResizeMode::Width(320),
            quality: 92,
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &options,
            |b, options| {
                b.iter(|| process_single_image(&ImageCrateBackend, black_box("bench.jpg"), options))
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_naming,
    bench_target_dimensions,
    bench_single_file_pipeline
);
criterion_main!(benches);
