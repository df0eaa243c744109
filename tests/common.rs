#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a real JPEG of the given size.
pub fn create_test_jpg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    DynamicImage::ImageRgb8(img)
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

/// A file with a `.jpg` name that no decoder accepts.
pub fn create_corrupt_jpg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake jpg data")
        .unwrap();
    path
}

pub fn create_non_jpg_files(dir: &Path) -> Vec<PathBuf> {
    let png_file = dir.join("test.png");
    let txt_file = dir.join("test.txt");
    let upper_file = dir.join("TEST.JPG");

    DynamicImage::new_rgb8(10, 10)
        .save_with_format(&png_file, ImageFormat::Png)
        .unwrap();
    File::create(&txt_file)
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
    File::create(&upper_file)
        .unwrap()
        .write_all(b"uppercase extension")
        .unwrap();

    vec![png_file, txt_file, upper_file]
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_io_directories(temp_dir: &Path) -> (PathBuf, PathBuf) {
    let input_dir = temp_dir.join("input");
    let output_dir = temp_dir.join("output");
    fs::create_dir(&input_dir).unwrap();
    fs::create_dir(&output_dir).unwrap();
    (input_dir, output_dir)
}

pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

pub fn image_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}
