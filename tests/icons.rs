use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use iconpack::{ErrorKind, IconConfig, OutputFormat, convert_with_config, render_icons};

fn config_in(dir: &Path) -> IconConfig {
    IconConfig {
        source: dir.join("logo.png"),
        output_dir: dir.to_path_buf(),
        ..IconConfig::default()
    }
}

fn save_source(dir: &Path, img: &RgbaImage) {
    img.save(dir.join("logo.png")).unwrap();
}

fn close(a: &Rgba<u8>, b: &Rgba<u8>) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| x.abs_diff(*y) <= 1)
}

#[test]
fn large_square_source_yields_four_exact_icons() {
    let dir = tempfile::tempdir().unwrap();
    let color = Rgba([220, 120, 20, 255]);
    save_source(dir.path(), &RgbaImage::from_pixel(512, 512, color));

    let written = convert_with_config(&config_in(dir.path()), |_| {}).unwrap();

    let names: Vec<String> = written.iter().map(|f| f.file_name()).collect();
    assert_eq!(names, ["icon16.png", "icon32.png", "icon48.png", "icon128.png"]);
    for file in &written {
        let icon = image::open(&file.path).unwrap().into_rgba8();
        assert_eq!(icon.dimensions(), (file.size, file.size));
        assert!(
            icon.pixels().all(|p| close(p, &color)),
            "{} is not solid",
            file.file_name()
        );
    }
}

#[test]
fn small_source_is_upscaled() {
    let dir = tempfile::tempdir().unwrap();
    save_source(dir.path(), &RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255])));

    convert_with_config(&config_in(dir.path()), |_| {}).unwrap();

    let big = image::open(dir.path().join("icon128.png")).unwrap();
    assert_eq!((big.width(), big.height()), (128, 128));
}

#[test]
fn non_square_source_keeps_full_field_of_view() {
    let dir = tempfile::tempdir().unwrap();
    // Red in the left quarter only; a center crop would lose it.
    let src = RgbaImage::from_fn(200, 100, |x, _| {
        if x < 50 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    save_source(dir.path(), &src);

    convert_with_config(&config_in(dir.path()), |_| {}).unwrap();

    let icon = image::open(dir.path().join("icon128.png")).unwrap().into_rgba8();
    let left = icon.get_pixel(4, 64);
    let right = icon.get_pixel(120, 64);
    assert!(left[0] > 200 && left[2] < 50, "left: {left:?}");
    assert!(right[2] > 200 && right[0] < 50, "right: {right:?}");
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let src = RgbaImage::from_fn(300, 300, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]));
    save_source(dir.path(), &src);
    let config = config_in(dir.path());

    let first: Vec<Vec<u8>> = convert_with_config(&config, |_| {})
        .unwrap()
        .iter()
        .map(|f| fs::read(&f.path).unwrap())
        .collect();
    let second: Vec<Vec<u8>> = convert_with_config(&config, |_| {})
        .unwrap()
        .iter()
        .map(|f| fs::read(&f.path).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let err = convert_with_config(&config_in(dir.path()), |_| {}).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn corrupt_source_is_conversion_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("logo.png"), b"not an image").unwrap();

    let err = convert_with_config(&config_in(dir.path()), |_| {}).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConversionFailed);
}

#[test]
fn write_failure_stops_remaining_sizes() {
    let dir = tempfile::tempdir().unwrap();
    save_source(dir.path(), &RgbaImage::from_pixel(128, 128, Rgba([0, 0, 0, 255])));
    // A directory squatting on the second icon's name makes its write fail.
    fs::create_dir(dir.path().join("icon32.png")).unwrap();

    let mut notified = Vec::new();
    let err = convert_with_config(&config_in(dir.path()), |f| notified.push(f.size)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConversionFailed);
    assert!(err.to_string().contains("icon32.png"), "{err}");
    assert_eq!(notified, vec![16]);
    assert!(dir.path().join("icon16.png").is_file());
    assert!(!dir.path().join("icon48.png").exists());
    assert!(!dir.path().join("icon128.png").exists());
}

#[test]
fn output_directory_and_format_are_configurable() {
    let dir = tempfile::tempdir().unwrap();
    save_source(dir.path(), &RgbaImage::from_pixel(100, 100, Rgba([5, 5, 5, 255])));
    let config = IconConfig {
        output_dir: dir.path().join("dist").join("icons"),
        sizes: vec![24],
        format: OutputFormat::Tiff,
        ..config_in(dir.path())
    };

    let written = convert_with_config(&config, |_| {}).unwrap();

    assert_eq!(written[0].path, dir.path().join("dist").join("icons").join("icon24.tiff"));
    let icon = image::open(&written[0].path).unwrap();
    assert_eq!((icon.width(), icon.height()), (24, 24));
}

#[test]
fn rendering_matches_written_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let src = RgbaImage::from_fn(160, 120, |x, y| Rgba([(x * 3) as u8, (y * 2) as u8, 77, 255]));
    save_source(dir.path(), &src);
    let config = config_in(dir.path());

    let rendered = render_icons(&config).unwrap();
    let written = convert_with_config(&config, |_| {}).unwrap();

    for (mem, file) in rendered.iter().zip(&written) {
        assert_eq!(mem.size, file.size);
        assert_eq!(mem.image, image::open(&file.path).unwrap().into_rgba8());
    }
}
