use std::path::{Path, PathBuf};
use std::process::Command;

use favicon_gen_lib::cli::Mode;
use favicon_gen_lib::config::AppConfig;
use favicon_gen_lib::services::{
    GenerateError, generate_circle_logo_favicons, generate_text_favicons,
};
use image::{GenericImageView, Rgba, RgbaImage};

const EXPECTED: [(&str, u32); 3] = [
    ("favicon.png", 64),
    ("favicon-32x32.png", 32),
    ("favicon-16x16.png", 16),
];

/// Wide logo: red circle area on the left, grey wordmark area on the right.
fn write_logo(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < height {
            Rgba([200, 16, 46, 255])
        } else {
            Rgba([90, 90, 90, 255])
        }
    });
    img.save(path).unwrap();
}

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        source: dir.join("logo.png"),
        output_dir: dir.join("out"),
        font_candidates: vec![dir.join("missing-font.ttf")],
        ..AppConfig::default()
    }
}

fn read_outputs(out: &Path) -> Vec<Vec<u8>> {
    EXPECTED
        .iter()
        .map(|(name, _)| std::fs::read(out.join(name)).unwrap())
        .collect()
}

#[test]
fn circle_logo_writes_three_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_logo(&config.source, 300, 120);

    let files = generate_circle_logo_favicons(&config).unwrap();
    assert_eq!(files.len(), 3);

    for (name, edge) in EXPECTED {
        let img = image::open(config.output_dir.join(name)).unwrap();
        assert_eq!(img.dimensions(), (edge, edge), "{name}");
    }
    let entries: Vec<PathBuf> = std::fs::read_dir(&config.output_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 3, "{entries:?}");
}

#[test]
fn circle_logo_uses_left_square() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_logo(&config.source, 300, 120);

    generate_circle_logo_favicons(&config).unwrap();

    let img = image::open(config.output_dir.join("favicon-16x16.png"))
        .unwrap()
        .to_rgba8();
    // Only the red left square is kept
    let center = img.get_pixel(8, 8);
    assert!(center[0] > 150 && center[1] < 60, "{center:?}");
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let err = generate_circle_logo_favicons(&config).unwrap_err();
    assert!(matches!(err, GenerateError::SourceNotFound(ref p) if *p == config.source));
    assert!(err.to_string().contains("Logo file not found"));
    assert!(!config.output_dir.exists());
}

#[test]
fn corrupt_source_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::write(&config.source, b"not a png").unwrap();

    let err = generate_circle_logo_favicons(&config).unwrap_err();
    assert!(matches!(err, GenerateError::Decode { .. }), "{err:?}");
}

#[test]
fn circle_logo_detects_format_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        source: dir.path().join("logo"),
        ..test_config(dir.path())
    };
    RgbaImage::from_pixel(120, 60, Rgba([200, 16, 46, 255]))
        .save_with_format(&config.source, image::ImageFormat::Png)
        .unwrap();

    let files = generate_circle_logo_favicons(&config).unwrap();
    assert_eq!(files.len(), 3);
    let img = image::open(config.output_dir.join("favicon.png")).unwrap();
    assert_eq!(img.dimensions(), (64, 64));
}

#[test]
fn circle_logo_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_logo(&config.source, 257, 129);

    generate_circle_logo_favicons(&config).unwrap();
    let first = read_outputs(&config.output_dir);
    generate_circle_logo_favicons(&config).unwrap();
    assert_eq!(first, read_outputs(&config.output_dir));
}

#[test]
fn existing_favicons_are_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    write_logo(&config.source, 200, 100);
    std::fs::create_dir_all(&config.output_dir).unwrap();
    std::fs::write(config.output_dir.join("favicon.png"), b"stale").unwrap();

    generate_circle_logo_favicons(&config).unwrap();

    let img = image::open(config.output_dir.join("favicon.png")).unwrap();
    assert_eq!(img.dimensions(), (64, 64));
}

#[test]
fn text_falls_back_to_builtin_font() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let files = generate_text_favicons(&config).unwrap();
    assert_eq!(files.len(), 3);

    for (name, edge) in EXPECTED {
        let img = image::open(config.output_dir.join(name)).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (edge, edge), "{name}");

        let inked: Vec<_> = img.pixels().filter(|p| p[3] != 0).collect();
        assert!(!inked.is_empty(), "{name} has no text");
        assert!(inked.iter().all(|p| **p == config.text_color), "{name}");
        // Corners stay transparent
        assert_eq!(img.get_pixel(0, edge - 1)[3], 0, "{name}");
    }
}

#[test]
fn text_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    generate_text_favicons(&config).unwrap();
    let first = read_outputs(&config.output_dir);
    generate_text_favicons(&config).unwrap();
    assert_eq!(first, read_outputs(&config.output_dir));
}

#[test]
fn run_dispatches_on_mode() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    // No logo present: only the text path succeeds
    assert!(favicon_gen_lib::run(Mode::CircleLogo, &config).is_err());
    assert!(favicon_gen_lib::run(Mode::Text, &config).is_ok());
}

fn binary(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_favicon-gen"));
    cmd.current_dir(dir)
        .env("FAVICON_SOURCE", dir.join("logo.png"))
        .env("FAVICON_OUTPUT_DIR", dir.join("out"))
        .env("FAVICON_FONTS", dir.join("missing-font.ttf"))
        .env_remove("FAVICON_TEXT")
        .env_remove("FAVICON_TEXT_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn binary_exits_nonzero_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Logo file not found"), "{stdout}");
    assert!(stdout.contains("Failed to generate favicons"), "{stdout}");
    assert!(!dir.path().join("out").exists());
}

#[test]
fn binary_text_flag_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary(dir.path()).arg("--text").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating text-only favicons (HA4E)"), "{stdout}");
    assert_eq!(stdout.matches("Generated: ").count(), 3, "{stdout}");
    assert!(stdout.contains("Favicons generated successfully"), "{stdout}");
}

#[test]
fn binary_ignores_unknown_arguments() {
    let dir = tempfile::tempdir().unwrap();
    write_logo(&dir.path().join("logo.png"), 100, 100);

    let output = binary(dir.path()).arg("--bogus").output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating circle logo favicons"), "{stdout}");
    assert!(dir.path().join("out/favicon-16x16.png").exists());
}

#[test]
fn binary_reads_log_filter_from_dotenv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "RUST_LOG=debug\n").unwrap();

    let output = binary(dir.path()).arg("--text").output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Favicon written"), "{stderr}");
    assert!(stderr.contains("Loaded .env from"), "{stderr}");
}

#[test]
fn binary_logs_nothing_by_default() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary(dir.path()).arg("--text").output().unwrap();
    assert!(output.status.success(), "{output:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Favicon written"), "{stderr}");
}
