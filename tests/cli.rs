use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn anifetch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_anifetch"))
        .args(args)
        .output()
        .expect("failed to run anifetch")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_exits_zero() {
    for flag in ["--help", "-h"] {
        let output = anifetch(&[flag, "--config", "/nonexistent/anifetch.conf"]);
        assert!(output.status.success(), "{} failed", flag);
        assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
        // config is never read
        assert!(!stderr(&output).contains("Could not open config file"));
    }
}

#[test]
fn test_version_exits_zero() {
    for flag in ["--version", "-v"] {
        let output = anifetch(&[flag]);
        assert!(output.status.success(), "{} failed", flag);
        assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_bad_arguments_exit_one() {
    let output = anifetch(&["--bogus"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--bogus"));

    let output = anifetch(&["one.png", "two.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_image_exits_one() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("config.conf");
    let image = dir.path().join("missing.png");

    let output = anifetch(&[
        "--config",
        conf.to_str().unwrap(),
        image.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains(image.to_str().unwrap()), "stderr: {}", err);
    assert!(err.contains("Could not open config file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_image_anywhere_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("config.conf");
    fs::write(&conf, "img_width=60\ncrop_mode=fill\n").unwrap();

    let output = anifetch(&["--config", conf.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_configured_image_must_exist() {
    let dir = TempDir::new().unwrap();
    let conf = dir.path().join("config.conf");
    let image = dir.path().join("wall.png");
    fs::write(&conf, format!("image_path = {}\n", image.display())).unwrap();

    let output = anifetch(&["--config", conf.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(image.to_str().unwrap()));
}
