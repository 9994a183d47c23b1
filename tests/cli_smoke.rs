//! CLI Smoke Tests
//!
//! Spawn the real binary with scripted stdin and check the terminal
//! behavior of the wired-together pipeline: exit codes, prompts, and the
//! menu output.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn cli_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_coverforge-cli")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let name = if cfg!(windows) {
                "coverforge-cli.exe"
            } else {
                "coverforge-cli"
            };
            PathBuf::from("target").join("debug").join(name)
        })
}

fn cli_in(root: &std::path::Path) -> Command {
    let mut cmd = Command::new(cli_exe());
    cmd.arg("--images-dir")
        .arg(root.join("images"))
        .arg("--fonts-dir")
        .arg(root.join("fonts"))
        .arg("--output-dir")
        .arg(root.join("output"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

#[test]
fn missing_images_location_exits_nonzero() {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut child = cli_in(dir.path()).spawn().expect("spawn coverforge-cli");
    drop(child.stdin.take());
    let out = child.wait_with_output().expect("wait for coverforge-cli");

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Welcome to the Blog Graphics Generator!"));
    assert!(stdout.contains("not found"), "stdout: {stdout}");
}

#[test]
fn invalid_image_choice_exits_with_selection_code() {
    let dir = tempfile::tempdir().expect("temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).expect("create images dir");
    image::RgbImage::from_pixel(64, 64, image::Rgb([0, 0, 0]))
        .save(images.join("only.png"))
        .expect("write base image");

    let mut child = cli_in(dir.path()).spawn().expect("spawn coverforge-cli");
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"7\n")
        .expect("write choice");
    drop(child.stdin.take());
    let out = child.wait_with_output().expect("wait for coverforge-cli");

    assert_eq!(out.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("1. only.png"));
    assert!(stdout.contains("Invalid choice. Exiting."));
}

#[test]
fn closed_stdin_mid_run_reports_an_input_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let images = dir.path().join("images");
    std::fs::create_dir_all(&images).expect("create images dir");
    image::RgbImage::from_pixel(64, 64, image::Rgb([0, 0, 0]))
        .save(images.join("only.png"))
        .expect("write base image");

    // Stdin closes after the image choice, before the title prompt is
    // answered.
    let mut child = cli_in(dir.path()).spawn().expect("spawn coverforge-cli");
    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"1\n")
        .expect("write choice");
    drop(child.stdin.take());
    let out = child.wait_with_output().expect("wait for coverforge-cli");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Input error:"), "stderr: {stderr}");
}
