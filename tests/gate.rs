use std::path::Path;
use std::process::Command;

use pdf2svg::cli::USAGE;

/// Wrapper command that only sees configuration rooted in `dir`
fn wrapper(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pdf2svg"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("PDF2SVG_BASE_DIR")
        .env_remove("PDF2SVG_INTERPRETER")
        .env_remove("PDF2SVG_VENV_DIR")
        .env_remove("PDF2SVG_SCRIPT");
    cmd
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = wrapper(temp_dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), USAGE);
    assert!(output.stderr.is_empty());
    // Nothing was created in the working directory
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_environment_exits_127() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = wrapper(temp_dir.path()).arg("input.pdf").output().unwrap();

    assert_eq!(output.status.code(), Some(127));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("venv"));
}

#[cfg(unix)]
#[test]
fn test_ctrl_c_waits_for_converter_status() {
    use std::os::unix::process::CommandExt;
    use std::time::{Duration, Instant};

    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("venv/bin")).unwrap();
    std::os::unix::fs::symlink("/bin/sh", root.join("venv/bin/python")).unwrap();
    // Ignored dispositions survive exec, so `sleep` rides out the SIGINT too
    std::fs::write(
        root.join("pdf_to_svg.py"),
        "trap '' INT\n: > started\nsleep 1\n: > done\nexit 3\n",
    )
    .unwrap();

    let mut child = wrapper(root).arg("input.pdf").process_group(0).spawn().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while !root.join("started").exists() {
        assert!(Instant::now() < deadline, "converter never started");
        std::thread::sleep(Duration::from_millis(20));
    }

    let kill = Command::new("kill")
        .args(["-s", "INT", "--", &format!("-{}", child.id())])
        .status()
        .unwrap();
    assert!(kill.success());

    let status = child.wait().unwrap();
    assert!(root.join("done").exists(), "wrapper returned before the converter finished");
    assert_eq!(status.code(), Some(3));
}
