//! Scanning files on disk through the driver

use std::fs;
use std::path::PathBuf;
use u8strings::{collect_inputs, Driver, Input, Radix, Report, ScanConfig};

fn run(driver: &Driver, inputs: &[Input]) -> (Report, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let report = driver.run(inputs, &mut out, &mut diag);
    (
        report,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn test_scans_files_in_order_with_independent_state() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.bin");
    let second = dir.path().join("second.bin");
    // "ab" at the end of the first file must not join "cd" in the second
    fs::write(&first, b"alpha\x00ab").unwrap();
    fs::write(&second, b"cd\x00omega").unwrap();

    let driver = Driver::new("u8strings", ScanConfig::default());
    let (report, out, diag) = run(&driver, &[Input::Path(first), Input::Path(second)]);

    assert!(report.success());
    assert_eq!(report.scanned, 2);
    assert_eq!(out, "alpha\nomega\n");
    assert!(diag.is_empty());
}

#[test]
fn test_reports_offsets_per_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    fs::write(&path, b"Hello\x00\x00\x00World").unwrap();

    let config = ScanConfig::default().with_radix(Some(Radix::Decimal));
    let driver = Driver::new("u8strings", config);
    let (_, out, _) = run(&driver, &[Input::Path(path.clone()), Input::Path(path)]);

    assert_eq!(out, "0 Hello\n8 World\n0 Hello\n8 World\n");
}

#[test]
fn test_invalid_utf8_between_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.bin");
    let mut data = Vec::new();
    data.extend_from_slice(&[0xFF, b'A', b'A', b'A', b'A']);
    data.extend_from_slice(&[0xC3, 0x28]);
    data.extend_from_slice("naïve".as_bytes());
    data.push(0xE2);
    fs::write(&path, &data).unwrap();

    let driver = Driver::new("u8strings", ScanConfig::new(4).unwrap());
    let (_, out, _) = run(&driver, &[Input::Path(path)]);

    assert_eq!(out, "AAAA\n(naïve\n");
}

#[test]
fn test_failing_input_sets_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.bin");
    fs::write(&good, b"content").unwrap();
    let missing = dir.path().join("nope.bin");

    let driver = Driver::new("u8strings", ScanConfig::default());
    let (report, out, diag) = run(&driver, &[Input::Path(missing), Input::Path(good)]);

    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(out, "content\n");
    assert!(diag.starts_with("u8strings: "));
    assert!(diag.contains("nope.bin"));
}

#[test]
fn test_directory_without_recursion_fails_to_read() {
    let dir = tempfile::tempdir().unwrap();

    let inputs = collect_inputs(&[dir.path().to_path_buf()], false);
    let driver = Driver::new("u8strings", ScanConfig::default());
    let (report, _, _) = run(&driver, &inputs);

    assert_eq!(report.failed, 1);
}

#[cfg(feature = "walkdir")]
#[test]
fn test_recursive_scan_visits_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("b.bin"), b"\x00bravo\x00").unwrap();
    fs::write(dir.path().join("a.bin"), b"\x00alpha\x00").unwrap();
    fs::write(dir.path().join("sub/c.bin"), b"\x00charlie\x00").unwrap();

    let inputs = collect_inputs(&[dir.path().to_path_buf()], true);
    let names: Vec<PathBuf> = inputs
        .iter()
        .map(|input| match input {
            Input::Path(path) => path.strip_prefix(dir.path()).unwrap().to_path_buf(),
            other => PathBuf::from(other.to_string()),
        })
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.bin"),
            PathBuf::from("b.bin"),
            PathBuf::from("sub/c.bin"),
        ]
    );

    let driver = Driver::new("u8strings", ScanConfig::default());
    let (report, out, _) = run(&driver, &inputs);
    assert!(report.success());
    assert_eq!(out, "alpha\nbravo\ncharlie\n");
}

#[cfg(all(unix, feature = "walkdir"))]
#[test]
fn test_recursive_walk_error_does_not_stop_other_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.bin"), b"\x00alpha\x00").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("b-dangling")).unwrap();
    fs::write(dir.path().join("c.bin"), b"\x00charlie\x00").unwrap();

    let inputs = collect_inputs(&[dir.path().to_path_buf()], true);
    assert_eq!(inputs.len(), 3);
    assert!(inputs
        .iter()
        .any(|input| matches!(input, Input::Unreadable { path, .. } if path.ends_with("b-dangling"))));

    let driver = Driver::new("u8strings", ScanConfig::default());
    let (report, out, diag) = run(&driver, &inputs);

    assert_eq!(report, Report { scanned: 2, failed: 1 });
    assert_eq!(report.exit_code(), 1);
    assert_eq!(out, "alpha\ncharlie\n");
    assert!(diag.starts_with("u8strings: "));
    assert!(diag.contains("b-dangling"));
}
