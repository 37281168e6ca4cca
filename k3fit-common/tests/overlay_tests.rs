// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for overlay discovery.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use k3fit_common::overlay::{
    board_object, discover_overlays, scan_overlays, StringsExtractor, StringsTool,
};
use k3fit_common::{ItsError, Result};

/// Returns canned output and records the object it was asked about.
struct CannedStrings {
    output: String,
    seen: RefCell<Vec<PathBuf>>,
}

impl CannedStrings {
    fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl StringsExtractor for CannedStrings {
    fn extract(&self, object: &Path) -> Result<String> {
        self.seen.borrow_mut().push(object.to_path_buf());
        Ok(self.output.clone())
    }
}

const BUILT_IN_STRINGS: &str = "\
GCC: (GNU) 8.3.0
k3-am654-base-board
k3-am654-gp.dtbo
name_overlays
 k3-am654-evm-hdmi.dtbo
k3-am654-pcie-usb2.dtbo
.shstrtab
";

// =============================================================================
// scan_overlays tests
// =============================================================================

#[test]
fn test_scan_overlays_keeps_order() {
    assert_eq!(
        scan_overlays(BUILT_IN_STRINGS),
        vec![
            "k3-am654-gp.dtbo",
            "k3-am654-evm-hdmi.dtbo",
            "k3-am654-pcie-usb2.dtbo"
        ]
    );
}

#[test]
fn test_scan_overlays_suffix_must_end_line() {
    let output = "foo.dtbo.bak\nbar.dtb\nmentions baz.dtbo here\n";
    assert!(scan_overlays(output).is_empty());
}

#[test]
fn test_scan_overlays_no_dedup() {
    assert_eq!(scan_overlays("a.dtbo\na.dtbo\n"), vec!["a.dtbo", "a.dtbo"]);
}

#[test]
fn test_scan_overlays_crlf() {
    assert_eq!(scan_overlays("a.dtbo\r\nb.dtbo"), vec!["a.dtbo", "b.dtbo"]);
}

// =============================================================================
// discover_overlays tests
// =============================================================================

#[test]
fn test_discover_overlays_drops_missing_files() {
    let dts = tempfile::tempdir().unwrap();
    fs::write(dts.path().join("k3-am654-gp.dtbo"), b"\xd0\x0d\xfe\xed").unwrap();
    fs::write(dts.path().join("k3-am654-pcie-usb2.dtbo"), b"\xd0\x0d\xfe\xed").unwrap();

    let strings = CannedStrings::new(BUILT_IN_STRINGS);
    let object = board_object("ti/am65x");
    let overlays = discover_overlays(&strings, &object, dts.path()).unwrap();

    assert_eq!(overlays, vec!["k3-am654-gp.dtbo", "k3-am654-pcie-usb2.dtbo"]);
    assert_eq!(*strings.seen.borrow(), vec![object]);
}

#[test]
fn test_discover_overlays_directory_is_not_a_file() {
    let dts = tempfile::tempdir().unwrap();
    fs::create_dir(dts.path().join("a.dtbo")).unwrap();

    let strings = CannedStrings::new("a.dtbo\n");
    let overlays = discover_overlays(&strings, Path::new("built-in.o"), dts.path()).unwrap();
    assert!(overlays.is_empty());
}

#[test]
fn test_discover_overlays_rooted_name_stays_inside_dts_dir() {
    let outside = tempfile::tempdir().unwrap();
    let rooted = outside.path().join("evil.dtbo");
    fs::write(&rooted, b"").unwrap();
    let dts = tempfile::tempdir().unwrap();

    let strings = CannedStrings::new(format!("{}\n", rooted.display()));
    let overlays = discover_overlays(&strings, Path::new("built-in.o"), dts.path()).unwrap();
    assert!(overlays.is_empty());
}

#[test]
fn test_discover_overlays_none_referenced() {
    let dts = tempfile::tempdir().unwrap();
    let strings = CannedStrings::new("GCC: (GNU) 8.3.0\n");
    let overlays = discover_overlays(&strings, Path::new("built-in.o"), dts.path()).unwrap();
    assert!(overlays.is_empty());
}

// =============================================================================
// StringsTool tests
// =============================================================================

#[test]
fn test_board_object_path() {
    assert_eq!(
        board_object("ti/am65x"),
        Path::new("board").join("ti/am65x").join("built-in.o")
    );
}

#[test]
fn test_strings_tool_default_program() {
    assert_eq!(StringsTool::default().program(), "strings");
}

#[test]
fn test_strings_tool_missing_program() {
    let tool = StringsTool::new("k3fit-no-such-strings-program");
    assert!(matches!(
        tool.extract(Path::new("built-in.o")),
        Err(ItsError::StringsSpawn { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_strings_tool_reads_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let object = dir.path().join("built-in.o");
    fs::write(&object, "x.dtbo\n").unwrap();

    // `cat` stands in for `strings` on a text file.
    let output = StringsTool::new("cat").extract(&object).unwrap();
    assert_eq!(scan_overlays(&output), vec!["x.dtbo"]);
}

#[cfg(unix)]
#[test]
fn test_strings_tool_nonzero_exit_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let object = dir.path().join("missing.o");

    assert!(matches!(
        StringsTool::new("cat").extract(&object),
        Err(ItsError::StringsFailed { .. })
    ));
}
