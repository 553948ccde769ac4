// ABOUTME: Checks the license header carried by every Rust source file in the workspace
// ABOUTME: Walks src, crates, tests and benches and asserts the SPDX and copyright lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Herdwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

const SPDX_LINE: &str = "// SPDX-License-Identifier: MIT OR Apache-2.0";
const COPYRIGHT_LINE: &str = "// Copyright (c) 2025 Herdwise Contributors";
const HEADER_LINES: usize = 8;

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == "target") {
                continue;
            }
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

#[test]
fn test_every_source_file_carries_workspace_header() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    for dir in ["src", "crates", "tests", "benches"] {
        collect_rust_files(&root.join(dir), &mut files);
    }
    assert!(files.len() > 20, "found only {} files", files.len());

    for file in files {
        let text = fs::read_to_string(&file).unwrap();
        let header: Vec<&str> = text.lines().take(HEADER_LINES).collect();
        assert!(header.contains(&SPDX_LINE), "{} lacks SPDX line", file.display());
        assert!(
            header.contains(&COPYRIGHT_LINE),
            "{} lacks copyright line",
            file.display()
        );
    }
}
