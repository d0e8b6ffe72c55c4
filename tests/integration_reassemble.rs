// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for downloading and reassembling split models.
//!
//! `gh` is simulated by a runner that drops fragment files into the target
//! directory; `cat` and `rm` run for real.

#![cfg(unix)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use lab_fetch::artifact::{Reassembler, read_listing};
use lab_fetch::core::process::{ProcessBuilder, ProcessOutput, ProcessRunner, SystemRunner};
use lab_fetch::error::{LabError, LabResult};
use lab_fetch::release::{ReleaseRequest, fetch_release};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Stands in for `gh`, writing `assets` into `--dir`; everything else runs
/// on the system.
struct FakeGh {
    assets: Vec<(&'static str, &'static [u8])>,
    stderr: &'static str,
    programs: RefCell<Vec<String>>,
}

impl FakeGh {
    fn new(assets: Vec<(&'static str, &'static [u8])>) -> Self {
        Self {
            assets,
            stderr: "",
            programs: RefCell::new(Vec::new()),
        }
    }

    fn programs(&self) -> Vec<String> {
        self.programs.borrow().clone()
    }
}

impl ProcessRunner for FakeGh {
    fn run(&self, command: &ProcessBuilder) -> LabResult<ProcessOutput> {
        self.programs.borrow_mut().push(command.program().to_string());
        if command.program() != "gh" {
            return SystemRunner.run(command);
        }

        let args = command.args_slice();
        let dir = args
            .iter()
            .position(|a| a == "--dir")
            .and_then(|i| args.get(i + 1))
            .map(PathBuf::from)
            .expect("gh invoked without --dir");
        if self.stderr.is_empty() {
            for (name, content) in &self.assets {
                fs::write(dir.join(name), content).expect("failed to write asset");
            }
        }
        Ok(ProcessOutput::new(
            i32::from(!self.stderr.is_empty()),
            Vec::new(),
            self.stderr.as_bytes().to_vec(),
        ))
    }
}

fn request(dir: &Path) -> ReleaseRequest {
    ReleaseRequest::builder()
        .repo("https://github.com/open-labrador/cli.git")
        .dir(dir.display().to_string())
        .build()
}

#[test]
fn download_combines_split_models_and_removes_fragments() {
    let temp = temp_dir();
    let gh = FakeGh::new(vec![
        ("model.gguf.split.aa", &b"GGUF\x00\x01"[..]),
        ("model.gguf.split.ab", &b"\xff\xfetail"[..]),
        ("small.gguf", &b"whole"[..]),
    ]);

    let report = fetch_release(&gh, &request(temp.path())).unwrap();

    assert_eq!(report.combined, ["model.gguf"]);
    assert_eq!(
        fs::read(temp.path().join("model.gguf")).unwrap(),
        b"GGUF\x00\x01\xff\xfetail"
    );
    assert_eq!(
        read_listing(temp.path()).unwrap(),
        ["model.gguf", "small.gguf"]
    );
    assert_eq!(gh.programs(), ["gh", "cat", "rm"]);
}

#[test]
fn download_with_stderr_leaves_directory_untouched() {
    let temp = temp_dir();
    fs::write(temp.path().join("old.split.1"), b"old").unwrap();
    let gh = FakeGh {
        stderr: "HTTP 404: release not found",
        ..FakeGh::new(vec![("new.split.1", &b"new"[..])])
    };

    let err = fetch_release(&gh, &request(temp.path())).unwrap_err();

    assert!(matches!(err, LabError::Release(_)));
    assert!(err.to_string().contains("HTTP 404: release not found"));
    assert_eq!(gh.programs(), ["gh"]);
    assert_eq!(read_listing(temp.path()).unwrap(), ["old.split.1"]);
}

#[test]
fn reassembly_orders_fragments_bytewise() {
    let temp = temp_dir();
    for (name, content) in [
        ("w.split.b", "2"),
        ("w.split.a", "1"),
        ("w.split.c", "3"),
        ("v.split.0", "v"),
    ] {
        fs::write(temp.path().join(name), content).unwrap();
    }

    let listing = read_listing(temp.path()).unwrap();
    let combined = Reassembler::new(SystemRunner, temp.path())
        .reassemble(&listing)
        .unwrap();

    assert_eq!(combined, ["v", "w"]);
    assert_eq!(fs::read_to_string(temp.path().join("w")).unwrap(), "123");
    assert_eq!(fs::read_to_string(temp.path().join("v")).unwrap(), "v");
}

#[test]
fn reassembly_skips_empty_and_malformed_groups() {
    let temp = temp_dir();
    fs::write(temp.path().join("empty.split.1"), b"").unwrap();
    fs::write(temp.path().join(".split.orphan"), b"x").unwrap();
    fs::write(temp.path().join("bad name.split.1"), b"x").unwrap();

    let mut events = Vec::new();
    let listing = read_listing(temp.path()).unwrap();
    let combined = Reassembler::new(SystemRunner, temp.path())
        .on_skip(|event| events.push(event.clone()))
        .reassemble(&listing)
        .unwrap();

    assert!(combined.is_empty());
    assert_eq!(events.len(), 3);
    assert_eq!(read_listing(temp.path()).unwrap(), listing);
}

#[test]
fn reassembly_rerun_is_noop() {
    let temp = temp_dir();
    fs::write(temp.path().join("m.split.1"), b"a").unwrap();
    fs::write(temp.path().join("m.split.2"), b"b").unwrap();

    let first = Reassembler::new(SystemRunner, temp.path())
        .reassemble(read_listing(temp.path()).unwrap())
        .unwrap();
    let second = Reassembler::new(SystemRunner, temp.path())
        .reassemble(read_listing(temp.path()).unwrap())
        .unwrap();

    assert_eq!(first, ["m"]);
    assert!(second.is_empty());
    assert_eq!(fs::read(temp.path().join("m")).unwrap(), b"ab");
}
