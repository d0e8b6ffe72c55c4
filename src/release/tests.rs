// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::{ReleaseRequest, fetch_release};
use crate::core::process::ProcessOutput;
use crate::core::process::test_utils::FakeRunner;
use crate::error::{LabError, ReleaseError};

const REPO: &str = "https://github.com/open-labrador/cli.git";

fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn request(release: &str, dir: &str, pattern: &str) -> ReleaseRequest {
    ReleaseRequest::builder()
        .repo(REPO)
        .release(release)
        .dir(dir)
        .pattern(pattern)
        .build()
}

#[test]
fn test_request_defaults() {
    let req = ReleaseRequest::builder().repo(REPO).build();
    assert_eq!(req.release(), "latest");
    assert_eq!(req.dir(), ".");
    assert_eq!(req.pattern(), "");
}

#[test]
fn test_download_command_variants() {
    let lines = [
        ("latest, no pattern", request("latest", ".", "")),
        ("latest, pattern", request("latest", "models", "*.gguf*")),
        ("tagged, no pattern", request("v0.2.0", ".", "")),
        ("tagged, pattern", request("v0.2.0", "models", "ggml-*")),
    ]
    .map(|(label, req)| format!("{label}: {}", req.download_command().command_line()));

    insta::assert_snapshot!(lines.join("\n"), @r"
    latest, no pattern: gh release download --repo https://github.com/open-labrador/cli.git --dir . --pattern *
    latest, pattern: gh release download --repo https://github.com/open-labrador/cli.git --dir models --pattern *.gguf*
    tagged, no pattern: gh release download v0.2.0 --repo https://github.com/open-labrador/cli.git --dir .
    tagged, pattern: gh release download v0.2.0 --repo https://github.com/open-labrador/cli.git --dir models --pattern ggml-*
    ");
}

#[test]
fn test_latest_without_pattern_has_wildcard_and_no_tag() {
    let cmd = request("latest", ".", "").download_command();
    let args = cmd.args_slice();

    assert!(!args.iter().any(|a| a == "latest"));
    assert_eq!(&args[args.len() - 2..], ["--pattern", "*"]);
}

#[test]
fn test_download_command_is_named_for_logs() {
    let cmd = request("v0.2.0", ".", "").download_command();
    assert_eq!(cmd.program(), "gh");
    assert_eq!(cmd.display_name(), "release download");
}

#[test]
fn test_invalid_pattern_rejected_before_download() {
    let temp = temp_dir();
    let runner = FakeRunner::silent();
    let req = request("latest", &temp.path().display().to_string(), "models/[");

    let err = fetch_release(&runner, &req).unwrap_err();

    assert!(matches!(err, LabError::Config(_)));
    assert!(runner.calls().is_empty());
}

#[test]
fn test_gh_glob_patterns_reach_download() {
    for pattern in [
        "model**",
        "*.gguf.split.*",
        "[!a]*",
        "{a,b}",
        "[^a-c]*",
        "\\[x\\]",
        "[\\]]*",
    ] {
        let temp = temp_dir();
        let runner = FakeRunner::silent();
        let req = request("latest", &temp.path().display().to_string(), pattern);

        fetch_release(&runner, &req)
            .unwrap_or_else(|e| panic!("pattern {pattern:?} was rejected: {e}"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            &calls[0].args_slice()[calls[0].args_slice().len() - 2..],
            ["--pattern", pattern]
        );
    }
}

#[test]
fn test_malformed_gh_globs_are_rejected() {
    for pattern in [
        "[",
        "models/[a",
        "[]",
        "[^]",
        "[a-]",
        "[-a]",
        "trailing\\",
        "[a\\",
    ] {
        let err = request("latest", ".", pattern).validate().unwrap_err();
        assert!(
            err.to_string().contains("pattern"),
            "unexpected error for {pattern:?}: {err}"
        );
    }
}

#[test]
fn test_stderr_aborts_before_reassembly() {
    let temp = temp_dir();
    fs::write(temp.path().join("m.split.1"), "x").unwrap();
    let runner = FakeRunner::failing("release not found");
    let req = request("v9.9.9", &temp.path().display().to_string(), "");

    let err = fetch_release(&runner, &req).unwrap_err();

    match err {
        LabError::Release(inner) => match *inner {
            ReleaseError::Download { repo, stderr } => {
                assert_eq!(repo, REPO);
                assert_eq!(stderr, "release not found");
            }
        },
        other => panic!("expected download error, got {other:?}"),
    }
    assert_eq!(runner.calls().len(), 1, "no cat/rm after a failed download");
    assert!(temp.path().join("m.split.1").exists());
}

#[test]
fn test_stderr_with_zero_exit_still_fails() {
    let temp = temp_dir();
    let runner = FakeRunner::new(|_| Ok(ProcessOutput::new(0, Vec::new(), b"warning".to_vec())));
    let req = request("latest", &temp.path().display().to_string(), "");

    assert!(fetch_release(&runner, &req).is_err());
}

#[test]
fn test_successful_download_reassembles_target_dir() {
    let temp = temp_dir();
    fs::write(temp.path().join("model.gguf.split.aa"), "foo").unwrap();
    fs::write(temp.path().join("model.gguf.split.ab"), "bar").unwrap();
    fs::write(temp.path().join("bad model.split.aa"), "x").unwrap();

    let runner = FakeRunner::new(|cmd| {
        let stdout = if cmd.program() == "cat" {
            b"foobar".to_vec()
        } else {
            Vec::new()
        };
        Ok(ProcessOutput::new(0, stdout, Vec::new()))
    });
    let req = request("latest", &temp.path().display().to_string(), "");

    let report = fetch_release(&runner, &req).unwrap();

    assert_eq!(report.combined, ["model.gguf"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("model.gguf")).unwrap(),
        "foobar"
    );
    let programs: Vec<String> = runner
        .calls()
        .iter()
        .map(|c| c.program().to_string())
        .collect();
    assert_eq!(programs, ["gh", "cat", "rm"]);
    assert_eq!(
        runner.calls()[1].args_slice(),
        ["--", "model.gguf.split.aa", "model.gguf.split.ab"]
    );
}

#[test]
fn test_nothing_to_combine() {
    let temp = temp_dir();
    fs::write(temp.path().join("model.gguf"), "weights").unwrap();
    let runner = FakeRunner::silent();
    let req = request("latest", &temp.path().display().to_string(), "");

    let report = fetch_release(&runner, &req).unwrap();

    assert!(report.combined.is_empty());
    assert_eq!(runner.calls().len(), 1);
}
