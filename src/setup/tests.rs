// lab-fetch: Model and Taxonomy Fetcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{ConfigFileOutcome, DEFAULT_CONFIG_YML, normalize, write_default_config};

#[test]
fn test_normalize() {
    let cases: Vec<(&str, PathBuf)> = ["", ".", "./a/./b", "a/../b", "../x", "/a/../..", "a/.."]
        .into_iter()
        .map(|p| (p, normalize(Path::new(p))))
        .collect();

    assert_eq!(
        cases,
        [
            ("", PathBuf::from(".")),
            (".", PathBuf::from(".")),
            ("./a/./b", PathBuf::from("a/b")),
            ("a/../b", PathBuf::from("b")),
            ("../x", PathBuf::from("../x")),
            ("/a/../..", PathBuf::from("/")),
            ("a/..", PathBuf::from(".")),
        ]
    );
}

#[test]
fn test_creates_config_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");

    let outcome = write_default_config(temp.path()).unwrap();

    let expected = temp.path().join("config.yml");
    assert_eq!(outcome, ConfigFileOutcome::Created(expected.clone()));
    assert_eq!(std::fs::read_to_string(expected).unwrap(), DEFAULT_CONFIG_YML);
}

#[test]
fn test_existing_config_is_not_overwritten() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp.path().join("config.yml");
    std::fs::write(&path, "log:\n  level: debug\n").unwrap();

    let outcome = write_default_config(temp.path()).unwrap();

    assert_eq!(outcome, ConfigFileOutcome::AlreadyExists(path.clone()));
    assert_eq!(outcome.path(), path);
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "log:\n  level: debug\n"
    );
}

#[test]
fn test_missing_directory_is_fs_error() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let err = write_default_config(&temp.path().join("nope")).unwrap_err();
    assert!(matches!(err, crate::error::LabError::Fs(_)));
}

#[test]
fn test_default_document_sections() {
    let sections: Vec<&str> = DEFAULT_CONFIG_YML
        .lines()
        .filter(|l| !l.starts_with(' ') && l.ends_with(':'))
        .collect();
    assert_eq!(sections, ["chat:", "generate:", "list:", "log:", "serve:"]);
}
