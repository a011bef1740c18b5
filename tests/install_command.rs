#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `install` command.
//!
//! These tests exercise the full installer registry, the name-based
//! selection applied by `--only`/`--skip`, and the fail-fast run loop.

mod common;

use std::collections::HashSet;

use common::{FakeFetcher, IntegrationTestContext};
use dotfiles_installer::commands::install::run_installers;
use dotfiles_installer::error::{ConfigError, FetchError};
use dotfiles_installer::installers;
use dotfiles_installer::logging::RunStatus;

// ---------------------------------------------------------------------------
// Snapshot: full installer list
// ---------------------------------------------------------------------------

/// Snapshot of all installer names in run order.
///
/// Any addition, removal, or rename of an installer fails this test, prompting
/// a deliberate snapshot update.
#[test]
fn installer_names() {
    let all = installers::all_installers();
    let names: Vec<&str> = all.iter().map(|i| i.name()).collect();
    insta::assert_snapshot!("installer_names", names.join("\n"));
}

// ---------------------------------------------------------------------------
// Structural invariants
// ---------------------------------------------------------------------------

#[test]
fn installer_count() {
    assert_eq!(installers::all_installers().len(), 8);
}

#[test]
fn installer_names_are_unique() {
    let all = installers::all_installers();
    let mut seen: HashSet<&str> = HashSet::new();
    for installer in &all {
        assert!(
            seen.insert(installer.name()),
            "duplicate installer name: '{}'",
            installer.name()
        );
    }
}

/// Every resource an installer declares ships with the crate.
#[test]
fn declared_resources_are_bundled() {
    let resources = dotfiles_installer::config::Resources::global();
    for installer in installers::all_installers() {
        for name in installer.resources() {
            let path = resources
                .locate(name)
                .expect("declared resource should be bundled");
            assert!(
                std::fs::metadata(&path).unwrap().len() > 0,
                "{} is empty",
                path.display()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn only_and_skip_combine() {
    let picked = installers::select(
        &["tmux".to_string(), "gdb".to_string(), "vim".to_string()],
        &["gdb".to_string()],
    )
    .unwrap();
    let names: Vec<&str> = picked.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["tmux", "vim"]);
}

#[test]
fn unknown_skip_name_is_rejected() {
    let err = installers::select(&[], &["emacs".to_string()]).err().unwrap();
    assert!(matches!(err, ConfigError::UnknownInstaller { .. }));
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

#[test]
fn full_run_on_empty_destination_succeeds() {
    let env = IntegrationTestContext::new();
    run_installers(&installers::all_installers(), &env.context()).unwrap();

    for file in [
        ".tmux.conf",
        ".vimperatorrc",
        ".gdbinit",
        ".fvwm2rc",
        ".gitconfig",
        ".zshrc",
        ".zshenv",
        ".vimrc",
    ] {
        assert!(
            std::fs::metadata(env.dest(file)).unwrap().len() > 0,
            "{file} should be non-empty"
        );
    }
    assert!(
        env.log
            .records()
            .iter()
            .all(|(_, status)| *status == RunStatus::Ok)
    );
}

#[test]
fn second_run_skips_every_placing_installer() {
    let env = IntegrationTestContext::new();
    let all = installers::all_installers();
    run_installers(&all, &env.context()).unwrap();
    run_installers(&all, &env.context()).unwrap();

    let second: Vec<(String, RunStatus)> = env.log.records().split_off(all.len());
    for (name, status) in second {
        let expected = if name == "command-line helper" {
            RunStatus::Ok
        } else {
            RunStatus::Skipped
        };
        assert_eq!(status, expected, "{name}");
    }
}

#[test]
fn failed_download_stops_the_run() {
    let env = IntegrationTestContext::new().with_fetcher(FakeFetcher {
        fail_status: Some(500),
        ..FakeFetcher::default()
    });

    let err = run_installers(&installers::all_installers(), &env.context()).unwrap_err();
    assert!(err.chain().any(|e| matches!(
        e.downcast_ref::<FetchError>(),
        Some(FetchError::Status { status: 500, .. })
    )));

    let records = env.log.records();
    let last = records.last().unwrap();
    assert_eq!(last, &("vim".to_string(), RunStatus::Failed));
    assert!(
        !records.iter().any(|(name, _)| name == "command-line helper"),
        "installers after the failure must not run"
    );
}
