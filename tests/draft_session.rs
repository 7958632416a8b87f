// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use galatea::model::ArticleRecord;
use galatea::store::DraftFolder;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("galatea-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("draft_session")
}

fn seed_fixture(tmp: &TempDir, name: &str) {
    let src = fixtures_dir().join(name);
    let text = fs::read_to_string(&src).unwrap_or_else(|err| panic!("failed to read {src:?}: {err}"));
    fs::write(tmp.path().join(name), text).unwrap();
}

#[test]
fn a_fixture_draft_resumes_and_finalizes() {
    let tmp = TempDir::new("session");
    seed_fixture(&tmp, "pi_cluster_notes.md.draft");

    let folder = DraftFolder::new(tmp.path(), tmp.path());
    let loaded = folder.load_draft().unwrap().expect("fixture draft present");
    assert_eq!(loaded.ignored(), 0);

    let record = loaded.record();
    assert_eq!(record.title(), "Pi cluster notes");
    assert_eq!(record.icon(), "fa-brands fa-raspberry-pi");
    assert_eq!(record.author(), "Ada");
    assert_eq!(record.date(), "2026-08-06");
    assert_eq!(record.category(), "Raspberry Pi");
    assert_eq!(record.tags(), "raspberry pi, cluster, k3s");
    assert_eq!(record.source_filename(), Some("pi_cluster_notes.md.draft"));
    assert!(record.body().starts_with("# Pi cluster notes\n"));
    assert!(record.body().contains("\n- - -\n"), "dashed body lines must stay in the body");
    assert!(record.body().ends_with("Four nodes, one switch."));

    let final_path = folder.save(record, false).unwrap();
    assert_eq!(final_path, tmp.path().join("pi_cluster_notes.md"));
    assert!(final_path.is_file());
    assert!(
        !tmp.path().join("pi_cluster_notes.md.draft").exists(),
        "finalizing must remove the resumed draft"
    );
    assert_eq!(folder.find_draft().unwrap(), None);
}

#[test]
fn a_session_round_trips_through_draft_and_reload() {
    let tmp = TempDir::new("round-trip");
    let folder = DraftFolder::new(tmp.path(), tmp.path());

    let record = ArticleRecord::new(
        "Terminal editors",
        "Ada",
        "2026-08-06",
        "fa-solid fa-code",
        "Developer",
        "tui",
        "First line.\n\nLast line.",
    );
    let draft_path = folder.save(&record, true).unwrap();
    assert_eq!(draft_path, tmp.path().join("terminal_editors.md.draft"));

    let reloaded = folder.load_draft().unwrap().expect("saved draft reloads");
    let decoded = reloaded.record();
    assert_eq!(decoded.title(), record.title());
    assert_eq!(decoded.author(), record.author());
    assert_eq!(decoded.date(), record.date());
    assert_eq!(decoded.icon(), record.icon());
    assert_eq!(decoded.category(), record.category());
    assert_eq!(decoded.tags(), record.tags());
    assert_eq!(decoded.body(), record.body());
}

#[test]
fn the_written_file_layout_is_stable() {
    let tmp = TempDir::new("layout");
    let folder = DraftFolder::new(tmp.path(), tmp.path());

    let record = ArticleRecord::new(
        "Layout Check",
        "Ada",
        "2026-08-06",
        "fa-regular fa-newspaper",
        "General",
        "a,b,c",
        "Body.\n",
    );
    let path = folder.save(&record, false).unwrap();

    let expected = "---\n\
title: Layout Check\n\
icon: fa-regular fa-newspaper\n\
author: Ada\n\
date: 2026-08-06\n\
category:\n\
  - General\n\
tags:\n\
  - a\n\
  -b\n\
  -c\n\
---\n\
Body.\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}
