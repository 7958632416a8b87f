// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{DraftFolder, StoreError};
use crate::model::ArticleRecord;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("galatea-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct DraftFolderTestCtx {
    tmp: TempDir,
    folder: DraftFolder,
}

impl DraftFolderTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let folder = DraftFolder::new(tmp.path(), tmp.path());
        Self { tmp, folder }
    }
}

#[fixture]
fn ctx() -> DraftFolderTestCtx {
    DraftFolderTestCtx::new("draft-folder")
}

fn sample_record(title: &str, tags: &str) -> ArticleRecord {
    ArticleRecord::new(
        title,
        "Ada",
        "2026-08-06",
        "fa-solid fa-code",
        "Developer",
        tags,
        "Body line one.\nBody line two.\n",
    )
}

#[rstest]
fn find_draft_returns_none_in_an_empty_directory(ctx: DraftFolderTestCtx) {
    assert_eq!(ctx.folder.find_draft().unwrap(), None);
    assert_eq!(ctx.folder.load_draft().unwrap(), None);
}

#[rstest]
fn non_draft_files_are_not_picked_up(ctx: DraftFolderTestCtx) {
    std::fs::write(ctx.tmp.path().join("finished.md"), "---\n---\n").unwrap();
    std::fs::write(ctx.tmp.path().join("notes.txt"), "scratch").unwrap();

    assert_eq!(ctx.folder.find_draft().unwrap(), None);
}

#[rstest]
fn find_draft_picks_the_first_name_in_sorted_order(ctx: DraftFolderTestCtx) {
    std::fs::write(ctx.tmp.path().join("zebra.md.draft"), "---\n---\n").unwrap();
    std::fs::write(ctx.tmp.path().join("apple.md.draft"), "---\n---\n").unwrap();
    std::fs::write(ctx.tmp.path().join("mango.md.draft"), "---\n---\n").unwrap();

    let pick = ctx.folder.find_draft().unwrap().expect("draft pick");
    assert_eq!(pick.filename(), "apple.md.draft");
    assert_eq!(pick.ignored(), 2);
}

#[rstest]
fn load_draft_decodes_fields_and_records_the_source_filename(ctx: DraftFolderTestCtx) {
    let text = "---\n\
title: Pi cluster notes\n\
icon: fa-solid fa-code\n\
author: Ada\n\
date: 2026-08-06\n\
category:\n\
  - Developer\n\
tags:\n\
  - python, testing\n\
---\n\
First body line\n";
    std::fs::write(ctx.tmp.path().join("pi_cluster_notes.md.draft"), text).unwrap();

    let loaded = ctx.folder.load_draft().unwrap().expect("loaded draft");
    let record = loaded.record();
    assert_eq!(record.title(), "Pi cluster notes");
    assert_eq!(record.category(), "Developer");
    assert_eq!(record.tags(), "python, testing");
    assert_eq!(record.body(), "First body line");
    assert_eq!(record.source_filename(), Some("pi_cluster_notes.md.draft"));
    assert_eq!(loaded.ignored(), 0);
}

#[rstest]
fn find_draft_surfaces_io_failures(ctx: DraftFolderTestCtx) {
    let folder = DraftFolder::new(ctx.tmp.path().join("missing"), ctx.tmp.path());
    let err = folder.find_draft().unwrap_err();
    match err {
        StoreError::Io { path, .. } => assert_eq!(path, ctx.tmp.path().join("missing")),
    }
}

#[rstest]
fn save_draft_uses_the_draft_extension(ctx: DraftFolderTestCtx) {
    let record = sample_record("Pi cluster notes", "python");
    let path = ctx.folder.save(&record, true).unwrap();

    assert_eq!(path, ctx.tmp.path().join("pi_cluster_notes.md.draft"));
    assert!(path.is_file());
}

#[rstest]
fn save_with_an_empty_title_writes_no_title(ctx: DraftFolderTestCtx) {
    let record = sample_record("", "");
    let final_path = ctx.folder.save(&record, false).unwrap();
    assert_eq!(final_path, ctx.tmp.path().join("no_title.md"));

    let draft_path = ctx.folder.save(&record, true).unwrap();
    assert_eq!(draft_path, ctx.tmp.path().join("no_title.md.draft"));
}

#[rstest]
fn save_overwrites_an_existing_file_unconditionally(ctx: DraftFolderTestCtx) {
    let target = ctx.tmp.path().join("pi_cluster_notes.md");
    std::fs::write(&target, "stale contents").unwrap();

    let record = sample_record("Pi cluster notes", "python");
    ctx.folder.save(&record, false).unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("---\ntitle: Pi cluster notes\n"), "got: {written}");
}

#[rstest]
fn finalizing_deletes_the_stale_draft_after_writing(ctx: DraftFolderTestCtx) {
    let record = sample_record("Pi cluster notes", "python");
    let draft_path = ctx.folder.save(&record, true).unwrap();
    assert!(draft_path.is_file());

    let final_path = ctx.folder.save(&record, false).unwrap();
    assert_eq!(final_path, ctx.tmp.path().join("pi_cluster_notes.md"));
    assert!(final_path.is_file());
    assert!(!draft_path.exists(), "stale draft should be removed");
}

#[rstest]
fn finalizing_without_a_draft_performs_no_deletion_and_no_error(ctx: DraftFolderTestCtx) {
    let record = sample_record("Pi cluster notes", "python");
    let final_path = ctx.folder.save(&record, false).unwrap();
    assert!(final_path.is_file());
}

#[rstest]
fn saving_a_draft_never_touches_the_final_article(ctx: DraftFolderTestCtx) {
    let record = sample_record("Pi cluster notes", "python");
    let final_path = ctx.folder.save(&record, false).unwrap();
    let draft_path = ctx.folder.save(&record, true).unwrap();

    assert!(final_path.is_file());
    assert!(draft_path.is_file());
}

#[rstest]
fn saved_drafts_round_trip_through_load(ctx: DraftFolderTestCtx) {
    let record = sample_record("Pi cluster notes", "testing");
    ctx.folder.save(&record, true).unwrap();

    let loaded = ctx.folder.load_draft().unwrap().expect("draft present");
    let decoded = loaded.record();
    assert_eq!(decoded.title(), record.title());
    assert_eq!(decoded.author(), record.author());
    assert_eq!(decoded.date(), record.date());
    assert_eq!(decoded.icon(), record.icon());
    assert_eq!(decoded.category(), record.category());
    assert_eq!(decoded.tags(), record.tags());
    assert_eq!(decoded.source_filename(), Some("pi_cluster_notes.md.draft"));
}
