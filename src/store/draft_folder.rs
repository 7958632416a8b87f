// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::format::front_matter;
use crate::model::ArticleRecord;

/// Suffix that marks an in-progress draft file.
const DRAFT_SUFFIX: &str = ".draft";

const FINAL_EXTENSION: &str = "md";
const DRAFT_EXTENSION: &str = "md.draft";

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// The draft file chosen for a session, plus how many other drafts were
/// passed over. Selection is by byte-wise file-name order so the choice is
/// stable across platforms; the caller decides whether to warn about the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPick {
    filename: String,
    ignored: usize,
}

impl DraftPick {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

/// A draft decoded from disk together with the pick metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDraft {
    record: ArticleRecord,
    ignored: usize,
}

impl LoadedDraft {
    pub fn record(&self) -> &ArticleRecord {
        &self.record
    }

    pub fn into_record(self) -> ArticleRecord {
        self.record
    }

    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

/// One working directory holding drafts, plus the output directory that
/// finalized articles (and newly saved drafts) are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFolder {
    working_dir: PathBuf,
    output_dir: PathBuf,
}

impl DraftFolder {
    pub fn new(working_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the draft file for this session, if any.
    ///
    /// Every directory entry whose name ends in `.draft` qualifies; the
    /// first in byte-wise name order wins and the rest are only counted.
    pub fn find_draft(&self) -> Result<Option<DraftPick>, StoreError> {
        let entries = fs::read_dir(&self.working_dir).map_err(|source| StoreError::Io {
            path: self.working_dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.working_dir.clone(),
                source,
            })?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if name.ends_with(DRAFT_SUFFIX) {
                names.push(name);
            }
        }

        names.sort();
        let mut names = names.into_iter();
        let Some(filename) = names.next() else {
            return Ok(None);
        };

        Ok(Some(DraftPick {
            filename,
            ignored: names.len(),
        }))
    }

    /// Reads and decodes the session draft. A missing draft is the normal
    /// `Ok(None)`, not an error; only actual I/O failures surface.
    pub fn load_draft(&self) -> Result<Option<LoadedDraft>, StoreError> {
        let Some(pick) = self.find_draft()? else {
            return Ok(None);
        };

        let path = self.working_dir.join(pick.filename());
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let record = front_matter::parse(&text).with_source_filename(pick.filename());
        Ok(Some(LoadedDraft {
            record,
            ignored: pick.ignored(),
        }))
    }

    /// Writes the record as `<output_dir>/<slug(title)>.md` (or `.md.draft`)
    /// and returns the path written. Any existing file of that exact name is
    /// truncated unconditionally.
    ///
    /// Finalizing an article that still has a same-named `.md.draft` next to
    /// it deletes the stale draft after the new file is written. The two
    /// steps are not atomic; a crash in between leaves both files behind.
    pub fn save(&self, record: &ArticleRecord, is_draft: bool) -> Result<PathBuf, StoreError> {
        let extension = if is_draft { DRAFT_EXTENSION } else { FINAL_EXTENSION };
        let filename = format!("{}.{extension}", front_matter::slug(record.title()));
        let path = self.output_dir.join(filename);

        let text = front_matter::render(record);
        fs::write(&path, text).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        if !is_draft {
            self.remove_stale_draft(&path)?;
        }

        Ok(path)
    }

    fn remove_stale_draft(&self, final_path: &Path) -> Result<(), StoreError> {
        let mut raw = final_path.to_path_buf().into_os_string();
        raw.push(DRAFT_SUFFIX);
        let draft_path = PathBuf::from(raw);

        match fs::metadata(&draft_path) {
            Ok(_) => fs::remove_file(&draft_path).map_err(|source| StoreError::Io {
                path: draft_path.clone(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path: draft_path,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests;
