// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for articles and drafts on disk.
//!
//! The store module locates draft files in the working directory and
//! reads/writes the front-matter file format used for both drafts and
//! finalized articles.

pub mod draft_folder;

pub use draft_folder::{DraftFolder, DraftPick, LoadedDraft, StoreError};
