// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text formats.
//!
//! `front_matter` is the codec between [`crate::model::ArticleRecord`] and
//! the delimited-header file layout used for articles and drafts.

pub mod front_matter;

pub use front_matter::{format_tags, parse, render, slug};
