// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An [`ArticleRecord`] is the structured form of one article or draft; the
//! icon table maps category names to their front-matter icon identifiers.

pub mod article;
pub mod icons;

pub use article::ArticleRecord;
pub use icons::icon_for_category;
