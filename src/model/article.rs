// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// The structured form of one article or draft.
///
/// A record is either freshly constructed (all fields empty except those
/// supplied) or reconstructed by decoding one draft file, in which case
/// `source_filename` names the file it came from. `date` is free-form text;
/// nothing in this crate parses it as a calendar date. `tags` is the
/// comma-joined boundary form; the on-disk layout is the codec's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRecord {
    title: String,
    author: String,
    date: String,
    icon: String,
    category: String,
    tags: String,
    body: String,
    source_filename: Option<String>,
}

impl ArticleRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        icon: impl Into<String>,
        category: impl Into<String>,
        tags: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            icon: icon.into(),
            category: category.into(),
            tags: tags.into(),
            body: body.into(),
            source_filename: None,
        }
    }

    pub fn with_source_filename(mut self, filename: impl Into<String>) -> Self {
        self.source_filename = Some(filename.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source_filename(&self) -> Option<&str> {
        self.source_filename.as_deref()
    }
}
