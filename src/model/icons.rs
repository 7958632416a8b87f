// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const FALLBACK_ICON: &str = "fa-regular fa-newspaper";

/// Returns the front-matter icon identifier for a category name.
///
/// Unrecognized categories fall back to the generic newspaper icon.
pub fn icon_for_category(category: &str) -> &'static str {
    match category {
        "General" => "fa-regular fa-newspaper",
        "Raspberry Pi" => "fa-brands fa-raspberry-pi",
        "Developer" => "fa-solid fa-code",
        "Apple" => "fa-brands fa-apple",
        "Linux" => "fa-brands fa-linux",
        "Android" => "fa-brands fa-android",
        "Arduino" => "fa-brands fa-arduino",
        "Atomic Pi" => "fa-solid fa-microchip",
        "Banana Pi" => "fa-solid fa-ban",
        "ODROID" => "fa-solid fa-microchip",
        "Orange Pi" => "fa-solid fa-microchip",
        _ => FALLBACK_ICON,
    }
}
