// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea CLI entrypoint.
//!
//! Runs the interactive form editor against a working directory. A draft
//! found there is reloaded into the form; quitting with unsaved changes
//! writes a fresh draft.

use std::error::Error;
use std::path::{Path, PathBuf};

use galatea::settings::Settings;
use galatea::store::DraftFolder;

const SETTINGS_FILENAME: &str = "settings.toml";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<working-dir>] [--settings <file>] [--output <dir>]\n\nThe working directory (default: current directory) is scanned for a `.draft` file to resume.\n--settings selects the settings file (default <working-dir>/{SETTINGS_FILENAME}).\n--output overrides the settings' output directory for saved articles."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    working_dir: Option<String>,
    settings_path: Option<String>,
    output_dir: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                if options.settings_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.settings_path = Some(path);
            }
            "--output" => {
                if options.output_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.output_dir = Some(dir);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.working_dir.is_some() {
                    return Err(());
                }
                options.working_dir = Some(arg);
            }
        }
    }

    Ok(options)
}

fn resolve_dir(working_dir: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

fn main() {
    let result = (|| -> Result<Option<String>, Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galatea".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let working_dir = PathBuf::from(options.working_dir.unwrap_or_else(|| ".".to_owned()));
        let settings_path = match &options.settings_path {
            Some(path) => resolve_dir(&working_dir, path),
            None => working_dir.join(SETTINGS_FILENAME),
        };

        let settings = match Settings::load(&settings_path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };

        let output_dir = match &options.output_dir {
            Some(dir) => resolve_dir(&working_dir, dir),
            None => resolve_dir(&working_dir, settings.output_directory()),
        };

        let folder = DraftFolder::new(working_dir, output_dir);
        galatea::tui::run(settings, folder)
    })();

    match result {
        Ok(Some(message)) => println!("{message}"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
