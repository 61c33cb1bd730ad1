//! Preferences store command-line front end.
//!
//! Loads the preferences file, optionally changes the calibration bounds, and
//! prints the result.
//!
//! # Usage
//!
//! ```text
//! prefs-store [--file <PATH>] <COMMAND>
//!
//! Commands:
//!   show        Load the file and print all values
//!   load        Load the file and print a per-key report
//!   save        Load the file and write it back in canonical form
//!   set-bounds  Load the file, then set the four bound corners (saves)
//! ```
//!
//! # Environment variables
//!
//! | Variable     | Default     | Description                       |
//! |--------------|-------------|-----------------------------------|
//! | `PREFS_FILE` | `prefs.txt` | Preferences file path             |
//! | `RUST_LOG`   | `info`      | `tracing` filter for log output   |

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prefs_core::{Bounds, Vector2};
use prefs_store::{FileStorage, LoadReport, PreferencesStorage, PreferencesStore};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Load, inspect and edit the calibration preferences file.
#[derive(Debug, Parser)]
#[command(
    name = "prefs-store",
    about = "Inspect and edit calibration bounds and camera preferences",
    version
)]
struct Cli {
    /// Path of the preferences file.
    #[arg(
        long,
        short,
        global = true,
        default_value = "prefs.txt",
        env = "PREFS_FILE"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the file and print all values.
    Show,
    /// Load the file and print the outcome for every key.
    ///
    /// Exits with an error if the file cannot be read or parsed.
    Load,
    /// Load the file and write it back with all keys in canonical form.
    ///
    /// Creates the file with default values if it does not exist.
    Save,
    /// Load the file, then replace the four bound corners.
    SetBounds {
        #[arg(allow_negative_numbers = true)]
        top_left_x: f32,
        #[arg(allow_negative_numbers = true)]
        top_left_y: f32,
        #[arg(allow_negative_numbers = true)]
        top_right_x: f32,
        #[arg(allow_negative_numbers = true)]
        top_right_y: f32,
        #[arg(allow_negative_numbers = true)]
        bottom_right_x: f32,
        #[arg(allow_negative_numbers = true)]
        bottom_right_y: f32,
        #[arg(allow_negative_numbers = true)]
        bottom_left_x: f32,
        #[arg(allow_negative_numbers = true)]
        bottom_left_y: f32,
    },
}

impl Command {
    /// Returns the bounds given to `set-bounds`, if this is that command.
    fn bounds(&self) -> Option<Bounds> {
        match *self {
            Command::SetBounds {
                top_left_x,
                top_left_y,
                top_right_x,
                top_right_y,
                bottom_right_x,
                bottom_right_y,
                bottom_left_x,
                bottom_left_y,
            } => Some(Bounds::new(
                Vector2::new(top_left_x, top_left_y),
                Vector2::new(top_right_x, top_right_y),
                Vector2::new(bottom_right_x, bottom_right_y),
                Vector2::new(bottom_left_x, bottom_left_y),
            )),
            _ => None,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = PreferencesStore::new(FileStorage::new(cli.file));

    let stdout = std::io::stdout();
    run(&cli.command, &mut store, &mut stdout.lock())
}

/// Executes `command` against `store`, writing human-readable output to `out`.
fn run<S: PreferencesStorage>(
    command: &Command,
    store: &mut PreferencesStore<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = store.load();

    match command {
        Command::Show => print_values(store, out)?,
        Command::Load => {
            print_report(&report, out)?;
            if let Some(e) = report.document_error {
                return Err(e).with_context(|| {
                    format!("failed to load {}", store.storage().location().display())
                });
            }
        }
        Command::Save => {
            if let Some(e) = &report.document_error {
                if !e.is_not_found() {
                    bail!(
                        "refusing to overwrite {}: {e}",
                        store.storage().location().display()
                    );
                }
            }
            // A successful load has already saved; only a missing file needs it here.
            if report.is_loaded() {
                if let Some(e) = report.save_error {
                    return Err(e).context("failed to save preferences");
                }
            } else {
                store.save().context("failed to save preferences")?;
            }
            info!("saved {}", store.storage().location().display());
        }
        Command::SetBounds { .. } => {
            if report.document_error.is_some() {
                warn!("preferences were not loaded; other values are written as defaults");
            }
            let bounds = command
                .bounds()
                .context("set-bounds must carry eight coordinates")?;
            store
                .set_bounds(bounds)
                .context("failed to save preferences")?;
            print_values(store, out)?;
        }
    }

    Ok(())
}

fn print_values<S: PreferencesStorage>(
    store: &PreferencesStore<S>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let bounds = store.get_bounds();
    let camera = store.camera();
    writeln!(out, "boundsTopLeft     = {}", bounds.top_left)?;
    writeln!(out, "boundsTopRight    = {}", bounds.top_right)?;
    writeln!(out, "boundsBottomRight = {}", bounds.bottom_right)?;
    writeln!(out, "boundsBottomLeft  = {}", bounds.bottom_left)?;
    writeln!(out, "totalFadeTimeMS   = {}", store.total_fade_time_ms())?;
    writeln!(out, "camBrightness     = {}", camera.brightness)?;
    writeln!(out, "camContrast       = {}", camera.contrast)?;
    writeln!(out, "camSaturation     = {}", camera.saturation)?;
    writeln!(out, "camGain           = {}", camera.gain)?;
    Ok(())
}

fn print_report(report: &LoadReport, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(e) = &report.document_error {
        writeln!(out, "document: {e}")?;
        return Ok(());
    }
    for field in &report.fields {
        writeln!(out, "{:<18}{:?}", field.key, field.status)?;
    }
    if let Some(e) = &report.save_error {
        writeln!(out, "save: {e}")?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use prefs_store::MockStorage;

    fn output_of(command: Command, store: &mut PreferencesStore<MockStorage>) -> (bool, String) {
        let mut out = Vec::new();
        let ok = run(&command, store, &mut out).is_ok();
        (ok, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_cli_default_file_is_prefs_txt() {
        let cli = Cli::parse_from(["prefs-store", "show"]);
        // PREFS_FILE may be set in the environment; only check when it is not.
        if std::env::var_os("PREFS_FILE").is_none() {
            assert_eq!(cli.file, PathBuf::from("prefs.txt"));
        }
    }

    #[test]
    fn test_cli_file_override_after_subcommand() {
        let cli = Cli::parse_from(["prefs-store", "load", "--file", "/tmp/other.json"]);
        assert_eq!(cli.file, PathBuf::from("/tmp/other.json"));
        assert!(matches!(cli.command, Command::Load));
    }

    #[test]
    fn test_cli_set_bounds_accepts_negative_coordinates() {
        // Arrange / Act
        let cli = Cli::parse_from([
            "prefs-store",
            "set-bounds",
            "-10",
            "-5.5",
            "650",
            "0",
            "640",
            "480",
            "0",
            "490",
        ]);

        // Assert
        let bounds = cli.command.bounds().expect("set-bounds carries bounds");
        assert_eq!(bounds.top_left, Vector2::new(-10.0, -5.5));
        assert_eq!(bounds.bottom_left, Vector2::new(0.0, 490.0));
    }

    #[test]
    fn test_cli_set_bounds_requires_eight_values() {
        let result = Cli::try_parse_from(["prefs-store", "set-bounds", "1", "2", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_prints_every_key() {
        let mut store = PreferencesStore::new(MockStorage::with_contents(r#"{"camGain": 2.5}"#));
        let (ok, out) = output_of(Command::Show, &mut store);
        assert!(ok);
        assert!(out.contains("camGain           = 2.5"), "{out}");
        assert_eq!(out.lines().count(), 9);
    }

    #[test]
    fn test_load_command_fails_on_malformed_file() {
        let mut store = PreferencesStore::new(MockStorage::with_contents("not json"));
        let (ok, out) = output_of(Command::Load, &mut store);
        assert!(!ok);
        assert!(out.starts_with("document: "), "{out}");
    }

    #[test]
    fn test_load_command_lists_each_key() {
        let mut store = PreferencesStore::new(MockStorage::with_contents("{}"));
        let (ok, out) = output_of(Command::Load, &mut store);
        assert!(ok);
        assert_eq!(out.matches("KeyMissing").count(), 9);
    }

    #[test]
    fn test_save_command_creates_missing_file() {
        // Arrange
        let mut store = PreferencesStore::new(MockStorage::new());

        // Act
        let (ok, _) = output_of(Command::Save, &mut store);

        // Assert
        assert!(ok);
        assert_eq!(store.storage().write_count(), 1);
    }

    #[test]
    fn test_save_command_refuses_to_overwrite_malformed_file() {
        let mut store = PreferencesStore::new(MockStorage::with_contents("{ broken"));
        let (ok, _) = output_of(Command::Save, &mut store);
        assert!(!ok);
        assert_eq!(store.storage().contents(), Some("{ broken"));
    }

    #[test]
    fn test_set_bounds_command_persists_bounds() {
        // Arrange
        let mut store = PreferencesStore::new(MockStorage::with_contents("{}"));
        let command = Command::SetBounds {
            top_left_x: 1.0,
            top_left_y: 2.0,
            top_right_x: 3.0,
            top_right_y: 4.0,
            bottom_right_x: 5.0,
            bottom_right_y: 6.0,
            bottom_left_x: 7.0,
            bottom_left_y: 8.0,
        };

        // Act
        let (ok, _) = output_of(command, &mut store);

        // Assert: one write from load, one from set_bounds
        assert!(ok);
        assert_eq!(store.storage().write_count(), 2);
        assert_eq!(store.get_bounds().bottom_right, Vector2::new(5.0, 6.0));
    }
}
