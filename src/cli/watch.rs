//! Watch command implementation.
//!
//! Renders once, then re-renders every time the manifest is written.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::{PosterError, Result};
use crate::manifest::MANIFEST_FILENAME;
use crate::output::{display_path, Printer};

use super::render::render_manifest;
use super::ParamArgs;

/// Editors often save in several steps; events this close together are one save.
const SETTLE: Duration = Duration::from_millis(150);

/// Re-render whenever poster.yaml changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Output file (.png, .svg or .json)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args
        .params
        .manifest
        .clone()
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILENAME));
    let dir = match manifest_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(|e| watch_error(&dir, e))?;
    // Watch the directory: editors that replace the file would drop a file watch.
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(|e| watch_error(&dir, e))?;

    printer.info("Watching", &printer.cyan(&display_path(&manifest_path)));
    rerender(&args, printer);

    while let Ok(res) = rx.recv() {
        match res {
            Ok(event) if is_manifest_change(&event, &manifest_path) => {
                // Swallow the rest of this save.
                while rx.recv_timeout(SETTLE).is_ok() {}
                tracing::debug!(kind = ?event.kind, "manifest changed");
                rerender(&args, printer);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "watch error"),
        }
    }

    Ok(())
}

/// Render once, reporting failure without stopping the watch.
fn rerender(args: &WatchArgs, printer: &Printer) {
    let result = args.params.resolve().and_then(|manifest| {
        let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
        render_manifest(&manifest, args.params.reroll, &output, printer)
    });

    if let Err(e) = result {
        printer.error("Failed", &e.to_string());
    }
}

fn is_manifest_change(event: &Event, manifest: &Path) -> bool {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    let Some(name) = manifest.file_name() else {
        return false;
    };

    relevant && event.paths.iter().any(|p| p.file_name() == Some(name))
}

fn watch_error(path: &Path, e: notify::Error) -> PosterError {
    PosterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to watch: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_manifest_write_triggers() {
        let manifest = Path::new("poster.yaml");
        assert!(is_manifest_change(
            &event(EventKind::Modify(ModifyKind::Any), "/work/poster.yaml"),
            manifest
        ));
        assert!(is_manifest_change(
            &event(EventKind::Create(CreateKind::File), "./poster.yaml"),
            manifest
        ));
    }

    #[test]
    fn test_other_files_ignored() {
        let manifest = Path::new("poster.yaml");
        assert!(!is_manifest_change(
            &event(EventKind::Modify(ModifyKind::Any), "/work/dist/poster.png"),
            manifest
        ));
    }

    #[test]
    fn test_reads_ignored() {
        let manifest = Path::new("art/poster.yaml");
        assert!(!is_manifest_change(
            &event(EventKind::Access(AccessKind::Any), "art/poster.yaml"),
            manifest
        ));
    }
}
