use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::{args::Arguments, prompt::TerminalPrompt, report::ConsoleProgress};
use crate::{
    config::load_config,
    core::{Compiler, Mode, RunReport},
};

/// Load configuration and compile the requested translation set(s).
///
/// Batch mode (no set name) never prompts. A single set prompts for a
/// replacement name and for overwrite confirmation unless `--yes` is given.
pub fn run(args: &Arguments) -> Result<RunReport> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        debug!(config = %path.display(), "loaded config file");
    }

    let mut layout = loaded.config.layout(args.root.as_deref());
    if args.root.is_none() && layout.root.is_relative() {
        // Relative to the config file when there is one.
        let base = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&cwd);
        let relative: PathBuf = layout
            .root
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        layout.root = base.join(relative);
    }

    let mode = if args.sort { Mode::Reorder } else { Mode::Default };
    let compiler = Compiler::new(layout, loaded.config.policy(), mode);
    let mut progress = ConsoleProgress::new(args.verbose);

    let report = match &args.translation_set {
        None => compiler.run_batch(&mut progress),
        Some(name) if args.yes => compiler.run_single(name, None, &mut progress),
        Some(name) => {
            let mut prompt = TerminalPrompt::stdio();
            compiler.run_single(name, Some(&mut prompt), &mut progress)
        }
    };

    report.with_context(|| format!("Cannot compile from {}", compiler.layout().root().display()))
}
