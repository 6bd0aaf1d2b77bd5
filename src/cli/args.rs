//! CLI argument definitions using clap.
//!
//! `bundlegen [SET] [--sort]`: compile one translation set, or every set under
//! the root when no name is given.
//!
//! Unknown flags only produce a warning, and the historical single-dash
//! spellings `-sort` and `-help` are still understood.

use std::{ffi::OsString, path::PathBuf};

use clap::{CommandFactory, Parser};

/// Historical single-dash spellings and their current form.
const LEGACY_ALIASES: &[(&str, &str)] = &[("-sort", "--sort"), ("-help", "--help")];

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Translation set (folder under the root) to compile; all sets when omitted
    pub translation_set: Option<String>,

    /// Re-sort the existing bundle instead of reading the JSON files
    #[arg(long)]
    pub sort: bool,

    /// Directory holding one folder per translation set (overrides config file)
    #[arg(long, env = "BUNDLEGEN_ROOT", allow_hyphen_values = true)]
    pub root: Option<PathBuf>,

    /// Do not ask for confirmation before overwriting a single bundle
    #[arg(short, long)]
    pub yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Flags that were given but are not supported.
    #[arg(skip)]
    pub unsupported: Vec<String>,
}

impl Arguments {
    /// Parse like [`Parser::parse_from`], but set unknown flags aside instead
    /// of failing on them.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (accepted, unsupported) = split_unsupported(args);
        let mut parsed = Self::parse_from(accepted);
        parsed.unsupported = unsupported;
        parsed
    }
}

fn split_unsupported<I, T>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut command = Arguments::command();
    command.build();
    let mut accepted = Vec::new();
    let mut unsupported = Vec::new();
    let mut positional_only = false;
    let mut expects_value = false;

    let mut args = args.into_iter().map(Into::into);
    if let Some(bin) = args.next() {
        accepted.push(bin);
    }

    for arg in args {
        let Some(text) = arg.to_str() else {
            accepted.push(arg);
            continue;
        };

        if positional_only || expects_value || !text.starts_with('-') || text == "-" {
            expects_value = false;
            accepted.push(arg);
            continue;
        }
        if text == "--" {
            positional_only = true;
            accepted.push(arg);
            continue;
        }

        let text = LEGACY_ALIASES
            .iter()
            .find(|(legacy, _)| *legacy == text)
            .map_or(text, |(_, current)| *current);

        match flag_arity(&command, text) {
            Some(takes_value) => {
                expects_value = takes_value && !text.contains('=');
                accepted.push(text.into());
            }
            None => unsupported.push(arg.to_string_lossy().into_owned()),
        }
    }

    (accepted, unsupported)
}

/// `Some(takes_value)` when clap knows the flag, `None` otherwise.
fn flag_arity(command: &clap::Command, flag: &str) -> Option<bool> {
    if let Some(long) = flag.strip_prefix("--") {
        let name = long.split('=').next().unwrap_or(long);
        return command
            .get_arguments()
            .find(|a| a.get_long() == Some(name))
            .map(takes_value);
    }

    // Short flags may be bundled (`-vy`); all of them must be known.
    let shorts = flag.strip_prefix('-')?;
    let mut last = None;
    for c in shorts.chars() {
        let arg = command.get_arguments().find(|a| a.get_short() == Some(c))?;
        last = Some(takes_value(arg));
    }
    last
}

fn takes_value(arg: &clap::Arg) -> bool {
    arg.get_action().takes_values()
}
