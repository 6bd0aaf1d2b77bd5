//! Per-set compile pipeline and the batch driver around it.
//!
//! Each translation set moves through
//! `Resolve -> [ConfirmOverwrite] -> Enumerate -> Load -> RecoverLegacy ->
//! MergeAuthors -> Serialize -> Done`. A declined confirmation ends in
//! `Aborted`; any error ends the set at the stage where it happened.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt, io,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, debug_span};

use super::{
    attribution::merge_authors,
    data::{Catalog, TranslationSet},
    enumerate::enumerate_languages,
    error::CompileError,
    parsers::{
        bundle::{parse_bundle, read_bundle, recover_authors},
        json::{LoadSkip, load_translations},
    },
    policy::Policy,
    resolve::SourceLayout,
    serialize::{language_order, render},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Resolve,
    ConfirmOverwrite,
    Enumerate,
    Load,
    RecoverLegacy,
    MergeAuthors,
    Serialize,
    Done,
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Resolve => "resolve",
            Stage::ConfirmOverwrite => "confirm",
            Stage::Enumerate => "enumerate",
            Stage::Load => "load",
            Stage::RecoverLegacy => "recover authors",
            Stage::MergeAuthors => "merge authors",
            Stage::Serialize => "write",
            Stage::Done => "done",
            Stage::Aborted => "aborted",
        };
        write!(f, "{}", name)
    }
}

/// Where translations come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Per-language JSON files; the old bundle only supplies authors.
    #[default]
    Default,
    /// Re-sort an existing bundle; JSON files are not read.
    Reorder,
}

/// Interactive collaborator for single-set runs.
pub trait Interaction {
    /// Ask for another folder name after `previous` failed to resolve.
    /// `None` (or an empty answer) aborts the run.
    fn ask_source(&mut self, previous: &CompileError) -> io::Result<Option<String>>;

    /// Ask whether `dest` may be overwritten.
    fn confirm_overwrite(&mut self, dest: &Path) -> io::Result<bool>;
}

/// Observer notified as sets start and finish.
pub trait Progress {
    fn started(&mut self, _set: &TranslationSet) {}
    fn finished(&mut self, _outcome: &SetOutcome) {}
}

impl Progress for () {}

/// A successfully written bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetReport {
    pub name: String,
    pub dest: PathBuf,
    /// Language blocks written.
    pub languages: usize,
    /// Distinct message keys written.
    pub messages: usize,
    pub skipped: Vec<LoadSkip>,
}

#[derive(Debug)]
pub struct SetFailure {
    pub name: String,
    pub stage: Stage,
    pub error: CompileError,
}

impl fmt::Display for SetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.stage, self.error)
    }
}

#[derive(Debug)]
pub enum SetOutcome {
    Done(SetReport),
    Failed(SetFailure),
}

impl SetOutcome {
    pub fn name(&self) -> &str {
        match self {
            SetOutcome::Done(report) => &report.name,
            SetOutcome::Failed(failure) => &failure.name,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SetOutcome::Done(_))
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<SetOutcome>,
    /// The user declined to continue; nothing further was processed.
    pub aborted: bool,
}

impl RunReport {
    fn aborted() -> Self {
        Self {
            outcomes: Vec::new(),
            aborted: true,
        }
    }

    pub fn done_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_done()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.done_count()
    }
}

pub struct Compiler {
    layout: SourceLayout,
    policy: Policy,
    mode: Mode,
}

impl Compiler {
    pub fn new(layout: SourceLayout, policy: Policy, mode: Mode) -> Self {
        Self {
            layout,
            policy,
            mode,
        }
    }

    pub fn layout(&self) -> &SourceLayout {
        &self.layout
    }

    /// Compile every translation set under the root, one after another.
    ///
    /// A failing set is recorded and the batch moves on; only a missing or
    /// unreadable root fails the whole run.
    pub fn run_batch(&self, progress: &mut dyn Progress) -> Result<RunReport, CompileError> {
        let sets = self.layout.discover()?;
        let mut report = RunReport::default();

        for set in &sets {
            report.outcomes.push(self.run_one(set, progress));
        }

        Ok(report)
    }

    /// Compile one named set.
    ///
    /// With an [`Interaction`], an unknown name is asked for again and the
    /// overwrite must be confirmed. Without one, an unknown name fails the set.
    pub fn run_single(
        &self,
        name: &str,
        interaction: Option<&mut dyn Interaction>,
        progress: &mut dyn Progress,
    ) -> Result<RunReport, CompileError> {
        let Some(interaction) = interaction else {
            let outcome = match self.layout.resolve(name) {
                Ok(set) => self.run_one(&set, progress),
                Err(error) => {
                    let outcome = SetOutcome::Failed(SetFailure {
                        name: name.to_string(),
                        stage: Stage::Resolve,
                        error,
                    });
                    progress.finished(&outcome);
                    outcome
                }
            };
            return Ok(RunReport {
                outcomes: vec![outcome],
                aborted: false,
            });
        };

        let mut candidate = name.to_string();
        let set = loop {
            match self.layout.resolve(&candidate) {
                Ok(set) => break set,
                Err(error @ CompileError::NotFound { .. }) => {
                    debug!(%error, "asking for another translation set");
                    match interaction.ask_source(&error).map_err(CompileError::Prompt)? {
                        Some(answer) if !answer.trim().is_empty() => candidate = answer,
                        _ => return Ok(RunReport::aborted()),
                    }
                }
                Err(other) => return Err(other),
            }
        };

        debug!(set = %set, stage = %Stage::ConfirmOverwrite);
        if !interaction
            .confirm_overwrite(&set.dest)
            .map_err(CompileError::Prompt)?
        {
            debug!(set = %set, stage = %Stage::Aborted);
            return Ok(RunReport::aborted());
        }

        Ok(RunReport {
            outcomes: vec![self.run_one(&set, progress)],
            aborted: false,
        })
    }

    fn run_one(&self, set: &TranslationSet, progress: &mut dyn Progress) -> SetOutcome {
        progress.started(set);
        let outcome = match self.compile(set) {
            Ok(report) => SetOutcome::Done(report),
            Err((stage, error)) => SetOutcome::Failed(SetFailure {
                name: set.name.clone(),
                stage,
                error,
            }),
        };
        progress.finished(&outcome);
        outcome
    }

    /// Run the stages after resolution for one set and write its bundle.
    pub fn compile(&self, set: &TranslationSet) -> Result<SetReport, (Stage, CompileError)> {
        let _span = debug_span!("compile", set = %set.name).entered();
        let at = |stage: Stage| move |error: CompileError| (stage, error);

        debug!(stage = %Stage::Enumerate);
        let languages = enumerate_languages(&set.folder, &self.layout.source_extension)
            .map_err(at(Stage::Enumerate))?;

        debug!(stage = %Stage::Load, languages = languages.len());
        let mut legacy = None;
        let (catalog, skipped) = match self.mode {
            Mode::Default => {
                let result =
                    load_translations(&set.folder, &languages, &self.layout.source_extension);
                (result.catalog, result.skipped)
            }
            Mode::Reorder => {
                let text = read_bundle(&set.dest)
                    .map_err(at(Stage::Load))?
                    .ok_or_else(|| (Stage::Load, CompileError::LegacyMissing(set.dest.clone())))?;
                let catalog = parse_bundle(&text, &set.dest).map_err(at(Stage::Load))?;
                legacy = Some(text);
                (self.catalog_to_set_codes(catalog, &languages), Vec::new())
            }
        };

        debug!(stage = %Stage::RecoverLegacy);
        let legacy = match legacy {
            Some(text) => Some(text),
            None => read_bundle(&set.dest).map_err(at(Stage::RecoverLegacy))?,
        };
        let recovered = match &legacy {
            Some(text) => self.to_set_codes(recover_authors(text), &languages),
            None => BTreeMap::new(),
        };

        debug!(stage = %Stage::MergeAuthors, recovered = recovered.len());
        let authors = merge_authors(&catalog.metadata, &recovered, &self.policy.renames);

        debug!(stage = %Stage::Serialize);
        let text = render(&catalog, &authors, &self.policy);
        write_atomic(&set.dest, text.as_bytes()).map_err(at(Stage::Serialize))?;

        debug!(stage = %Stage::Done, dest = %set.dest.display());
        Ok(SetReport {
            name: set.name.clone(),
            dest: set.dest.clone(),
            languages: language_order(&catalog).len(),
            messages: catalog.message_count(),
            skipped,
        })
    }

    /// Re-key a catalog parsed from a bundle from site codes to set codes.
    fn catalog_to_set_codes(&self, parsed: Catalog, languages: &BTreeSet<String>) -> Catalog {
        let mut catalog = Catalog {
            metadata: parsed.metadata,
            ..Catalog::default()
        };
        for (key, translations) in parsed.messages {
            for (site, text) in translations {
                let language = self.policy.code_map.set_code(&site, languages);
                catalog.insert(key.clone(), language, text);
            }
        }
        catalog
    }

    /// Re-key recovered authors from site codes to the set's own codes.
    fn to_set_codes(
        &self,
        recovered: BTreeMap<String, Vec<String>>,
        languages: &BTreeSet<String>,
    ) -> BTreeMap<String, Vec<String>> {
        let mut rekeyed: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (site, authors) in recovered {
            rekeyed
                .entry(self.policy.code_map.set_code(&site, languages))
                .or_default()
                .extend(authors);
        }
        rekeyed
    }
}

/// Write via a temporary file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CompileError> {
    let write_error = |source: io::Error| CompileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
