use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod batch;
mod single;

const BIN_NAME: &str = "bundlegen";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config lookup from escaping the temporary project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Snapshot settings that print the temporary project directory as `[ROOT]`.
    pub fn settings(&self) -> insta::Settings {
        let mut settings = insta::Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.display().to_string()),
            "[ROOT]",
        );
        settings
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// The `demo` set from the docs: English with one author plus documentation.
    pub fn with_demo() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "i18n/demo/en.json",
            r#"{"hello": "Hello", "@metadata": {"authors": ["Ann"]}}"#,
        )?;
        test.write_file("i18n/demo/qqq.json", r#"{"hello": "doc"}"#)?;
        Ok(test)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub const DEMO_BUNDLE: &str = concat!(
    "# -*- coding: utf-8 -*-\r\n",
    "\"\"\"i18n message bundle.\"\"\"\r\n",
    "msg = {\r\n",
    "    'qqq': {\r\n",
    "        'hello': u'doc',\r\n",
    "    },\r\n",
    "    # Author: Ann\r\n",
    "    'en': {\r\n",
    "        'hello': u'Hello',\r\n",
    "    },\r\n",
    "};\r\n",
);
