use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: Input,
    pub display: Display,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Input {
    pub firms: PathBuf,
    pub students: PathBuf,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            firms: PathBuf::from("firms.csv"),
            students: PathBuf::from("students.csv"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Display {
    pub details: bool,
    pub stats: bool,
    pub unfilled: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            details: true,
            stats: true,
            unfilled: true,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).wrap_err("cannot parse configuration file")
    }
}
