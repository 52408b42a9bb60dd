use anyhow::{Context, Result, bail};
use optkit::{OptionSpec, Trigger};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEFINITIONS_NAME: &str = "optkit.json";

/// Contents of an `optkit.json` definitions file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definitions {
    /// Command name shown on the usage line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDef {
    /// Single character, with or without the leading `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Long name, with or without the leading `--`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    /// Exact number of parameters that must follow the option.
    #[serde(default)]
    pub parameters: usize,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

impl OptionDef {
    pub fn to_spec(&self) -> Result<OptionSpec> {
        let short = self.short.as_deref().map(normalize_short).transpose()?;
        let long = self.long.as_deref().map(normalize_long).transpose()?;

        let trigger = match (short, long) {
            (Some(c), Some(name)) => Trigger::Mixed(c, name),
            (Some(c), None) => Trigger::Short(c),
            (None, Some(name)) => Trigger::Long(name),
            (None, None) => bail!("option needs a short or long name"),
        };

        Ok(OptionSpec::new(trigger)
            .with_parameters(self.parameters)
            .with_help(self.help.trim()))
    }
}

fn normalize_short(raw: &str) -> Result<char> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' && !c.is_whitespace() => Ok(c),
        _ => bail!("short name must be a single character, got '{raw}'"),
    }
}

fn normalize_long(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix("--").unwrap_or(trimmed);
    if name.is_empty() || name.starts_with('-') || name.contains(char::is_whitespace) {
        bail!("invalid long name '{raw}'");
    }
    Ok(name.to_string())
}

impl Definitions {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read definitions: {}", path.display()))?;
        let definitions: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse definitions JSON: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            options = definitions.options.len(),
            "loaded definitions"
        );
        Ok(definitions)
    }

    pub fn specs(&self) -> Result<Vec<OptionSpec>> {
        self.options
            .iter()
            .enumerate()
            .map(|(idx, def)| def.to_spec().with_context(|| format!("invalid option #{idx}")))
            .collect()
    }

    pub fn parser(&self) -> Result<optkit::Parser> {
        Ok(optkit::Parser::new(self.specs()?))
    }

    pub fn command_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("command")
    }

    fn starter() -> Self {
        Self {
            name: Some("my-tool".to_string()),
            options: vec![
                OptionDef {
                    short: Some("v".to_string()),
                    long: Some("verbose".to_string()),
                    help: "Verbose output".to_string(),
                    ..Default::default()
                },
                OptionDef {
                    short: Some("o".to_string()),
                    long: Some("output".to_string()),
                    parameters: 1,
                    help: "Output file".to_string(),
                },
            ],
        }
    }
}

/// Write a starter definitions file into `dir`. Fails if one already exists.
pub fn write_starter(dir: &Path) -> Result<PathBuf> {
    let dest = dir.join(DEFAULT_DEFINITIONS_NAME);
    if dest.exists() {
        bail!("{} already exists in {}", DEFAULT_DEFINITIONS_NAME, dir.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let mut out = serde_json::to_string_pretty(&Definitions::starter())
        .context("failed to serialize definitions")?;
    out.push('\n');
    fs::write(&dest, out).with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(dest)
}
