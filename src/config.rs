use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};

/// Default location of the persisted key/value store, relative to the
/// working directory.
pub const CONFIG_FILE: &str = "oncall-analysis.toml";

/// Terminal prompting capability, separated from the store so automated
/// contexts (and tests) can substitute a non-interactive responder.
pub trait Prompter {
    fn prompt(&self, message: &str, mask: bool) -> Result<String>;
}

/// Default prompter backed by `inquire`. Masked prompts hide keystrokes.
pub struct InteractivePrompter;

impl Prompter for InteractivePrompter {
    fn prompt(&self, message: &str, mask: bool) -> Result<String> {
        let value = if mask {
            inquire::Password::new(message)
                .without_confirmation()
                .with_help_message("Stored locally, sent only to the PagerDuty API")
                .prompt()?
        } else {
            inquire::Text::new(message).prompt()?
        };
        Ok(value)
    }
}

/// Persistent string settings keyed by dotted names (`pagerduty.token`).
///
/// Reads are layered: the TOML file first, then environment overrides with
/// the `ONCALL` prefix (`ONCALL_PAGERDUTY_TOKEN` -> `pagerduty.token`).
/// Writes go straight to the file, one read-modify-write per call. Last
/// writer wins across concurrent invocations; fine for a single operator.
pub struct ConfigStore {
    path: PathBuf,
    prompter: Box<dyn Prompter>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::at(PathBuf::from(CONFIG_FILE))
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            prompter: Box::new(InteractivePrompter),
        }
    }

    pub fn with_prompter(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.prompter = prompter;
        self
    }

    /// Read a value without prompting. Missing keys yield the empty string
    /// and a hint pointing the operator at the `configure` command.
    pub fn get(&self, key: &str) -> Result<String> {
        let mut builder = Config::builder();

        if self.path.exists() {
            builder = builder.add_source(File::from(self.path.clone()).format(FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("ONCALL").separator("_"));

        let settings = builder
            .build()
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let value = settings.get_string(key).unwrap_or_default();

        if value.is_empty() {
            let namespace = key.split('.').next().unwrap_or(key);
            println!(
                "{key} not configured. Run `oncall-analysis configure` to set {namespace} settings"
            );
        }

        Ok(value)
    }

    /// Read a value, prompting the operator to set or replace it.
    ///
    /// An existing value is redisplayed in the prompt (masked to its last
    /// two characters when `mask`) and kept on blank input. A non-blank
    /// response is persisted immediately.
    pub fn get_or_prompt(&self, key: &str, mask: bool) -> Result<String> {
        let current = self.stored(key)?;

        let message = if current.is_empty() {
            format!("Enter {key}")
        } else {
            let shown = if mask {
                masked(&current)
            } else {
                current.clone()
            };
            format!("Enter {key} (current: {shown}, blank keeps it)")
        };

        let entered = self.prompter.prompt(&message, mask)?;

        if entered.is_empty() {
            return Ok(current);
        }

        self.set(key, &entered)?;
        Ok(entered)
    }

    /// Write-through update of one key, creating the file and any nested
    /// tables as needed.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut root = self.read_table()?;

        let mut table = &mut root;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                table.insert(part.to_string(), toml::Value::String(value.to_string()));
                break;
            }
            let entry = table
                .entry(part.to_string())
                .or_insert_with(|| toml::Value::Table(toml::Table::new()));
            table = entry
                .as_table_mut()
                .with_context(|| format!("config key {key} collides with a non-table entry"))?;
        }

        let rendered = toml::to_string_pretty(&root)?;
        std::fs::write(&self.path, rendered)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Per-request HTTP timeout, `pagerduty.timeout_seconds` (default 30).
    pub fn request_timeout(&self) -> Result<std::time::Duration> {
        let raw = self.stored("pagerduty.timeout_seconds")?;
        if raw.is_empty() {
            return Ok(std::time::Duration::from_secs(30));
        }
        let seconds: u64 = raw
            .parse()
            .with_context(|| format!("pagerduty.timeout_seconds is not a number: {raw}"))?;
        Ok(std::time::Duration::from_secs(seconds))
    }

    /// Load `.env` into the environment if present, so the token can be
    /// supplied non-interactively.
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::debug!("loaded environment variables from .env");
        }
        Ok(())
    }

    // File-only read, no env layering and no hint. Used where the persisted
    // value is what matters (prompting, timeouts).
    fn stored(&self, key: &str) -> Result<String> {
        let root = self.read_table()?;
        let mut value = root.get(key.split('.').next().unwrap_or(key));
        for part in key.split('.').skip(1) {
            value = value.and_then(|v| v.as_table()).and_then(|t| t.get(part));
        }
        Ok(value
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string())
    }

    fn read_table(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        raw.parse::<toml::Table>()
            .with_context(|| format!("{} is not valid TOML", self.path.display()))
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Redisplay form of a sensitive value: `****` plus the last two characters.
fn masked(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    format!("****{tail}")
}
