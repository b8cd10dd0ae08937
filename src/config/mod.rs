pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CONCURRENT_READS: usize = 4;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bookworms")]
#[command(about = "Find the books that appear on more than one bookworm's shelf")]
pub struct CliConfig {
    /// JSON roster files to read
    pub roster_files: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Maximum number of roster files read at once [default: 4]
    #[arg(long)]
    pub concurrent_reads: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers command-line values over a TOML config.
    ///
    /// Flags win over TOML values. Roster files from the command line are
    /// appended after the ones listed in TOML.
    pub fn merge_toml(mut self, toml: TomlConfig) -> Self {
        let mut roster_files = toml.input.files;
        roster_files.append(&mut self.roster_files);
        self.roster_files = roster_files;

        self.format = self.format.or(toml.output.format);
        self.output = self.output.or(toml.output.path);
        self.concurrent_reads = self.concurrent_reads.or(toml.input.concurrent_reads);
        self
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn roster_files(&self) -> &[String] {
        &self.roster_files
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn concurrent_reads(&self) -> usize {
        self.concurrent_reads.unwrap_or(DEFAULT_CONCURRENT_READS)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("roster_files", &self.roster_files)?;
        validation::validate_file_extensions("roster_files", &self.roster_files, &["json"])?;
        validation::validate_positive_number("concurrent_reads", self.concurrent_reads(), 1)?;

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        Ok(())
    }
}
