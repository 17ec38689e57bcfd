pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "icon-gen")]
#[command(about = "Generate solid black placeholder PNG icons (192x192 and 512x512)")]
pub struct CliConfig {
    /// Directory the icons are written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_current_dir() {
        let config = CliConfig::try_parse_from(["icon-gen"]).unwrap();

        assert_eq!(config.output_dir(), ".");
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::try_parse_from(["icon-gen", "--output-dir", "public", "-v"]).unwrap();

        assert_eq!(config.output_dir(), "public");
        assert!(config.verbose());
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let config = CliConfig {
            output_dir: String::new(),
            verbose: false,
        };

        assert!(config.validate().is_err());
    }
}
