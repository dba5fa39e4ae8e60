use crate::adapters::plotters_backend::DEFAULT_SIZE;
use crate::config::render_config::{RenderConfig, MAX_DIMENSION, MIN_DIMENSION};
use crate::config::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every chart binary.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Write the chart to this file instead of <directory>/<chart>.<format>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (inferred from --output when omitted)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Path to TOML rendering configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Open the chart in a window and block until it is closed
    #[arg(long)]
    pub show: bool,

    /// Print the chart description as JSON and exit
    #[arg(long)]
    pub describe: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    pub fn load_config(&self) -> Result<RenderConfig> {
        let config = match &self.config {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Effective settings after applying CLI flags over the TOML file over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub size: (u32, u32),
    pub show: bool,
    pub describe: bool,
    pub window_title: String,
}

impl RenderSettings {
    pub fn resolve(args: &RenderArgs, config: &RenderConfig, chart_id: &str, title: &str) -> Result<Self> {
        let format = match args.format {
            Some(format) => format,
            None => match args.output.as_deref().and_then(OutputFormat::from_path) {
                Some(format) => format,
                None => config.output_format()?.unwrap_or_default(),
            },
        };

        let output_path = match &args.output {
            Some(path) => path.clone(),
            None => PathBuf::from(config.output_directory().unwrap_or("."))
                .join(format!("{}.{}", chart_id, format.extension())),
        };

        let width = args.width.or(config.width()).unwrap_or(DEFAULT_SIZE.0);
        let height = args.height.or(config.height()).unwrap_or(DEFAULT_SIZE.1);
        validate_range("width", width, MIN_DIMENSION, MAX_DIMENSION)?;
        validate_range("height", height, MIN_DIMENSION, MAX_DIMENSION)?;

        Ok(Self {
            output_path,
            format,
            size: (width, height),
            show: args.show || config.show(),
            describe: args.describe,
            window_title: config.window_title().unwrap_or(title).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_without_flags_or_config() {
        let settings = RenderSettings::resolve(
            &RenderArgs::default(),
            &RenderConfig::default(),
            "query_latency",
            "Query Latency",
        )
        .unwrap();

        assert_eq!(settings.output_path, Path::new(".").join("query_latency.svg"));
        assert_eq!(settings.format, OutputFormat::Svg);
        assert_eq!(settings.size, (800, 600));
        assert!(!settings.show);
        assert_eq!(settings.window_title, "Query Latency");
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = RenderConfig::from_toml_str(
            "[output]\ndirectory = \"charts\"\nformat = \"svg\"\nwidth = 1024\n",
        )
        .unwrap();
        let args = RenderArgs {
            format: Some(OutputFormat::Png),
            width: Some(640),
            ..Default::default()
        };

        let settings = RenderSettings::resolve(&args, &config, "block_storage", "Block").unwrap();

        assert_eq!(settings.output_path, Path::new("charts").join("block_storage.png"));
        assert_eq!(settings.format, OutputFormat::Png);
        assert_eq!(settings.size, (640, 600));
    }

    #[test]
    fn test_format_inferred_from_output_path() {
        let args = RenderArgs {
            output: Some(PathBuf::from("out/latency.png")),
            ..Default::default()
        };

        let settings =
            RenderSettings::resolve(&args, &RenderConfig::default(), "query_latency", "Q").unwrap();
        assert_eq!(settings.format, OutputFormat::Png);
        assert_eq!(settings.output_path, PathBuf::from("out/latency.png"));
    }

    #[test]
    fn test_out_of_range_size_rejected() {
        let args = RenderArgs {
            height: Some(10_000),
            ..Default::default()
        };
        assert!(RenderSettings::resolve(&args, &RenderConfig::default(), "x", "x").is_err());
    }
}
