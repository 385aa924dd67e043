//! Isomark asset generator
//!
//! Writes the isometric brand assets as SVG files.
//!
//! # Commands
//!
//! - `isomark icon` - Cube icon, light and dark
//! - `isomark wordmark` - The lettering alone
//! - `isomark logo` - Icon and wordmark side by side, light and dark
//! - `isomark monogram` - The L centered on a square canvas
//! - `isomark all` - Everything above, rendered in parallel
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

mod args;
mod jobs;

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isomark_geometry::AnyAsset;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::AssetArgs;

/// Isometric brand asset generator
#[derive(Parser)]
#[command(name = "isomark")]
#[command(about = "Generate isometric SVG brand assets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cube with accent blocks, L monogram and wireframe
    Icon(AssetArgs),

    /// Isometric lettering
    Wordmark(AssetArgs),

    /// Icon and wordmark side by side
    Logo(AssetArgs),

    /// The L alone on a square canvas
    Monogram(AssetArgs),

    /// Every asset in every variant
    All(AssetArgs),
}

impl Commands {
    fn args(&self) -> &AssetArgs {
        match self {
            Commands::Icon(args)
            | Commands::Wordmark(args)
            | Commands::Logo(args)
            | Commands::Monogram(args)
            | Commands::All(args) => args,
        }
    }

    /// Builds the requested assets. The render config is validated and the
    /// letter parameters are loaded once per invocation.
    fn assets(&self) -> Result<Vec<AnyAsset>> {
        let args = self.args();
        let config = args.render_config()?;
        Ok(match self {
            Commands::Icon(_) => vec![args.icon(config).into()],
            Commands::Wordmark(_) => vec![args.wordmark(args.letter_params()?, config).into()],
            Commands::Logo(_) => vec![args.logo(args.letter_params()?, config).into()],
            Commands::Monogram(_) => vec![args.monogram(config).into()],
            Commands::All(_) => {
                let params = args.letter_params()?;
                vec![
                    args.icon(config).into(),
                    args.wordmark(params, config).into(),
                    args.logo(params, config).into(),
                    args.monogram(config).into(),
                ]
            }
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = cli.command.args();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let jobs = jobs::plan(cli.command.assets()?, &args.theme.themes(), &args.out_dir);
    let written = jobs::run(&jobs)?;
    info!(files = written.len(), out_dir = %args.out_dir.display(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ThemeChoice;
    use clap::CommandFactory;
    use isomark_geometry::{Asset, LStyle};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["isomark", "all"]);
        let args = cli.command.args();
        assert_eq!(args.theme, ThemeChoice::Both);
        assert_eq!(args.stroke_width, 6.0);
        assert_eq!(args.side, 100.0);
        assert!(!args.wireframe);
        assert_eq!(cli.command.assets().unwrap().len(), 4);
    }

    #[test]
    fn test_letter_flags_override_defaults() {
        let cli = Cli::parse_from(["isomark", "wordmark", "--width", "60", "--gap", "10"]);
        let params = cli.command.args().letter_params().unwrap();
        assert_eq!(params.width, 60.0);
        assert_eq!(params.gap, 10.0);
        assert_eq!(params.height, 70.0);
    }

    #[test]
    fn test_flags_override_params_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letters.json");
        fs::write(&path, r#"{ "width": 80.0, "height": 90.0 }"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["isomark", "logo", "--params", path_arg.as_str(), "--height", "100"]);
        let params = cli.command.args().letter_params().unwrap();
        assert_eq!(params.width, 80.0);
        assert_eq!(params.height, 100.0);
    }

    #[test]
    fn test_style_defaults_per_asset() {
        let cli = Cli::parse_from(["isomark", "all"]);
        let args = cli.command.args();
        let config = args.render_config().unwrap();
        assert_eq!(args.icon(config).style, LStyle::Full);
        assert_eq!(args.monogram(config).style, LStyle::Short);

        let cli = Cli::parse_from(["isomark", "monogram", "--style", "full", "--wireframe"]);
        let args = cli.command.args();
        let monogram = args.monogram(args.render_config().unwrap());
        assert_eq!(monogram.style, LStyle::Full);
        assert!(monogram.wireframe);
    }

    #[test]
    fn test_all_shares_one_params_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letters.json");
        fs::write(&path, r#"{ "width": 64.0, "depth": 12.0 }"#).unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let cli = Cli::parse_from(["isomark", "all", "--params", path_arg.as_str(), "--stroke-width", "4"]);
        let assets = cli.command.assets().unwrap();
        let (wordmark, logo) = match (&assets[1], &assets[2]) {
            (AnyAsset::Wordmark(w), AnyAsset::Logo(l)) => (w, l),
            other => panic!("unexpected asset order: {other:?}"),
        };
        assert_eq!(wordmark.params, logo.params);
        assert_eq!(logo.params.width, 64.0);
        assert_eq!(wordmark.config, logo.config);
        assert_eq!(wordmark.config.stroke_width, 4.0);
    }

    #[test]
    fn test_all_reports_missing_params_file() {
        let cli = Cli::parse_from(["isomark", "all", "--params", "/nonexistent/letters.json"]);
        let err = cli.command.assets().unwrap_err();
        assert!(format!("{err:#}").contains("letters.json"));
    }

    #[test]
    fn test_invalid_stroke_is_rejected() {
        let cli = Cli::parse_from(["isomark", "icon", "--stroke-width", "0"]);
        assert!(cli.command.assets().is_err());
    }

    #[test]
    fn test_single_asset_commands() {
        let cli = Cli::parse_from(["isomark", "monogram"]);
        let assets = cli.command.assets().unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name(), "cube");
    }
}
