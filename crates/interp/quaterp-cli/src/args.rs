//! Command-line arguments, the optional JSON config file, and how the two are merged.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use quaterp_core::{ComponentOrder, Config, Quat};
use serde::{Deserialize, Serialize};

use crate::view::ViewMode;

pub const DEFAULT_Q1: [f64; 4] = [1.0, 0.0, 0.0, 0.0];
/// 180 degrees about the X+Y diagonal in `wxyz` order.
pub const DEFAULT_Q2: [f64; 4] = [0.0, 0.7071, 0.7071, 0.0];

#[derive(Parser, Debug)]
#[command(name = "quaterp")]
#[command(version, about = "Compare LERP and SLERP interpolation between two quaternions.", long_about = None)]
pub struct Args {
    /// First quaternion. Default: identity
    #[arg(long, num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
    pub q1: Option<Vec<f64>>,

    /// Second quaternion. Default: 180 degrees about the X+Y diagonal
    #[arg(long, num_args = 4, value_names = ["A", "B", "C", "D"], allow_negative_numbers = true)]
    pub q2: Option<Vec<f64>>,

    /// Number of interpolation points. Default: 8
    #[arg(long = "n-points")]
    pub n_points: Option<NonZeroUsize>,

    /// Component order of --q1/--q2 and of reported quaternions.
    /// Use `xyzw` to match the original plotting script, which reads scalar-last arrays
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Look straight down the Z axis
    #[arg(long)]
    pub birds_eye: bool,

    /// Look along the axis of the relative rotation between q1 and q2
    #[arg(long)]
    pub aligned_view: bool,

    /// Scale all three axes equally
    #[arg(long)]
    pub equal_aspect: bool,

    /// JSON file providing defaults for any of the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format. Default: table
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Wxyz,
    Xyzw,
}

impl From<OrderArg> for ComponentOrder {
    fn from(o: OrderArg) -> Self {
        match o {
            OrderArg::Wxyz => ComponentOrder::ScalarFirst,
            OrderArg::Xyzw => ComponentOrder::ScalarLast,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Json,
    #[default]
    Table,
}

/// On-disk configuration; every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub q1: Option<[f64; 4]>,
    pub q2: Option<[f64; 4]>,
    pub order: Option<ComponentOrder>,
    pub birds_eye: bool,
    pub aligned_view: bool,
    pub equal_aspect: bool,
    pub format: Option<Format>,
    pub interp: Config,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }
}

/// Fully resolved run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub q1: Quat,
    pub q2: Quat,
    pub order: ComponentOrder,
    pub samples: NonZeroUsize,
    pub view: ViewMode,
    pub equal_aspect: bool,
    pub format: Format,
    pub interp: Config,
}

fn to_array(name: &str, values: &[f64]) -> Result<[f64; 4]> {
    values
        .try_into()
        .map_err(|_| anyhow!("--{name} takes exactly 4 values, got {}", values.len()))
}

impl Settings {
    /// Command-line flags win over the config file, which wins over built-in defaults.
    pub fn resolve(args: &Args, file: CliConfig) -> Result<Self> {
        let order: ComponentOrder = match args.order {
            Some(o) => o.into(),
            None => file.order.unwrap_or_default(),
        };
        let q1 = match &args.q1 {
            Some(v) => to_array("q1", v)?,
            None => file.q1.unwrap_or(DEFAULT_Q1),
        };
        let q2 = match &args.q2 {
            Some(v) => to_array("q2", v)?,
            None => file.q2.unwrap_or(DEFAULT_Q2),
        };

        let birds_eye = args.birds_eye || file.birds_eye;
        let aligned = args.aligned_view || file.aligned_view;
        let view = if birds_eye {
            ViewMode::BirdsEye
        } else if aligned {
            ViewMode::Aligned
        } else {
            ViewMode::Default
        };

        let mut interp = file.interp;
        if let Some(n) = args.n_points {
            interp.samples = n;
        }

        Ok(Self {
            q1: Quat::from_array(q1, order),
            q2: Quat::from_array(q2, order),
            order,
            samples: interp.samples,
            view,
            equal_aspect: args.equal_aspect || file.equal_aspect,
            format: args.format.or(file.format).unwrap_or_default(),
            interp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quaterp").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_reproduce_original_tool() {
        let args = parse(&[]);
        let s = Settings::resolve(&args, CliConfig::default()).unwrap();
        assert_eq!(s.q1, Quat::IDENTITY);
        assert_eq!(s.q2, Quat::new(0.0, 0.7071, 0.7071, 0.0));
        assert_eq!(s.samples.get(), 8);
        assert_eq!(s.view, ViewMode::Default);
        assert_eq!(s.format, Format::Table);
        assert!(!s.equal_aspect);
    }

    #[test]
    fn parses_negative_components_and_order() {
        let args = parse(&[
            "--q1", "0", "0", "0", "1", "--q2", "-0.5", "0.5", "-0.5", "0.5", "--order", "xyzw",
            "--n-points", "5",
        ]);
        let s = Settings::resolve(&args, CliConfig::default()).unwrap();
        assert_eq!(s.order, ComponentOrder::ScalarLast);
        assert_eq!(s.q1, Quat::IDENTITY);
        assert_eq!(s.q2, Quat::new(0.5, -0.5, 0.5, -0.5));
        assert_eq!(s.samples.get(), 5);
    }

    #[test]
    fn order_help_points_to_scalar_last_convention() {
        use clap::CommandFactory;
        let mut cmd = Args::command();
        let help = cmd.render_long_help().to_string();
        assert!(help.contains("`xyzw`"));
        assert!(help.contains("scalar-last"));
    }

    #[test]
    fn rejects_zero_points_and_short_quaternions() {
        let argv = ["quaterp", "--n-points", "0"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["quaterp", "--q1", "1", "0", "0"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn birds_eye_wins_over_aligned() {
        let args = parse(&["--birds-eye", "--aligned-view"]);
        let s = Settings::resolve(&args, CliConfig::default()).unwrap();
        assert_eq!(s.view, ViewMode::BirdsEye);
        let args = parse(&["--aligned-view"]);
        let s = Settings::resolve(&args, CliConfig::default()).unwrap();
        assert_eq!(s.view, ViewMode::Aligned);
    }

    #[test]
    fn flags_override_config_file() {
        let file: CliConfig = serde_json::from_str(
            r#"{
                "q1": [0.0, 1.0, 0.0, 0.0],
                "q2": [0.0, 0.0, 1.0, 0.0],
                "order": "wxyz",
                "aligned_view": true,
                "format": "json",
                "interp": { "samples": 12 }
            }"#,
        )
        .unwrap();

        let s = Settings::resolve(&parse(&[]), file.clone()).unwrap();
        assert_eq!(s.q1, Quat::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(s.samples.get(), 12);
        assert_eq!(s.view, ViewMode::Aligned);
        assert_eq!(s.format, Format::Json);

        let args = parse(&["--q1", "1", "0", "0", "0", "--n-points", "3", "--format", "table"]);
        let s = Settings::resolve(&args, file).unwrap();
        assert_eq!(s.q1, Quat::IDENTITY);
        assert_eq!(s.q2, Quat::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(s.samples.get(), 3);
        assert_eq!(s.interp.samples.get(), 3);
        assert_eq!(s.format, Format::Table);
    }

    #[test]
    fn config_file_rejects_unknown_keys() {
        let res: Result<CliConfig, _> = serde_json::from_str(r#"{ "n_points": 4 }"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = CliConfig::load(Path::new("/nonexistent/quaterp.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/quaterp.json"));
    }
}
