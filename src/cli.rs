//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::IlliteracyThreshold;
use crate::data::loader::{DataSources, DEFAULT_DEMOGRAPHICS_FILE, DEFAULT_EDUCATION_FILE};

/// Town Profile - education and family size dashboard for Lebanese towns
///
/// Joins the demographics and education CSV files on town name and shows
/// summary metrics, a family size chart and an education radar chart,
/// filtered by a minimum illiteracy rate.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the two CSV files
    #[arg(long, value_name = "DIR", default_value = ".", env = "TOWN_PROFILE_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Demographics CSV, relative to the data directory unless absolute
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DEMOGRAPHICS_FILE)]
    pub demographics: PathBuf,

    /// Education CSV, relative to the data directory unless absolute
    #[arg(long, value_name = "FILE", default_value = DEFAULT_EDUCATION_FILE)]
    pub education: PathBuf,

    /// Initial minimum illiteracy rate (%)
    #[arg(
        long,
        value_name = "N",
        default_value_t = IlliteracyThreshold::DEFAULT.value(),
        value_parser = clap::value_parser!(u8).range(0..=10)
    )]
    pub threshold: u8,

    /// Print the computed view as JSON instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn data_sources(&self) -> DataSources {
        DataSources::in_dir(&self.data_dir, &self.demographics, &self.education)
    }

    pub fn threshold(&self) -> IlliteracyThreshold {
        IlliteracyThreshold::new(self.threshold)
    }

    /// Default log filter; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
