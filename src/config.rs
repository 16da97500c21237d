use std::path::PathBuf;

use clap::Parser;

/// Categories checked when the viewer opens.
pub const DEFAULT_SELECTION: [&str; 5] = [
    "Carbon Dioxide",
    "Methane",
    "Albedo (Land use)",
    "Solar irradiance",
    "Net total",
];

#[derive(Parser, Debug)]
#[command(
    name = "forcing-waterfall",
    about = "Interactive waterfall breakdown of radiative forcing agents."
)]
pub struct Args {
    /// Forcing table to load (CSV, or JSON records).
    #[arg(long, value_name = "PATH", env = "RFDATA_PATH", default_value = "rfdata.csv")]
    pub data: PathBuf,

    /// Category checked at startup. Repeat or comma-separate for several.
    /// Commas always split, so a label containing a comma cannot be named here.
    #[arg(long = "select", value_name = "LABEL", value_delimiter = ',')]
    pub select: Vec<String>,
}

impl Args {
    /// Startup selection: the `--select` labels, or the built-in defaults.
    pub fn default_selection(&self) -> Vec<String> {
        if self.select.is_empty() {
            DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect()
        } else {
            self.select.iter().map(|s| s.trim().to_string()).collect()
        }
    }
}
