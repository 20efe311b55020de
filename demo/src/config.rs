use std::time::Duration;

use clap::Parser;
use gridpath_search::Iddfs;

/// Command-line configuration for the demonstrator.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "gridpath")]
#[command(about = "Watch DFS, BFS and IDDFS explore a grid in your terminal")]
pub struct DemoConfig {
    /// Rows (and columns) of the grid
    #[arg(short = 'n', long = "size", value_name = "CELLS", default_value_t = 20,
          value_parser = clap::value_parser!(u16).range(2..=64))]
    pub size: u16,

    /// Pause after every search step, in milliseconds
    #[arg(short = 'd', long = "delay-ms", value_name = "MS", default_value_t = 15)]
    pub delay_ms: u64,

    /// Deepest bound IDDFS tries before giving up (default: cells - 1)
    #[arg(long, value_name = "EDGES")]
    pub max_depth: Option<usize>,

    /// Fraction of cells turned into barriers by the random key
    #[arg(long, value_name = "FRACTION", default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random barrier generator
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 20,
            delay_ms: 15,
            max_depth: None,
            density: 0.3,
            seed: None,
        }
    }
}

impl DemoConfig {
    #[inline]
    pub fn dimension(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// The IDDFS engine bound by `--max-depth`.
    pub fn iddfs(&self) -> Iddfs {
        match self.max_depth {
            Some(d) => Iddfs::new(d),
            None => Iddfs::unbounded(),
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(format!("{v} is not between 0 and 1"))
    }
}
