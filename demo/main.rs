//! Terminal pathfinding demonstrator.
//!
//! Run: cargo run --bin gridpath -- --size 25

use clap::Parser;
use gridpath_demo::DemoConfig;

fn main() {
    let config = DemoConfig::parse();
    if let Err(e) = gridpath_demo::run(config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
