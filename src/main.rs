//! `watsan` (wsn) - Community water & sanitation tracker
//!
//! Household water-usage surveys and water/sanitation issue reports,
//! persisted as flat JSON files in a local workspace directory.

use watsan::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
