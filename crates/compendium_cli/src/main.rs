//! Headless probe for the compendium core.
//!
//! # Responsibility
//! - Open (and on first run seed) a topic database, load the forest, and
//!   print a deterministic summary.
//! - Stand in for the GUI shell during local sanity checks.
//!
//! Usage: `compendium [DATABASE_PATH]`; the path defaults to
//! `encyclopedia.db` in the working directory.

use compendium_core::db::{ensure_seed_data, open_db};
use compendium_core::{
    default_log_level, init_logging, CatalogService, SqliteTopicRepository,
};
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "encyclopedia.db";

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("compendium: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::temp_dir().join("compendium-logs");
    if let Some(log_dir) = log_dir.to_str() {
        // The probe stays usable without logs; report and move on.
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("compendium: logging disabled: {err}");
        }
    }

    let mut conn = open_db(path)?;
    let seeded = ensure_seed_data(&mut conn)?;
    if seeded > 0 {
        println!("seeded {seeded} starter topics into {path}");
    }

    let repo = SqliteTopicRepository::try_new(&conn)?;
    let mut catalog = CatalogService::new(repo);
    let forest = catalog.reload()?;

    println!("database={path} topics={}", forest.len());
    for &root_id in forest.roots() {
        if let Some(root) = forest.get(root_id) {
            println!("root id={} name={} children={}", root.id(), root.name(), root.children.len());
        }
    }
    Ok(())
}
