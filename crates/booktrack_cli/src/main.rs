//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `booktrack_core` linkage.
//! - Run one add/toggle/remove cycle against an in-memory store.
//!
//! File logging is enabled when `BOOKTRACK_LOG_DIR` is set.

use booktrack_core::{CoreConfig, InMemoryBookRepository, LibraryService};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    for warning in &config.warnings {
        eprintln!("booktrack config: {warning}");
    }
    if let Some(dir) = config.log_dir.as_deref() {
        match booktrack_core::init_logging(&config.log_level, &dir.to_string_lossy()) {
            Ok(()) => {
                for warning in &config.warnings {
                    log::warn!("event=config_load module=cli status=fallback warning={warning}");
                }
            }
            Err(err) => eprintln!("booktrack logging disabled: {err}"),
        }
    }

    println!("booktrack_core ping={}", booktrack_core::ping());
    println!("booktrack_core version={}", booktrack_core::core_version());

    match store_probe() {
        Ok(size) => {
            println!("booktrack_core store_probe=ok size={size}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=store_probe module=cli status=error error={err}");
            eprintln!("booktrack_core store_probe=error {err}");
            ExitCode::FAILURE
        }
    }
}

fn store_probe() -> booktrack_core::RepoResult<usize> {
    let mut store = LibraryService::new(InMemoryBookRepository::new());
    let dune = store.add("Dune", "Frank Herbert", "SciFi", "412", "true")?;
    let draft = store.add("Untitled", "Unknown", "Misc", "", "false")?;

    store.toggle_read(draft)?;
    store.remove(dune)?;
    Ok(store.len())
}
