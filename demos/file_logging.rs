//! File logging example
//!
//! Demonstrates concurrent producers, a JSON configuration and an error hook.
//!
//! Run with: cargo run --example file_logging

use async_file_logger::prelude::*;
use async_file_logger::{info, warn};
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Async File Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "path": "application.log",
            "min_level": "Warn",
            "max_records": 10000,
            "timestamp_format": "Iso8601"
        }"#,
    )?;

    let logger = Arc::new(
        LoggerBuilder::from_config(config)
            .error_hook(stderr_error_hook())
            .open()?,
    );

    println!("1. Logging from four worker threads:");
    let handles: Vec<_> = (1..=4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for item in 1..=5 {
                    info!(logger, "worker {} processing item {}/5", worker, item);
                    if item == 3 {
                        warn!(logger, "worker {} item 3 took longer than expected", worker);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    logger.info("All operations completed");
    logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

    println!("\n=== Example completed successfully! ===");
    println!(
        "Check 'application.log' for the {} written lines",
        logger.metrics().written()
    );

    Ok(())
}
