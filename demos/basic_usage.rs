//! Basic logger usage example
//!
//! Demonstrates level filtering by ordinal and the console echo.
//!
//! Run with: cargo run --example basic_usage

use async_file_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Async File Logger - Basic Usage Example ===\n");

    // Undefined is the lowest ordinal, so every level passes
    let logger = Logger::open("basic_usage.log", LogLevel::Undefined, 0, true)?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message, followed by a stack trace");

    println!("\n2. Logging with a different minimum level:");
    logger.set_min_level(LogLevel::Info);
    println!("   Minimum level set to Info - only Info and Debug pass:");
    logger.warn("Warning message (hidden)");
    logger.info("Info message (visible)");
    logger.debug("Debug message (visible)");

    logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

    let metrics = logger.metrics();
    println!(
        "\nWritten: {}, filtered: {}",
        metrics.written(),
        metrics.filtered()
    );
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
