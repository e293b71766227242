//! mouse-mv - Windows idle suppressor.
//!
//! Runs silently in release builds (no console window).

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use mouse_mv::config::JigglerConfig;
use mouse_mv::jiggler::RunSummary;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mouse_mv=info")),
        )
        .init();

    let config = JigglerConfig::default();
    println!("mouse-mv v{}", env!("CARGO_PKG_VERSION"));
    println!("   • Stop with {} (if it could be registered)", config.hotkey);

    let summary = mouse_mv::run_system(config);
    print_summary(&summary);
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("════════════════════════════════════════");
    println!("Started:           {}", summary.started_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Uptime:            {}s", summary.uptime_secs());
    println!("Ticks:             {}", summary.ticks);
    println!("Events injected:   {}", summary.injected);
    if summary.failed_injections > 0 {
        println!("Failed injections: {}", summary.failed_injections);
    }
    println!("Hotkey active:     {}", summary.hotkey_active);
    println!("════════════════════════════════════════");
}
