//! Logging setup and batch progress banners

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ========== progress banners ==========

pub fn log_startup(total_records: usize, headless: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 personnel entry batch starting");
    info!("📋 records: {} | headless: {}", total_records, headless);
    info!("{}", "=".repeat(60));
}

pub fn log_record_start(index: usize, total: usize, who: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📄 record {}/{}: {}", index, total, who);
}

pub fn log_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 batch finished");
    info!(
        "finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ success: {}/{}", success, total);
    info!("❌ failed: {}", failed);
    info!("{}", "=".repeat(60));
}
