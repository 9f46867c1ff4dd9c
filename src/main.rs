use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use personel_entry_bot::models::loaders::load_records;
use personel_entry_bot::services::FileHistory;
use personel_entry_bot::utils::logging;
use personel_entry_bot::{portal, BatchRunner, CancelFlag, Config};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env();

    let records = load_records(Path::new(&config.records_file)).await?;

    let history = Arc::new(FileHistory::new(&config.history_file));
    let schema = portal::personnel_form();

    // Ctrl-C stops at the next record boundary; the in-flight record
    // finishes or fails on its own
    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Ctrl-C received, stopping after the current record");
                cancel.request();
            }
        });
    }

    let runner = BatchRunner::new(config, schema, history);
    runner.run(&records, &cancel).await?;

    Ok(())
}
