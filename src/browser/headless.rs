use anyhow::Result;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::portal::selectors::BROWSER_SYNC_DELAY;

/// Launch a fresh browser instance.
///
/// Used when no already-running browser answers on the debug port.
pub async fn launch_browser(headless: bool) -> Result<(Browser, Page, JoinHandle<()>)> {
    info!("🚀 launching browser (headless: {})...", headless);

    let mut builder = BrowserConfig::builder();
    if headless {
        builder = builder.new_headless_mode();
    } else {
        builder = builder.with_head();
    }
    let config = builder
        .args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
            "--remote-debugging-port=0",
        ])
        .build()
        .map_err(|e| {
            error!("browser configuration failed: {}", e);
            anyhow::anyhow!("browser configuration failed: {}", e)
        })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("browser launch failed: {}", e);
        anyhow::anyhow!("browser launch failed: {}", e)
    })?;
    debug!("browser launched");

    // drain CDP events in the background
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // short delay to let browser state sync
    sleep(BROWSER_SYNC_DELAY).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("could not create page: {}", e);
        anyhow::anyhow!("could not create page: {}", e)
    })?;

    info!("✅ browser ready");
    Ok((browser, page, handler_task))
}
