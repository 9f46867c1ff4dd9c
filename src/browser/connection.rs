use anyhow::Result;
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::portal::selectors::BROWSER_SYNC_DELAY;

/// Attach to an already-running browser on the local debug port.
///
/// Reuses an existing blank page when one is available, otherwise opens a
/// fresh one. Returns the CDP event pump handle so the caller can stop it
/// at release time.
pub async fn attach_to_browser(port: u16) -> Result<(Browser, Page, JoinHandle<()>)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("attaching to running browser: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        debug!("attach failed: {}", e);
        e
    })?;
    debug!("browser connection established");

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

    let pages = browser.pages().await?;
    debug!("browser reports {} open pages", pages.len());

    for page in pages {
        if let Ok(Some(url)) = page.url().await {
            if url == "about:blank" {
                info!("✓ reusing blank page");
                return Ok((browser, page, handler_task));
            }
        }
    }

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("could not create page on attached browser: {}", e);
        e
    })?;
    debug!("opened a fresh page on the attached browser");

    Ok((browser, page, handler_task))
}
