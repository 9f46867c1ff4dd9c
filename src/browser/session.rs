//! Session lifecycle
//!
//! One [`Session`] owns one browser/page pair for the whole batch. Release
//! runs exactly one teardown regardless of how the run ended, and never
//! surfaces an error: teardown must not be the reason a batch reports
//! failure.

use anyhow::Result;
use chromiumoxide::{Browser, Page};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{AutomationError, BrowserError};

/// Exclusive owner of one live browser/page pair
pub struct Session {
    browser: Option<Browser>,
    page: Option<Page>,
    handler_task: Option<JoinHandle<()>>,
    /// Launched by us (close on release) vs attached (leave running)
    launched: bool,
}

impl Session {
    /// The live page, or an error on a released/partial session
    pub fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| AutomationError::Browser(BrowserError::PageUnavailable).into())
    }

    pub fn is_released(&self) -> bool {
        self.page.is_none() && self.browser.is_none()
    }
}

/// Acquires and releases sessions
pub struct SessionManager;

impl SessionManager {
    /// Attach to a running browser on the debug port, or launch a fresh one.
    pub async fn acquire(debug_port: u16, headless: bool) -> Result<Session> {
        match crate::browser::attach_to_browser(debug_port).await {
            Ok((browser, page, handler_task)) => Ok(Session {
                browser: Some(browser),
                page: Some(page),
                handler_task: Some(handler_task),
                launched: false,
            }),
            Err(attach_err) => {
                info!(
                    "no browser on port {} ({}), launching a fresh one",
                    debug_port, attach_err
                );
                let (browser, page, handler_task) =
                    crate::browser::launch_browser(headless).await?;
                Ok(Session {
                    browser: Some(browser),
                    page: Some(page),
                    handler_task: Some(handler_task),
                    launched: true,
                })
            }
        }
    }

    /// Tear the session down. Idempotent; every internal error is logged
    /// and swallowed.
    pub async fn release(session: &mut Session) {
        if let Some(page) = session.page.take() {
            if let Err(e) = page.close().await {
                warn!("page close failed (ignored): {}", e);
            }
        }

        if let Some(mut browser) = session.browser.take() {
            if session.launched {
                if let Err(e) = browser.close().await {
                    warn!("browser close failed (ignored): {}", e);
                }
                if let Err(e) = browser.wait().await {
                    warn!("browser wait failed (ignored): {}", e);
                }
            } else {
                // attached browser belongs to the user; just drop the handle
                debug!("detaching from externally owned browser");
            }
        }

        if let Some(task) = session.handler_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_session() -> Session {
        Session {
            browser: None,
            page: None,
            handler_task: None,
            launched: false,
        }
    }

    #[tokio::test]
    async fn release_of_partial_session_is_a_no_op() {
        let mut session = bare_session();
        SessionManager::release(&mut session).await;
        assert!(session.is_released());
    }

    #[tokio::test]
    async fn double_release_never_panics() {
        let mut session = bare_session();
        SessionManager::release(&mut session).await;
        SessionManager::release(&mut session).await;
        assert!(session.is_released());
    }

    #[tokio::test]
    async fn released_session_reports_no_page() {
        let mut session = bare_session();
        SessionManager::release(&mut session).await;
        assert!(session.page().is_err());
    }
}
