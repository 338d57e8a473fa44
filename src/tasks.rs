//! View-scoped delays.
//!
//! Simulated network waits (wallet connect, swap submission, loot box opening) run
//! inside a [`ViewScope`]. Opening a page or dialog creates a scope; navigating away,
//! pressing Ctrl-C, or dropping the scope dismisses it. A wait that is still pending
//! when its scope is dismissed resolves to [`GameError::Cancelled`], and callers only
//! apply state changes on `Ok`, so a dismissed view can never land a stale update.

use log::debug;
use std::time::Duration;
use tokio::sync::watch;

use crate::game::GameError;

#[derive(Debug)]
pub struct ViewScope {
    name: &'static str,
    dismissed: watch::Sender<bool>,
}

impl ViewScope {
    pub fn open(name: &'static str) -> Self {
        let (dismissed, _) = watch::channel(false);
        debug!("view '{}' opened", name);
        Self { name, dismissed }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_dismissed(&self) -> bool {
        *self.dismissed.borrow()
    }

    /// Cancel every pending wait in this scope. Idempotent.
    pub fn dismiss(&self) {
        if !self.is_dismissed() {
            debug!("view '{}' dismissed", self.name);
            self.dismissed.send_replace(true);
        }
    }

    /// A handle that can dismiss this scope from another task (e.g. a signal handler).
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            rx: self.dismissed.subscribe(),
        }
    }

    /// Wait for `duration` unless the scope is dismissed first.
    pub async fn delay(&self, duration: Duration) -> Result<(), GameError> {
        self.handle().delay(duration).await
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.dismiss();
    }
}

/// Receiver side of a [`ViewScope`]; cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    rx: watch::Receiver<bool>,
}

impl ScopeHandle {
    pub fn is_dismissed(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn delay(self, duration: Duration) -> Result<(), GameError> {
        if self.is_dismissed() {
            return Err(GameError::Cancelled);
        }
        let mut rx = self.rx.clone();
        tokio::select! {
            _ = tokio::time::sleep(duration) => {
                if self.is_dismissed() {
                    Err(GameError::Cancelled)
                } else {
                    Ok(())
                }
            }
            _ = wait_dismissed(&mut rx) => Err(GameError::Cancelled),
        }
    }
}

async fn wait_dismissed(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        // Sender dropped: the scope is gone, which also dismisses it.
        if rx.changed().await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delay_completes_while_open() {
        let scope = ViewScope::open("swap");
        assert_eq!(scope.delay(Duration::from_millis(5)).await, Ok(()));
    }

    #[tokio::test]
    async fn dismissed_scope_fails_fast() {
        let scope = ViewScope::open("swap");
        scope.dismiss();
        assert_eq!(
            scope.delay(Duration::from_secs(60)).await,
            Err(GameError::Cancelled)
        );
    }

    #[tokio::test]
    async fn dismiss_interrupts_pending_delay() {
        let scope = ViewScope::open("lootbox");
        let pending = tokio::spawn(scope.handle().delay(Duration::from_secs(60)));
        tokio::time::sleep(Duration::from_millis(10)).await;
        scope.dismiss();
        let res = pending.await.expect("join");
        assert_eq!(res, Err(GameError::Cancelled));
    }

    #[tokio::test]
    async fn dropping_scope_cancels_handles() {
        let scope = ViewScope::open("wallet");
        let handle = scope.handle();
        drop(scope);
        assert!(handle.is_dismissed());
        assert_eq!(
            handle.delay(Duration::from_secs(60)).await,
            Err(GameError::Cancelled)
        );
    }
}
