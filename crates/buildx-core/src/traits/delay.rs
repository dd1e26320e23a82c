//! Injectable delay strategy for the wizard's auto-advance.
//!
//! Selecting a service auto-advances the wizard to the file intake step
//! after a short cosmetic pause. The pause is a host concern: tests inject
//! [`NoDelay`] to run transitions synchronously, interactive hosts use
//! [`FixedDelay`].

use std::time::Duration;

use async_trait::async_trait;

/// Strategy for the pause before the wizard auto-advances.
#[async_trait]
pub trait AdvanceDelay: Send + Sync {
    /// Wait out the configured pause.
    async fn wait(&self);
}

/// Zero-delay strategy. Auto-advance happens immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl AdvanceDelay for NoDelay {
    async fn wait(&self) {}
}

/// Fixed-duration pause backed by the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    /// The portal's stock pause before advancing to file intake.
    pub fn standard() -> Self {
        Self(Duration::from_millis(500))
    }
}

#[async_trait]
impl AdvanceDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}
