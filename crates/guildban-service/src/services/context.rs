//! Ban context - dependency container for the guild ban service
//!
//! Holds the registry together with the host and kick scheduler it works
//! against.

use std::sync::Arc;

use guildban_core::traits::GuildHost;
use tokio::runtime::Handle;

use super::error::{ServiceError, ServiceResult};
use super::registry::GuildBanRegistry;
use super::scheduler::{KickScheduler, TokioKickScheduler};

/// Ban context containing all dependencies
#[derive(Clone)]
pub struct BanContext {
    registry: Arc<GuildBanRegistry>,
    host: Arc<dyn GuildHost>,
    scheduler: Arc<dyn KickScheduler>,
}

impl BanContext {
    pub fn new(
        registry: Arc<GuildBanRegistry>,
        host: Arc<dyn GuildHost>,
        scheduler: Arc<dyn KickScheduler>,
    ) -> Self {
        Self {
            registry,
            host,
            scheduler,
        }
    }

    /// Get the ban registry
    pub fn registry(&self) -> &GuildBanRegistry {
        self.registry.as_ref()
    }

    /// Get the game server host
    pub fn host(&self) -> &dyn GuildHost {
        self.host.as_ref()
    }

    /// Get the kick scheduler
    pub fn scheduler(&self) -> &dyn KickScheduler {
        self.scheduler.as_ref()
    }
}

impl std::fmt::Debug for BanContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BanContext")
            .field("registry", &self.registry)
            .field("host", &"dyn GuildHost")
            .field("scheduler", &"dyn KickScheduler")
            .finish()
    }
}

/// Builder for creating BanContext
#[derive(Default)]
pub struct BanContextBuilder {
    registry: Option<Arc<GuildBanRegistry>>,
    host: Option<Arc<dyn GuildHost>>,
    scheduler: Option<Arc<dyn KickScheduler>>,
}

impl BanContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(mut self, registry: Arc<GuildBanRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn host(mut self, host: Arc<dyn GuildHost>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn KickScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Build the BanContext
    ///
    /// Without an explicit scheduler, kicks are spawned on the current tokio
    /// runtime.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the registry or host is missing,
    /// and `ServiceError::Internal` if no scheduler was given outside a runtime
    pub fn build(self) -> ServiceResult<BanContext> {
        let registry = self
            .registry
            .ok_or_else(|| ServiceError::validation("registry is required"))?;
        let host = self
            .host
            .ok_or_else(|| ServiceError::validation("host is required"))?;
        let scheduler = match self.scheduler {
            Some(scheduler) => scheduler,
            None => {
                let handle =
                    Handle::try_current().map_err(|e| ServiceError::internal(e.to_string()))?;
                Arc::new(TokioKickScheduler::new(Arc::clone(&host), handle))
            }
        };

        Ok(BanContext::new(registry, host, scheduler))
    }
}
