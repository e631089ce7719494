//! Mirror service façade and bootstrap helpers.
//!
//! This crate wires a host-provided HTTP bridge into a ready-to-run
//! [`MirrorService`]: the Spotify connector behind the provider trait, the
//! sync coordinator on top, and the `core-runtime` logging bootstrap
//! re-exported for hosts that only depend on the facade. Desktop apps
//! typically enable the `desktop-shims` feature (which depends on
//! `bridge-desktop`) for a one-call constructor over the production
//! `reqwest` transport.

pub mod error;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_traits::http::{AuthFailureHook, HttpClient};
use core_sync::{MirrorCoordinator, MirrorSummary};
use provider_spotify::SpotifyConnector;
use tracing::info;

pub use core_runtime::logging::{LogFormat, LoggingConfig};
pub use core_sync::MirrorConfig;

/// Initialize the workspace logging stack.
///
/// Thin wrapper over `core_runtime` so hosts that only depend on the facade
/// can bootstrap logging without wiring the runtime crate themselves. Call
/// once at startup, before constructing a [`MirrorService`]; a second call
/// in the same process is an error.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    core_runtime::logging::init_logging(config)?;
    Ok(())
}

/// Bridge dependencies the mirror core requires.
pub struct MirrorDependencies {
    pub http_client: Arc<dyn HttpClient>,
    pub auth_failure_hook: Option<Arc<dyn AuthFailureHook>>,
}

impl MirrorDependencies {
    /// Construct a dependency bundle from an explicit HTTP bridge handle.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            auth_failure_hook: None,
        }
    }

    /// Install a hook fired when the service rejects the credential, before
    /// the authentication error propagates out of a run.
    pub fn with_auth_failure_hook(mut self, hook: Arc<dyn AuthFailureHook>) -> Self {
        self.auth_failure_hook = Some(hook);
        self
    }

    /// Dependency bundle over the production desktop HTTP transport.
    #[cfg(feature = "desktop-shims")]
    pub fn desktop_defaults() -> Self {
        Self::new(Arc::new(bridge_desktop::ReqwestHttpClient::new()))
    }
}

/// Primary façade exposed to host applications.
pub struct MirrorService {
    coordinator: MirrorCoordinator,
}

impl MirrorService {
    /// Create a new service from the provided dependencies.
    ///
    /// `access_token` is an OAuth 2.0 bearer token with the library-read and
    /// playlist-modify scopes; token acquisition and refresh are the host's
    /// concern.
    pub fn new(
        deps: MirrorDependencies,
        access_token: impl Into<String>,
        config: MirrorConfig,
    ) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(CoreError::Config(
                "access token must not be empty".to_string(),
            ));
        }

        let mut connector = SpotifyConnector::new(deps.http_client, access_token);
        if let Some(hook) = deps.auth_failure_hook {
            connector = connector.with_auth_failure_hook(hook);
        }

        info!(destination = %config.destination_name, "Mirror service ready");

        Ok(Self {
            coordinator: MirrorCoordinator::new(config, Arc::new(connector)),
        })
    }

    /// Run one full liked-mirror pass.
    ///
    /// Safe to call repeatedly; every run fully overwrites the destination.
    pub async fn sync_liked(&self) -> Result<MirrorSummary> {
        Ok(self.coordinator.sync().await?)
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// ```rust,ignore
/// use core_service::{with_desktop_defaults, MirrorConfig};
///
/// let service = with_desktop_defaults(access_token, MirrorConfig::default())?;
/// let summary = service.sync_liked().await?;
/// ```
#[cfg(feature = "desktop-shims")]
pub fn with_desktop_defaults(
    access_token: impl Into<String>,
    config: MirrorConfig,
) -> Result<MirrorService> {
    MirrorService::new(MirrorDependencies::desktop_defaults(), access_token, config)
}
