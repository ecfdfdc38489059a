use super::client::MediaClient;
use crate::error::ChatError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How often to re-probe for the media client while it is loading.
pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_millis(100);

/// How long to keep probing before giving up.
pub const DEFAULT_PROBE_DEADLINE: Duration = Duration::from_secs(10);

/// Acquire a handle to the media client capability.
///
/// The client library may still be loading when a session starts, so the
/// probe is retried on `interval` until it yields a client or `deadline`
/// elapses. The probe is tried once immediately.
pub async fn resolve_media_client<F>(
    mut probe: F,
    interval: Duration,
    deadline: Duration,
) -> Result<Arc<dyn MediaClient>, ChatError>
where
    F: FnMut() -> Option<Arc<dyn MediaClient>>,
{
    let started = Instant::now();

    loop {
        if let Some(client) = probe() {
            info!("Media client available after {:?}", started.elapsed());
            return Ok(client);
        }

        if started.elapsed() >= deadline {
            warn!("Media client failed to load within {:?}", deadline);
            return Err(ChatError::MediaClientUnavailable(deadline));
        }

        tokio::time::sleep(interval).await;
    }
}
