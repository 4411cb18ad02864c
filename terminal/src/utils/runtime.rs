/// Global Tokio runtime for quote requests and debounce timers
///
/// eframe drives the UI on the main thread without an async executor, but
/// reqwest and the debounce timers need a tokio context. `main` enters this
/// runtime before opening the window so `tokio::spawn` works from UI code;
/// results come back over the app's event channel.
///
/// Usage:
/// ```rust,ignore
/// use swap_terminal::utils::runtime::TOKIO_RT;
///
/// let _guard = TOKIO_RT.enter();
/// tokio::spawn(async move {
///     let quote = client.fetch_quote(network, &request).await;
///     let _ = event_tx.send(AppEvent::QuoteResult { side, ticket, result: quote }).await;
/// });
/// ```

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    match Builder::new_multi_thread().enable_all().thread_name("swap-worker").build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Tokio runtime");
            std::process::abort();
        }
    }
});
