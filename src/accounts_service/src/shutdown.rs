use std::time::Duration;

/// How long in-flight requests may run once shutdown starts.
pub const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Completes on the first of SIGINT, SIGTERM, SIGABRT, SIGQUIT or SIGHUP.
#[cfg(unix)]
pub async fn signal() {
    use tokio::signal::unix::{SignalKind, signal};

    const SIGABRT: i32 = 6;

    let listen = |kind: SignalKind, name: &'static str| async move {
        match signal(kind) {
            Ok(mut stream) => {
                stream.recv().await;
                name
            }
            Err(e) => {
                tracing::warn!(error = %e, signal = name, "cannot listen for signal");
                std::future::pending::<&'static str>().await
            }
        }
    };

    let received = tokio::select! {
        name = listen(SignalKind::interrupt(), "SIGINT") => name,
        name = listen(SignalKind::terminate(), "SIGTERM") => name,
        name = listen(SignalKind::from_raw(SIGABRT), "SIGABRT") => name,
        name = listen(SignalKind::quit(), "SIGQUIT") => name,
        name = listen(SignalKind::hangup(), "SIGHUP") => name,
    };

    tracing::info!(signal = received, "shutdown signal received");
}

#[cfg(not(unix))]
pub async fn signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutdown signal received");
}
