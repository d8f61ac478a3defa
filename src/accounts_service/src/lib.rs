pub mod shutdown;
pub mod telemetry;

use std::{future::Future, time::Duration};

use accounts_application::AccountService;
use accounts_axum::routes::{
    create_account, delete_account, get_account, get_account_by_credentials, update_account,
};
use accounts_core::AccountStore;
use axum::{Router, routing::get};
use http::StatusCode;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

// hyper rejects HTTP/1 read buffers below this size.
const MIN_READ_BUFFER: usize = 8192;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP front of the account service.
pub struct AccountsService {
    router: Router,
}

impl AccountsService {
    /// Mounts the account routes over `store`.
    pub fn new<S>(store: S) -> Self
    where
        S: AccountStore + 'static,
    {
        let service = AccountService::new(store);

        let router = Router::new()
            .route(
                "/api/users",
                get(get_account_by_credentials::<S>).post(create_account::<S>),
            )
            .route(
                "/api/users/{uuid}",
                get(get_account::<S>)
                    .patch(update_account::<S>)
                    .delete(delete_account::<S>),
            )
            .with_state(service);

        Self { router }
    }

    /// Bounds reading the request body by `read` and producing the response
    /// by `write`; the latter answers 408 when exceeded.
    pub fn with_timeouts(mut self, read: Duration, write: Duration) -> Self {
        self.router = self
            .router
            .layer(RequestBodyTimeoutLayer::new(read))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                write,
            ));
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// The router with request tracing, for mounting into another app.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serves on `listener` until `signal` completes, then drains
    /// in-flight requests for at most [`shutdown::GRACE_PERIOD`].
    pub async fn run<F>(
        self,
        listener: TcpListener,
        max_header_bytes: usize,
        signal: F,
    ) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.into_router();
        let handle = axum_server::Handle::new();

        tracing::info!("Accounts service listening on {}", listener.local_addr()?);

        let drain = handle.clone();
        tokio::spawn(async move {
            signal.await;
            tracing::info!("draining connections");
            drain.graceful_shutdown(Some(shutdown::GRACE_PERIOD));
        });

        let mut server =
            axum_server::Server::<std::net::SocketAddr>::from_listener(listener).handle(handle);
        server
            .http_builder()
            .http1()
            .max_buf_size(max_header_bytes.max(MIN_READ_BUFFER));

        server.serve(router.into_make_service()).await?;

        tracing::info!("Accounts service stopped");
        Ok(())
    }
}
