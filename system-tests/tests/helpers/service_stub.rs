// system-tests/tests/helpers/service_stub.rs
// ============================================================================
// Module: Service Stub
// Description: Loopback HTTP server backed by the in-memory social service.
// Purpose: Exercise the real HTTP client without a deployed service.
// Dependencies: axum, tokio, social-api-client
// ============================================================================

//! ## Overview
//! Loopback HTTP server backed by the in-memory service, so the network
//! client can be exercised without an external deployment.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::thread;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use serde_json::Value;
use serde_json::json;
use social_api_client::FakeSocialService;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

/// Handle for the stub service; shuts the server down on drop.
pub struct ServiceStubHandle {
    base_url: String,
    service: Arc<FakeSocialService>,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
}

impl ServiceStubHandle {
    /// Returns the base URL the stub listens on.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the service behind the stub.
    pub fn service(&self) -> &FakeSocialService {
        &self.service
    }
}

impl Drop for ServiceStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Serves `service` on an ephemeral loopback port.
pub fn spawn_service_stub(service: Arc<FakeSocialService>) -> Result<ServiceStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("service stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("service stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("service stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let app = Router::new().fallback(handle_request).with_state(Arc::clone(&service));
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
            return;
        };
        runtime.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(ServiceStubHandle {
        base_url,
        service,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

async fn handle_request(
    State(service): State<Arc<FakeSocialService>>,
    method: Method,
    uri: Uri,
    bytes: Bytes,
) -> Response {
    let body = if bytes.is_empty() {
        None
    } else {
        match serde_json::from_slice::<Value>(bytes.as_ref()) {
            Ok(body) => Some(body),
            Err(_) => {
                return (StatusCode::BAD_REQUEST, axum::Json(json!({"error": "Invalid JSON"})))
                    .into_response();
            }
        }
    };
    let response = service.handle(&method, uri.path(), body.as_ref());
    (
        response.status(),
        [(header::CONTENT_TYPE, "application/json")],
        response.text().to_string(),
    )
        .into_response()
}
