// system-tests/tests/helpers/backend.rs
// ============================================================================
// Module: Backend Selection
// Description: Shared clients for the configured backend.
// Purpose: One client per suite binary; fresh fakes for scripted scenarios.
// Dependencies: social-api-client, system-tests
// ============================================================================

//! Backend selection and shared suite clients.

use std::sync::Arc;
use std::sync::OnceLock;

use social_api_client::FakeSocialService;
use social_api_client::HttpApi;
use social_api_client::HttpClient;
use social_api_client::PostsClient;
use social_api_client::UsersClient;
use system_tests::config::Backend;
use system_tests::config::SystemTestConfig;
use tracing::info;

use super::service_stub::ServiceStubHandle;
use super::service_stub::spawn_service_stub;

/// Backend handle shared by every test in a binary.
pub type SharedApi = Arc<dyn HttpApi>;

/// Clients bound to the configured backend.
pub struct SuiteClients {
    /// Raw verb-level access.
    pub api: SharedApi,
    /// Users resource client.
    pub users: UsersClient<SharedApi>,
    /// Posts resource client.
    pub posts: PostsClient<SharedApi>,
    /// Selected backend.
    pub backend: Backend,
    /// Keeps the loopback server alive for the stub backend.
    _stub: Option<ServiceStubHandle>,
}

/// Returns the suite clients, building them on first use.
pub fn suite() -> Result<&'static SuiteClients, String> {
    static SUITE: OnceLock<Result<SuiteClients, String>> = OnceLock::new();
    SUITE.get_or_init(build_suite).as_ref().map_err(Clone::clone)
}

/// Returns clients over a freshly seeded in-memory service.
///
/// Scripted scenarios (deleting seeded records, rejected payloads) run here
/// so they never touch a shared environment.
pub fn scripted() -> (Arc<FakeSocialService>, SharedApi) {
    let service = Arc::new(FakeSocialService::new());
    let api: SharedApi = service.clone();
    (service, api)
}

fn build_suite() -> Result<SuiteClients, String> {
    system_tests::logging::init();
    let config = SystemTestConfig::load()?;
    let (api, stub): (SharedApi, Option<ServiceStubHandle>) = match config.backend {
        Backend::Fake => (Arc::new(FakeSocialService::new()), None),
        Backend::Stub => {
            let stub = spawn_service_stub(Arc::new(FakeSocialService::new()))?;
            let client = HttpClient::with_timeout(stub.base_url(), config.authentication()?, config.timeout)
                .map_err(|err| err.to_string())?;
            (Arc::new(client), Some(stub))
        }
        Backend::Live => {
            let client =
                HttpClient::with_timeout(config.base_url(), config.authentication()?, config.timeout)
                    .map_err(|err| err.to_string())?;
            (Arc::new(client), None)
        }
    };
    info!(backend = %config.backend, base_url = config.base_url(), "suite backend ready");
    Ok(SuiteClients {
        users: UsersClient::new(Arc::clone(&api)),
        posts: PostsClient::new(Arc::clone(&api)),
        api,
        backend: config.backend,
        _stub: stub,
    })
}
