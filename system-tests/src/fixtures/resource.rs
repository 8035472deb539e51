// system-tests/src/fixtures/resource.rs
// ============================================================================
// Module: Resource Fixture
// Description: Create-then-delete lifecycle for a single test resource.
// Purpose: Keep tests independent against a shared service.
// Dependencies: social-api-client, social-api-core, thiserror, tracing
// ============================================================================

//! ## Overview
//! A [`ResourceFixture`] moves through
//! `uninitialized -> creating -> ready -> deleting -> deleted`.
//! Deletion runs on [`ResourceFixture::teardown`], [`ResourceFixture::finish`],
//! or on drop, including during unwinding. A 404 on delete is a clean
//! teardown. Failures are logged and, through `finish`, reported without
//! replacing the test's own result.

use std::fmt;

use social_api_client::ClientError;
use social_api_client::HttpApi;
use social_api_client::ResourceClient;
use social_api_client::StatusCode;
use social_api_core::Resource;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing::warn;

// ============================================================================
// SECTION: State
// ============================================================================

/// Lifecycle stage of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureState {
    /// Nothing requested yet.
    Uninitialized,
    /// Create request in flight.
    Creating,
    /// Resource exists and belongs to the test.
    Ready,
    /// Delete request in flight.
    Deleting,
    /// Terminal; the resource must not be referenced again.
    Deleted,
}

impl FixtureState {
    /// Returns the stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Uninitialized => Some(Self::Creating),
            Self::Creating => Some(Self::Ready),
            Self::Ready => Some(Self::Deleting),
            Self::Deleting => Some(Self::Deleted),
            Self::Deleted => None,
        }
    }

    /// Returns the stage name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Creating => "creating",
            Self::Ready => "ready",
            Self::Deleting => "deleting",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for FixtureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Fixture lifecycle failures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The resource could not be created; the test body must not run.
    #[error("fixture setup failed for {resource}: {source}")]
    Setup {
        /// Resource label.
        resource: &'static str,
        /// Underlying client failure.
        #[source]
        source: ClientError,
    },
    /// The resource could not be deleted after the test.
    #[error("fixture teardown failed for {resource} {id}: {message}")]
    Teardown {
        /// Resource label.
        resource: &'static str,
        /// Identifier of the leaked resource.
        id: i64,
        /// Status or transport failure description.
        message: String,
    },
}

// ============================================================================
// SECTION: Fixture
// ============================================================================

/// A resource owned by one test and deleted when the test ends.
pub struct ResourceFixture<'c, R: Resource, A: HttpApi> {
    /// Client used for both create and delete.
    client: &'c ResourceClient<R, A>,
    /// The created resource.
    resource: R,
    /// Current lifecycle stage.
    state: FixtureState,
}

impl<'c, R: Resource, A: HttpApi> ResourceFixture<'c, R, A> {
    /// Creates a resource from the generated default payload.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Setup`] when the create call fails or its
    /// response does not parse.
    pub fn create(client: &'c ResourceClient<R, A>) -> Result<Self, FixtureError> {
        Self::create_with(client, &R::generated_create())
    }

    /// Creates a resource from an explicit payload.
    ///
    /// # Errors
    ///
    /// See [`Self::create`].
    pub fn create_with(client: &'c ResourceClient<R, A>, payload: &R::Create) -> Result<Self, FixtureError> {
        let mut state = FixtureState::Uninitialized;
        advance(&mut state, R::KIND.label());
        let resource = client.create_parsed(payload).map_err(|source| FixtureError::Setup {
            resource: R::KIND.label(),
            source,
        })?;
        advance(&mut state, R::KIND.label());
        info!(kind = %R::KIND, id = resource.id(), "fixture created");
        Ok(Self {
            client,
            resource,
            state,
        })
    }

    /// Takes ownership of a resource the test created itself.
    #[must_use]
    pub const fn adopt(client: &'c ResourceClient<R, A>, resource: R) -> Self {
        Self {
            client,
            resource,
            state: FixtureState::Ready,
        }
    }

    /// Returns the resource handed to the test body.
    #[must_use]
    pub const fn resource(&self) -> &R {
        &self.resource
    }

    /// Returns the server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.resource.id()
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub const fn state(&self) -> FixtureState {
        self.state
    }

    /// Deletes the resource now.
    ///
    /// A 404 counts as a clean teardown: the test deleted the resource
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Teardown`] when the delete call fails or
    /// returns any other non-success status.
    pub fn teardown(mut self) -> Result<(), FixtureError> {
        self.release()
    }

    /// Deletes the resource at the end of a test body.
    ///
    /// A teardown failure is logged and handed back for reporting; it never
    /// becomes the test's own result.
    #[must_use = "teardown failures should be recorded with the test outcome"]
    pub fn finish(mut self) -> Option<FixtureError> {
        self.release().err()
    }

    /// Runs the delete step once; later calls are no-ops.
    fn release(&mut self) -> Result<(), FixtureError> {
        if self.state != FixtureState::Ready {
            return Ok(());
        }
        advance(&mut self.state, R::KIND.label());
        let id = self.resource.id();
        let outcome = match self.client.delete(id) {
            Ok(response) if response.status().is_success() || response.status() == StatusCode::NOT_FOUND => {
                info!(kind = %R::KIND, id, status = response.status().as_u16(), "fixture deleted");
                Ok(())
            }
            Ok(response) => Err(FixtureError::Teardown {
                resource: R::KIND.label(),
                id,
                message: format!("delete returned {}: {}", response.status(), response.text()),
            }),
            Err(err) => Err(FixtureError::Teardown {
                resource: R::KIND.label(),
                id,
                message: err.to_string(),
            }),
        };
        advance(&mut self.state, R::KIND.label());
        if let Err(err) = &outcome {
            warn!(kind = %R::KIND, id, error = %err, "fixture teardown failed");
        }
        outcome
    }
}

impl<R: Resource, A: HttpApi> Drop for ResourceFixture<'_, R, A> {
    fn drop(&mut self) {
        if self.state == FixtureState::Ready && std::thread::panicking() {
            debug!(kind = %R::KIND, id = self.resource.id(), "tearing down fixture during unwind");
        }
        let _ = self.release();
    }
}

impl<R: Resource, A: HttpApi> fmt::Debug for ResourceFixture<'_, R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFixture")
            .field("resource", &self.resource)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Moves a fixture to its next stage.
fn advance(state: &mut FixtureState, kind: &'static str) {
    if let Some(next) = state.next() {
        debug!(kind, from = %state, to = %next, "fixture state change");
        *state = next;
    }
}
