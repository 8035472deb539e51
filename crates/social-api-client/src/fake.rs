// crates/social-api-client/src/fake.rs
// ============================================================================
// Module: In-Memory Fake Service
// Description: Deterministic stand-in for the social media REST service.
// Purpose: Serve Users and Posts routes from memory behind `HttpApi`.
// Dependencies: reqwest (status/method types), serde_json, social-api-core
// ============================================================================

//! ## Overview
//! [`FakeSocialService`] answers the same routes as the real service with
//! the same status codes and message bodies, so suites can run offline by
//! swapping the transport instead of patching client methods.
//! Invariants:
//! - Identifiers are assigned monotonically and never reused.
//! - A post always references a user that existed when it was written.
//! - Payloads are validated by the typed model; invalid bodies never mutate
//!   state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;

use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use social_api_core::ApiRoute;
use social_api_core::Post;
use social_api_core::Resource;
use social_api_core::User;

use crate::error::ClientError;
use crate::http::HttpApi;
use crate::response::RawResponse;
use crate::transcript::Transcript;
use crate::transcript::TranscriptEntry;

/// Number of users (and posts) present in a freshly seeded service.
pub const SEEDED_RECORDS: i64 = 10;

/// URL prefix reported on fake responses.
const FAKE_ORIGIN: &str = "memory://social-api";

// ============================================================================
// SECTION: State
// ============================================================================

/// Rows of one resource collection.
#[derive(Debug, Clone)]
struct Table<R> {
    /// Rows keyed by id, iterated in id order.
    rows: BTreeMap<i64, R>,
    /// Next id to assign.
    next_id: i64,
}

impl<R: Resource> Table<R> {
    /// Builds a table whose next id follows the highest seeded id.
    fn seeded(rows: impl IntoIterator<Item = R>) -> Self {
        let rows: BTreeMap<i64, R> = rows.into_iter().map(|row| (row.id(), row)).collect();
        let next_id = rows.keys().next_back().copied().unwrap_or(0).saturating_add(1);
        Self {
            rows,
            next_id,
        }
    }

    /// Reserves the next id; ids are never reused.
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

/// Complete service state.
#[derive(Debug, Clone)]
struct ServiceState {
    /// User rows.
    users: Table<User>,
    /// Post rows.
    posts: Table<Post>,
}

// ============================================================================
// SECTION: Service
// ============================================================================

/// In-memory implementation of the social media service.
#[derive(Debug)]
pub struct FakeSocialService {
    /// Guarded service state.
    state: Mutex<ServiceState>,
    /// Recorded calls.
    transcript: Transcript,
}

impl FakeSocialService {
    /// Creates a service seeded with users and posts `1..=10`.
    #[must_use]
    pub fn new() -> Self {
        let users = (1..=SEEDED_RECORDS).map(|id| User {
            id,
            name: format!("mock_user_no_{id}"),
            email: format!("user_{id}@example.com"),
        });
        let posts = (1..=SEEDED_RECORDS).map(|id| Post {
            id,
            title: format!("Post {id}"),
            content: format!("Content of post {id}"),
            user_id: id,
        });
        Self::with_records(users, posts)
    }

    /// Creates a service with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// Creates a service holding exactly the given records.
    #[must_use]
    pub fn with_records(
        users: impl IntoIterator<Item = User>,
        posts: impl IntoIterator<Item = Post>,
    ) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                users: Table::seeded(users),
                posts: Table::seeded(posts),
            }),
            transcript: Transcript::new(),
        }
    }

    /// Returns the stored users in id order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state
            .lock()
            .map_or_else(|_| Vec::new(), |state| state.users.rows.values().cloned().collect())
    }

    /// Returns the stored posts in id order.
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.state
            .lock()
            .map_or_else(|_| Vec::new(), |state| state.posts.rows.values().cloned().collect())
    }

    /// Handles one request and returns the response the service would send.
    #[must_use]
    pub fn handle(&self, method: &Method, path: &str, body: Option<&Value>) -> RawResponse {
        let url = format!("{FAKE_ORIGIN}{path}");
        let (status, payload) = self.dispatch(method, path, body);
        RawResponse::new(method.clone(), url, status, payload.to_string())
    }

    /// Routes one request to its collection.
    fn dispatch(&self, method: &Method, path: &str, body: Option<&Value>) -> (StatusCode, Value) {
        let Some((route, segment)) = ApiRoute::match_path(path) else {
            return error(StatusCode::NOT_FOUND, "Not found");
        };
        let Ok(mut state) = self.state.lock() else {
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Service state unavailable");
        };
        let ServiceState {
            users,
            posts,
        } = &mut *state;
        match route {
            ApiRoute::Users => route_table(users, method, segment, body, |_| true),
            ApiRoute::Posts => {
                route_table(posts, method, segment, body, |post| users.rows.contains_key(&post.user_id))
            }
            ApiRoute::Auth => error(StatusCode::NOT_FOUND, "Not found"),
        }
    }
}

impl Default for FakeSocialService {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpApi for FakeSocialService {
    fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<RawResponse, ClientError> {
        let path = if path.starts_with('/') { path.to_string() } else { format!("/{path}") };
        let outcome = Ok(self.handle(&method, &path, body));
        self.transcript.record(method.as_str(), &path, body, &outcome);
        outcome
    }

    fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.snapshot()
    }
}

// ============================================================================
// SECTION: Routing
// ============================================================================

/// Applies one request to a collection.
///
/// `references_exist` checks cross-collection references of a record about
/// to be written.
fn route_table<R: Resource>(
    table: &mut Table<R>,
    method: &Method,
    segment: Option<&str>,
    body: Option<&Value>,
    references_exist: impl Fn(&R) -> bool,
) -> (StatusCode, Value) {
    let title = R::KIND.title();
    match (method.as_str(), segment) {
        ("GET", None) => {
            let rows: Vec<&R> = table.rows.values().collect();
            (StatusCode::OK, json!(rows))
        }
        ("POST", None) => {
            let id = table.next_id;
            let record = body
                .and_then(|body| build_record::<R, R::Create>(id, body))
                .filter(|record| references_exist(record));
            match record {
                Some(record) => {
                    table.allocate_id();
                    let value = json!(record);
                    table.rows.insert(id, record);
                    (StatusCode::CREATED, value)
                }
                None => error(StatusCode::BAD_REQUEST, &format!("{title} not created")),
            }
        }
        ("GET", Some(segment)) => match lookup(table, segment) {
            Some(id) => (StatusCode::OK, json!(table.rows.get(&id))),
            None => error(StatusCode::NOT_FOUND, &format!("{title} not found")),
        },
        ("PUT", Some(segment)) => {
            let Some(id) = lookup(table, segment) else {
                return error(StatusCode::NOT_FOUND, &format!("{title} not found"));
            };
            let record = body
                .and_then(|body| build_record::<R, R::Update>(id, body))
                .filter(|record| references_exist(record));
            match record {
                Some(record) => {
                    let value = json!(record);
                    table.rows.insert(id, record);
                    (StatusCode::OK, value)
                }
                None => error(StatusCode::BAD_REQUEST, &format!("{title} not updated")),
            }
        }
        ("DELETE", Some(segment)) => match lookup(table, segment) {
            Some(id) => {
                table.rows.remove(&id);
                (StatusCode::OK, json!({ "message": format!("{title} deleted") }))
            }
            None => error(StatusCode::NOT_FOUND, &format!("{title} not found")),
        },
        _ => error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
    }
}

/// Resolves an item segment to an existing id.
fn lookup<R>(table: &Table<R>, segment: &str) -> Option<i64> {
    let id = segment.parse::<i64>().ok()?;
    table.rows.contains_key(&id).then_some(id)
}

/// Validates a payload through its typed model and attaches the id.
fn build_record<R: Resource, P: DeserializeOwned + serde::Serialize>(id: i64, body: &Value) -> Option<R> {
    let payload = P::deserialize(body).ok()?;
    let Value::Object(fields) = serde_json::to_value(payload).ok()? else {
        return None;
    };
    let mut record = Map::with_capacity(fields.len() + 1);
    record.insert("id".to_string(), json!(id));
    record.extend(fields);
    R::from_json(&Value::Object(record)).ok()
}

/// Builds an `{"error": message}` response.
fn error(status: StatusCode, message: &str) -> (StatusCode, Value) {
    (status, json!({ "error": message }))
}
