// crates/social-api-core/src/model/post.rs
// ============================================================================
// Module: Post Records
// Description: Post resource and its create/update payloads.
// Purpose: Typed post bodies with construction-time validation.
// Dependencies: serde, serde_json
// ============================================================================

//! Post records and payloads.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use super::FieldSet;
use super::Resource;
use super::ResourceKind;
use super::ResourceList;
use super::random_suffix;
use super::validate;
use crate::error::ModelError;
use crate::schema;

/// Author used by generated post payloads; the service seeds user 1.
pub const DEFAULT_POST_AUTHOR_ID: i64 = 1;

// ============================================================================
// SECTION: Resource
// ============================================================================

/// A post as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Body text; may be empty.
    pub content: String,
    /// Identifier of the authoring user.
    pub user_id: i64,
}

/// Ordered post collection.
pub type PostList = ResourceList<Post>;

impl FieldSet for Post {
    fn identifier(&self) -> Option<i64> {
        Some(self.id)
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        post_fields(&self.title, &self.content, self.user_id)
    }
}

impl Resource for Post {
    type Create = PostCreate;
    type Update = PostUpdate;

    const KIND: ResourceKind = ResourceKind::Post;

    fn id(&self) -> i64 {
        self.id
    }

    fn generated_create() -> PostCreate {
        PostCreate::generated_for(DEFAULT_POST_AUTHOR_ID)
    }

    fn item_schema() -> Value {
        schema::post_schema()
    }

    fn list_schema() -> Value {
        schema::post_list_schema()
    }
}

// ============================================================================
// SECTION: Payloads
// ============================================================================

/// Wire shape shared by the post payloads before validation.
#[derive(Deserialize)]
struct PostFields {
    /// Raw title.
    title: String,
    /// Raw content.
    content: String,
    /// Raw author reference.
    user_id: i64,
}

/// Payload for `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostFields")]
pub struct PostCreate {
    /// Validated title.
    title: String,
    /// Content, empty allowed.
    content: String,
    /// Author reference.
    user_id: i64,
}

impl PostCreate {
    /// Builds a validated create payload.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] when the title is empty or the
    /// author id is not positive.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: i64,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        validate_post(&title, user_id)?;
        Ok(Self {
            title,
            content: content.into(),
            user_id,
        })
    }

    /// Builds a payload with a random numeric suffix for the given author.
    #[must_use]
    pub fn generated_for(user_id: i64) -> Self {
        let suffix = random_suffix();
        Self {
            title: format!("post_{suffix}"),
            content: format!("generated content {suffix}"),
            user_id,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author reference.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }
}

impl TryFrom<PostFields> for PostCreate {
    type Error = ModelError;

    fn try_from(raw: PostFields) -> Result<Self, Self::Error> {
        Self::new(raw.title, raw.content, raw.user_id)
    }
}

impl FieldSet for PostCreate {
    fn identifier(&self) -> Option<i64> {
        None
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        post_fields(&self.title, &self.content, self.user_id)
    }
}

/// Payload for `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostFields")]
pub struct PostUpdate {
    /// Validated title.
    title: String,
    /// Content, empty allowed.
    content: String,
    /// Author reference.
    user_id: i64,
}

impl PostUpdate {
    /// Builds a validated update payload.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] under the same rules as
    /// [`PostCreate::new`].
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: i64,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        validate_post(&title, user_id)?;
        Ok(Self {
            title,
            content: content.into(),
            user_id,
        })
    }

    /// Builds a payload with a random numeric suffix for the given author.
    #[must_use]
    pub fn generated_for(user_id: i64) -> Self {
        let suffix = random_suffix();
        Self {
            title: format!("updated_post_{suffix}"),
            content: format!("updated content {suffix}"),
            user_id,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author reference.
    #[must_use]
    pub const fn user_id(&self) -> i64 {
        self.user_id
    }
}

impl TryFrom<PostFields> for PostUpdate {
    type Error = ModelError;

    fn try_from(raw: PostFields) -> Result<Self, Self::Error> {
        Self::new(raw.title, raw.content, raw.user_id)
    }
}

impl FieldSet for PostUpdate {
    fn identifier(&self) -> Option<i64> {
        None
    }

    fn fields(&self) -> Vec<(&'static str, Value)> {
        post_fields(&self.title, &self.content, self.user_id)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Applies the post payload rules shared by create and update.
fn validate_post(title: &str, user_id: i64) -> Result<(), ModelError> {
    validate::non_empty("title", title, None)?;
    validate::positive_id("user_id", user_id)
}

/// Lists the comparable post fields in wire order.
fn post_fields(title: &str, content: &str, user_id: i64) -> Vec<(&'static str, Value)> {
    vec![("title", json!(title)), ("content", json!(content)), ("user_id", json!(user_id))]
}
