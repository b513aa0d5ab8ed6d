//! Request context carrying the authenticated requester.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current request.
///
/// Built by the HTTP layer from the pre-validated requester identifier and
/// passed into service methods so that every operation knows *who* is
/// acting. The services never inspect raw headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The requesting user's ID.
    pub user_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            request_time: Utc::now(),
        }
    }
}
