//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reporthub_auth::jwt::Claims;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// The user's display name.
    pub name: String,
    /// Admin flag at the time the JWT was issued.
    pub is_admin: bool,
    /// Super-admin flag at the time the JWT was issued.
    pub is_super_admin: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Returns whether the current user has moderation privileges.
    pub fn is_moderator(&self) -> bool {
        self.is_admin || self.is_super_admin
    }

    /// Returns whether the current user may act on a resource owned by
    /// `owner_id` (the owner themselves, or any moderator).
    pub fn can_act_on(&self, owner_id: i64) -> bool {
        self.user_id == owner_id || self.is_moderator()
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
            is_admin: claims.is_admin,
            is_super_admin: claims.is_super_admin,
            request_time: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(user_id: i64, is_admin: bool, is_super_admin: bool) -> RequestContext {
        RequestContext {
            user_id,
            email: "u@example.com".to_string(),
            name: "U".to_string(),
            is_admin,
            is_super_admin,
            request_time: Utc::now(),
        }
    }

    #[test]
    fn owner_and_moderators_can_act() {
        assert!(ctx(1, false, false).can_act_on(1));
        assert!(!ctx(1, false, false).can_act_on(2));
        assert!(ctx(1, true, false).can_act_on(2));
        assert!(ctx(1, false, true).can_act_on(2));
    }
}
