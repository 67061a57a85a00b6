use campusconnect_shared::user::Role;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{Profile, Query};

/// Authenticated identity handed over by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Identity context for one request: who is calling and what they may do.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub principal: Principal,
    pub role: Role,
    pub profile: Option<Profile>,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.principal.id
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> campusconnect_shared::Result<()> {
        if !self.is_admin() {
            return Err(campusconnect_shared::Error::Forbidden);
        }

        Ok(())
    }

    /// Email to attach to a registration: the profile's, else the principal's.
    pub fn email(&self) -> Option<String> {
        self.profile
            .as_ref()
            .and_then(|p| p.email.to_owned())
            .or_else(|| self.principal.email.to_owned())
    }
}

pub fn require_session(session: Option<Session>) -> campusconnect_shared::Result<Session> {
    session.ok_or(campusconnect_shared::Error::Unauthenticated)
}

#[derive(Clone)]
pub struct Resolver {
    query: Query,
    seed_admin_email: Option<String>,
}

impl Resolver {
    pub fn new(pool: SqlitePool, seed_admin_email: Option<String>) -> Self {
        Self {
            query: Query(pool),
            seed_admin_email,
        }
    }

    /// Derives role and profile for a principal.
    ///
    /// Never fails: a profile lookup error degrades to role `user` without a
    /// profile. The seed admin, when configured, is resolved without touching
    /// the profile store.
    pub async fn resolve(&self, principal: Option<Principal>) -> Option<Session> {
        let principal = principal?;

        if let Some(session) = self.seed_admin(&principal) {
            return Some(session);
        }

        let (role, profile) = match self.query.find(&principal.id).await {
            Ok(Some(profile)) => (profile.role, Some(profile)),
            Ok(None) => (Role::User, None),
            Err(e) => {
                tracing::error!(user_id = %principal.id, "failed to fetch user role: {e}");
                (Role::User, None)
            }
        };

        Some(Session {
            principal,
            role,
            profile,
        })
    }

    fn seed_admin(&self, principal: &Principal) -> Option<Session> {
        let seed = self.seed_admin_email.as_deref()?;
        if principal.email.as_deref() != Some(seed) {
            return None;
        }

        let profile = Profile {
            id: principal.id.to_owned(),
            name: Some(
                principal
                    .name
                    .to_owned()
                    .unwrap_or_else(|| "Admin".to_owned()),
            ),
            student_id: Some("ADMIN".to_owned()),
            email: principal.email.to_owned(),
            role: Role::Admin,
            created_at: time::OffsetDateTime::now_utc().unix_timestamp(),
        };

        Some(Session {
            principal: principal.to_owned(),
            role: Role::Admin,
            profile: Some(profile),
        })
    }
}
