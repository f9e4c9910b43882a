//! Gateway-injected identity header extractors.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Authenticated user identity injected by the gateway via
/// `x-platter-user-id` and `x-platter-user-role` headers.
///
/// Returns 401 if either header is absent or unparsable. Role enforcement
/// (403) is done by handlers after extraction. Role 2 and above is admin.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.user_role >= 2
    }
}

/// The requesting user, possibly anonymous.
///
/// Read endpoints accept unauthenticated callers; viewer-dependent response
/// fields (`is_favorited`, `is_subscribed`, ...) are computed against
/// `user_id()` and come out false for anonymous viewers. This extractor
/// never rejects — missing or malformed headers yield `Anonymous`.
#[derive(Debug, Clone, Copy)]
pub enum Viewer {
    Known(Identity),
    Anonymous,
}

impl Viewer {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Viewer::Known(identity) => Some(identity.user_id),
            Viewer::Anonymous => None,
        }
    }
}

fn parse_identity(parts: &Parts) -> Option<Identity> {
    let user_id = parts
        .headers
        .get("x-platter-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<Uuid>().ok())?;
    let user_role = parts
        .headers
        .get("x-platter-user-role")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u8>().ok())?;
    Some(Identity { user_id, user_role })
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parse_identity(parts);
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let viewer = match parse_identity(parts) {
            Some(identity) => Viewer::Known(identity),
            None => Viewer::Anonymous,
        };
        async move { Ok(viewer) }
    }
}
