//! Login, logout, and route verification flows.
//!
//! The HTTP client never persists credentials on its own; that happens
//! here, one layer up. Logout is best-effort against the server but always
//! clears local state: the unified [`logout`] swallows a failed server
//! call, while the type-specific variants re-throw it after clearing.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::net::client::{ApiClient, RequestDescriptor};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, Envelope, LoginResponse, RouteContext};
use crate::session::token_store::UserType;

/// Raw login call against `/{admin|staff}/login`. Nothing is persisted;
/// callers that want a session go through [`sign_in`].
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    user_type: UserType,
    credentials: &Credentials,
) -> Result<LoginResponse, ApiError> {
    api.call(
        RequestDescriptor::post(format!("/{}/login", user_type.as_str()))
            .with_json(credentials)?,
    )
    .await
}

/// Log in and persist the resulting credential under `user_type`'s slot.
pub async fn sign_in<T: Transport>(
    api: &ApiClient<T>,
    user_type: UserType,
    credentials: &Credentials,
) -> Result<LoginResponse, ApiError> {
    let response = login(api, user_type, credentials).await?;
    api.store().store(user_type, &response.token, &response.user);
    Ok(response)
}

async fn server_logout<T: Transport>(
    api: &ApiClient<T>,
    user_type: UserType,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    api.call(
        RequestDescriptor::post(format!("/{}/logout", user_type.as_str()))
            .authenticated()
            .for_user(user_type),
    )
    .await
}

/// Unified logout: tell the server, then drop the local credential no
/// matter what the server said. Never fails.
pub async fn logout<T: Transport>(api: &ApiClient<T>, user_type: UserType) {
    if let Err(err) = server_logout(api, user_type).await {
        log::warn!("server logout for {user_type} failed, clearing locally anyway: {err}");
    }
    api.store().clear(user_type);
}

/// Admin logout. Local state is cleared regardless, but a failed server
/// call is re-thrown, so callers must handle an error even though the
/// session is already gone.
pub async fn logout_admin<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    let result = server_logout(api, UserType::Admin).await;
    api.store().clear(UserType::Admin);
    result
}

/// Staff logout; same contract as [`logout_admin`].
pub async fn logout_staff<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    let result = server_logout(api, UserType::Staff).await;
    api.store().clear(UserType::Staff);
    result
}

/// Ask the server whether the current session may enter `route`. An error
/// of any kind, including the 401 path that already cleared the
/// credential, means the route is denied.
pub async fn verify_auth<T: Transport>(
    api: &ApiClient<T>,
    route: &RouteContext,
) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = api
        .call(
            RequestDescriptor::post("/auth/verify")
                .with_json(route)?
                .authenticated(),
        )
        .await?;
    Ok(())
}
