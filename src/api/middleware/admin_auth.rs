//! Shared-secret authentication for admin routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState, utils::request_meta::header_str};

/// Header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Rejects requests that do not present the admin password.
///
/// # Header Format
///
/// ```text
/// x-admin-password: <secret>
/// ```
///
/// Both the presented and the configured value are trimmed and have `$+`
/// collapsed to `$` before an exact comparison, see
/// [`crate::application::services::auth_service::normalize_secret`].
///
/// # Errors
///
/// Returns `401 Unauthorized` with `{"error": "Unauthorized"}` if the header
/// is missing or does not match. The wrapped handler is not called.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::admin_auth;
///
/// let admin = Router::new()
///     .route("/urls", get(list_urls_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = header_str(req.headers(), ADMIN_PASSWORD_HEADER);

    st.auth_service.verify(presented)?;

    Ok(next.run(req).await)
}
