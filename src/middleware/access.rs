use axum::{middleware::Next, response::Response};
use zino::{Request, Result, prelude::*};

/// Initializes the user session for the admin console.
///
/// Requests without a valid bearer token are rejected before they reach
/// any admin route.
pub(crate) async fn init_user_session(mut req: Request, next: Next) -> Result<Response> {
    match req.parse_jwt_claims(JwtClaims::shared_key()) {
        Ok(claims) => {
            if let Ok(session) = UserSession::<Uuid>::try_from_jwt_claims(claims) {
                req.set_data(session);
            } else {
                let message = "401 Unauthorized: invalid JWT claims";
                return Err(Rejection::with_message(message).context(&req).into());
            }
        }
        Err(rejection) => return Err(rejection.into()),
    }
    Ok(next.run(req.into()).await)
}
