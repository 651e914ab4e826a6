use crate::features::auth::model::AuthenticatedUser;
use crate::shared::constants::ROLE_STAFF;

use axum::{extract::Request, middleware::Next, Router};

pub fn customer_user(sub: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: format!("account-{}", sub),
        sub: sub.to_string(),
        session_uid: None,
        roles: vec!["customer".to_string()],
    }
}

pub fn staff_user(sub: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: format!("account-{}", sub),
        sub: sub.to_string(),
        session_uid: Some("test-session-uid".to_string()),
        roles: vec![ROLE_STAFF.to_string()],
    }
}

/// Wrap a router so every request arrives as `user`, skipping JWT validation.
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}
