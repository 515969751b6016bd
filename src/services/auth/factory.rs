/// Factory: build the request `AuthGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::UserRepository;
use crate::services::auth::{AuthGate, JwtVerifier};

pub fn build_auth_gate(config: &Config, users: Arc<dyn UserRepository>) -> Arc<AuthGate> {
    let verifier = JwtVerifier::new(
        &config.jwt_secret,
        config.auth_issuer.as_deref(),
        config.access_token_leeway_seconds,
        users,
    );

    Arc::new(AuthGate::new(Arc::new(verifier)))
}
