pub mod access_jwt;
pub mod authority;
pub mod bearer;
pub mod context;
pub mod factory;
pub mod gate;
pub mod verifier;

pub use access_jwt::JwtVerifier;
pub use context::{AuthCtx, Authenticated};
pub use factory::build_auth_gate;
pub use gate::AuthGate;
pub use verifier::AuthError;
