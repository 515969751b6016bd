/*
 * Responsibility
 * - Request pipeline building blocks, composed in order by app.rs
 *   - auth: bearer gate (AuthCtx into request extensions)
 *   - cors: browser origin policy
 *   - http: request id / trace / body limit / timeout
 */
pub mod auth;
pub mod cors;
pub mod http;
