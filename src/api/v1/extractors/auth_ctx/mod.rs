/*!
 * Authentication context extractors
 *
 * Responsibility:
 * - Hand the AuthCtx stored by the bearer gate to handlers
 *
 * Public API:
 * - AuthCtxExtractor: any request that went through the gate
 * - CurrentUser: authenticated requests only
 */

mod core;

pub use self::core::{AuthCtxExtractor, CurrentUser};
