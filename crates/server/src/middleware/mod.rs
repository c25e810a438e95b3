//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Auth extractors (admin gating per route)

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, RequirePrimaryAdmin, clear_current_admin, set_current_admin};
pub use session::create_session_layer;
