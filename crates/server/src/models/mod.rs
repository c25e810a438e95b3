//! Server-side models.
//!
//! Domain entities live in `jumbo-meats-core`; this module only holds
//! types tied to the HTTP layer, such as session state.

pub mod session;

pub use session::CurrentAdmin;
pub use session::keys as session_keys;
