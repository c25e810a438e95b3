//! Business logic services.
//!
//! # Services
//!
//! - `assistant` - Gemini-backed Master Butcher assistant
//! - `auth` - Admin registration, login, and the approval workflow
//! - `cart` - Session basket operations
//! - `checkout` - WhatsApp order handoff

pub mod assistant;
pub mod auth;
pub mod cart;
pub mod checkout;

pub use assistant::AssistantService;
pub use auth::{AuthError, AuthService};
