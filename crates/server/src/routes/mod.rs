//! HTTP route handlers.
//!
//! Route structure:
//!
//! ```text
//! GET  /                               - Landing payload (settings, featured cuts, highlights)
//! GET  /products                       - Catalog with category/search filters
//! GET  /blog                           - All posts, newest first
//! GET  /blog/{id}                      - Single post
//! GET  /testimonials                   - Customer testimonials
//! GET  /contact                        - Contact details and map embed
//!
//! GET    /cart                         - Current basket
//! POST   /cart/items                   - Add a product to the basket
//! POST   /cart/items/{id}/quantity     - Adjust a line quantity
//! DELETE /cart/items/{id}              - Remove a line
//! GET    /cart/checkout                - Redirect to the WhatsApp order link
//!
//! POST /assistant/ask                  - Ask the virtual butcher
//!
//! POST /admin/auth/register            - Register an admin account
//! POST /admin/auth/login               - Log in
//! POST /admin/auth/logout              - Log out
//! GET  /admin/auth/session             - Current admin session
//!
//! GET    /admin/products               - List products
//! POST   /admin/products               - Create a product
//! PUT    /admin/products/{id}          - Update a product
//! DELETE /admin/products/{id}          - Delete a product
//! GET    /admin/blog                   - List posts
//! POST   /admin/blog                   - Publish a post
//! PUT    /admin/blog/{id}              - Update a post
//! DELETE /admin/blog/{id}              - Delete a post
//! GET    /admin/settings               - Read website settings (primary only)
//! PUT    /admin/settings               - Replace website settings (primary only)
//! GET    /admin/users                  - List admin accounts (primary only)
//! POST   /admin/users/{id}/approve     - Approve a pending account (primary only)
//! DELETE /admin/users/{id}             - Remove an account (primary only)
//! POST   /admin/images                 - Upload an image, returns a data URL
//! ```

pub mod admin;
mod assistant;
mod blog;
mod cart;
mod contact;
mod home;
mod products;
mod testimonials;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Public storefront routes.
pub fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/products", get(products::list_products))
        .route("/blog", get(blog::list_posts))
        .route("/blog/{id}", get(blog::show_post))
        .route("/testimonials", get(testimonials::list_testimonials))
        .route("/contact", get(contact::contact))
}

/// Session-backed basket routes.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::view_cart))
        .route("/items", post(cart::add_item))
        .route("/items/{id}/quantity", post(cart::adjust_quantity))
        .route("/items/{id}", delete(cart::remove_item))
        .route("/checkout", get(cart::checkout))
}

/// Virtual butcher routes.
pub fn assistant_routes() -> Router<AppState> {
    Router::new().route("/ask", post(assistant::ask))
}

/// Build the complete application router.
pub fn routes() -> Router<AppState> {
    storefront_routes()
        .nest("/cart", cart_routes())
        .nest("/assistant", assistant_routes())
        .nest("/admin", admin::admin_routes())
}
