//! Domain entities shared between the server and tests.

pub mod admin;
pub mod blog;
pub mod cart;
pub mod product;
pub mod settings;
pub mod testimonial;

pub use admin::AdminAccount;
pub use blog::BlogPost;
pub use cart::CartItem;
pub use product::Product;
pub use settings::{BusinessHours, WebsiteSettings};
pub use testimonial::Testimonial;
