//! Built-in site content.
//!
//! Fresh installs boot with these values until the primary admin edits them.
//! Testimonials and the map embed are static content with no editing surface.

use jumbo_meats_core::{BusinessHours, Testimonial, WebsiteSettings};
use jumbo_meats_core::types::ImageRef;

/// Greeting shown by the assistant widget before the first exchange.
pub const ASSISTANT_GREETING: &str = "Hello! I am Jumbo, your virtual Master Butcher. Ask me about our fresh cuts, current events, or cooking tips!";

/// Read-only map embed for the contact page, keyed to the shop's address.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3732.483492705572!2d28.5833333!3d-20.1500000!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x1eb5540000000000%3A0x0!2zNjUgSm9zaWFoIFRvbmdvZ2FyYSBSZCwgQnVsYXdheW8sIFppbWJhYndl!5e0!3m2!1sen!2szw!4v1700000000000!5m2!1sen!2szw";

const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1529692236671-f1f6cf9583b5?auto=format&fit=crop&q=80&w=2000";

/// Settings used until `jumbo_settings.json` exists.
///
/// Phone, WhatsApp, and email ship as bracketed placeholders the owner
/// replaces through the admin settings page.
#[must_use]
pub fn default_settings() -> WebsiteSettings {
    WebsiteSettings {
        name: "Jumbo Meat Suppliers".to_owned(),
        tagline: "Quality Fresh Meat in Bulawayo".to_owned(),
        address: "65 Josiah Tongogara Rd, Bulawayo, Zimbabwe".to_owned(),
        phone: "[Company Phone Number]".to_owned(),
        whatsapp: "[Company WhatsApp Number]".to_owned(),
        email: "[Company Email Address]".to_owned(),
        hours: BusinessHours {
            weekday: "08:00 AM - 05:30 PM".to_owned(),
            saturday: "08:00 AM - 01:00 PM".to_owned(),
            sunday: "Closed".to_owned(),
        },
        hero_title: "Premium Quality Meat You Can Trust.".to_owned(),
        hero_subtitle: "Serving Bulawayo with the freshest cuts, traditional boerewors, and wholesale supplies. Freshly sourced and expertly butchered daily.".to_owned(),
        // The constant is a valid https URL; the blank fallback keeps this total.
        hero_image: ImageRef::parse(DEFAULT_HERO_IMAGE)
            .unwrap_or_else(|_| ImageRef::embedded("image/gif", "")),
    }
}

/// The customer quotes shown on the homepage and about page.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Ndlovu".to_owned(),
            role: "Local Resident".to_owned(),
            content: "The best T-bone in Bulawayo! I won't buy my meat anywhere else. Always fresh and the service is excellent.".to_owned(),
            avatar: "https://i.pravatar.cc/150?u=sarah".to_owned(),
        },
        Testimonial {
            name: "James Moyo".to_owned(),
            role: "Braai Enthusiast".to_owned(),
            content: "Their Boerewors is legendary. Perfectly spiced and always juicy. Jumbo Meats is my go-to for every weekend braai.".to_owned(),
            avatar: "https://i.pravatar.cc/150?u=james".to_owned(),
        },
        Testimonial {
            name: "Tendai G.".to_owned(),
            role: "Restaurant Owner".to_owned(),
            content: "We've been sourcing our wholesale beef from Jumbo for 5 years. Consistency and quality are top-notch.".to_owned(),
            avatar: "https://i.pravatar.cc/150?u=tendai".to_owned(),
        },
    ]
}
