//! Butcher assistant orchestration.
//!
//! Builds the system prompt from live shop data, asks Gemini, and always
//! comes back with a customer-facing reply. Model failures are logged and
//! replaced by a fixed fallback; callers never see an error.

use askama::Template;
use tracing::{instrument, warn};

use jumbo_meats_core::{BlogPost, Product};

use crate::gemini::{GeminiClient, GeminiError, GenerateResponse};
use crate::store::SiteStore;

/// Reply used when the model returns no usable text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I'm having a bit of trouble connecting to the kitchen right now. Please try again or call us directly!";

/// Reply used when the request to the model fails outright.
pub const BUSY_FALLBACK: &str = "I'm currently busy helping another customer. Please feel free to call our shop for immediate help!";

/// System prompt template carrying the Master Butcher persona and the
/// live knowledge base.
#[derive(Template)]
#[template(path = "assistant/system_prompt.txt")]
struct SystemPromptTemplate<'a> {
    shop_name: &'a str,
    inventory: &'a str,
    news: &'a str,
}

/// Assistant service answering storefront questions.
pub struct AssistantService<'a> {
    store: &'a SiteStore,
    gemini: &'a GeminiClient,
}

impl<'a> AssistantService<'a> {
    /// Create a new assistant service.
    #[must_use]
    pub const fn new(store: &'a SiteStore, gemini: &'a GeminiClient) -> Self {
        Self { store, gemini }
    }

    /// Answer a customer question.
    ///
    /// Always returns displayable text. When the model call fails or
    /// produces nothing, the reply is one of the fixed fallbacks.
    #[instrument(skip(self, message))]
    pub async fn ask(&self, message: &str) -> String {
        let prompt = self.system_prompt();
        let outcome = self.gemini.generate(prompt, message).await;
        resolve_reply(outcome)
    }

    /// Render the system prompt from current settings, catalog, and blog.
    fn system_prompt(&self) -> String {
        let settings = self.store.settings().get();
        let inventory = inventory_context(&self.store.catalog().list());
        let news = news_context(&self.store.blog().list_newest_first());

        SystemPromptTemplate {
            shop_name: &settings.name,
            inventory: &inventory,
            news: &news,
        }
        .render()
        .unwrap_or_else(|_| {
            format!(
                "You are a professional Master Butcher at {} in Bulawayo, Zimbabwe.",
                settings.name
            )
        })
    }
}

/// Render the `CURRENT INVENTORY` block of the knowledge base.
fn inventory_context(products: &[Product]) -> String {
    if products.is_empty() {
        return String::from("No items currently listed in the online catalog.");
    }
    products
        .iter()
        .map(|p| format!("- {} ({}): {}", p.name, p.category, p.price_range))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the `LATEST NEWS/EVENTS` block of the knowledge base.
fn news_context(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return String::from("No recent updates.");
    }
    posts
        .iter()
        .map(|p| format!("- {}: {}", p.title, p.excerpt))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn a model outcome into the customer-facing reply.
fn resolve_reply(outcome: Result<GenerateResponse, GeminiError>) -> String {
    match outcome {
        Ok(response) => response
            .text()
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()),
        Err(err) => {
            warn!(error = %err, "assistant request failed");
            BUSY_FALLBACK.to_string()
        }
    }
}
