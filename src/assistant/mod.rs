//! Conversational assistant gateway.
//!
//! Prompts from the AI Guru page go through [`AssistantGateway::send`], which
//! appends to the session transcript and talks to a [`CompletionClient`]
//! using a primary model tier and one fallback tier.
//!
//! - [`client`] - the transport trait and error classification
//! - [`context`] - the business-context request template
//! - [`gateway`] - transcript handling and the fallback policy
//! - [`gemini`] - the Gemini REST implementation

pub mod client;
pub mod context;
pub mod gateway;
pub mod gemini;

pub use client::{CompletionClient, CompletionError, ModelTier, ModelTiers};
pub use context::{build_request_text, business_context};
pub use gateway::{AssistantGateway, SendOutcome};
pub use gemini::{GeminiClient, ModelInfo};
