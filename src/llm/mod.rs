//! LLM — text-completion provider for lease analysis.
//!
//! DESIGN
//! ======
//! Thin adapter over the Gemini `generateContent` endpoint, configured
//! from environment variables. The [`TextCompletion`] trait is the seam
//! everything downstream depends on; the analysis pipeline never inspects
//! provider identity and tests substitute a mock provider.

pub mod config;
pub mod gemini;
pub mod types;

pub use config::LlmConfig;
pub use gemini::GeminiClient;
pub use types::{ProviderError, TextCompletion};
