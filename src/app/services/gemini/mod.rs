//! Gemini API collaborator for document extraction and summaries
//!
//! Two operations delegate to the hosted Gemini model:
//! - [`extraction`] turns a Google Ads PDF report into campaign records
//! - [`summary`] turns dashboard statistics into an executive narrative
//!
//! Both request structured JSON output via a response schema and trust
//! the result beyond structural presence. Neither operation retries: a
//! failed extraction is a terminal error for that upload, a failed
//! summary degrades to "no summary" and leaves prior state untouched.

pub mod client;
pub mod extraction;
pub mod summary;

// Re-export main types for easy access
pub use client::GeminiClient;
pub use extraction::extract_campaigns;
pub use summary::executive_summary;
