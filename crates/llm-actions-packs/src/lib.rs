//! LLM Actions Packs - Ready-made actions built on the llm-actions contract
//!
//! Each pack module groups a small set of related actions. Packs consume the
//! contract exactly the way a third party would: declare an input shape,
//! implement the execution hooks, and let the registry helpers advertise the
//! derived schemas.

// sleep pack
pub mod sleep;
pub use sleep::SearchGoogle;
