//! LLM Actions - Self-describing action contract for LLM tool-calling APIs
//!
//! An action is a unit of work an LLM can discover through a function schema
//! and invoke with structured arguments. This crate defines the contract:
//!
//! - [`Outcome`]: the two-variant success/failure result every action returns
//! - [`derive_schema`]: derives a `{name, description, parameters}` record
//!   from an action's structural self-description
//! - [`Action`]: the contract itself — per-type schema memoization plus the
//!   synchronous/asynchronous invocation protocol
//! - [`map_functions`] / [`list_functions`]: registry helpers that aggregate
//!   schemas for presentation to a tool-calling API
//!
//! Validation and coercion of action input values belongs to the structural
//! layer that produces the self-description, not to this crate. With the
//! `schemars` feature, [`describe::self_description_of`] bridges any
//! `schemars::JsonSchema` type into that role.

// outcome module
pub mod outcome;
pub use outcome::{err, ok, Outcome};

// schema module
pub mod schema;
pub use schema::{derive_schema, FunctionSchema};

// action module
pub mod action;
pub use action::{Action, DescribedAction};

// registry module
pub mod registry;
pub use registry::{list_functions, map_functions};

// error module
pub mod error;
pub use error::{ActionError, ActionResult, InvocationStyle, SchemaError};

// schemars bridge (optional)
#[cfg(feature = "schemars")]
pub mod describe;
