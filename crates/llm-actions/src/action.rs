//! 动作契约
//! Action Contract
//!
//! The abstract base every action satisfies: per-type schema memoization and
//! the two-layer invocation protocol (public entry point delegating to an
//! overridable execution hook).

use crate::error::{ActionError, ActionResult, InvocationStyle};
use crate::outcome::Outcome;
use crate::schema::{derive_schema, FunctionSchema};
use async_trait::async_trait;
use dashmap::DashMap;
use lazy_static::lazy_static;
use serde::Serialize;
use serde_json::Value;
use std::any::{type_name, TypeId};
use std::fmt;

lazy_static! {
    /// Process-wide schema cache, one entry per concrete action type.
    ///
    /// Derivation is a pure function of immutable type metadata, so a race
    /// on first access may derive twice; both results are identical and the
    /// last write is observably equivalent to the first. No teardown: entries
    /// live for the process lifetime.
    static ref SCHEMA_CACHE: DashMap<TypeId, FunctionSchema> = DashMap::new();
}

/// A self-describing, invocable unit of work an LLM tool-calling API can
/// discover and invoke.
///
/// Implementations supply [`self_description`](Action::self_description) and
/// whichever execution hooks they support; everything else is provided.
/// `invoke` and `invoke_async` are the entry points callers use — they exist
/// as a separate layer so cross-cutting behavior can be added without
/// touching implementations, which should override only the hooks.
///
/// # Example
///
/// ```rust,ignore
/// use llm_actions::{ok, Action, ActionResult, Outcome};
/// use serde_json::{json, Value};
/// use std::convert::Infallible;
///
/// struct Greet {
///     name: String,
/// }
///
/// #[async_trait::async_trait]
/// impl Action for Greet {
///     type Output = String;
///     type Error = Infallible;
///
///     fn self_description() -> Value {
///         json!({
///             "title": "Greet",
///             "description": "Greets someone by name.",
///             "type": "object",
///             "properties": {
///                 "name": { "type": "string", "description": "Who to greet" }
///             },
///             "required": ["name"]
///         })
///     }
///
///     fn execute_sync(&self) -> ActionResult<Outcome<String, Infallible>> {
///         Ok(ok(format!("Hello, {}!", self.name)))
///     }
/// }
/// ```
#[async_trait]
pub trait Action: Send + Sync + 'static {
    /// 成功值类型
    /// Success value type
    type Output: Serialize + Send + Sync;

    /// 错误值类型 (仅其显示字符串跨越边界)
    /// Error value type (only its display string crosses the boundary)
    type Error: fmt::Display + Send + Sync;

    /// The structural self-description of this action's input shape, as
    /// produced by a structural-validation layer: a JSON object with `title`,
    /// `description` and the usual JSON-Schema keys.
    ///
    /// With the `schemars` feature, [`self_description_of`](crate::describe::self_description_of)
    /// derives this from a `schemars::JsonSchema` impl.
    fn self_description() -> Value
    where
        Self: Sized;

    /// This type's function schema, derived on first access and cached for
    /// the process lifetime. Shared by all instances of the type.
    ///
    /// Never triggers the execution hooks; a failed derivation is not cached
    /// and surfaces again on the next access.
    fn schema() -> ActionResult<FunctionSchema>
    where
        Self: Sized,
    {
        let key = TypeId::of::<Self>();
        if let Some(cached) = SCHEMA_CACHE.get(&key) {
            return Ok(cached.clone());
        }

        let derived = derive_schema(&Self::self_description())?;
        tracing::debug!(action = type_name::<Self>(), name = %derived.name, "derived function schema");
        SCHEMA_CACHE.insert(key, derived.clone());
        Ok(derived)
    }

    /// Convenience accessor for `schema()?.name`.
    fn schema_name() -> ActionResult<String>
    where
        Self: Sized,
    {
        Ok(Self::schema()?.name)
    }

    /// Synchronous execution hook. Override to support `invoke`.
    fn execute_sync(&self) -> ActionResult<Outcome<Self::Output, Self::Error>> {
        Err(ActionError::Unsupported {
            action: type_name::<Self>(),
            style: InvocationStyle::Sync,
        })
    }

    /// Asynchronous execution hook. Override to support `invoke_async`.
    async fn execute_async(&self) -> ActionResult<Outcome<Self::Output, Self::Error>> {
        Err(ActionError::Unsupported {
            action: type_name::<Self>(),
            style: InvocationStyle::Async,
        })
    }

    /// Invoke this action synchronously. Blocks until the hook completes.
    ///
    /// Do not override; implement [`execute_sync`](Action::execute_sync).
    fn invoke(&self) -> ActionResult<Outcome<Self::Output, Self::Error>> {
        tracing::debug!(action = type_name::<Self>(), "invoking action");
        self.execute_sync()
    }

    /// Invoke this action asynchronously. A single suspension point; no
    /// intrinsic cancellation or timeout — callers wanting either must race
    /// the returned future themselves.
    ///
    /// Do not override; implement [`execute_async`](Action::execute_async).
    async fn invoke_async(&self) -> ActionResult<Outcome<Self::Output, Self::Error>> {
        tracing::debug!(action = type_name::<Self>(), "invoking action (async)");
        self.execute_async().await
    }
}

/// Object-safe view of an action's schema identity.
///
/// Blanket-implemented for every [`Action`], so heterogeneous action sets
/// can be aggregated behind `&dyn DescribedAction` — see
/// [`map_functions`](crate::registry::map_functions) and
/// [`list_functions`](crate::registry::list_functions).
pub trait DescribedAction: Send + Sync {
    /// This action's function schema (per-type cache, see [`Action::schema`]).
    fn schema(&self) -> ActionResult<FunctionSchema>;

    /// This action's schema name.
    fn schema_name(&self) -> ActionResult<String>;
}

impl<A: Action> DescribedAction for A {
    fn schema(&self) -> ActionResult<FunctionSchema> {
        A::schema()
    }

    fn schema_name(&self) -> ActionResult<String> {
        A::schema_name()
    }
}
