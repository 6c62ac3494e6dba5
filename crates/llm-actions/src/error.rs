//! Action 错误类型定义
//!
//! Unified error handling for the action contract

use std::fmt;
use thiserror::Error;

/// Action 操作结果类型
pub type ActionResult<T> = Result<T, ActionError>;

/// Invocation style an action was asked to run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStyle {
    /// Blocking call through `invoke`
    Sync,
    /// Suspending call through `invoke_async`
    Async,
}

impl fmt::Display for InvocationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => write!(f, "synchronous"),
            Self::Async => write!(f, "asynchronous"),
        }
    }
}

/// Contract-level errors raised by the action machinery.
///
/// Domain failures never appear here: an action reports those through
/// [`Outcome::Err`](crate::Outcome), and callers only ever see the serialized
/// failure shape for them. `ActionError` is reserved for the contract itself
/// being violated or unusable.
#[derive(Debug, Error)]
pub enum ActionError {
    /// 模式派生失败
    #[error("schema derivation failed: {0}")]
    Schema(#[from] SchemaError),

    /// 不支持的调用方式
    #[error("action `{action}` does not support {style} invocation")]
    Unsupported {
        action: &'static str,
        style: InvocationStyle,
    },
}

/// Malformed self-description encountered during schema derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// 自描述不是 JSON 对象
    #[error("self-description is not a JSON object")]
    NotAnObject,

    /// 缺少必需的描述字段
    #[error("self-description is missing required field `{0}`")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_strings() {
        let err = ActionError::Unsupported {
            action: "Sleep",
            style: InvocationStyle::Async,
        };
        assert_eq!(
            err.to_string(),
            "action `Sleep` does not support asynchronous invocation"
        );

        let err: ActionError = SchemaError::MissingField("title").into();
        assert_eq!(
            err.to_string(),
            "schema derivation failed: self-description is missing required field `title`"
        );
    }
}
