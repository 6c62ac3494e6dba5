//! 动作执行结果
//! Action execution outcome
//!
//! A two-variant outcome type used uniformly for action execution results.
//! Domain failures travel through [`Outcome::Err`]; they are values, never
//! raised errors.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Outcome of executing an action: success carrying `S` or failure carrying `E`.
///
/// Immutable once constructed. Construct via [`ok`], [`err`] or the variant
/// constructors directly.
///
/// # Serialization
///
/// ```json
/// { "status": "success", "result": <S> }
/// { "status": "failure", "error": { "message": "<E as Display>" } }
/// ```
///
/// The failure shape is deliberately lossy: only the display string of the
/// error crosses the boundary, never its structure. This is what a calling
/// LLM API sees. There is no `Deserialize` back from the wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<S, E> {
    /// 成功，携带结果值
    Ok(S),
    /// 失败，携带错误值
    Err(E),
}

/// Create a success outcome.
pub fn ok<S, E>(value: S) -> Outcome<S, E> {
    Outcome::Ok(value)
}

/// Create a failure outcome.
pub fn err<S, E>(error: E) -> Outcome<S, E> {
    Outcome::Err(error)
}

impl<S, E> Outcome<S, E> {
    /// Whether this outcome is the success variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Whether this outcome is the failure variant.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if called on a failure outcome. Calling this on the wrong
    /// variant is a programmer error, not a recoverable condition.
    pub fn unwrap(self) -> S {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("called `Outcome::unwrap()` on a failure outcome"),
        }
    }

    /// Return the error value.
    ///
    /// # Panics
    ///
    /// Panics if called on a success outcome.
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => panic!("called `Outcome::unwrap_err()` on a success outcome"),
            Self::Err(error) => error,
        }
    }
}

impl<S, E> Serialize for Outcome<S, E>
where
    S: Serialize,
    E: fmt::Display,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        match self {
            Self::Ok(value) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("status", "success")?;
                state.serialize_field("result", value)?;
                state.end()
            }
            Self::Err(error) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("status", "failure")?;
                state.serialize_field(
                    "error",
                    &ErrorBody {
                        message: error.to_string(),
                    },
                )?;
                state.end()
            }
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    message: String,
}
