//! Sleeping action pack.
//!
//! Simple actions that let an agent pause for a specified amount of time.

use llm_actions::describe::self_description_of;
use llm_actions::{ok, Action, ActionResult, Outcome};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::convert::Infallible;
use std::time::Duration;

/// Pauses the program and sleep for a specified number of seconds.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchGoogle {
    /// Time to sleep in seconds
    pub duration: u64,
}

#[async_trait]
impl Action for SearchGoogle {
    type Output = String;
    type Error = Infallible;

    fn self_description() -> Value {
        self_description_of::<Self>()
    }

    fn execute_sync(&self) -> ActionResult<Outcome<String, Infallible>> {
        std::thread::sleep(Duration::from_secs(self.duration));
        Ok(ok(format!("Slept for {} seconds", self.duration)))
    }

    async fn execute_async(&self) -> ActionResult<Outcome<String, Infallible>> {
        tokio::time::sleep(Duration::from_secs(self.duration)).await;
        Ok(ok(format!("Slept for {} seconds", self.duration)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_matches_the_advertised_shape() {
        let schema = SearchGoogle::schema().unwrap();
        assert_eq!(schema.name, "SearchGoogle");
        assert_eq!(
            schema.description,
            "Pauses the program and sleep for a specified number of seconds."
        );

        let params = schema.parameters.as_object().unwrap();
        assert_eq!(params["type"], json!("object"));
        assert_eq!(params["required"], json!(["duration"]));

        let duration = &params["properties"]["duration"];
        assert_eq!(duration["type"], json!("integer"));
        assert_eq!(duration["description"], json!("Time to sleep in seconds"));
    }

    #[test]
    fn sync_invocation_sleeps_and_reports() {
        let action = SearchGoogle { duration: 2 };
        let started = std::time::Instant::now();
        let outcome = action.invoke().unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(outcome.unwrap(), "Slept for 2 seconds");
    }

    #[tokio::test(start_paused = true)]
    async fn async_invocation_sleeps_and_reports() {
        let action = SearchGoogle { duration: 3600 };
        let outcome = action.invoke_async().await.unwrap();
        assert_eq!(outcome.unwrap(), "Slept for 3600 seconds");
    }

    #[test]
    fn arguments_deserialize_into_the_action() {
        let action: SearchGoogle = serde_json::from_value(json!({"duration": 5})).unwrap();
        assert_eq!(action.duration, 5);
    }
}
