// Response handling: classify the service reply and print the result.
// The service returns one of two mutually exclusive body shapes:
// `{"message": "..."}` on success, or `{"errors": {field: [msgs]}}` when
// validation fails. The `errors` check comes first; a body carrying both
// keys counts as a failure.

use serde_json::Value;

/// Sentinel used when the body is not JSON or carries neither known key.
pub const MALFORMED_BODY: &str = "service returned an unrecognized response body";

/// The classified reply. `Failure` keeps the error fields in the order
/// they appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { message: String },
    Failure { errors: Vec<(String, Vec<String>)> },
}

impl Outcome {
    /// Classify a raw response body. Never panics: anything unparseable
    /// becomes a `Failure` carrying the sentinel message.
    pub fn classify(body: &str) -> Outcome {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::classify_value(&value),
            Err(_) => Self::malformed(),
        }
    }

    fn classify_value(body: &Value) -> Outcome {
        if let Some(errors) = body.get("errors").and_then(Value::as_object) {
            let errors = errors
                .iter()
                .map(|(field, messages)| {
                    let messages = messages
                        .as_array()
                        .map(|list| {
                            list.iter()
                                .filter_map(Value::as_str)
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    (field.clone(), messages)
                })
                .collect();
            return Outcome::Failure { errors };
        }
        match body.get("message").and_then(Value::as_str) {
            Some(message) => Outcome::Success { message: message.to_string() },
            None => Self::malformed(),
        }
    }

    fn malformed() -> Outcome {
        Outcome::Failure {
            errors: vec![("response".to_string(), vec![MALFORMED_BODY.to_string()])],
        }
    }

    /// The messages `report` will emit for a failure: every message under
    /// the first field, and nothing from later fields. Empty for a
    /// success or an empty error map.
    pub fn first_field_messages(&self) -> &[String] {
        match self {
            Outcome::Failure { errors } => errors
                .first()
                .map(|(_, messages)| messages.as_slice())
                .unwrap_or(&[]),
            Outcome::Success { .. } => &[],
        }
    }

    /// Print the result: the success message at info level, or the first
    /// field's error messages at error level.
    pub fn report(&self) {
        match self {
            Outcome::Success { message } => log::info!("{message}"),
            Outcome::Failure { .. } => {
                for message in self.first_field_messages() {
                    log::error!("{message}");
                }
            }
        }
    }
}
