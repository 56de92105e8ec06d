use rx_core::FieldErrors;
use serde_json::Value;

/// Human-readable parts of a backend error body.
///
/// Bodies seen in the wild:
/// - `{ "message": "..." }`
/// - `{ "error": "..." }` or `{ "error": { "code": "...", "message": "..." } }`
/// - `{ "errors": { "email": "Email already registered" } }`
/// - `{ "errors": [ { "path": "email", "msg": "Email already registered" } ] }`
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ErrorPayload {
    pub message: Option<String>,
    pub field_errors: FieldErrors,
}

impl ErrorPayload {
    /// Never fails; an empty or non-JSON body yields an empty payload.
    pub fn parse(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };

        Self {
            message: Self::message(&value),
            field_errors: Self::field_errors(&value),
        }
    }

    fn message(value: &Value) -> Option<String> {
        let candidate = value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
            .or_else(|| value.get("msg").and_then(Value::as_str))?;

        let trimmed = candidate.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn field_errors(value: &Value) -> FieldErrors {
        let mut errors = FieldErrors::new();

        match value.get("errors") {
            Some(Value::Object(map)) => {
                for (field, detail) in map {
                    if let Some(message) = Self::detail_message(detail) {
                        errors.insert(field.clone(), message);
                    }
                }
            }
            Some(Value::Array(items)) => {
                for item in items {
                    let field = ["field", "param", "path"]
                        .iter()
                        .find_map(|key| item.get(*key).and_then(Value::as_str));

                    if let (Some(field), Some(message)) = (field, Self::detail_message(item)) {
                        // First message per field wins, matching how forms display one error
                        errors.entry(field.to_string()).or_insert(message);
                    }
                }
            }
            _ => {}
        }

        errors
    }

    fn detail_message(detail: &Value) -> Option<String> {
        match detail {
            Value::String(message) => Some(message.clone()),
            Value::Object(_) => ["message", "msg"]
                .iter()
                .find_map(|key| detail.get(*key).and_then(Value::as_str))
                .map(String::from),
            _ => None,
        }
    }
}
