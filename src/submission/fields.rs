use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// The three required values, taken verbatim from the request body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredFields {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

/// A field counts as present unless it is missing, `null`, `false`, zero or
/// an empty string. Arrays and objects are present even when empty.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Pull the required fields out of a parsed body. Returns `None` if any of
/// them is absent; a body that is not an object has no fields at all.
pub fn extract_required(body: &Value) -> Option<RequiredFields> {
    let obj = body.as_object()?;

    if !REQUIRED_FIELDS.iter().all(|key| is_present(obj.get(*key))) {
        return None;
    }

    Some(RequiredFields {
        name: obj["name"].clone(),
        email: obj["email"].clone(),
        message: obj["message"].clone(),
    })
}
