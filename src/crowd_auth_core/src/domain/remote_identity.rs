use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const EMAIL_KEY: &str = "email";
const FIRST_NAME_KEY: &str = "first-name";
const LAST_NAME_KEY: &str = "last-name";

/// User attributes returned by the identity server after a successful login.
///
/// The server sends a larger document (display name, links, attributes...); it
/// is kept as-is and only the name and email keys are ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteIdentity(Map<String, Value>);

impl RemoteIdentity {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    pub fn email(&self) -> Option<&str> {
        self.string_attribute(EMAIL_KEY)
    }

    pub fn first_name(&self) -> Option<&str> {
        self.string_attribute(FIRST_NAME_KEY)
    }

    pub fn last_name(&self) -> Option<&str> {
        self.string_attribute(LAST_NAME_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn string_attribute(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
