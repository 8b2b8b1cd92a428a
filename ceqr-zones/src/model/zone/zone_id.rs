use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a CEQR traffic zone, such as "1" through "5".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneId(pub String);

impl ZoneId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId(value.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(value: String) -> Self {
        ZoneId(value)
    }
}
