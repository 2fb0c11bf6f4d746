use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque device identifier.
///
/// The backend may send ids as strings or numbers; both are kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        DeviceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        DeviceId::new(id)
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        DeviceId(id)
    }
}

impl<'de> Deserialize<'de> for DeviceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => DeviceId(s),
            RawId::Number(n) => DeviceId(n.to_string()),
        })
    }
}

/// A device as reported by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub msg: String,
}

impl Device {
    pub fn new(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        comment: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Device {
            id: id.into(),
            name: name.into(),
            comment: comment.into(),
            msg: msg.into(),
        }
    }
}

/// Body of `GET /api/devices`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceList {
    pub devices: Vec<Device>,
}

/// Body of `PUT /api/{id}/message`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageUpdate {
    pub msg: String,
}
