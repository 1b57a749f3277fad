//! Declared resource instances and their bound remote identity.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        if id.is_empty() {
            return Err(de::Error::custom(
                "id must not be empty; omit it for an absent instance",
            ));
        }
        Ok(Self(id))
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One declared resource instance as the host hands it over.
///
/// `id` is `None` while the instance is absent and holds the id last
/// returned by a create or read once it is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance<A> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub attributes: A,
}

impl<A> Instance<A> {
    /// A declared instance that has no remote object yet.
    pub fn declared(attributes: A) -> Self {
        Self {
            id: None,
            attributes,
        }
    }

    /// Whether a remote object is bound.
    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }

    pub fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    pub(crate) fn bind(&mut self, id: impl Into<ResourceId>) {
        self.id = Some(id.into());
    }

    pub(crate) fn clear(&mut self) {
        self.id = None;
    }
}

impl<A: Default> Instance<A> {
    /// An instance bound to an externally supplied id with nothing else known.
    pub fn imported(id: impl Into<ResourceId>) -> Self {
        Self {
            id: Some(id.into()),
            attributes: A::default(),
        }
    }
}
