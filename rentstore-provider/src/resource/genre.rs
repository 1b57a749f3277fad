//! Genre controller - `store_genres`.

use serde::{Deserialize, Serialize};

use super::{Attributes, Resource, ResourceKind};
use crate::client::{Genre, GenreRequest};
use crate::error::Result;
use crate::validate::validate_name;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreAttributes {
    pub name: String,
}

impl Attributes for GenreAttributes {
    fn changed_fields(&self, desired: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.name != desired.name {
            changed.push("name");
        }
        changed
    }
}

/// Genres are immutable once created.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenreResource;

impl Resource for GenreResource {
    type Attrs = GenreAttributes;
    type Remote = Genre;

    const KIND: ResourceKind = ResourceKind::Genre;
    const UPDATABLE: &'static [&'static str] = &[];

    fn create_request(attrs: &GenreAttributes) -> Result<GenreRequest> {
        validate_name("name", &attrs.name)?;
        Ok(GenreRequest {
            name: attrs.name.clone(),
        })
    }

    fn flatten(remote: &Genre, attrs: &mut GenreAttributes) {
        attrs.name = remote.name.clone();
    }
}
