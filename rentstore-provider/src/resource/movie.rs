//! Movie controller - `store_movies`.
//!
//! Every movie attribute is frozen after creation. The genre is declared as
//! a single reference block; only its `id` is settable, its `name` is filled
//! from the store.

use serde::{Deserialize, Serialize};

use super::{Attributes, Resource, ResourceKind};
use crate::client::{Movie, MovieRequest};
use crate::convert::{expand_genre, flatten_genre, reference_id, GenreBlock};
use crate::error::Result;
use crate::validate::{validate_name, validate_rate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieAttributes {
    pub title: String,
    pub genre: Vec<GenreBlock>,
    pub stock: u32,
    pub daily_rate: f64,
}

impl Attributes for MovieAttributes {
    fn changed_fields(&self, desired: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.title != desired.title {
            changed.push("title");
        }
        if reference_id(&self.genre, |g| g.id.as_str())
            != reference_id(&desired.genre, |g| g.id.as_str())
        {
            changed.push("genre");
        }
        if self.stock != desired.stock {
            changed.push("stock");
        }
        if self.daily_rate != desired.daily_rate {
            changed.push("daily_rate");
        }
        changed
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MovieResource;

impl Resource for MovieResource {
    type Attrs = MovieAttributes;
    type Remote = Movie;

    const KIND: ResourceKind = ResourceKind::Movie;
    const UPDATABLE: &'static [&'static str] = &[];

    fn create_request(attrs: &MovieAttributes) -> Result<MovieRequest> {
        validate_name("title", &attrs.title)?;
        validate_rate("daily_rate", attrs.daily_rate)?;
        let genre = expand_genre(&attrs.genre)?;
        Ok(MovieRequest {
            title: attrs.title.clone(),
            genre_id: genre.id,
            number_in_stock: attrs.stock,
            daily_rental_rate: attrs.daily_rate,
        })
    }

    fn flatten(remote: &Movie, attrs: &mut MovieAttributes) {
        attrs.title = remote.title.clone();
        attrs.genre = flatten_genre(&remote.genre);
        attrs.stock = remote.number_in_stock;
        attrs.daily_rate = remote.daily_rental_rate;
    }
}
