//! Expansion and flattening of nested reference blocks.
//!
//! A reference field is declared as a list holding a single block. Only the
//! block's `id` is settable; the other fields are filled from the store on
//! create and read.

use serde::{Deserialize, Serialize};

use crate::client::{Customer, Genre, MovieSnapshot};
use crate::error::{ProviderError, Result};

/// Declared form of a movie's genre reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenreBlock {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Declared form of a rental's customer reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerBlock {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub isgold: bool,
    #[serde(default)]
    pub phone: String,
}

/// Declared form of a rental's movie reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieBlock {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub dailyrentalrate: f64,
}

/// Pick the single block of a reference field and check its id.
fn single<'a, B>(field: &'static str, blocks: &'a [B], id: impl Fn(&B) -> &str) -> Result<&'a B> {
    let block = match blocks {
        [block] => block,
        [] => {
            return Err(ProviderError::MissingReference {
                field,
                reason: "should be specified, but no block was given".to_string(),
            })
        }
        _ => {
            return Err(ProviderError::MissingReference {
                field,
                reason: format!("expected exactly one block, got {}", blocks.len()),
            })
        }
    };
    if id(block).trim().is_empty() {
        return Err(ProviderError::MissingReference {
            field,
            reason: "id must not be empty".to_string(),
        });
    }
    Ok(block)
}

pub fn expand_genre(blocks: &[GenreBlock]) -> Result<Genre> {
    let block = single("genre", blocks, |b| b.id.as_str())?;
    Ok(Genre {
        id: block.id.clone(),
        name: block.name.clone(),
    })
}

pub fn flatten_genre(genre: &Genre) -> Vec<GenreBlock> {
    vec![GenreBlock {
        id: genre.id.clone(),
        name: genre.name.clone(),
    }]
}

pub fn expand_customer(blocks: &[CustomerBlock]) -> Result<Customer> {
    let block = single("customer", blocks, |b| b.id.as_str())?;
    Ok(Customer {
        id: block.id.clone(),
        name: block.name.clone(),
        is_gold: block.isgold,
        phone: block.phone.clone(),
    })
}

pub fn flatten_customer(customer: &Customer) -> Vec<CustomerBlock> {
    vec![CustomerBlock {
        id: customer.id.clone(),
        name: customer.name.clone(),
        isgold: customer.is_gold,
        phone: customer.phone.clone(),
    }]
}

pub fn expand_movie(blocks: &[MovieBlock]) -> Result<MovieSnapshot> {
    let block = single("movie", blocks, |b| b.id.as_str())?;
    Ok(MovieSnapshot {
        id: block.id.clone(),
        title: block.title.clone(),
        daily_rental_rate: block.dailyrentalrate,
    })
}

pub fn flatten_movie(movie: &MovieSnapshot) -> Vec<MovieBlock> {
    vec![MovieBlock {
        id: movie.id.clone(),
        title: movie.title.clone(),
        dailyrentalrate: movie.daily_rental_rate,
    }]
}

/// Id of the first block, used to compare references without their computed fields.
pub(crate) fn reference_id<B>(blocks: &[B], id: impl Fn(&B) -> &str) -> Option<String> {
    blocks.first().map(|b| id(b).to_string())
}
