//! Rental controller - `store_rentals`.
//!
//! A rental is created from a customer id and a movie id. The store answers
//! with snapshots of both taken at checkout plus the checkout time, and all
//! three are recorded in the declared attributes.

use serde::{Deserialize, Serialize};

use super::{Attributes, Resource, ResourceKind};
use crate::client::{Rental, RentalRequest};
use crate::convert::{
    expand_customer, expand_movie, flatten_customer, flatten_movie, reference_id, CustomerBlock,
    MovieBlock,
};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RentalAttributes {
    pub customer: Vec<CustomerBlock>,
    pub movie: Vec<MovieBlock>,
    /// Checkout time, set by the store.
    #[serde(default, rename = "dateout", skip_serializing_if = "Option::is_none")]
    pub date_out: Option<String>,
}

impl Attributes for RentalAttributes {
    fn changed_fields(&self, desired: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if reference_id(&self.customer, |c| c.id.as_str())
            != reference_id(&desired.customer, |c| c.id.as_str())
        {
            changed.push("customer");
        }
        if reference_id(&self.movie, |m| m.id.as_str())
            != reference_id(&desired.movie, |m| m.id.as_str())
        {
            changed.push("movie");
        }
        changed
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RentalResource;

impl Resource for RentalResource {
    type Attrs = RentalAttributes;
    type Remote = Rental;

    const KIND: ResourceKind = ResourceKind::Rental;
    const UPDATABLE: &'static [&'static str] = &[];

    fn create_request(attrs: &RentalAttributes) -> Result<RentalRequest> {
        let customer = expand_customer(&attrs.customer)?;
        let movie = expand_movie(&attrs.movie)?;
        Ok(RentalRequest {
            customer_id: customer.id,
            movie_id: movie.id,
        })
    }

    fn flatten(remote: &Rental, attrs: &mut RentalAttributes) {
        attrs.customer = flatten_customer(&remote.customer);
        attrs.movie = flatten_movie(&remote.movie);
        attrs.date_out = Some(remote.date_out.clone());
    }
}
