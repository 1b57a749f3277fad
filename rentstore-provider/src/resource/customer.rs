//! Customer controller - `store_customers`.
//!
//! `phone` is the only attribute that changes in place. A new name or gold
//! status needs a new customer.

use serde::{Deserialize, Serialize};

use super::{Attributes, Resource, ResourceKind};
use crate::client::{Customer, CustomerRequest};
use crate::error::Result;
use crate::validate::{validate_name, validate_required};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerAttributes {
    pub name: String,
    pub phone: String,
    #[serde(default, rename = "isgold")]
    pub is_gold: bool,
}

impl Attributes for CustomerAttributes {
    fn changed_fields(&self, desired: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.name != desired.name {
            changed.push("name");
        }
        if self.is_gold != desired.is_gold {
            changed.push("isgold");
        }
        if self.phone != desired.phone {
            changed.push("phone");
        }
        changed
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerResource;

impl Resource for CustomerResource {
    type Attrs = CustomerAttributes;
    type Remote = Customer;

    const KIND: ResourceKind = ResourceKind::Customer;
    const UPDATABLE: &'static [&'static str] = &["phone"];

    fn create_request(attrs: &CustomerAttributes) -> Result<CustomerRequest> {
        validate_name("name", &attrs.name)?;
        validate_required("phone", &attrs.phone)?;
        Ok(CustomerRequest {
            name: attrs.name.clone(),
            is_gold: attrs.is_gold,
            phone: attrs.phone.clone(),
        })
    }

    fn flatten(remote: &Customer, attrs: &mut CustomerAttributes) {
        attrs.name = remote.name.clone();
        attrs.phone = remote.phone.clone();
        attrs.is_gold = remote.is_gold;
    }

    fn apply_update(remote: &mut Customer, desired: &CustomerAttributes, fields: &[&'static str]) {
        if fields.contains(&"phone") {
            remote.phone = desired.phone.clone();
        }
    }
}
