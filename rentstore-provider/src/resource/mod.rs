//! Resource controllers for the store's resource kinds.
//!
//! Each controller maps a declared instance onto one store collection. The
//! lifecycle (create, read, exists, update, delete, import) is shared and
//! lives on [`Resource`]; a kind only supplies how to build its create
//! request, how to flatten the store's answer and which attributes may
//! change in place.

pub mod customer;
pub mod genre;
pub mod movie;
pub mod rental;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::{ApiResource, ClientError};
use crate::error::{ProviderError, Result};
use crate::instance::{Instance, ResourceId};
use crate::provider::Provider;

pub use customer::{CustomerAttributes, CustomerResource};
pub use genre::{GenreAttributes, GenreResource};
pub use movie::{MovieAttributes, MovieResource};
pub use rental::{RentalAttributes, RentalResource};

/// Resource kinds served by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Genre,
    Customer,
    Movie,
    Rental,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Genre,
        ResourceKind::Customer,
        ResourceKind::Movie,
        ResourceKind::Rental,
    ];

    /// Resource type name as the host addresses it.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::Genre => "store_genres",
            ResourceKind::Customer => "store_customers",
            ResourceKind::Movie => "store_movies",
            ResourceKind::Rental => "store_rentals",
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Genre => "genre",
            ResourceKind::Customer => "customer",
            ResourceKind::Movie => "movie",
            ResourceKind::Rental => "rental",
        };
        f.write_str(name)
    }
}

/// Lifecycle operation, used to tag errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Exists,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Exists => "exists",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Declared attribute set of one resource kind.
pub trait Attributes:
    Clone + Default + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync
{
    /// Names of the user-settable attributes that differ between `self` and
    /// `desired`. Computed attributes are never reported.
    fn changed_fields(&self, desired: &Self) -> Vec<&'static str>;
}

/// How a change between two declared attribute sets can be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePlan {
    /// Nothing settable changed.
    NoOp,
    /// All changed attributes are updatable.
    InPlace(Vec<&'static str>),
    /// These changed attributes are frozen; destroy and recreate.
    Replace(Vec<&'static str>),
}

/// Decide whether `old` can become `desired` in place given the updatable set.
pub fn plan_change<A: Attributes>(old: &A, desired: &A, updatable: &[&str]) -> ChangePlan {
    let changed = old.changed_fields(desired);
    if changed.is_empty() {
        return ChangePlan::NoOp;
    }
    let frozen: Vec<&'static str> = changed
        .iter()
        .copied()
        .filter(|field| !updatable.contains(field))
        .collect();
    if frozen.is_empty() {
        ChangePlan::InPlace(changed)
    } else {
        ChangePlan::Replace(frozen)
    }
}

/// Controller for one resource kind.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Declared attribute set.
    type Attrs: Attributes;
    /// Object served by the store.
    type Remote: ApiResource;

    const KIND: ResourceKind;
    /// Attributes that may change without recreating the remote object.
    const UPDATABLE: &'static [&'static str];

    /// Validate the declared attributes and build the create request.
    /// Must not touch the network.
    fn create_request(attrs: &Self::Attrs) -> Result<<Self::Remote as ApiResource>::Request>;

    /// Overwrite every attribute derived from the store's object.
    fn flatten(remote: &Self::Remote, attrs: &mut Self::Attrs);

    /// Copy the changed updatable `fields` from `desired` onto the fetched object.
    fn apply_update(_remote: &mut Self::Remote, _desired: &Self::Attrs, _fields: &[&'static str]) {}

    /// Whether `old` can become `desired` in place.
    fn plan_change(old: &Self::Attrs, desired: &Self::Attrs) -> ChangePlan {
        plan_change(old, desired, Self::UPDATABLE)
    }

    /// Create the remote object and bind its id.
    ///
    /// On failure the instance stays absent.
    async fn create(&self, provider: &Provider, instance: &mut Instance<Self::Attrs>) -> Result<()> {
        if let Some(id) = instance.id() {
            return Err(ProviderError::AlreadyBound {
                kind: Self::KIND,
                id: id.to_string(),
            });
        }

        let request = Self::create_request(&instance.attributes)?;
        let remote: Self::Remote = provider
            .client()
            .create::<Self::Remote>(&request)
            .await
            .map_err(|source| remote_error(Self::KIND, Operation::Create, None, source))?;

        if remote.id().is_empty() {
            return Err(ProviderError::EmptyId { kind: Self::KIND });
        }

        info!(kind = %Self::KIND, id = %remote.id(), "Created");
        instance.bind(remote.id());
        Self::flatten(&remote, &mut instance.attributes);
        Ok(())
    }

    /// Refresh the declared attributes from the store.
    ///
    /// A missing remote object clears the bound id and is not an error.
    async fn read(&self, provider: &Provider, instance: &mut Instance<Self::Attrs>) -> Result<()> {
        let Some(id) = instance.id().cloned() else {
            debug!(kind = %Self::KIND, "Read of unbound instance, nothing to do");
            return Ok(());
        };

        match provider.client().get::<Self::Remote>(id.as_str()).await {
            Ok(remote) => {
                Self::flatten(&remote, &mut instance.attributes);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                warn!(kind = %Self::KIND, %id, "Remote object is gone, removing from state");
                instance.clear();
                Ok(())
            }
            Err(source) => Err(remote_error(Self::KIND, Operation::Read, Some(&id), source)),
        }
    }

    /// Whether the bound remote object still exists.
    async fn exists(&self, provider: &Provider, instance: &Instance<Self::Attrs>) -> Result<bool> {
        let Some(id) = instance.id() else {
            return Ok(false);
        };

        match provider.client().get::<Self::Remote>(id.as_str()).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(source) => Err(remote_error(Self::KIND, Operation::Exists, Some(id), source)),
        }
    }

    /// Apply `desired` in place, then re-read.
    ///
    /// Changes to frozen attributes are rejected before any remote call.
    /// The PUT body is the full settable state of the freshly fetched object
    /// with only the changed updatable fields replaced.
    async fn update(
        &self,
        provider: &Provider,
        instance: &mut Instance<Self::Attrs>,
        desired: Self::Attrs,
    ) -> Result<()> {
        let Some(id) = instance.id().cloned() else {
            return Err(ProviderError::NotBound {
                kind: Self::KIND,
                op: Operation::Update,
            });
        };

        let fields = match Self::plan_change(&instance.attributes, &desired) {
            ChangePlan::NoOp => return Ok(()),
            ChangePlan::Replace(fields) => {
                return Err(ProviderError::RequiresReplacement {
                    kind: Self::KIND,
                    fields,
                })
            }
            ChangePlan::InPlace(fields) => fields,
        };

        let client = provider.client();
        let mut remote: Self::Remote = match client.get::<Self::Remote>(id.as_str()).await {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => {
                warn!(kind = %Self::KIND, %id, "Remote object is gone, removing from state");
                instance.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(remote_error(Self::KIND, Operation::Update, Some(&id), source))
            }
        };

        Self::apply_update(&mut remote, &desired, &fields);
        match client
            .update::<Self::Remote>(id.as_str(), &remote.to_request())
            .await
        {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                warn!(kind = %Self::KIND, %id, "Remote object vanished during update");
                instance.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(remote_error(Self::KIND, Operation::Update, Some(&id), source))
            }
        }
        info!(kind = %Self::KIND, %id, ?fields, "Updated");

        instance.attributes = desired;
        self.read(provider, instance).await
    }

    /// Delete the remote object and clear the bound id.
    async fn delete(&self, provider: &Provider, instance: &mut Instance<Self::Attrs>) -> Result<()> {
        let Some(id) = instance.id().cloned() else {
            debug!(kind = %Self::KIND, "Delete of unbound instance, nothing to do");
            return Ok(());
        };

        provider
            .client()
            .delete::<Self::Remote>(id.as_str())
            .await
            .map_err(|source| remote_error(Self::KIND, Operation::Delete, Some(&id), source))?;

        info!(kind = %Self::KIND, %id, "Deleted");
        instance.clear();
        Ok(())
    }

    /// Adopt an existing remote object by id. Nothing is checked here; the
    /// next read fills the attributes or finds the id unknown.
    fn import(&self, id: impl Into<ResourceId> + Send) -> Instance<Self::Attrs> {
        let instance = Instance::imported(id);
        debug!(kind = %Self::KIND, id = ?instance.id(), "Imported");
        instance
    }
}

fn remote_error(
    kind: ResourceKind,
    op: Operation,
    id: Option<&ResourceId>,
    source: ClientError,
) -> ProviderError {
    ProviderError::Remote {
        kind,
        op,
        id: id.map(|id| id.to_string()),
        source,
    }
}
