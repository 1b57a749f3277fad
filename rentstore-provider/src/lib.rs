//! rentstore-provider: keeps declared genres, customers, movies and rentals
//! in sync with the store API.
//!
//! The host hands each controller an [`Instance`] (declared attributes plus
//! the bound remote id) and a [`Provider`]; the controller talks to the store
//! and writes the observed state back into the instance.
//!
//! # Example
//! ```ignore
//! use rentstore_provider::{GenreAttributes, GenreResource, Instance, Provider, ProviderConfig, Resource};
//!
//! let provider = Provider::configure(&ProviderConfig::new("http://localhost", 3000, token))?;
//! let mut genre = Instance::declared(GenreAttributes { name: "comedy".into() });
//! GenreResource.create(&provider, &mut genre).await?;
//! assert!(genre.is_present());
//! ```

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod instance;
pub mod provider;
pub mod resource;
pub mod validate;

pub use client::{ClientError, StoreClient};
pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
pub use instance::{Instance, ResourceId};
pub use provider::Provider;
pub use resource::{
    ChangePlan, CustomerAttributes, CustomerResource, GenreAttributes, GenreResource,
    MovieAttributes, MovieResource, Operation, RentalAttributes, RentalResource, Resource,
    ResourceKind,
};
