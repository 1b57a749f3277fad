//! Client for the store HTTP API.
//!
//! One generic set of CRUD calls serves every collection; the collection and
//! its wire types come from [`ApiResource`].

pub mod api;
pub mod error;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

pub use api::{
    ApiResource, Customer, CustomerRequest, Genre, GenreRequest, Movie, MovieRequest,
    MovieSnapshot, Rental, RentalRequest,
};
pub use error::{ClientError, Result};

/// Header carrying the API token on every request.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Client for interacting with the store API.
///
/// Cloning is cheap and clones share the connection pool. No state is kept
/// between calls.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base: Url,
    token: String,
    http: reqwest::Client,
}

impl StoreClient {
    /// Create a client for `{address}:{port}/`.
    ///
    /// `address` may omit the scheme, in which case `http://` is assumed.
    pub fn new(address: &str, port: u16, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let address = address.trim_end_matches('/');
        let raw = if address.contains("://") {
            format!("{}:{}/", address, port)
        } else {
            format!("http://{}:{}/", address, port)
        };
        let base = Url::parse(&raw).map_err(|e| ClientError::Url {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base,
            token: token.into(),
            http,
        })
    }

    /// Base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// List all objects of a collection, keyed by id.
    pub async fn list<T: ApiResource>(&self) -> Result<HashMap<String, T>> {
        let url = self.collection_url::<T>()?;
        let body = self.send(self.request(Method::GET, url)).await?;
        let items: Vec<T> = decode(T::NAME, &body)?;
        Ok(items
            .into_iter()
            .map(|item| (item.id().to_string(), item))
            .collect())
    }

    /// Get one object by id.
    pub async fn get<T: ApiResource>(&self, id: &str) -> Result<T> {
        let url = self.item_url::<T>(id)?;
        let body = self.send(self.request(Method::GET, url)).await?;
        decode(T::NAME, &body)
    }

    /// Create an object; the store answers with the object including its id.
    pub async fn create<T: ApiResource>(&self, request: &T::Request) -> Result<T> {
        let url = self.collection_url::<T>()?;
        let body = self
            .send(self.request(Method::POST, url).json(request))
            .await?;
        decode(T::NAME, &body)
    }

    /// Replace the settable state of an object.
    pub async fn update<T: ApiResource>(&self, id: &str, request: &T::Request) -> Result<()> {
        let url = self.item_url::<T>(id)?;
        self.send(self.request(Method::PUT, url).json(request))
            .await?;
        Ok(())
    }

    /// Delete an object by id.
    pub async fn delete<T: ApiResource>(&self, id: &str) -> Result<()> {
        let url = self.item_url::<T>(id)?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    fn collection_url<T: ApiResource>(&self) -> Result<Url> {
        self.base.join(T::COLLECTION).map_err(|e| ClientError::Url {
            url: format!("{}{}", self.base, T::COLLECTION),
            reason: e.to_string(),
        })
    }

    /// URL of one object. The id becomes a single percent-encoded path
    /// segment, so it can never address another collection.
    fn item_url<T: ApiResource>(&self, id: &str) -> Result<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(ClientError::InvalidId { id: id.to_string() });
        }
        let mut url = self.collection_url::<T>()?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Url {
                url: self.base.to_string(),
                reason: "base URL cannot hold a path".to_string(),
            })?
            .push(id);
        Ok(url)
    }

    /// Start a request carrying the API token. JSON bodies added with
    /// `.json()` bring their own Content-Type; GET and DELETE send none.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "store request");
        self.http
            .request(method, url)
            .header(AUTH_HEADER, &self.token)
    }

    /// Send a request and return the body of a 200 response.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let url = response.url().clone();
            let body = response.text().await.unwrap_or_default();
            debug!(%url, %status, "store request failed");
            return Err(error::classify(status, body));
        }

        Ok(response.text().await?)
    }
}

fn decode<T: DeserializeOwned>(what: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode { what, source })
}
