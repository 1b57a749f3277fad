//! Shared test utilities for rentstore-provider integration tests.

#![allow(dead_code)]

use rentstore_mock::MockServer;
use rentstore_provider::convert::{CustomerBlock, GenreBlock, MovieBlock};
use rentstore_provider::{
    CustomerAttributes, GenreAttributes, Instance, MovieAttributes, Provider, ProviderConfig,
    RentalAttributes,
};

pub const TOKEN: &str = "test-token";

/// A mock store plus a provider configured against it.
pub struct TestStore {
    pub server: MockServer,
    pub provider: Provider,
}

impl TestStore {
    /// Spawn a mock store and configure a provider with the right token.
    pub async fn spawn() -> Self {
        let server = MockServer::spawn(TOKEN)
            .await
            .expect("Failed to start mock store");
        let provider = provider_for(&server, TOKEN);
        Self { server, provider }
    }

    /// A provider pointed at the same store but sending `token`.
    pub fn provider_with_token(&self, token: &str) -> Provider {
        provider_for(&self.server, token)
    }

    pub fn requests(&self) -> usize {
        self.server.request_count()
    }

    pub async fn shutdown(self) {
        let TestStore { server, provider } = self;
        drop(provider);
        server.shutdown().await;
    }
}

fn provider_for(server: &MockServer, token: &str) -> Provider {
    let config = ProviderConfig::new(server.address(), server.port(), token);
    Provider::configure(&config).expect("Failed to configure provider")
}

pub fn genre(name: &str) -> Instance<GenreAttributes> {
    Instance::declared(GenreAttributes {
        name: name.to_string(),
    })
}

pub fn customer(name: &str, phone: &str) -> Instance<CustomerAttributes> {
    Instance::declared(CustomerAttributes {
        name: name.to_string(),
        phone: phone.to_string(),
        is_gold: false,
    })
}

pub fn movie(title: &str, genre_id: &str, stock: u32, daily_rate: f64) -> Instance<MovieAttributes> {
    Instance::declared(MovieAttributes {
        title: title.to_string(),
        genre: vec![GenreBlock {
            id: genre_id.to_string(),
            ..Default::default()
        }],
        stock,
        daily_rate,
    })
}

pub fn rental(customer_id: &str, movie_id: &str) -> Instance<RentalAttributes> {
    Instance::declared(RentalAttributes {
        customer: vec![CustomerBlock {
            id: customer_id.to_string(),
            ..Default::default()
        }],
        movie: vec![MovieBlock {
            id: movie_id.to_string(),
            ..Default::default()
        }],
        date_out: None,
    })
}
