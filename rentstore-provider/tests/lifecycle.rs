//! Lifecycle tests for each resource kind against the mock store.

mod common;

use common::{customer, genre, movie, rental, TestStore};
use rentstore_provider::{
    ChangePlan, CustomerAttributes, CustomerResource, GenreResource, MovieResource, ProviderError,
    RentalResource, Resource, ResourceId,
};

#[tokio::test]
async fn test_genre_create_binds_id() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    let id = instance.id().cloned().expect("id bound after create");
    assert!(!id.as_str().is_empty());
    assert_eq!(instance.attributes.name, "comedy");

    let inner = store.server.state.inner.read().await;
    assert_eq!(inner.genres[id.as_str()].name, "comedy");
    drop(inner);

    store.shutdown().await;
}

#[tokio::test]
async fn test_read_is_idempotent() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    let first = instance.clone();
    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert_eq!(instance, first);

    store.shutdown().await;
}

#[tokio::test]
async fn test_customer_update_changes_phone_only() {
    let store = TestStore::spawn().await;

    let mut instance = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    let desired = CustomerAttributes {
        phone: "987654321".to_string(),
        ..instance.attributes.clone()
    };
    assert_eq!(
        CustomerResource::plan_change(&instance.attributes, &desired),
        ChangePlan::InPlace(vec!["phone"])
    );

    CustomerResource
        .update(&store.provider, &mut instance, desired)
        .await
        .unwrap();

    assert_eq!(instance.id(), Some(&id));
    assert_eq!(instance.attributes.phone, "987654321");
    assert_eq!(instance.attributes.name, "foobar");

    let inner = store.server.state.inner.read().await;
    let remote = &inner.customers[id.as_str()];
    assert_eq!(remote.phone, "987654321");
    assert_eq!(remote.name, "foobar");
    assert!(!remote.is_gold);
    drop(inner);

    store.shutdown().await;
}

#[tokio::test]
async fn test_update_without_changes_makes_no_call() {
    let store = TestStore::spawn().await;

    let mut instance = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    let before = store.requests();
    let desired = instance.attributes.clone();
    CustomerResource
        .update(&store.provider, &mut instance, desired)
        .await
        .unwrap();
    assert_eq!(store.requests(), before);

    store.shutdown().await;
}

#[tokio::test]
async fn test_frozen_change_requires_replacement() {
    let store = TestStore::spawn().await;

    let mut instance = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    let before = store.requests();
    let desired = CustomerAttributes {
        name: "barfoo".to_string(),
        ..instance.attributes.clone()
    };
    let err = CustomerResource
        .update(&store.provider, &mut instance, desired)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ProviderError::RequiresReplacement { ref fields, .. } if fields == &vec!["name"]),
        "{err}"
    );
    assert_eq!(store.requests(), before);
    assert_eq!(instance.id(), Some(&id));
    assert_eq!(instance.attributes.name, "foobar");

    store.shutdown().await;
}

#[tokio::test]
async fn test_movie_create_resolves_genre() {
    let store = TestStore::spawn().await;
    let comedy = store.server.state.insert_genre("comedy").await;

    let mut instance = movie("example", &comedy.id, 100, 10.0);
    MovieResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    assert!(instance.is_present());
    assert_eq!(instance.attributes.title, "example");
    assert_eq!(instance.attributes.stock, 100);
    assert_eq!(instance.attributes.daily_rate, 10.0);
    assert_eq!(instance.attributes.genre.len(), 1);
    assert_eq!(instance.attributes.genre[0].id, comedy.id);
    assert_eq!(instance.attributes.genre[0].name, "comedy");

    store.shutdown().await;
}

#[tokio::test]
async fn test_movie_with_unknown_genre_is_not_bound() {
    let store = TestStore::spawn().await;

    let mut instance = movie("example", "000000000000000000000000", 1, 1.0);
    let err = MovieResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid genre."), "{err}");
    assert!(!err.is_not_found());
    assert!(!instance.is_present());

    store.shutdown().await;
}

#[tokio::test]
async fn test_rental_create_records_snapshots() {
    let store = TestStore::spawn().await;
    let state = &store.server.state;
    let comedy = state.insert_genre("comedy").await;
    let cust = state.insert_customer("foobar", "12345", true).await;
    let film = state
        .insert_movie("example", &comedy.id, 2, 3.5)
        .await
        .unwrap();

    let mut instance = rental(&cust.id, &film.id);
    RentalResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    assert!(instance.is_present());
    let attrs = &instance.attributes;
    assert_eq!(attrs.customer[0].id, cust.id);
    assert_eq!(attrs.customer[0].name, "foobar");
    assert_eq!(attrs.customer[0].phone, "12345");
    assert!(attrs.customer[0].isgold);
    assert_eq!(attrs.movie[0].id, film.id);
    assert_eq!(attrs.movie[0].title, "example");
    assert_eq!(attrs.movie[0].dailyrentalrate, 3.5);
    assert!(attrs.date_out.as_deref().is_some_and(|d| !d.is_empty()));

    let inner = state.inner.read().await;
    assert_eq!(inner.movies[&film.id].number_in_stock, 1);
    drop(inner);

    store.shutdown().await;
}

#[tokio::test]
async fn test_rental_out_of_stock_is_not_bound() {
    let store = TestStore::spawn().await;
    let state = &store.server.state;
    let comedy = state.insert_genre("comedy").await;
    let cust = state.insert_customer("foobar", "12345", false).await;
    let film = state
        .insert_movie("example", &comedy.id, 0, 1.0)
        .await
        .unwrap();

    let mut instance = rental(&cust.id, &film.id);
    let err = RentalResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap_err();

    match &err {
        ProviderError::Remote { source, id, .. } => {
            assert_eq!(source.status().map(|s| s.as_u16()), Some(400));
            assert!(id.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!instance.is_present());
    assert!(instance.attributes.date_out.is_none());

    store.shutdown().await;
}

#[tokio::test]
async fn test_missing_reference_fails_before_any_call() {
    let store = TestStore::spawn().await;

    let mut instance = rental("cust1", "mov1");
    instance.attributes.movie.clear();

    let before = store.requests();
    let err = RentalResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::MissingReference { field: "movie", .. }
    ));
    assert_eq!(store.requests(), before);
    assert!(!instance.is_present());

    store.shutdown().await;
}

#[tokio::test]
async fn test_invalid_name_fails_before_any_call() {
    let store = TestStore::spawn().await;

    let mut instance = genre("romantic comedy");
    let err = GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::InvalidAttribute { field: "name", .. }
    ));
    assert_eq!(store.requests(), 0);

    store.shutdown().await;
}

#[tokio::test]
async fn test_create_twice_is_rejected() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    let before = store.requests();
    let err = GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::AlreadyBound { .. }));
    assert_eq!(store.requests(), before);
    assert_eq!(store.server.state.inner.read().await.genres.len(), 1);

    store.shutdown().await;
}

#[tokio::test]
async fn test_import_then_read() {
    let store = TestStore::spawn().await;
    let comedy = store.server.state.insert_genre("comedy").await;

    let mut instance = GenreResource.import(comedy.id.as_str());
    assert_eq!(instance.id(), Some(&ResourceId::new(comedy.id.clone())));
    assert!(instance.attributes.name.is_empty());

    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert_eq!(instance.attributes.name, "comedy");

    store.shutdown().await;
}

#[tokio::test]
async fn test_delete_clears_id() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();

    let probe = instance.clone();
    GenreResource
        .delete(&store.provider, &mut instance)
        .await
        .unwrap();

    assert!(!instance.is_present());
    assert!(store.server.state.inner.read().await.genres.is_empty());
    assert!(!GenreResource.exists(&store.provider, &probe).await.unwrap());

    store.shutdown().await;
}

#[tokio::test]
async fn test_list_keys_by_id() {
    let store = TestStore::spawn().await;
    let comedy = store.server.state.insert_genre("comedy").await;
    let drama = store.server.state.insert_genre("drama").await;

    let genres = store
        .provider
        .client()
        .list::<rentstore_provider::client::Genre>()
        .await
        .unwrap();

    assert_eq!(genres.len(), 2);
    assert_eq!(genres[&comedy.id].name, "comedy");
    assert_eq!(genres[&drama.id].name, "drama");

    store.shutdown().await;
}
