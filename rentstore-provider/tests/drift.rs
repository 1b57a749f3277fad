//! Drift detection: remote objects changed or removed behind the provider's back.

mod common;

use common::{customer, genre, TestStore};
use rentstore_provider::{CustomerAttributes, CustomerResource, GenreResource, Resource};

#[tokio::test]
async fn test_read_clears_id_when_remote_is_gone() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    store
        .server
        .state
        .inner
        .write()
        .await
        .genres
        .remove(id.as_str());

    assert!(!GenreResource.exists(&store.provider, &instance).await.unwrap());

    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert!(!instance.is_present());

    // Absent now; a second read does nothing.
    let before = store.requests();
    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert_eq!(store.requests(), before);

    store.shutdown().await;
}

#[tokio::test]
async fn test_read_picks_up_remote_changes() {
    let store = TestStore::spawn().await;

    let mut instance = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    {
        let mut inner = store.server.state.inner.write().await;
        let remote = inner.customers.get_mut(id.as_str()).unwrap();
        remote.phone = "555555555".to_string();
        remote.is_gold = true;
    }

    CustomerResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert_eq!(instance.attributes.phone, "555555555");
    assert!(instance.attributes.is_gold);

    store.shutdown().await;
}

#[tokio::test]
async fn test_update_of_vanished_object_clears_id() {
    let store = TestStore::spawn().await;

    let mut instance = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    store
        .server
        .state
        .inner
        .write()
        .await
        .customers
        .remove(id.as_str());

    let desired = CustomerAttributes {
        phone: "987654321".to_string(),
        ..instance.attributes.clone()
    };
    CustomerResource
        .update(&store.provider, &mut instance, desired)
        .await
        .unwrap();
    assert!(!instance.is_present());
    assert!(store.server.state.inner.read().await.customers.is_empty());

    store.shutdown().await;
}

#[tokio::test]
async fn test_rejected_token_keeps_id() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    let intruder = store.provider_with_token("wrong-token");

    let err = GenreResource
        .read(&intruder, &mut instance)
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("Invalid token."), "{err}");
    assert!(err.to_string().contains(id.as_str()), "{err}");
    assert_eq!(instance.id(), Some(&id));
    assert_eq!(instance.attributes.name, "comedy");

    assert!(GenreResource.exists(&intruder, &instance).await.is_err());

    let err = GenreResource
        .delete(&intruder, &mut instance)
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(instance.id(), Some(&id));
    assert_eq!(store.server.state.inner.read().await.genres.len(), 1);

    store.shutdown().await;
}

#[tokio::test]
async fn test_delete_of_vanished_object_keeps_id() {
    let store = TestStore::spawn().await;

    let mut instance = genre("comedy");
    GenreResource
        .create(&store.provider, &mut instance)
        .await
        .unwrap();
    let id = instance.id().cloned().unwrap();

    store
        .server
        .state
        .inner
        .write()
        .await
        .genres
        .remove(id.as_str());

    let err = GenreResource
        .delete(&store.provider, &mut instance)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(instance.id(), Some(&id));

    store.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_store_is_transport_error() {
    let store = TestStore::spawn().await;
    let provider = store.provider.clone();

    let mut instance = genre("comedy");
    instance.id = Some("g1".into());
    store.shutdown().await;

    let err = GenreResource
        .read(&provider, &mut instance)
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert!(instance.is_present());
}

#[tokio::test]
async fn test_imported_path_like_id_stays_in_its_collection() {
    let store = TestStore::spawn().await;

    let mut cust = customer("foobar", "123456789");
    CustomerResource
        .create(&store.provider, &mut cust)
        .await
        .unwrap();
    let customer_id = cust.id().cloned().unwrap();
    let foreign = format!("../customers/{}", customer_id);

    let mut instance = GenreResource.import(foreign.as_str());
    assert!(!GenreResource.exists(&store.provider, &instance).await.unwrap());

    GenreResource
        .read(&store.provider, &mut instance)
        .await
        .unwrap();
    assert!(!instance.is_present());
    assert!(instance.attributes.name.is_empty());

    let mut instance = GenreResource.import(foreign.as_str());
    let err = GenreResource
        .delete(&store.provider, &mut instance)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let inner = store.server.state.inner.read().await;
    assert!(inner.customers.contains_key(customer_id.as_str()));
    assert!(inner.genres.is_empty());
    drop(inner);

    store.shutdown().await;
}

#[tokio::test]
async fn test_imported_dot_ids_never_reach_the_store() {
    let store = TestStore::spawn().await;
    store.server.state.insert_genre("comedy").await;

    for id in ["", ".", ".."] {
        let mut instance = GenreResource.import(id);
        assert!(!GenreResource.exists(&store.provider, &instance).await.unwrap());
        GenreResource
            .read(&store.provider, &mut instance)
            .await
            .unwrap();
        assert!(!instance.is_present(), "{:?}", id);
    }
    assert_eq!(store.requests(), 0);

    store.shutdown().await;
}
