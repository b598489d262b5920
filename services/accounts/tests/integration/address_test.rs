use rust_decimal::Decimal;

use portage_accounts::error::AccountsServiceError;
use portage_accounts::usecase::address::{
    CreateAddressInput, CreateAddressUseCase, CreateLocationInput, CreateLocationUseCase,
    DeleteAddressUseCase, DeleteLocationUseCase, GetAddressUseCase, ListAddressesByCityUseCase,
};
use portage_domain::pagination::PageRequest;

use crate::helpers::MockGeoStore;

fn address_input(location_id: Option<i32>, city: &str) -> CreateAddressInput {
    CreateAddressInput {
        location_id,
        line1: Some("Bole Road 12".to_owned()),
        line2: None,
        city: Some(city.to_owned()),
        region_code: Some("AA".to_owned()),
        region_name: Some("Addis Ababa".to_owned()),
        country_code: Some("ET".to_owned()),
    }
}

#[tokio::test]
async fn should_create_address_anchored_to_location() {
    let store = MockGeoStore::new();
    let location = CreateLocationUseCase {
        repo: store.clone(),
    }
    .execute(CreateLocationInput {
        latitude: Some(Decimal::new(9_036_000, 6)),
        longitude: Some(Decimal::new(38_752_000, 6)),
    })
    .await
    .unwrap();

    let address = CreateAddressUseCase {
        repo: store.clone(),
    }
    .execute(address_input(Some(location.id), "Addis Ababa"))
    .await
    .unwrap();

    let (found, found_location) = GetAddressUseCase { repo: store }
        .execute(address.id)
        .await
        .unwrap();
    assert_eq!(found.location_id, Some(location.id));
    assert_eq!(found_location.map(|l| l.id), Some(location.id));
}

#[tokio::test]
async fn should_reject_unknown_location_reference() {
    let store = MockGeoStore::new();
    let result = CreateAddressUseCase { repo: store }
        .execute(address_input(Some(99), "Addis Ababa"))
        .await;
    assert!(matches!(result, Err(AccountsServiceError::LocationNotFound)));
}

#[tokio::test]
async fn should_reject_malformed_region_code() {
    let store = MockGeoStore::new();
    let result = CreateAddressUseCase { repo: store }
        .execute(CreateAddressInput {
            region_code: Some("ADD".to_owned()),
            ..address_input(None, "Addis Ababa")
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidRegionCode)));
}

#[tokio::test]
async fn should_clear_location_reference_when_location_deleted() {
    let store = MockGeoStore::new();
    let location = CreateLocationUseCase {
        repo: store.clone(),
    }
    .execute(CreateLocationInput {
        latitude: Some(Decimal::new(8_980_000, 6)),
        longitude: Some(Decimal::new(38_757_000, 6)),
    })
    .await
    .unwrap();
    let address = CreateAddressUseCase {
        repo: store.clone(),
    }
    .execute(address_input(Some(location.id), "Addis Ababa"))
    .await
    .unwrap();

    // Deleting the location is not blocked by the dependent address.
    DeleteLocationUseCase {
        repo: store.clone(),
    }
    .execute(location.id)
    .await
    .unwrap();

    let (found, found_location) = GetAddressUseCase { repo: store }
        .execute(address.id)
        .await
        .unwrap();
    assert_eq!(found.location_id, None);
    assert!(found_location.is_none());
}

#[tokio::test]
async fn should_fail_deleting_unknown_location() {
    let store = MockGeoStore::new();
    let result = DeleteLocationUseCase { repo: store }.execute(7).await;
    assert!(matches!(result, Err(AccountsServiceError::LocationNotFound)));
}

#[tokio::test]
async fn should_list_addresses_by_city_with_pagination() {
    let store = MockGeoStore::new();
    let create = CreateAddressUseCase {
        repo: store.clone(),
    };
    for _ in 0..3 {
        create
            .execute(address_input(None, "Addis Ababa"))
            .await
            .unwrap();
    }
    create.execute(address_input(None, "Dire Dawa")).await.unwrap();

    let list = ListAddressesByCityUseCase { repo: store };
    let first_page = list
        .execute("Addis Ababa", PageRequest { per_page: 2, page: 1 })
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);

    let second_page = list
        .execute("Addis Ababa", PageRequest { per_page: 2, page: 2 })
        .await
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert!(second_page[0].id > first_page[1].id);
}

#[tokio::test]
async fn should_delete_address_once() {
    let store = MockGeoStore::new();
    let address = CreateAddressUseCase {
        repo: store.clone(),
    }
    .execute(address_input(None, "Addis Ababa"))
    .await
    .unwrap();

    let delete = DeleteAddressUseCase { repo: store };
    delete.execute(address.id).await.unwrap();
    let result = delete.execute(address.id).await;
    assert!(matches!(result, Err(AccountsServiceError::AddressNotFound)));
}
