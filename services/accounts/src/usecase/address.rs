use rust_decimal::Decimal;

use portage_domain::pagination::PageRequest;

use crate::domain::repository::{AddressRepository, LocationRepository, NewAddress};
use crate::domain::types::{Address, Location, validate_two_letter_code};
use crate::error::AccountsServiceError;

// ── CreateLocation ───────────────────────────────────────────────────────────

pub struct CreateLocationInput {
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

pub struct CreateLocationUseCase<R: LocationRepository> {
    pub repo: R,
}

impl<R: LocationRepository> CreateLocationUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateLocationInput,
    ) -> Result<Location, AccountsServiceError> {
        self.repo.create(input.latitude, input.longitude).await
    }
}

// ── DeleteLocation ───────────────────────────────────────────────────────────

pub struct DeleteLocationUseCase<R: LocationRepository> {
    pub repo: R,
}

impl<R: LocationRepository> DeleteLocationUseCase<R> {
    /// Dependent addresses survive with their location reference cleared
    /// (set-null-on-delete); the delete itself is never blocked by them.
    pub async fn execute(&self, location_id: i32) -> Result<(), AccountsServiceError> {
        if self.repo.delete(location_id).await? {
            Ok(())
        } else {
            Err(AccountsServiceError::LocationNotFound)
        }
    }
}

// ── CreateAddress ────────────────────────────────────────────────────────────

pub struct CreateAddressInput {
    pub location_id: Option<i32>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub country_code: Option<String>,
}

pub struct CreateAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> CreateAddressUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateAddressInput,
    ) -> Result<Address, AccountsServiceError> {
        for code in [&input.region_code, &input.country_code].into_iter().flatten() {
            if !validate_two_letter_code(code) {
                return Err(AccountsServiceError::InvalidRegionCode);
            }
        }
        let address = NewAddress {
            location_id: input.location_id,
            line1: input.line1,
            line2: input.line2,
            city: input.city,
            region_code: input.region_code,
            region_name: input.region_name,
            country_code: input.country_code,
        };
        self.repo.create(&address).await
    }
}

// ── GetAddress ───────────────────────────────────────────────────────────────

pub struct GetAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> GetAddressUseCase<R> {
    /// Returns the address together with its location, if one is still
    /// attached.
    pub async fn execute(
        &self,
        address_id: i32,
    ) -> Result<(Address, Option<Location>), AccountsServiceError> {
        self.repo
            .find_with_location(address_id)
            .await?
            .ok_or(AccountsServiceError::AddressNotFound)
    }
}

// ── ListAddressesByCity ──────────────────────────────────────────────────────

pub struct ListAddressesByCityUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> ListAddressesByCityUseCase<R> {
    pub async fn execute(
        &self,
        city: &str,
        page: PageRequest,
    ) -> Result<Vec<Address>, AccountsServiceError> {
        self.repo.list_by_city(city, page).await
    }
}

// ── DeleteAddress ────────────────────────────────────────────────────────────

pub struct DeleteAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> DeleteAddressUseCase<R> {
    pub async fn execute(&self, address_id: i32) -> Result<(), AccountsServiceError> {
        if self.repo.delete(address_id).await? {
            Ok(())
        } else {
            Err(AccountsServiceError::AddressNotFound)
        }
    }
}
