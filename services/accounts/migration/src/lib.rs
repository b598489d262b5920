use sea_orm_migration::prelude::*;

mod m20260401_000001_create_accounts;
mod m20260401_000002_create_email_verifications;
mod m20260401_000003_create_password_resets;
mod m20260401_000004_create_users;
mod m20260401_000005_create_locations;
mod m20260401_000006_create_addresses;
mod m20260401_000007_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_accounts::Migration),
            Box::new(m20260401_000002_create_email_verifications::Migration),
            Box::new(m20260401_000003_create_password_resets::Migration),
            Box::new(m20260401_000004_create_users::Migration),
            Box::new(m20260401_000005_create_locations::Migration),
            Box::new(m20260401_000006_create_addresses::Migration),
            Box::new(m20260401_000007_add_lookup_indexes::Migration),
        ]
    }
}
