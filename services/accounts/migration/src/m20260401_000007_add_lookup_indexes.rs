use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::FirstName)
                    .name("idx_users_first_name")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::LastName)
                    .name("idx_users_last_name")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Addresses::Table)
                    .col(Addresses::City)
                    .name("idx_addresses_city")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Addresses::Table)
                    .col(Addresses::RegionCode)
                    .name("idx_addresses_region_code")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Addresses::Table)
                    .col(Addresses::RegionName)
                    .name("idx_addresses_region_name")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Addresses::Table)
                    .col(Addresses::CountryCode)
                    .name("idx_addresses_country_code")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_addresses_country_code").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_addresses_region_name").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_addresses_region_code").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_addresses_city").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_last_name").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_first_name").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    FirstName,
    LastName,
}

#[derive(Iden)]
enum Addresses {
    Table,
    City,
    RegionCode,
    RegionName,
    CountryCode,
}
