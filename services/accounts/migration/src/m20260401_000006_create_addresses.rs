use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::LocationId).integer())
                    .col(ColumnDef::new(Addresses::Line1).text())
                    .col(ColumnDef::new(Addresses::Line2).text())
                    .col(ColumnDef::new(Addresses::City).text())
                    .col(ColumnDef::new(Addresses::RegionCode).string_len(2))
                    .col(ColumnDef::new(Addresses::RegionName).text())
                    .col(ColumnDef::new(Addresses::CountryCode).string_len(2))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Addresses::Table, Addresses::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Addresses::Table)
                    .col(Addresses::LocationId)
                    .name("idx_addresses_location_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    Id,
    LocationId,
    Line1,
    Line2,
    City,
    RegionCode,
    RegionName,
    CountryCode,
}

#[derive(Iden)]
enum Locations {
    Table,
    Id,
}
