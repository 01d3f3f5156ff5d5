use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts AUTOINCREMENT on an `integer` primary key.
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buildings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Buildings::Name).text().not_null())
                    .col(ColumnDef::new(Buildings::Address).text().not_null())
                    .col(ColumnDef::new(Buildings::Floors).integer().not_null())
                    .col(ColumnDef::new(Buildings::YearBuilt).integer().not_null())
                    .col(
                        ColumnDef::new(Buildings::BuildingCode)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Buildings {
    Table,
    Id,
    Name,
    Address,
    Floors,
    YearBuilt,
    BuildingCode,
}
