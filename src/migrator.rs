use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_customer_quotations_table::Migration),
            Box::new(m20250101_000002_create_quotations_table::Migration),
            Box::new(m20250101_000003_create_quotation_details_table::Migration),
            Box::new(m20250101_000004_create_error_logs_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250101_000001_create_customer_quotations_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_customer_quotations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // One summary row per quotation number
            manager
                .create_table(
                    Table::create()
                        .table(CustomerQuotations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CustomerQuotations::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::QuotationNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::CustomerName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::ProductName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::IsAdopted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::AdoptedVersionId)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::AdoptedVersionName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::AdoptedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::AdoptedBy)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::AdoptionReason)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::TotalVersions)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(CustomerQuotations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .unique()
                        .name("idx_customer_quotations_quotation_number")
                        .table(CustomerQuotations::Table)
                        .col(CustomerQuotations::QuotationNumber)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_customer_quotations_created_at")
                        .table(CustomerQuotations::Table)
                        .col(CustomerQuotations::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CustomerQuotations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum CustomerQuotations {
        Table,
        Id,
        QuotationNumber,
        CustomerName,
        ProductName,
        IsAdopted,
        AdoptedVersionId,
        AdoptedVersionName,
        AdoptedAt,
        AdoptedBy,
        AdoptionReason,
        TotalVersions,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000002_create_quotations_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_quotations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Version rows; several per quotation number
            manager
                .create_table(
                    Table::create()
                        .table(Quotations::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Quotations::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(Quotations::QuotationNumber)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Quotations::CustomerName).string().not_null())
                        .col(ColumnDef::new(Quotations::ProductName).string().null())
                        .col(ColumnDef::new(Quotations::VersionId).string().not_null())
                        .col(ColumnDef::new(Quotations::VersionName).string().null())
                        .col(ColumnDef::new(Quotations::ActiveVersionId).string().null())
                        .col(
                            ColumnDef::new(Quotations::IsAdopted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Quotations::AdoptedVersionId).string().null())
                        .col(
                            ColumnDef::new(Quotations::AdoptedVersionName)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Quotations::AdoptedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Quotations::AdoptedBy).string().null())
                        .col(ColumnDef::new(Quotations::AdoptionReason).string().null())
                        .col(ColumnDef::new(Quotations::QuotationDate).date().null())
                        .col(ColumnDef::new(Quotations::ValidityPeriod).integer().null())
                        .col(
                            ColumnDef::new(Quotations::IncludeTax)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Quotations::TaxRate)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::ProfitRate)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::TotalMoldCost)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::TotalCost)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::TotalQuotation)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::TotalProfit)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::ItemCount)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Quotations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Quotations::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotations_quotation_number")
                        .table(Quotations::Table)
                        .col(Quotations::QuotationNumber)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotations_version_id")
                        .table(Quotations::Table)
                        .col(Quotations::VersionId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Quotations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Quotations {
        Table,
        Id,
        QuotationNumber,
        CustomerName,
        ProductName,
        VersionId,
        VersionName,
        ActiveVersionId,
        IsAdopted,
        AdoptedVersionId,
        AdoptedVersionName,
        AdoptedAt,
        AdoptedBy,
        AdoptionReason,
        QuotationDate,
        ValidityPeriod,
        IncludeTax,
        TaxRate,
        ProfitRate,
        TotalMoldCost,
        TotalCost,
        TotalQuotation,
        TotalProfit,
        ItemCount,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000003_create_quotation_details_table {

    use super::m20250101_000002_create_quotations_table::Quotations;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_quotation_details_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(QuotationDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(QuotationDetails::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::QuotationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(QuotationDetails::Idx).integer().not_null())
                        .col(
                            ColumnDef::new(QuotationDetails::PartName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(QuotationDetails::Material).string().null())
                        .col(ColumnDef::new(QuotationDetails::ProcessType).string().null())
                        .col(
                            ColumnDef::new(QuotationDetails::UnitWeight)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::CycleTime)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::DailyOutput)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::MoldCost)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::RawMaterialPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::InjectionPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::ProcessingFee)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::CostTotal)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::QuotationTotal)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::Profit)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(QuotationDetails::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_quotation_details_quotation_id")
                                .from(QuotationDetails::Table, QuotationDetails::QuotationId)
                                .to(Quotations::Table, Quotations::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_quotation_details_quotation_id")
                        .table(QuotationDetails::Table)
                        .col(QuotationDetails::QuotationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(QuotationDetails::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum QuotationDetails {
        Table,
        Id,
        QuotationId,
        Idx,
        PartName,
        Material,
        ProcessType,
        UnitWeight,
        CycleTime,
        DailyOutput,
        MoldCost,
        RawMaterialPrice,
        InjectionPrice,
        ProcessingFee,
        CostTotal,
        QuotationTotal,
        Profit,
        CreatedAt,
    }
}

mod m20250101_000004_create_error_logs_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000004_create_error_logs_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ErrorLogs::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(ErrorLogs::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(ErrorLogs::Category).string().not_null())
                        .col(ColumnDef::new(ErrorLogs::Message).text().not_null())
                        .col(
                            ColumnDef::new(ErrorLogs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_error_logs_category")
                        .table(ErrorLogs::Table)
                        .col(ErrorLogs::Category)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ErrorLogs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ErrorLogs {
        Table,
        Id,
        Category,
        Message,
        CreatedAt,
    }
}
