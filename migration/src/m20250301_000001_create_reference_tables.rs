use sea_orm_migration::prelude::*;

/// 双语名称维度表，结构一致，按中文名唯一
const LOOKUP_TABLES: [&str; 8] = [
    "education_levels",
    "course_categories",
    "course_classifies",
    "class_types",
    "course_types",
    "course_gradations",
    "exam_modes",
    "teach_languages",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 维度表 ====================
        for table in LOOKUP_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(table))
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Lookup::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Lookup::NameCn)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Lookup::NameEn).string().null())
                        .to_owned(),
                )
                .await?;
        }

        // ==================== 校区表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Campuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campuses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campuses::JwId).big_integer().null())
                    .col(
                        ColumnDef::new(Campuses::NameCn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Campuses::NameEn).string().null())
                    .to_owned(),
            )
            .await?;

        // ==================== 教学楼表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buildings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Buildings::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Buildings::Code).string().not_null())
                    .col(ColumnDef::new(Buildings::NameCn).string().not_null())
                    .col(ColumnDef::new(Buildings::NameEn).string().null())
                    .col(ColumnDef::new(Buildings::CampusId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Buildings::Table, Buildings::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 教室类型表 ====================
        manager
            .create_table(
                Table::create()
                    .table(RoomTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RoomTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RoomTypes::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RoomTypes::Code).string().not_null())
                    .col(ColumnDef::new(RoomTypes::NameCn).string().not_null())
                    .col(ColumnDef::new(RoomTypes::NameEn).string().null())
                    .to_owned(),
            )
            .await?;

        // ==================== 教室表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Rooms::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Rooms::Code).string().not_null())
                    .col(ColumnDef::new(Rooms::BuildingId).big_integer().null())
                    .col(ColumnDef::new(Rooms::RoomTypeId).big_integer().null())
                    .col(ColumnDef::new(Rooms::NameCn).string().not_null())
                    .col(ColumnDef::new(Rooms::NameEn).string().null())
                    .col(ColumnDef::new(Rooms::Floor).integer().not_null())
                    .col(
                        ColumnDef::new(Rooms::Virtual)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Rooms::SeatsForSection).integer().not_null())
                    .col(ColumnDef::new(Rooms::Remark).text().null())
                    .col(ColumnDef::new(Rooms::Seats).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rooms::Table, Rooms::BuildingId)
                            .to(Buildings::Table, Buildings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rooms::Table, Rooms::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 院系表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::NameCn).string().not_null())
                    .col(ColumnDef::new(Departments::NameEn).string().null())
                    .col(
                        ColumnDef::new(Departments::IsCollege)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 行政班表 ====================
        manager
            .create_table(
                Table::create()
                    .table(AdminClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminClasses::NameCn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AdminClasses::NameEn).string().null())
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_buildings_campus_id")
                    .table(Buildings::Table)
                    .col(Buildings::CampusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_rooms_building_id")
                    .table(Rooms::Table)
                    .col(Rooms::BuildingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campuses::Table).to_owned())
            .await?;
        for table in LOOKUP_TABLES {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Lookup {
    Id,
    NameCn,
    NameEn,
}

#[derive(DeriveIden)]
enum Campuses {
    #[sea_orm(iden = "campuses")]
    Table,
    Id,
    JwId,
    NameCn,
    NameEn,
}

#[derive(DeriveIden)]
enum Buildings {
    #[sea_orm(iden = "buildings")]
    Table,
    Id,
    JwId,
    Code,
    NameCn,
    NameEn,
    CampusId,
}

#[derive(DeriveIden)]
enum RoomTypes {
    #[sea_orm(iden = "room_types")]
    Table,
    Id,
    JwId,
    Code,
    NameCn,
    NameEn,
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    JwId,
    Code,
    BuildingId,
    RoomTypeId,
    NameCn,
    NameEn,
    Floor,
    Virtual,
    SeatsForSection,
    Remark,
    Seats,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
    Code,
    NameCn,
    NameEn,
    IsCollege,
}

#[derive(DeriveIden)]
enum AdminClasses {
    #[sea_orm(iden = "admin_classes")]
    Table,
    Id,
    NameCn,
    NameEn,
}
