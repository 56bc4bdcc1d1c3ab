use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 学期表
        manager
            .create_table(
                Table::create()
                    .table(Semesters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Semesters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Semesters::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Semesters::Name).string().not_null())
                    .col(ColumnDef::new(Semesters::Code).string().not_null())
                    .col(ColumnDef::new(Semesters::StartDate).date().not_null())
                    .col(ColumnDef::new(Semesters::EndDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        // 课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::NameCn).string().not_null())
                    .col(ColumnDef::new(Courses::NameEn).string().null())
                    .col(ColumnDef::new(Courses::EducationLevelId).big_integer().null())
                    .col(ColumnDef::new(Courses::GradationId).big_integer().null())
                    .col(ColumnDef::new(Courses::CategoryId).big_integer().null())
                    .col(ColumnDef::new(Courses::ClassTypeId).big_integer().null())
                    .col(ColumnDef::new(Courses::TypeId).big_integer().null())
                    .col(ColumnDef::new(Courses::ClassifyId).big_integer().null())
                    .foreign_key(&mut lookup_fk(Courses::EducationLevelId, "education_levels"))
                    .foreign_key(&mut lookup_fk(Courses::GradationId, "course_gradations"))
                    .foreign_key(&mut lookup_fk(Courses::CategoryId, "course_categories"))
                    .foreign_key(&mut lookup_fk(Courses::ClassTypeId, "class_types"))
                    .foreign_key(&mut lookup_fk(Courses::TypeId, "course_types"))
                    .foreign_key(&mut lookup_fk(Courses::ClassifyId, "course_classifies"))
                    .to_owned(),
            )
            .await?;

        // 教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::PersonId).big_integer().null())
                    .col(ColumnDef::new(Teachers::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Teachers::NameCn).string().not_null())
                    .col(ColumnDef::new(Teachers::NameEn).string().null())
                    .col(ColumnDef::new(Teachers::DepartmentId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 教学班表
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sections::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Sections::Code).string().not_null())
                    .col(ColumnDef::new(Sections::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Sections::SemesterId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Sections::OpenDepartmentId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Sections::CampusId).big_integer().null())
                    .col(ColumnDef::new(Sections::ExamModeId).big_integer().null())
                    .col(
                        ColumnDef::new(Sections::TeachLanguageId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Sections::Credits).double().null())
                    .col(ColumnDef::new(Sections::Period).integer().null())
                    .col(ColumnDef::new(Sections::PeriodsPerWeek).double().null())
                    .col(ColumnDef::new(Sections::StdCount).integer().null())
                    .col(ColumnDef::new(Sections::LimitCount).integer().null())
                    .col(
                        ColumnDef::new(Sections::GraduateAndPostgraduate)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Sections::DateTimePlaceText).text().null())
                    .col(
                        ColumnDef::new(Sections::DateTimePlacePersonText)
                            .text()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::SemesterId)
                            .to(Semesters::Table, Semesters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::OpenDepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sections::Table, Sections::CampusId)
                            .to(Campuses::Table, Campuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(&mut lookup_fk(Sections::ExamModeId, "exam_modes"))
                    .foreign_key(&mut lookup_fk(Sections::TeachLanguageId, "teach_languages"))
                    .to_owned(),
            )
            .await?;

        // 教学班-教师关联表
        manager
            .create_table(
                Table::create()
                    .table(SectionTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionTeachers::SectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SectionTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SectionTeachers::SectionId)
                            .col(SectionTeachers::TeacherId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SectionTeachers::Table, SectionTeachers::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SectionTeachers::Table, SectionTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 教学班-行政班关联表
        manager
            .create_table(
                Table::create()
                    .table(SectionAdminClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionAdminClasses::SectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SectionAdminClasses::AdminClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SectionAdminClasses::SectionId)
                            .col(SectionAdminClasses::AdminClassId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SectionAdminClasses::Table, SectionAdminClasses::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                SectionAdminClasses::Table,
                                SectionAdminClasses::AdminClassId,
                            )
                            .to(AdminClasses::Table, AdminClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 排课分组表
        manager
            .create_table(
                Table::create()
                    .table(ScheduleGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduleGroups::JwId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduleGroups::SectionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduleGroups::No).integer().not_null())
                    .col(ColumnDef::new(ScheduleGroups::LimitCount).integer().null())
                    .col(ColumnDef::new(ScheduleGroups::StdCount).integer().null())
                    .col(
                        ColumnDef::new(ScheduleGroups::ActualPeriods)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleGroups::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleGroups::Table, ScheduleGroups::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 排课表
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedules::SectionId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Schedules::ScheduleGroupId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Schedules::RoomId).big_integer().null())
                    .col(ColumnDef::new(Schedules::TeacherId).big_integer().not_null())
                    .col(ColumnDef::new(Schedules::Periods).integer().null())
                    .col(ColumnDef::new(Schedules::Date).date().null())
                    .col(ColumnDef::new(Schedules::Weekday).integer().null())
                    .col(ColumnDef::new(Schedules::StartTime).integer().null())
                    .col(ColumnDef::new(Schedules::EndTime).integer().null())
                    .col(ColumnDef::new(Schedules::Experiment).string().null())
                    .col(ColumnDef::new(Schedules::CustomPlace).string().null())
                    .col(ColumnDef::new(Schedules::LessonType).string().null())
                    .col(ColumnDef::new(Schedules::WeekIndex).integer().null())
                    .col(
                        ColumnDef::new(Schedules::ExerciseClass)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Schedules::StartUnit).integer().null())
                    .col(ColumnDef::new(Schedules::EndUnit).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::ScheduleGroupId)
                            .to(ScheduleGroups::Table, ScheduleGroups::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedules::Table, Schedules::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_semester_id")
                    .table(Sections::Table)
                    .col(Sections::SemesterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sections_course_id")
                    .table(Sections::Table)
                    .col(Sections::CourseId)
                    .to_owned(),
            )
            .await?;

        // 教师身份解析按这三列查找
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_person_id")
                    .table(Teachers::Table)
                    .col(Teachers::PersonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_teacher_id")
                    .table(Teachers::Table)
                    .col(Teachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teachers_name_cn")
                    .table(Teachers::Table)
                    .col(Teachers::NameCn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedules_section_id")
                    .table(Schedules::Table)
                    .col(Schedules::SectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_schedule_groups_section_id")
                    .table(ScheduleGroups::Table)
                    .col(ScheduleGroups::SectionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduleGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SectionAdminClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SectionTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Semesters::Table).to_owned())
            .await?;
        Ok(())
    }
}

/// 指向维度表的可空外键
fn lookup_fk<C>(column: C, table: &str) -> ForeignKeyCreateStatement
where
    C: IntoIden,
{
    ForeignKey::create()
        .from_col(column)
        .to(Alias::new(table), Lookup::Id)
        .on_delete(ForeignKeyAction::SetNull)
        .to_owned()
}

#[derive(DeriveIden)]
enum Lookup {
    Id,
}

#[derive(DeriveIden)]
enum Campuses {
    #[sea_orm(iden = "campuses")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Departments {
    #[sea_orm(iden = "departments")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AdminClasses {
    #[sea_orm(iden = "admin_classes")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Semesters {
    #[sea_orm(iden = "semesters")]
    Table,
    Id,
    JwId,
    Name,
    Code,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    JwId,
    Code,
    NameCn,
    NameEn,
    EducationLevelId,
    GradationId,
    CategoryId,
    ClassTypeId,
    TypeId,
    ClassifyId,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    PersonId,
    TeacherId,
    NameCn,
    NameEn,
    DepartmentId,
}

#[derive(DeriveIden)]
enum Sections {
    #[sea_orm(iden = "sections")]
    Table,
    Id,
    JwId,
    Code,
    CourseId,
    SemesterId,
    OpenDepartmentId,
    CampusId,
    ExamModeId,
    TeachLanguageId,
    Credits,
    Period,
    PeriodsPerWeek,
    StdCount,
    LimitCount,
    GraduateAndPostgraduate,
    DateTimePlaceText,
    DateTimePlacePersonText,
}

#[derive(DeriveIden)]
enum SectionTeachers {
    #[sea_orm(iden = "section_teachers")]
    Table,
    SectionId,
    TeacherId,
}

#[derive(DeriveIden)]
enum SectionAdminClasses {
    #[sea_orm(iden = "section_admin_classes")]
    Table,
    SectionId,
    AdminClassId,
}

#[derive(DeriveIden)]
enum ScheduleGroups {
    #[sea_orm(iden = "schedule_groups")]
    Table,
    Id,
    JwId,
    SectionId,
    No,
    LimitCount,
    StdCount,
    ActualPeriods,
    IsDefault,
}

#[derive(DeriveIden)]
enum Schedules {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    SectionId,
    ScheduleGroupId,
    RoomId,
    TeacherId,
    Periods,
    Date,
    Weekday,
    StartTime,
    EndTime,
    Experiment,
    CustomPlace,
    LessonType,
    WeekIndex,
    ExerciseClass,
    StartUnit,
    EndUnit,
}
