use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==========================================
        // 1. Instructor
        // ==========================================
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(uuid(Instructor::Id).primary_key())
                    .col(uuid_null(Instructor::UserId))
                    .col(string(Instructor::FirstName).not_null())
                    .col(string(Instructor::LastName).not_null())
                    .col(string(Instructor::Email).not_null().unique_key())
                    .col(string(Instructor::Specialization).not_null())
                    .col(string(Instructor::Degree).not_null().default(""))
                    .col(text(Instructor::Bio).not_null().default(""))
                    .col(boolean(Instructor::IsActive).not_null().default(true))
                    .col(
                        timestamp(Instructor::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-instructor-user")
                            .from(Instructor::Table, Instructor::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx-unique-instructor-user")
                            .col(Instructor::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==========================================
        // 2. Course (Ref Instructor, SET NULL on delete)
        // ==========================================
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(uuid(Course::Id).primary_key())
                    .col(string(Course::Title).not_null().unique_key())
                    .col(string(Course::Slug).not_null().unique_key())
                    .col(text(Course::Description).not_null())
                    .col(integer(Course::Duration).not_null())
                    .col(uuid_null(Course::InstructorId))
                    .col(
                        string_len(Course::Level, 12)
                            .not_null()
                            .default("BEGINNER"),
                    )
                    .col(integer(Course::MaxStudents).not_null().default(20))
                    .col(decimal_len(Course::Price, 10, 2).not_null().default(0))
                    .col(boolean(Course::IsActive).not_null().default(true))
                    .col(
                        timestamp(Course::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Course::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course-instructor")
                            .from(Course::Table, Course::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==========================================
        // 3. Student (Ref User)
        // ==========================================
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(uuid(Student::Id).primary_key())
                    .col(uuid_null(Student::UserId))
                    .col(string(Student::FirstName).not_null())
                    .col(string(Student::LastName).not_null())
                    .col(string(Student::Email).not_null().unique_key())
                    .col(date_null(Student::BirthDate))
                    .col(string_len(Student::Faculty, 3).not_null().default("CS"))
                    .col(integer(Student::Year).not_null().default(1))
                    .col(decimal_len(Student::Gpa, 3, 2).not_null().default(0))
                    .col(string_len(Student::Role, 10).not_null().default("STUDENT"))
                    .col(string(Student::Phone).not_null().default(""))
                    .col(text(Student::Bio).not_null().default(""))
                    .col(boolean(Student::IsActive).not_null().default(true))
                    .col(
                        timestamp(Student::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp(Student::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student-user")
                            .from(Student::Table, Student::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx-unique-student-user")
                            .col(Student::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==========================================
        // 4. Enrollment (Ref Student, Course)
        // ==========================================
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(uuid(Enrollment::Id).primary_key())
                    .col(uuid(Enrollment::StudentId).not_null())
                    .col(uuid(Enrollment::CourseId).not_null())
                    .col(
                        string_len(Enrollment::Status, 10)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(decimal_len_null(Enrollment::Grade, 3, 2))
                    .col(
                        timestamp(Enrollment::EnrolledAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollment-student")
                            .from(Enrollment::Table, Enrollment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollment-course")
                            .from(Enrollment::Table, Enrollment::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // One enrollment per (student, course); this index is the
                    // hard backstop for the duplicate check under concurrency.
                    .index(
                        Index::create()
                            .name("idx-unique-student-course")
                            .col(Enrollment::StudentId)
                            .col(Enrollment::CourseId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==========================================
        // 5. Skill (Ref Student)
        // ==========================================
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(uuid(Skill::Id).primary_key())
                    .col(uuid(Skill::StudentId).not_null())
                    .col(string(Skill::Name).not_null())
                    .col(integer(Skill::Level).not_null().default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-skill-student")
                            .from(Skill::Table, Skill::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop Dependents
        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        // Drop Parents
        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await?;

        Ok(())
    }
}

// --- IDEN Definitions ---

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Instructor {
    #[sea_orm(iden = "instructors")]
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    Specialization,
    Degree,
    Bio,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Title,
    Slug,
    Description,
    Duration,
    InstructorId,
    Level,
    MaxStudents,
    Price,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Email,
    BirthDate,
    Faculty,
    Year,
    Gpa,
    Role,
    Phone,
    Bio,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollment {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    StudentId,
    CourseId,
    Status,
    Grade,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum Skill {
    #[sea_orm(iden = "skills")]
    Table,
    Id,
    StudentId,
    Name,
    Level,
}
