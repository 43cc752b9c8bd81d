pub use sea_orm_migration::prelude::*;

mod m20260712_000001_init_identity_schema;
mod m20260712_000002_init_campus_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_init_identity_schema::Migration),
            Box::new(m20260712_000002_init_campus_schema::Migration),
        ]
    }
}
