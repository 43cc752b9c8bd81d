pub mod prelude;

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod sea_orm_active_enums;
pub mod session;
pub mod skill;
pub mod student;
pub mod user;
