pub mod company;
pub mod event;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod reservation;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicle;
