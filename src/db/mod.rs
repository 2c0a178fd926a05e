pub mod company;
pub mod event;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod postgres_service;
pub mod reservation;
pub mod user;
pub mod vehicle;
