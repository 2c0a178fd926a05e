use async_graphql::MergedObject;

pub mod auth;
pub mod company;
pub mod event;
pub mod notification;
pub mod parking;
pub mod payment;
pub mod reservation;
pub mod user;
pub mod vehicle;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    auth::AuthMutation,
    user::UserMutation,
    company::CompanyMutation,
    vehicle::VehicleMutation,
    parking::ParkingMutation,
    reservation::ReservationMutation,
    payment::PaymentMutation,
    event::EventMutation,
    notification::NotificationMutation,
);
