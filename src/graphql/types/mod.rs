//! GraphQL wire types, one module per entity.
//!
//! Object types mirror the persisted models minus credentials; input objects
//! are the typed mutation payloads. Pagination envelopes live in `page`.

pub mod auth;
pub mod company;
pub mod event;
pub mod notification;
pub mod page;
pub mod parking;
pub mod payment;
pub mod reservation;
pub mod user;
pub mod vehicle;
