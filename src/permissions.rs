//! Role -> capability resolution.
//!
//! Each role's record is authored independently; there is no inheritance or
//! composition between roles. The table is static data, so resolution is a
//! lookup, not a branch chain, and an absent role degrades to the all-false
//! record instead of failing.

use async_graphql::SimpleObject;
use entity::sea_orm_active_enums::UserRole;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub can_view_dashboard: bool,
    pub can_manage_users: bool,
    pub can_manage_companies: bool,
    pub can_manage_parkings: bool,
    pub can_manage_reservations: bool,
    pub can_manage_vehicles: bool,
    pub can_manage_payments: bool,
    pub can_manage_events: bool,
    pub can_view_reports: bool,
    pub can_scan_qr: bool,
    pub can_create_reservations: bool,
    pub can_cancel_reservations: bool,
    pub can_view_own_reservations: bool,
    pub can_view_all_reservations: bool,
}

impl Permissions {
    /// Record returned for unauthenticated or unrecognized principals.
    pub const NONE: Permissions = Permissions {
        can_view_dashboard: false,
        can_manage_users: false,
        can_manage_companies: false,
        can_manage_parkings: false,
        can_manage_reservations: false,
        can_manage_vehicles: false,
        can_manage_payments: false,
        can_manage_events: false,
        can_view_reports: false,
        can_scan_qr: false,
        can_create_reservations: false,
        can_cancel_reservations: false,
        can_view_own_reservations: false,
        can_view_all_reservations: false,
    };

    /// Total lookup: every known role maps to exactly one record, no role
    /// maps to more than one, absent role maps to `NONE`.
    pub fn for_role(role: Option<UserRole>) -> Permissions {
        let Some(role) = role else {
            return Permissions::NONE;
        };
        ROLE_CAPABILITIES
            .iter()
            .find(|(candidate, _)| *candidate == role)
            .map(|(_, permissions)| *permissions)
            .unwrap_or(Permissions::NONE)
    }
}

const ROLE_CAPABILITIES: [(UserRole, Permissions); 5] = [
    (
        UserRole::Admin,
        Permissions {
            can_view_dashboard: true,
            can_manage_users: true,
            can_manage_companies: true,
            can_manage_parkings: true,
            can_manage_reservations: true,
            can_manage_vehicles: true,
            can_manage_payments: true,
            can_manage_events: true,
            can_view_reports: true,
            can_scan_qr: true,
            can_create_reservations: true,
            can_cancel_reservations: true,
            can_view_own_reservations: true,
            can_view_all_reservations: true,
        },
    ),
    (
        UserRole::Manager,
        Permissions {
            can_view_dashboard: true,
            can_manage_users: false,
            can_manage_companies: false,
            can_manage_parkings: true,
            can_manage_reservations: true,
            can_manage_vehicles: false,
            can_manage_payments: true,
            can_manage_events: true,
            can_view_reports: true,
            can_scan_qr: true,
            can_create_reservations: true,
            can_cancel_reservations: true,
            can_view_own_reservations: true,
            can_view_all_reservations: true,
        },
    ),
    (
        UserRole::Valet,
        Permissions {
            can_view_dashboard: true,
            can_manage_users: false,
            can_manage_companies: false,
            can_manage_parkings: false,
            can_manage_reservations: false,
            can_manage_vehicles: false,
            can_manage_payments: false,
            can_manage_events: true,
            can_view_reports: false,
            can_scan_qr: true,
            can_create_reservations: false,
            can_cancel_reservations: false,
            can_view_own_reservations: true,
            can_view_all_reservations: true,
        },
    ),
    (
        UserRole::Employee,
        Permissions {
            can_view_dashboard: true,
            can_manage_users: false,
            can_manage_companies: false,
            can_manage_parkings: false,
            can_manage_reservations: false,
            can_manage_vehicles: false,
            can_manage_payments: false,
            can_manage_events: false,
            can_view_reports: false,
            can_scan_qr: false,
            can_create_reservations: true,
            can_cancel_reservations: true,
            can_view_own_reservations: true,
            can_view_all_reservations: false,
        },
    ),
    (
        UserRole::Client,
        Permissions {
            can_view_dashboard: false,
            can_manage_users: false,
            can_manage_companies: false,
            can_manage_parkings: false,
            can_manage_reservations: false,
            can_manage_vehicles: false,
            can_manage_payments: false,
            can_manage_events: false,
            can_view_reports: false,
            can_scan_qr: false,
            can_create_reservations: true,
            can_cancel_reservations: true,
            can_view_own_reservations: true,
            can_view_all_reservations: false,
        },
    ),
];
