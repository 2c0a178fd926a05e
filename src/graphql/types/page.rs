use async_graphql::{OutputType, SimpleObject};

/// The `{ page, limit, total, pages }` half of every list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
pub struct PageInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl PageInfo {
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        PageInfo {
            page,
            limit,
            total,
            pages,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(concrete(name = "UserPage", params(super::user::User)))]
#[graphql(concrete(name = "CompanyPage", params(super::company::Company)))]
#[graphql(concrete(name = "VehiclePage", params(super::vehicle::Vehicle)))]
#[graphql(concrete(name = "ParkingPage", params(super::parking::Parking)))]
#[graphql(concrete(name = "ReservationPage", params(super::reservation::Reservation)))]
#[graphql(concrete(name = "PaymentPage", params(super::payment::Payment)))]
#[graphql(concrete(name = "EventPage", params(super::event::Event)))]
#[graphql(concrete(name = "NotificationPage", params(super::notification::Notification)))]
pub struct Page<T: OutputType> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T: OutputType> Page<T> {
    pub fn new(data: Vec<T>, pagination: PageInfo) -> Self {
        Page { data, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_ceil_of_total_over_limit() {
        assert_eq!(PageInfo::new(1, 2, 5).pages, 3);
        assert_eq!(PageInfo::new(1, 2, 4).pages, 2);
        assert_eq!(PageInfo::new(1, 10, 0).pages, 0);
        assert_eq!(PageInfo::new(1, 1, 1).pages, 1);
    }

    #[test]
    fn zero_limit_does_not_divide_by_zero() {
        assert_eq!(PageInfo::new(1, 0, 10).pages, 0);
    }
}
