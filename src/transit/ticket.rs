//! Ticket pricing and formatting

use super::person::Person;
use super::route::Route;
use super::transport::Transport;

/// Flat fare in so'm charged for every ticket
pub const BASE_TICKET_PRICE: u64 = 10_000;
/// Extra fare in so'm per intermediate stop
pub const STOP_PRICE_MULTIPLIER: u64 = 5_000;

/// Price of a ticket along `route`
pub fn calculate_ticket_price(route: &Route) -> u64 {
    BASE_TICKET_PRICE + route.stop_count() as u64 * STOP_PRICE_MULTIPLIER
}

/// A purchased ticket. Borrows the network entities it refers to.
#[derive(Debug, Clone, Copy)]
pub struct Ticket<'a> {
    pub transport: &'a Transport,
    pub price: u64,
    pub passenger: &'a Person,
    pub route: &'a Route,
}

impl<'a> Ticket<'a> {
    /// Issue a ticket priced from the route
    pub fn issue(transport: &'a Transport, passenger: &'a Person, route: &'a Route) -> Self {
        Self {
            transport,
            price: calculate_ticket_price(route),
            passenger,
            route,
        }
    }

    pub fn ticket_info(&self) -> String {
        format!(
            "{} uchun chipta:\nTransport: {} ({})\nNarxi: {} so'm\nYo'nalish: {}",
            self.passenger.full_name(),
            self.transport.name,
            self.transport.number,
            self.price,
            self.route.path()
        )
    }
}
