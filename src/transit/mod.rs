//! Public transport domain model
//!
//! People, vehicles, routes, tickets and the timetable. Everything here is
//! plain data plus pure formatting; console and file I/O live elsewhere.

mod network;
mod person;
mod route;
mod schedule;
mod ticket;
mod transport;
mod types;

pub use network::TransitNetwork;
pub use person::{Person, Role, DRIVER_TITLE, PASSENGER_TITLE};
pub use route::{Address, Route};
pub use schedule::{Schedule, ScheduleTimes};
pub use ticket::{calculate_ticket_price, Ticket, BASE_TICKET_PRICE, STOP_PRICE_MULTIPLIER};
pub use transport::{Transport, TransportKind, VehicleNumber};
pub use types::{DriverId, RouteId, TransportId};
