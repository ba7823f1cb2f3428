//! Public Transport Console
//!
//! Passenger and driver registration, route and timetable lookup and ticket
//! purchase over a JSON file of registered users.

pub mod app;
pub mod config;
pub mod console;
pub mod logging;
pub mod store;
pub mod transit;
