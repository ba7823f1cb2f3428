//! Identifier types for the transit network
//!
//! Entities refer to each other by index into the owning `TransitNetwork`
//! rather than by pointer.

/// A wrapper type for driver IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverId(pub usize);

/// A wrapper type for transport IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransportId(pub usize);

/// A wrapper type for route IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub usize);
