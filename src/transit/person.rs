//! Registered users of the transport system

/// Display title for passengers
pub const PASSENGER_TITLE: &str = "Yo‘lovchi";
/// Display title for drivers
pub const DRIVER_TITLE: &str = "Haydovchi";

/// What a person is registered as. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Passenger,
    Driver { license_number: String },
}

/// A registered user, passenger or driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Unique among registered users
    pub username: String,
    pub role: Role,
}

impl Person {
    pub fn passenger(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        username: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            username: username.into(),
            role: Role::Passenger,
        }
    }

    pub fn driver(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        username: impl Into<String>,
        license_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            username: username.into(),
            role: Role::Driver {
                license_number: license_number.into(),
            },
        }
    }

    /// Human readable role title
    pub fn role_title(&self) -> &'static str {
        match self.role {
            Role::Passenger => PASSENGER_TITLE,
            Role::Driver { .. } => DRIVER_TITLE,
        }
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.role, Role::Driver { .. })
    }

    /// License number, only present for drivers
    pub fn license_number(&self) -> Option<&str> {
        match &self.role {
            Role::Passenger => None,
            Role::Driver { license_number } => Some(license_number),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
