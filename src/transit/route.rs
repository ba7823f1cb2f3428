//! Addresses and routes between them

/// A named location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub location: String,
}

impl Address {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// A path from `start` to `end` through `stops`, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub start: Address,
    pub end: Address,
    pub stops: Vec<Address>,
}

impl Route {
    pub fn new(start: Address, end: Address, stops: Vec<Address>) -> Self {
        Self { start, end, stops }
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// "start → stop, stop → end". A route without stops renders as
    /// "start → end".
    pub fn path(&self) -> String {
        if self.stops.is_empty() {
            return format!("{} → {}", self.start.location, self.end.location);
        }

        let stops: Vec<&str> = self.stops.iter().map(|s| s.location.as_str()).collect();
        format!(
            "{} → {} → {}",
            self.start.location,
            stops.join(", "),
            self.end.location
        )
    }

    pub fn route_info(&self) -> String {
        format!("Yo'nalish: {}", self.path())
    }
}
