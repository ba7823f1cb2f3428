//! Departure/arrival timetable keyed by transport name

use indexmap::IndexMap;

use super::transport::Transport;

/// Departure and arrival times of one transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTimes {
    pub departure_time: String,
    pub arrival_time: String,
}

/// Timetable. Entries render in insertion order; re-adding a name replaces
/// its times in place.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    entries: IndexMap<String, ScheduleTimes>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transport(
        &mut self,
        transport: &Transport,
        departure_time: impl Into<String>,
        arrival_time: impl Into<String>,
    ) {
        self.entries.insert(
            transport.name.clone(),
            ScheduleTimes {
                departure_time: departure_time.into(),
                arrival_time: arrival_time.into(),
            },
        );
    }

    pub fn times(&self, transport_name: &str) -> Option<&ScheduleTimes> {
        self.entries.get(transport_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_schedule(&self) -> String {
        let mut info = String::from("Transport jadvali:\n");
        for (name, times) in &self.entries {
            info.push_str(&format!(
                "{}: Chiqish vaqti - {}, Kelish vaqti - {}\n",
                name, times.departure_time, times.arrival_time
            ));
        }
        info
    }
}
