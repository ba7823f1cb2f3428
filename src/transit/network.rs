//! The transit network context
//!
//! Owns every driver, vehicle, route and the timetable for the lifetime of
//! the process. Built once at startup and passed to the console flows.

use anyhow::{bail, Context, Result};

use super::person::Person;
use super::route::{Address, Route};
use super::schedule::Schedule;
use super::transport::{Transport, TransportKind, VehicleNumber};
use super::types::{DriverId, RouteId, TransportId};

/// All fixed transit entities
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    drivers: Vec<Person>,
    transports: Vec<Transport>,
    routes: Vec<Route>,
    schedule: Schedule,
}

impl TransitNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a driver. Fails if the person is registered as a passenger.
    pub fn add_driver(&mut self, driver: Person) -> Result<DriverId> {
        if !driver.is_driver() {
            bail!("{} is not registered as a driver", driver.username);
        }
        let id = DriverId(self.drivers.len());
        self.drivers.push(driver);
        Ok(id)
    }

    /// Add a vehicle operated by an existing driver
    pub fn add_transport(
        &mut self,
        kind: TransportKind,
        name: &str,
        number: impl Into<VehicleNumber>,
        color: &str,
        driver: DriverId,
    ) -> Result<TransportId> {
        self.driver(driver).with_context(|| {
            format!("Transport '{}' references unknown driver {:?}", name, driver)
        })?;

        let id = TransportId(self.transports.len());
        self.transports
            .push(Transport::new(kind, name, number, color, driver));
        Ok(id)
    }

    pub fn add_route(&mut self, route: Route) -> RouteId {
        let id = RouteId(self.routes.len());
        self.routes.push(route);
        id
    }

    pub fn driver(&self, id: DriverId) -> Option<&Person> {
        self.drivers.get(id.0)
    }

    pub fn transport(&self, id: TransportId) -> Option<&Transport> {
        self.transports.get(id.0)
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    /// First vehicle of the given kind
    pub fn transport_of_kind(&self, kind: TransportKind) -> Option<&Transport> {
        self.transports.iter().find(|t| t.kind == kind)
    }

    /// The route offered by the menu and used for ticket purchases
    pub fn default_route(&self) -> Option<&Route> {
        self.routes.first()
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }

    pub fn drivers(&self) -> &[Person] {
        &self.drivers
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Create the network served by the city: three drivers, one vehicle
    /// of each kind, a single route and the daily timetable
    pub fn create_default_network() -> Result<Self> {
        let mut network = Self::new();

        let ali =
            network.add_driver(Person::driver("Ali", "Karimov", 35, "alikarimov", "DL12345"))?;
        let dazai = network.add_driver(Person::driver("Dazai", "Osuma", 22, "Dazai", "YM57535"))?;
        let william =
            network.add_driver(Person::driver("William", "Moriarty", 27, "William", "WYM2722"))?;

        let vehicles = [
            (
                TransportKind::Bus,
                "Shahar Avtobusi",
                VehicleNumber::from("B123"),
                "Ko‘k",
                ali,
                "08:00",
                "10:00",
            ),
            (
                TransportKind::Metro,
                "Toshkent Metropoliteni",
                VehicleNumber::from("M10"),
                "Qizil",
                ali,
                "09:00",
                "11:00",
            ),
            (
                TransportKind::Car,
                "Cherry",
                VehicleNumber::from(567u32),
                "Qora",
                dazai,
                "09:00",
                "11:00",
            ),
            (
                TransportKind::Airplane,
                "Gulfstream",
                VehicleNumber::from(700u32),
                "Qora",
                william,
                "07:00",
                "19:00",
            ),
            (
                TransportKind::Tram,
                "Shahar Tramvayi",
                VehicleNumber::from("T456"),
                "Yashil",
                ali,
                "10:00",
                "12:00",
            ),
        ];

        for (kind, name, number, color, driver, departure, arrival) in vehicles {
            let id = network.add_transport(kind, name, number, color, driver)?;
            network
                .schedule
                .add_transport(&network.transports[id.0], departure, arrival);
        }

        network.add_route(Route::new(
            Address::new("A station"),
            Address::new("B station"),
            vec![Address::new("Stop 1"), Address::new("Stop 2")],
        ));

        Ok(network)
    }
}
