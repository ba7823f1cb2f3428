//! Vehicles and their movement descriptions

use std::fmt;

use super::types::DriverId;

/// Kind of vehicle in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Bus,
    Metro,
    Car,
    Airplane,
    Tram,
}

impl TransportKind {
    /// All kinds in menu order ("1" through "5")
    pub const ALL: [TransportKind; 5] = [
        TransportKind::Bus,
        TransportKind::Metro,
        TransportKind::Car,
        TransportKind::Airplane,
        TransportKind::Tram,
    ];

    /// Name shown in the selection menu
    pub fn label(&self) -> &'static str {
        match self {
            TransportKind::Bus => "Avtobus",
            TransportKind::Metro => "Metro",
            TransportKind::Car => "Mashina",
            TransportKind::Airplane => "Samolyot",
            TransportKind::Tram => "Tramvay",
        }
    }

    fn movement_phrase(&self) -> &'static str {
        match self {
            TransportKind::Bus => "avtobusi yo'lovchilarni yetkazib bermoqda.",
            TransportKind::Metro => "metrosi yer ostida tezlik bilan harakatlanmoqda.",
            TransportKind::Car => "avtomobili shahar ko'chalari bo'yicha harakatlanmoqda.",
            TransportKind::Airplane => "samolyoti havo orqali uzun masofalarga boradi.",
            TransportKind::Tram => "tramvayi temir yo'llar bo'yicha sekin harakatlanmoqda.",
        }
    }

    /// Parse a menu token ("1".."5")
    pub fn from_menu_token(token: &str) -> Option<TransportKind> {
        match token {
            "1" => Some(TransportKind::Bus),
            "2" => Some(TransportKind::Metro),
            "3" => Some(TransportKind::Car),
            "4" => Some(TransportKind::Airplane),
            "5" => Some(TransportKind::Tram),
            _ => None,
        }
    }
}

/// Vehicle number: some fleets use codes like "B123", others plain numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleNumber {
    Code(String),
    Numeric(u32),
}

impl fmt::Display for VehicleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleNumber::Code(code) => write!(f, "{}", code),
            VehicleNumber::Numeric(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for VehicleNumber {
    fn from(code: &str) -> Self {
        VehicleNumber::Code(code.to_string())
    }
}

impl From<u32> for VehicleNumber {
    fn from(number: u32) -> Self {
        VehicleNumber::Numeric(number)
    }
}

/// A vehicle operated by a driver
#[derive(Debug, Clone)]
pub struct Transport {
    pub kind: TransportKind,
    pub name: String,
    pub number: VehicleNumber,
    pub color: String,
    pub driver: DriverId,
}

impl Transport {
    pub fn new(
        kind: TransportKind,
        name: impl Into<String>,
        number: impl Into<VehicleNumber>,
        color: impl Into<String>,
        driver: DriverId,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            number: number.into(),
            color: color.into(),
            driver,
        }
    }

    /// Describe how this vehicle moves, e.g.
    /// "Shahar Avtobusi (B123) avtobusi yo'lovchilarni yetkazib bermoqda."
    pub fn describe_movement(&self) -> String {
        format!(
            "{} ({}) {}",
            self.name,
            self.number,
            self.kind.movement_phrase()
        )
    }
}
