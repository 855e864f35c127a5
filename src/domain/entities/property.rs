use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::table::sort::compare_by_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Occupied,
    Maintenance,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Available,
        PropertyStatus::Occupied,
        PropertyStatus::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Occupied => "occupied",
            PropertyStatus::Maintenance => "maintenance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Occupied => "Occupied",
            PropertyStatus::Maintenance => "Maintenance",
        }
    }

    fn rank(self) -> u8 {
        match self {
            PropertyStatus::Available => 0,
            PropertyStatus::Occupied => 1,
            PropertyStatus::Maintenance => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub status: PropertyStatus,
    pub units: u32,
    pub monthly_rent: f64,
    pub address: Address,
    pub tags: Vec<String>,
    pub manager: Option<String>,
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::from(self.id.as_str()),
            "name" => FieldValue::from(self.name.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "units" => FieldValue::from(self.units),
            "monthly_rent" => FieldValue::Decimal(self.monthly_rent),
            "city" => FieldValue::from(self.address.city.as_str()),
            "street" => FieldValue::from(self.address.street.as_str()),
            "manager" => FieldValue::from(self.manager.clone()),
            _ => FieldValue::Null,
        }
    }

    // Status follows the lifecycle order, not the alphabet.
    fn compare_field(&self, other: &Self, name: &str) -> Ordering {
        match name {
            "status" => compare_by_key(self, other, |p| p.status.rank()),
            _ => self.field(name).compare(&other.field(name)),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: &str,
    name: &str,
    status: PropertyStatus,
    units: u32,
    monthly_rent: f64,
    (street, city, postal_code): (&str, &str, &str),
    tags: &[&str],
    manager: Option<&str>,
) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        status,
        units,
        monthly_rent,
        address: Address {
            street: street.to_string(),
            city: city.to_string(),
            postal_code: postal_code.to_string(),
        },
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        manager: manager.map(str::to_string),
    }
}

/// Portfolio shown by the desktop screen until a real data source is wired in.
pub fn sample_properties() -> Vec<Property> {
    use PropertyStatus::*;
    vec![
        property("p-001", "Harbor View", Occupied, 24, 1850.0, ("12 Quay St", "Portsmouth", "PO1 3AX"), &["waterfront", "lift"], Some("Dana Reyes")),
        property("p-002", "Maple Court", Available, 8, 1120.0, ("4 Maple Rd", "Leeds", "LS6 2AB"), &["garden"], Some("Sam Okafor")),
        property("p-003", "The Foundry", Maintenance, 40, 2100.0, ("88 Forge Ln", "Sheffield", "S1 4GH"), &["loft", "parking", "gym"], None),
        property("p-004", "Elm House", Occupied, 6, 950.0, ("1 Elm Grove", "York", "YO1 7EP"), &[], Some("Dana Reyes")),
        property("p-005", "Canal Wharf", Available, 18, 1490.0, ("20 Lock Side", "Leeds", "LS1 4BR"), &["waterfront"], Some("Priya Nair")),
        property("p-006", "Station Lofts", Occupied, 32, 1725.5, ("3 Platform Way", "York", "YO24 1AB"), &["loft", "bike store"], Some("Sam Okafor")),
        property("p-007", "Orchard Row", Available, 12, 1010.0, ("7 Pippin Cl", "Harrogate", "HG1 5QT"), &["garden", "parking"], None),
        property("p-008", "Mill Yard", Occupied, 15, 1300.0, ("55 Weir St", "Sheffield", "S3 8SD"), &["parking"], Some("Priya Nair")),
        property("p-009", "Cathedral Close", Maintenance, 4, 2400.0, ("2 Minster Yd", "York", "YO1 7HH"), &["listed"], Some("Dana Reyes")),
        property("p-010", "Riverside Point", Available, 28, 1600.0, ("10 Bank St", "Leeds", "LS2 7DA"), &["waterfront", "lift", "gym"], Some("Sam Okafor")),
        property("p-011", "Beacon Heights", Occupied, 36, 1380.0, ("90 Ridge Rd", "Bradford", "BD1 2LP"), &["lift"], None),
        property("p-012", "Kings Arcade", Available, 10, 1900.0, ("1 Kings Pde", "Harrogate", "HG1 1BJ"), &["retail"], Some("Priya Nair")),
    ]
}
