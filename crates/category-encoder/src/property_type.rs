//! Property type table

use crate::{CategoryDimension, EncodeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of property as listed in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "apartamento")]
    Apartment,
    #[serde(rename = "casa")]
    House,
    #[serde(rename = "lote")]
    Lot,
    #[serde(rename = "oficina")]
    Office,
    #[serde(rename = "edificio")]
    Building,
    #[serde(rename = "local")]
    Shop,
    #[serde(rename = "finca")]
    Farm,
    #[serde(rename = "bodega")]
    Warehouse,
    #[serde(rename = "apartaestudio")]
    Studio,
    #[serde(rename = "parqueadero")]
    Parking,
    #[serde(rename = "casa campestre")]
    CountryHouse,
    #[serde(rename = "proyecto")]
    Project,
    #[serde(rename = "penthouse")]
    Penthouse,
    #[serde(rename = "otros")]
    Other,
    #[serde(rename = "habitacion")]
    Room,
    #[serde(rename = "consultorio")]
    Practice,
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "cabaña")]
    Cabin,
    #[serde(rename = "casalote")]
    HouseWithLot,
    #[serde(rename = "hacienda")]
    Estate,
    #[serde(rename = "almacen")]
    Store,
    #[serde(rename = "estacion")]
    Station,
    #[serde(rename = "garage")]
    Garage,
    #[serde(rename = "clinica")]
    Clinic,
    #[serde(rename = "hangar")]
    Hangar,
}

impl PropertyType {
    /// Every property type, most frequent first
    pub const ALL: [PropertyType; 25] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Lot,
        PropertyType::Office,
        PropertyType::Building,
        PropertyType::Shop,
        PropertyType::Farm,
        PropertyType::Warehouse,
        PropertyType::Studio,
        PropertyType::Parking,
        PropertyType::CountryHouse,
        PropertyType::Project,
        PropertyType::Penthouse,
        PropertyType::Other,
        PropertyType::Room,
        PropertyType::Practice,
        PropertyType::Hotel,
        PropertyType::Cabin,
        PropertyType::HouseWithLot,
        PropertyType::Estate,
        PropertyType::Store,
        PropertyType::Station,
        PropertyType::Garage,
        PropertyType::Clinic,
        PropertyType::Hangar,
    ];

    /// Label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartamento",
            PropertyType::House => "casa",
            PropertyType::Lot => "lote",
            PropertyType::Office => "oficina",
            PropertyType::Building => "edificio",
            PropertyType::Shop => "local",
            PropertyType::Farm => "finca",
            PropertyType::Warehouse => "bodega",
            PropertyType::Studio => "apartaestudio",
            PropertyType::Parking => "parqueadero",
            PropertyType::CountryHouse => "casa campestre",
            PropertyType::Project => "proyecto",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Other => "otros",
            PropertyType::Room => "habitacion",
            PropertyType::Practice => "consultorio",
            PropertyType::Hotel => "hotel",
            PropertyType::Cabin => "cabaña",
            PropertyType::HouseWithLot => "casalote",
            PropertyType::Estate => "hacienda",
            PropertyType::Store => "almacen",
            PropertyType::Station => "estacion",
            PropertyType::Garage => "garage",
            PropertyType::Clinic => "clinica",
            PropertyType::Hangar => "hangar",
        }
    }

    /// Code the model was trained with
    pub fn code(&self) -> u32 {
        match self {
            PropertyType::Apartment => 219_524,
            PropertyType::House => 85_201,
            PropertyType::Lot => 21_311,
            PropertyType::Office => 12_057,
            PropertyType::Building => 10_778,
            PropertyType::Shop => 8_599,
            PropertyType::Farm => 7_420,
            PropertyType::Warehouse => 6_985,
            PropertyType::Studio => 5_351,
            PropertyType::Parking => 4_628,
            PropertyType::CountryHouse => 3_969,
            PropertyType::Project => 2_876,
            PropertyType::Penthouse => 2_002,
            PropertyType::Other => 1_253,
            PropertyType::Room => 634,
            PropertyType::Practice => 619,
            PropertyType::Hotel => 327,
            PropertyType::Cabin => 273,
            PropertyType::HouseWithLot => 176,
            PropertyType::Estate => 99,
            PropertyType::Store => 91,
            PropertyType::Station => 43,
            PropertyType::Garage => 29,
            PropertyType::Clinic => 11,
            PropertyType::Hangar => 9,
        }
    }

    /// Look up a property type by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl FromStr for PropertyType {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| EncodeError::UnknownCategory {
            dimension: CategoryDimension::PropertyType,
            label: s.to_string(),
        })
    }
}
