//! Offer amenities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One facility an offer may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    PrivateBathroom,
    Kitchen,
    Wifi,
    Tv,
    FridgeInRoom,
    AirConditioning,
    SmokingAllowed,
    PetsAllowed,
    Parking,
    SwimmingPool,
    Sauna,
    Jacuzzi,
}

impl Amenity {
    /// Every amenity, in catalogue order
    pub const ALL: [Amenity; 12] = [
        Self::PrivateBathroom,
        Self::Kitchen,
        Self::Wifi,
        Self::Tv,
        Self::FridgeInRoom,
        Self::AirConditioning,
        Self::SmokingAllowed,
        Self::PetsAllowed,
        Self::Parking,
        Self::SwimmingPool,
        Self::Sauna,
        Self::Jacuzzi,
    ];

    /// Wire and storage key
    pub const fn key(self) -> &'static str {
        match self {
            Self::PrivateBathroom => "private_bathroom",
            Self::Kitchen => "kitchen",
            Self::Wifi => "wifi",
            Self::Tv => "tv",
            Self::FridgeInRoom => "fridge_in_room",
            Self::AirConditioning => "air_conditioning",
            Self::SmokingAllowed => "smoking_allowed",
            Self::PetsAllowed => "pets_allowed",
            Self::Parking => "parking",
            Self::SwimmingPool => "swimming_pool",
            Self::Sauna => "sauna",
            Self::Jacuzzi => "jacuzzi",
        }
    }

    /// Human-readable name, e.g. "Fridge in room"
    pub fn label(self) -> String {
        let spaced = self.key().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error when parsing an amenity key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown amenity: {0}")]
pub struct UnknownAmenity(pub String);

impl FromStr for Amenity {
    type Err = UnknownAmenity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| UnknownAmenity(s.to_string()))
    }
}

/// The set of amenities an offer provides. Absent means not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferAmenities {
    pub private_bathroom: bool,
    pub kitchen: bool,
    pub wifi: bool,
    pub tv: bool,
    pub fridge_in_room: bool,
    pub air_conditioning: bool,
    pub smoking_allowed: bool,
    pub pets_allowed: bool,
    pub parking: bool,
    pub swimming_pool: bool,
    pub sauna: bool,
    pub jacuzzi: bool,
}

impl OfferAmenities {
    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::PrivateBathroom => self.private_bathroom,
            Amenity::Kitchen => self.kitchen,
            Amenity::Wifi => self.wifi,
            Amenity::Tv => self.tv,
            Amenity::FridgeInRoom => self.fridge_in_room,
            Amenity::AirConditioning => self.air_conditioning,
            Amenity::SmokingAllowed => self.smoking_allowed,
            Amenity::PetsAllowed => self.pets_allowed,
            Amenity::Parking => self.parking,
            Amenity::SwimmingPool => self.swimming_pool,
            Amenity::Sauna => self.sauna,
            Amenity::Jacuzzi => self.jacuzzi,
        }
    }

    pub fn has_all(&self, required: &[Amenity]) -> bool {
        required.iter().all(|a| self.has(*a))
    }

    /// Keys of the provided amenities, in catalogue order
    pub fn keys(&self) -> Vec<&'static str> {
        Amenity::ALL
            .into_iter()
            .filter(|a| self.has(*a))
            .map(Amenity::key)
            .collect()
    }

    /// Build from stored keys; unknown keys are skipped
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut amenities = Self::default();
        for amenity in keys.into_iter().filter_map(|k| k.as_ref().parse().ok()) {
            amenities.set(amenity, true);
        }
        amenities
    }

    pub fn set(&mut self, amenity: Amenity, value: bool) {
        let slot = match amenity {
            Amenity::PrivateBathroom => &mut self.private_bathroom,
            Amenity::Kitchen => &mut self.kitchen,
            Amenity::Wifi => &mut self.wifi,
            Amenity::Tv => &mut self.tv,
            Amenity::FridgeInRoom => &mut self.fridge_in_room,
            Amenity::AirConditioning => &mut self.air_conditioning,
            Amenity::SmokingAllowed => &mut self.smoking_allowed,
            Amenity::PetsAllowed => &mut self.pets_allowed,
            Amenity::Parking => &mut self.parking,
            Amenity::SwimmingPool => &mut self.swimming_pool,
            Amenity::Sauna => &mut self.sauna,
            Amenity::Jacuzzi => &mut self.jacuzzi,
        };
        *slot = value;
    }
}
