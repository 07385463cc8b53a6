//! Categorical field vocabularies. Serde representations match the strings the
//! admin UI submits and the properties table stores.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "PG")]
    Pg,
    Flat,
    Apartment,
    Room,
    Hostel,
    #[serde(rename = "Short Term Stay")]
    ShortTermStay,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Pg,
        PropertyType::Flat,
        PropertyType::Apartment,
        PropertyType::Room,
        PropertyType::Hostel,
        PropertyType::ShortTermStay,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Sikar,
    Jaipur,
    Kota,
}

impl City {
    pub const ALL: [City; 3] = [City::Sikar, City::Jaipur, City::Kota];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Limited,
    Full,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccommodationType {
    #[serde(rename = "Single Occupancy")]
    SingleOccupancy,
    #[serde(rename = "Double Occupancy")]
    DoubleOccupancy,
    #[serde(rename = "Triple Occupancy")]
    TripleOccupancy,
    Dormitory,
}

/// suitable_for tags; toggled independently on the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Audience {
    Students,
    #[serde(rename = "Working Professionals")]
    WorkingProfessionals,
    Boys,
    Girls,
    Family,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnishingStatus {
    Furnished,
    #[serde(rename = "Semi-Furnished")]
    SemiFurnished,
    Unfurnished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkingType {
    None,
    #[serde(rename = "Two Wheeler")]
    TwoWheeler,
    #[serde(rename = "Four Wheeler")]
    FourWheeler,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    North,
    #[serde(rename = "North-East")]
    NorthEast,
    East,
    #[serde(rename = "South-East")]
    SouthEast,
    South,
    #[serde(rename = "South-West")]
    SouthWest,
    West,
    #[serde(rename = "North-West")]
    NorthWest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterSupply {
    Corporation,
    Borewell,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderPreference {
    Boys,
    Girls,
    #[serde(rename = "Co-Ed")]
    CoEd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharingType {
    Single,
    Double,
    Triple,
    Four,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "Non-AC")]
    NonAc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorPolicy {
    Allowed,
    Restricted,
    #[serde(rename = "Not Allowed")]
    NotAllowed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityHours {
    #[serde(rename = "24x7")]
    RoundTheClock,
    #[serde(rename = "Day Only")]
    DayOnly,
    #[serde(rename = "Night Only")]
    NightOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostelGender {
    Boys,
    Girls,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationPolicy {
    Flexible,
    Moderate,
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleaningService {
    Daily,
    Weekly,
    #[serde(rename = "On Request")]
    OnRequest,
    #[serde(rename = "Not Included")]
    NotIncluded,
}

/// Meal vocabulary for the PG group's meal_options set.
pub const MEAL_OPTIONS: &[&str] = &["Breakfast", "Lunch", "Dinner"];

/// Meal plan vocabulary for the Hostel group's meal_plans set.
pub const MEAL_PLANS: &[&str] = &["Veg", "Non-Veg", "Jain"];

/// Room type vocabulary for the Hostel group's room_types_available set.
pub const HOSTEL_ROOM_TYPES: &[&str] = &["Single", "Double", "Triple", "Dormitory"];

/// Default value for the free-text state field on a new draft.
pub const DEFAULT_STATE: &str = "Rajasthan";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_serde_matches_ui_strings() {
        assert_eq!(serde_json::to_string(&PropertyType::Pg).unwrap(), "\"PG\"");
        assert_eq!(
            serde_json::to_string(&PropertyType::ShortTermStay).unwrap(),
            "\"Short Term Stay\""
        );
        let back: PropertyType = serde_json::from_str("\"Flat\"").unwrap();
        assert_eq!(back, PropertyType::Flat);
    }

    #[test]
    fn facing_direction_has_eight_compass_values() {
        let all = [
            FacingDirection::North,
            FacingDirection::NorthEast,
            FacingDirection::East,
            FacingDirection::SouthEast,
            FacingDirection::South,
            FacingDirection::SouthWest,
            FacingDirection::West,
            FacingDirection::NorthWest,
        ];
        assert_eq!(all.len(), 8);
        assert_eq!(
            serde_json::to_string(&FacingDirection::SouthWest).unwrap(),
            "\"South-West\""
        );
    }
}
