//! Type-conditional attribute groups as a tagged union.
//!
//! One logical property has five mutually exclusive extension attribute sets
//! selected by its type. Modelling them as variants (rather than one flat
//! record carrying every field) means only the active group's fields exist on
//! a draft; switching the type replaces the payload, so stale cross-type
//! values cannot survive a switch.

use crate::catalog::{
    CancellationPolicy, CleaningService, FacingDirection, FurnishingStatus, GenderPreference,
    HostelGender, ParkingType, PropertyType, RoomType, SecurityHours, SharingType, VisitorPolicy,
    WaterSupply,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of the active type-conditional group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailGroup {
    FlatApartment,
    Pg,
    Hostel,
    Room,
    ShortStay,
    None,
}

impl DetailGroup {
    /// Exactly one group per property type; Flat and Apartment share one.
    pub fn for_type(property_type: PropertyType) -> DetailGroup {
        match property_type {
            PropertyType::Flat | PropertyType::Apartment => DetailGroup::FlatApartment,
            PropertyType::Pg => DetailGroup::Pg,
            PropertyType::Hostel => DetailGroup::Hostel,
            PropertyType::Room => DetailGroup::Room,
            PropertyType::ShortTermStay => DetailGroup::ShortStay,
        }
    }
}

/// Flat/Apartment attributes. Zero numerics mean "not entered" on a draft.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatDetails {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub balconies: u32,
    pub floor_number: i32,
    pub furnishing_status: Option<FurnishingStatus>,
    pub parking_type: Option<ParkingType>,
    pub carpet_area: f64,
    pub built_up_area: f64,
    pub property_age: f64,
    pub facing_direction: Option<FacingDirection>,
    pub lift_available: bool,
    pub power_backup: bool,
    pub water_supply: Option<WaterSupply>,
    pub maintenance_charges: f64,
    pub security_deposit_months: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgDetails {
    pub gender_preference: Option<GenderPreference>,
    pub sharing_type: Option<SharingType>,
    pub room_type: Option<RoomType>,
    pub visitor_policy: Option<VisitorPolicy>,
    pub meal_options: BTreeSet<String>,
    pub meal_charges: f64,
    pub notice_period_days: u32,
    pub lock_in_period_months: u32,
    /// Time-of-day string, e.g. "22:30".
    pub gate_closing_time: String,
    pub attached_bathroom: bool,
    pub laundry_service: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostelDetails {
    pub total_capacity: u32,
    pub current_occupancy: u32,
    pub hostel_gender: Option<HostelGender>,
    pub meal_plans: BTreeSet<String>,
    pub room_types_available: BTreeSet<String>,
    pub security_hours: Option<SecurityHours>,
    pub warden_available: bool,
    pub study_room: bool,
    pub common_area: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDetails {
    pub sharing_type: Option<SharingType>,
    pub furnishing_status: Option<FurnishingStatus>,
    pub attached_bathroom: bool,
    pub kitchen_access: bool,
    pub separate_entrance: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortStayDetails {
    /// Day counts; min <= max is enforced only when the caller opts in.
    pub min_stay_duration: u32,
    pub max_stay_duration: u32,
    pub daily_rate: f64,
    pub weekly_rate: f64,
    pub monthly_rate: f64,
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_policy: Option<CancellationPolicy>,
    pub cleaning_service: Option<CleaningService>,
}

/// The variant payload carried by a draft, selected by its property type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "group", rename_all = "snake_case")]
pub enum TypeDetails {
    FlatApartment(FlatDetails),
    Pg(PgDetails),
    Hostel(HostelDetails),
    Room(RoomDetails),
    ShortStay(ShortStayDetails),
    None,
}

impl TypeDetails {
    /// Empty payload for the group a property type activates.
    pub fn default_for(property_type: PropertyType) -> TypeDetails {
        match DetailGroup::for_type(property_type) {
            DetailGroup::FlatApartment => TypeDetails::FlatApartment(FlatDetails::default()),
            DetailGroup::Pg => TypeDetails::Pg(PgDetails::default()),
            DetailGroup::Hostel => TypeDetails::Hostel(HostelDetails::default()),
            DetailGroup::Room => TypeDetails::Room(RoomDetails::default()),
            DetailGroup::ShortStay => TypeDetails::ShortStay(ShortStayDetails::default()),
            DetailGroup::None => TypeDetails::None,
        }
    }

    pub fn group(&self) -> DetailGroup {
        match self {
            TypeDetails::FlatApartment(_) => DetailGroup::FlatApartment,
            TypeDetails::Pg(_) => DetailGroup::Pg,
            TypeDetails::Hostel(_) => DetailGroup::Hostel,
            TypeDetails::Room(_) => DetailGroup::Room,
            TypeDetails::ShortStay(_) => DetailGroup::ShortStay,
            TypeDetails::None => DetailGroup::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_apartment_share_a_group() {
        assert_eq!(
            DetailGroup::for_type(PropertyType::Flat),
            DetailGroup::FlatApartment
        );
        assert_eq!(
            DetailGroup::for_type(PropertyType::Apartment),
            DetailGroup::FlatApartment
        );
    }

    #[test]
    fn every_type_resolves_to_exactly_one_group() {
        for pt in PropertyType::ALL {
            let details = TypeDetails::default_for(pt);
            assert_eq!(details.group(), DetailGroup::for_type(pt));
            assert_ne!(details.group(), DetailGroup::None);
        }
    }

    #[test]
    fn details_serde_is_tagged_by_group() {
        let v = serde_json::to_value(TypeDetails::Pg(PgDetails::default())).unwrap();
        assert_eq!(v["group"], "pg");
        let back: TypeDetails = serde_json::from_value(v).unwrap();
        assert_eq!(back.group(), DetailGroup::Pg);
    }
}
