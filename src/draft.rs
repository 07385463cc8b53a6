//! The mutable property draft edited by a form.
//!
//! Drafts keep UI-friendly placeholders: empty strings and zero numerics mean
//! "not entered". Normalization (see [`crate::record`]) converts those to
//! explicit absent markers before anything is persisted.

use crate::catalog::{
    AccommodationType, Audience, AvailabilityStatus, City, PropertyType, DEFAULT_STATE,
};
use crate::details::{DetailGroup, TypeDetails};
use crate::record::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDraft {
    /// Present only when editing an existing listing.
    pub id: Option<Uuid>,
    pub name: String,
    pub property_type: PropertyType,
    pub city: City,
    pub locality: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
    pub description: String,
    pub price_from: f64,
    pub price_to: f64,
    pub offer_price: f64,
    pub total_floors: u32,
    pub rooms_per_floor: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Newline-delimited image URLs as typed into the textarea.
    pub images_text: String,
    pub video_url: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub owner_name: String,
    pub owner_details: String,
    pub verified: bool,
    pub published: bool,
    pub availability_status: AvailabilityStatus,
    pub accommodation_type: Option<AccommodationType>,
    pub suitable_for: BTreeSet<Audience>,
    pub food_included: bool,
    pub property_size: f64,
    pub details: TypeDetails,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        PropertyDraft {
            id: None,
            name: String::new(),
            property_type: PropertyType::Pg,
            city: City::Sikar,
            locality: String::new(),
            address: String::new(),
            state: DEFAULT_STATE.to_string(),
            pincode: String::new(),
            description: String::new(),
            price_from: 0.0,
            price_to: 0.0,
            offer_price: 0.0,
            total_floors: 1,
            rooms_per_floor: 1,
            latitude: 0.0,
            longitude: 0.0,
            images_text: String::new(),
            video_url: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            owner_name: String::new(),
            owner_details: String::new(),
            verified: false,
            published: false,
            availability_status: AvailabilityStatus::Available,
            accommodation_type: None,
            suitable_for: BTreeSet::new(),
            food_included: false,
            property_size: 0.0,
            details: TypeDetails::default_for(PropertyType::Pg),
        }
    }
}

impl PropertyDraft {
    /// Empty draft for a new listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Changing the city invalidates the locality choice, so it is reset.
    pub fn set_city(&mut self, city: City) {
        if self.city != city {
            self.city = city;
            self.locality.clear();
        }
    }

    /// Switching the property type swaps the detail payload to the new
    /// group's default; values entered under another group do not survive.
    pub fn set_property_type(&mut self, property_type: PropertyType) {
        if DetailGroup::for_type(property_type) != self.details.group() {
            self.details = TypeDetails::default_for(property_type);
        }
        self.property_type = property_type;
    }

    /// Repair the details payload after deserializing an externally supplied
    /// draft whose group does not match its property type.
    pub fn align_details(&mut self) {
        if self.details.group() != DetailGroup::for_type(self.property_type) {
            self.details = TypeDetails::default_for(self.property_type);
        }
    }

    /// Derived capacity; never stored.
    pub fn total_capacity(&self) -> u32 {
        self.total_floors * self.rooms_per_floor
    }

    /// Hydrate a draft from a persisted record for editing.
    pub fn hydrate(id: Uuid, record: &PropertyRecord) -> Self {
        record.to_draft(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::PgDetails;

    #[test]
    fn city_change_resets_locality() {
        let mut draft = PropertyDraft::new();
        draft.set_city(City::Sikar);
        draft.locality = "Fatehpur".to_string();
        draft.set_city(City::Jaipur);
        assert!(draft.locality.is_empty());
    }

    #[test]
    fn same_city_keeps_locality() {
        let mut draft = PropertyDraft::new();
        draft.locality = "Fatehpur".to_string();
        draft.set_city(City::Sikar);
        assert_eq!(draft.locality, "Fatehpur");
    }

    #[test]
    fn type_switch_replaces_detail_payload() {
        let mut draft = PropertyDraft::new();
        if let TypeDetails::Pg(pg) = &mut draft.details {
            pg.meal_charges = 2500.0;
        }
        draft.set_property_type(PropertyType::Hostel);
        assert_eq!(draft.details.group(), DetailGroup::Hostel);
        // Switching back starts from an empty payload.
        draft.set_property_type(PropertyType::Pg);
        assert_eq!(draft.details, TypeDetails::Pg(PgDetails::default()));
    }

    #[test]
    fn flat_to_apartment_keeps_shared_group_payload() {
        let mut draft = PropertyDraft::new();
        draft.set_property_type(PropertyType::Flat);
        if let TypeDetails::FlatApartment(flat) = &mut draft.details {
            flat.bedrooms = 3;
        }
        draft.set_property_type(PropertyType::Apartment);
        match &draft.details {
            TypeDetails::FlatApartment(flat) => assert_eq!(flat.bedrooms, 3),
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn derived_capacity() {
        let mut draft = PropertyDraft::new();
        draft.total_floors = 3;
        draft.rooms_per_floor = 4;
        assert_eq!(draft.total_capacity(), 12);
    }

    #[test]
    fn align_details_repairs_mismatched_group() {
        let mut draft = PropertyDraft::new();
        draft.property_type = PropertyType::Hostel;
        assert_ne!(draft.details.group(), DetailGroup::Hostel);
        draft.align_details();
        assert_eq!(draft.details.group(), DetailGroup::Hostel);
    }
}
