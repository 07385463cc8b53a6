//! Normalization: draft placeholders to a flat, persistence-ready record.
//!
//! Every optional field that is falsy on the draft (zero, empty string, empty
//! set) becomes `None` here, so unset attributes are stored as NULL instead
//! of misleading zeros. Fields of inactive type-conditional groups are always
//! `None`; the tagged union on the draft makes that hold by construction.

use crate::catalog::{
    AccommodationType, Audience, AvailabilityStatus, CancellationPolicy, City, CleaningService,
    FacingDirection, FurnishingStatus, GenderPreference, HostelGender, ParkingType, PropertyType,
    RoomType, SecurityHours, SharingType, VisitorPolicy, WaterSupply,
};
use crate::details::{
    DetailGroup, FlatDetails, HostelDetails, PgDetails, RoomDetails, ShortStayDetails, TypeDetails,
};
use crate::draft::PropertyDraft;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Flat record handed to the persistence gateway. Column-per-field; one row
/// in the properties table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    pub property_type: PropertyType,
    pub city: City,
    pub locality: String,
    pub address: String,
    pub state: String,
    pub pincode: Option<String>,
    pub description: String,
    pub price_from: f64,
    pub price_to: Option<f64>,
    pub offer_price: Option<f64>,
    pub total_floors: u32,
    pub rooms_per_floor: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Order preserved; the first entry is the cover image.
    pub images: Vec<String>,
    pub video_url: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub owner_name: Option<String>,
    pub owner_details: Option<String>,
    pub verified: bool,
    pub published: bool,
    pub availability_status: AvailabilityStatus,
    pub accommodation_type: Option<AccommodationType>,
    pub suitable_for: Vec<Audience>,
    pub food_included: bool,
    pub property_size: Option<f64>,

    // Flat/Apartment group
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub balconies: Option<u32>,
    pub floor_number: Option<i32>,
    pub furnishing_status: Option<FurnishingStatus>,
    pub parking_type: Option<ParkingType>,
    pub carpet_area: Option<f64>,
    pub built_up_area: Option<f64>,
    pub property_age: Option<f64>,
    pub facing_direction: Option<FacingDirection>,
    pub lift_available: Option<bool>,
    pub power_backup: Option<bool>,
    pub water_supply: Option<WaterSupply>,
    pub maintenance_charges: Option<f64>,
    pub security_deposit_months: Option<f64>,

    // PG group
    pub gender_preference: Option<GenderPreference>,
    pub sharing_type: Option<SharingType>,
    pub room_type: Option<RoomType>,
    pub visitor_policy: Option<VisitorPolicy>,
    pub meal_options: Option<Vec<String>>,
    pub meal_charges: Option<f64>,
    pub notice_period_days: Option<u32>,
    pub lock_in_period_months: Option<u32>,
    pub gate_closing_time: Option<String>,
    pub attached_bathroom: Option<bool>,
    pub laundry_service: Option<bool>,

    // Hostel group
    pub total_capacity: Option<u32>,
    pub current_occupancy: Option<u32>,
    pub hostel_gender: Option<HostelGender>,
    pub meal_plans: Option<Vec<String>>,
    pub room_types_available: Option<Vec<String>>,
    pub security_hours: Option<SecurityHours>,
    pub warden_available: Option<bool>,
    pub study_room: Option<bool>,
    pub common_area: Option<bool>,

    // Room group
    pub kitchen_access: Option<bool>,
    pub separate_entrance: Option<bool>,

    // Short term stay group
    pub min_stay_duration: Option<u32>,
    pub max_stay_duration: Option<u32>,
    pub daily_rate: Option<f64>,
    pub weekly_rate: Option<f64>,
    pub monthly_rate: Option<f64>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub cancellation_policy: Option<CancellationPolicy>,
    pub cleaning_service: Option<CleaningService>,
}

fn opt_num(n: f64) -> Option<f64> {
    (n != 0.0).then_some(n)
}

fn opt_count(n: u32) -> Option<u32> {
    (n != 0).then_some(n)
}

fn opt_int(n: i32) -> Option<i32> {
    (n != 0).then_some(n)
}

fn opt_text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn opt_set(set: &BTreeSet<String>) -> Option<Vec<String>> {
    (!set.is_empty()).then(|| set.iter().cloned().collect())
}

/// One trimmed non-empty URL per line, order preserved.
pub fn parse_image_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a validated draft into a persistence-ready record.
pub fn normalize(draft: &PropertyDraft) -> PropertyRecord {
    let mut record = PropertyRecord {
        name: draft.name.trim().to_string(),
        property_type: draft.property_type,
        city: draft.city,
        locality: draft.locality.trim().to_string(),
        address: draft.address.trim().to_string(),
        state: draft.state.clone(),
        pincode: opt_text(&draft.pincode),
        description: draft.description.trim().to_string(),
        price_from: draft.price_from,
        price_to: opt_num(draft.price_to),
        offer_price: opt_num(draft.offer_price),
        total_floors: draft.total_floors,
        rooms_per_floor: draft.rooms_per_floor,
        latitude: opt_num(draft.latitude),
        longitude: opt_num(draft.longitude),
        images: parse_image_lines(&draft.images_text),
        video_url: opt_text(&draft.video_url),
        contact_phone: opt_text(&draft.contact_phone),
        contact_email: opt_text(&draft.contact_email),
        owner_name: opt_text(&draft.owner_name),
        owner_details: opt_text(&draft.owner_details),
        verified: draft.verified,
        published: draft.published,
        availability_status: draft.availability_status,
        accommodation_type: draft.accommodation_type,
        suitable_for: draft.suitable_for.iter().copied().collect(),
        food_included: draft.food_included,
        property_size: opt_num(draft.property_size),

        bedrooms: None,
        bathrooms: None,
        balconies: None,
        floor_number: None,
        furnishing_status: None,
        parking_type: None,
        carpet_area: None,
        built_up_area: None,
        property_age: None,
        facing_direction: None,
        lift_available: None,
        power_backup: None,
        water_supply: None,
        maintenance_charges: None,
        security_deposit_months: None,

        gender_preference: None,
        sharing_type: None,
        room_type: None,
        visitor_policy: None,
        meal_options: None,
        meal_charges: None,
        notice_period_days: None,
        lock_in_period_months: None,
        gate_closing_time: None,
        attached_bathroom: None,
        laundry_service: None,

        total_capacity: None,
        current_occupancy: None,
        hostel_gender: None,
        meal_plans: None,
        room_types_available: None,
        security_hours: None,
        warden_available: None,
        study_room: None,
        common_area: None,

        kitchen_access: None,
        separate_entrance: None,

        min_stay_duration: None,
        max_stay_duration: None,
        daily_rate: None,
        weekly_rate: None,
        monthly_rate: None,
        check_in_time: None,
        check_out_time: None,
        cancellation_policy: None,
        cleaning_service: None,
    };

    match &draft.details {
        TypeDetails::FlatApartment(flat) => {
            record.bedrooms = opt_count(flat.bedrooms);
            record.bathrooms = opt_count(flat.bathrooms);
            record.balconies = opt_count(flat.balconies);
            record.floor_number = opt_int(flat.floor_number);
            record.furnishing_status = flat.furnishing_status;
            record.parking_type = flat.parking_type;
            record.carpet_area = opt_num(flat.carpet_area);
            record.built_up_area = opt_num(flat.built_up_area);
            record.property_age = opt_num(flat.property_age);
            record.facing_direction = flat.facing_direction;
            record.lift_available = Some(flat.lift_available);
            record.power_backup = Some(flat.power_backup);
            record.water_supply = flat.water_supply;
            record.maintenance_charges = opt_num(flat.maintenance_charges);
            record.security_deposit_months = opt_num(flat.security_deposit_months);
        }
        TypeDetails::Pg(pg) => {
            record.gender_preference = pg.gender_preference;
            record.sharing_type = pg.sharing_type;
            record.room_type = pg.room_type;
            record.visitor_policy = pg.visitor_policy;
            record.meal_options = opt_set(&pg.meal_options);
            record.meal_charges = opt_num(pg.meal_charges);
            record.notice_period_days = opt_count(pg.notice_period_days);
            record.lock_in_period_months = opt_count(pg.lock_in_period_months);
            record.gate_closing_time = opt_text(&pg.gate_closing_time);
            record.attached_bathroom = Some(pg.attached_bathroom);
            record.laundry_service = Some(pg.laundry_service);
        }
        TypeDetails::Hostel(hostel) => {
            record.total_capacity = opt_count(hostel.total_capacity);
            record.current_occupancy = opt_count(hostel.current_occupancy);
            record.hostel_gender = hostel.hostel_gender;
            record.meal_plans = opt_set(&hostel.meal_plans);
            record.room_types_available = opt_set(&hostel.room_types_available);
            record.security_hours = hostel.security_hours;
            record.warden_available = Some(hostel.warden_available);
            record.study_room = Some(hostel.study_room);
            record.common_area = Some(hostel.common_area);
        }
        TypeDetails::Room(room) => {
            record.sharing_type = room.sharing_type;
            record.furnishing_status = room.furnishing_status;
            record.attached_bathroom = Some(room.attached_bathroom);
            record.kitchen_access = Some(room.kitchen_access);
            record.separate_entrance = Some(room.separate_entrance);
        }
        TypeDetails::ShortStay(stay) => {
            record.min_stay_duration = opt_count(stay.min_stay_duration);
            record.max_stay_duration = opt_count(stay.max_stay_duration);
            record.daily_rate = opt_num(stay.daily_rate);
            record.weekly_rate = opt_num(stay.weekly_rate);
            record.monthly_rate = opt_num(stay.monthly_rate);
            record.check_in_time = opt_text(&stay.check_in_time);
            record.check_out_time = opt_text(&stay.check_out_time);
            record.cancellation_policy = stay.cancellation_policy;
            record.cleaning_service = stay.cleaning_service;
        }
        TypeDetails::None => {}
    }

    record
}

impl PropertyRecord {
    /// Rebuild an editable draft from a persisted record.
    pub fn to_draft(&self, id: Option<Uuid>) -> PropertyDraft {
        let details = match DetailGroup::for_type(self.property_type) {
            DetailGroup::FlatApartment => TypeDetails::FlatApartment(FlatDetails {
                bedrooms: self.bedrooms.unwrap_or(0),
                bathrooms: self.bathrooms.unwrap_or(0),
                balconies: self.balconies.unwrap_or(0),
                floor_number: self.floor_number.unwrap_or(0),
                furnishing_status: self.furnishing_status,
                parking_type: self.parking_type,
                carpet_area: self.carpet_area.unwrap_or(0.0),
                built_up_area: self.built_up_area.unwrap_or(0.0),
                property_age: self.property_age.unwrap_or(0.0),
                facing_direction: self.facing_direction,
                lift_available: self.lift_available.unwrap_or(false),
                power_backup: self.power_backup.unwrap_or(false),
                water_supply: self.water_supply,
                maintenance_charges: self.maintenance_charges.unwrap_or(0.0),
                security_deposit_months: self.security_deposit_months.unwrap_or(0.0),
            }),
            DetailGroup::Pg => TypeDetails::Pg(PgDetails {
                gender_preference: self.gender_preference,
                sharing_type: self.sharing_type,
                room_type: self.room_type,
                visitor_policy: self.visitor_policy,
                meal_options: self
                    .meal_options
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .collect(),
                meal_charges: self.meal_charges.unwrap_or(0.0),
                notice_period_days: self.notice_period_days.unwrap_or(0),
                lock_in_period_months: self.lock_in_period_months.unwrap_or(0),
                gate_closing_time: self.gate_closing_time.clone().unwrap_or_default(),
                attached_bathroom: self.attached_bathroom.unwrap_or(false),
                laundry_service: self.laundry_service.unwrap_or(false),
            }),
            DetailGroup::Hostel => TypeDetails::Hostel(HostelDetails {
                total_capacity: self.total_capacity.unwrap_or(0),
                current_occupancy: self.current_occupancy.unwrap_or(0),
                hostel_gender: self.hostel_gender,
                meal_plans: self
                    .meal_plans
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .collect(),
                room_types_available: self
                    .room_types_available
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .collect(),
                security_hours: self.security_hours,
                warden_available: self.warden_available.unwrap_or(false),
                study_room: self.study_room.unwrap_or(false),
                common_area: self.common_area.unwrap_or(false),
            }),
            DetailGroup::Room => TypeDetails::Room(RoomDetails {
                sharing_type: self.sharing_type,
                furnishing_status: self.furnishing_status,
                attached_bathroom: self.attached_bathroom.unwrap_or(false),
                kitchen_access: self.kitchen_access.unwrap_or(false),
                separate_entrance: self.separate_entrance.unwrap_or(false),
            }),
            DetailGroup::ShortStay => TypeDetails::ShortStay(ShortStayDetails {
                min_stay_duration: self.min_stay_duration.unwrap_or(0),
                max_stay_duration: self.max_stay_duration.unwrap_or(0),
                daily_rate: self.daily_rate.unwrap_or(0.0),
                weekly_rate: self.weekly_rate.unwrap_or(0.0),
                monthly_rate: self.monthly_rate.unwrap_or(0.0),
                check_in_time: self.check_in_time.clone().unwrap_or_default(),
                check_out_time: self.check_out_time.clone().unwrap_or_default(),
                cancellation_policy: self.cancellation_policy,
                cleaning_service: self.cleaning_service,
            }),
            DetailGroup::None => TypeDetails::None,
        };

        PropertyDraft {
            id,
            name: self.name.clone(),
            property_type: self.property_type,
            city: self.city,
            locality: self.locality.clone(),
            address: self.address.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone().unwrap_or_default(),
            description: self.description.clone(),
            price_from: self.price_from,
            price_to: self.price_to.unwrap_or(0.0),
            offer_price: self.offer_price.unwrap_or(0.0),
            total_floors: self.total_floors,
            rooms_per_floor: self.rooms_per_floor,
            latitude: self.latitude.unwrap_or(0.0),
            longitude: self.longitude.unwrap_or(0.0),
            images_text: self.images.join("\n"),
            video_url: self.video_url.clone().unwrap_or_default(),
            contact_phone: self.contact_phone.clone().unwrap_or_default(),
            contact_email: self.contact_email.clone().unwrap_or_default(),
            owner_name: self.owner_name.clone().unwrap_or_default(),
            owner_details: self.owner_details.clone().unwrap_or_default(),
            verified: self.verified,
            published: self.published,
            availability_status: self.availability_status,
            accommodation_type: self.accommodation_type,
            suitable_for: self.suitable_for.iter().copied().collect(),
            food_included: self.food_included,
            property_size: self.property_size.unwrap_or(0.0),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::TypeDetails;

    fn green_valley() -> PropertyDraft {
        let mut draft = PropertyDraft::new();
        draft.name = "Green Valley PG".to_string();
        draft.property_type = PropertyType::Pg;
        draft.city = City::Sikar;
        draft.locality = "Fatehpur".to_string();
        draft.address = "123 Main Rd".to_string();
        draft.description = "Nice place".to_string();
        draft.price_from = 5000.0;
        draft.total_floors = 2;
        draft.rooms_per_floor = 4;
        draft
    }

    #[test]
    fn image_lines_drop_blanks_and_preserve_order() {
        let parsed = parse_image_lines("http://a.com/1.jpg\n\nhttp://a.com/2.jpg\n  \n");
        assert_eq!(parsed, vec!["http://a.com/1.jpg", "http://a.com/2.jpg"]);
    }

    #[test]
    fn unset_optionals_become_absent_not_zero() {
        let draft = green_valley();
        assert!(crate::validate::validate(&draft).is_empty());
        let record = normalize(&draft);
        assert_eq!(record.price_to, None);
        assert_eq!(record.offer_price, None);
        assert_eq!(record.contact_phone, None);
        assert_eq!(record.meal_options, None);
        assert_eq!(record.pincode, None);
        assert_eq!(record.latitude, None);
        assert_eq!(record.property_size, None);
        assert!(record.images.is_empty());
        assert_eq!(record.price_from, 5000.0);
    }

    #[test]
    fn active_group_booleans_pass_through() {
        let mut draft = green_valley();
        if let TypeDetails::Pg(pg) = &mut draft.details {
            pg.attached_bathroom = true;
            pg.meal_options.insert("Breakfast".to_string());
            pg.meal_options.insert("Dinner".to_string());
        }
        let record = normalize(&draft);
        assert_eq!(record.attached_bathroom, Some(true));
        assert_eq!(record.laundry_service, Some(false));
        assert_eq!(
            record.meal_options,
            Some(vec!["Breakfast".to_string(), "Dinner".to_string()])
        );
        // Inactive groups contribute nothing.
        assert_eq!(record.bedrooms, None);
        assert_eq!(record.warden_available, None);
        assert_eq!(record.kitchen_access, None);
    }

    #[test]
    fn normalization_is_idempotent_through_hydration() {
        let mut draft = green_valley();
        draft.price_to = 8000.0;
        draft.contact_phone = "9876543210".to_string();
        draft.images_text = "http://a.com/1.jpg\n\nhttp://a.com/2.jpg".to_string();
        let once = normalize(&draft);
        let twice = normalize(&once.to_draft(None));
        assert_eq!(once, twice);
    }

    #[test]
    fn hydrated_draft_restores_group_payload() {
        let mut draft = green_valley();
        draft.set_property_type(PropertyType::Hostel);
        if let TypeDetails::Hostel(hostel) = &mut draft.details {
            hostel.total_capacity = 60;
            hostel.warden_available = true;
        }
        let record = normalize(&draft);
        let back = record.to_draft(None);
        match &back.details {
            TypeDetails::Hostel(hostel) => {
                assert_eq!(hostel.total_capacity, 60);
                assert!(hostel.warden_available);
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn record_serializes_flat() {
        let record = normalize(&green_valley());
        let value = serde_json::to_value(&record).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["property_type"], "PG");
        assert_eq!(map["city"], "Sikar");
        assert!(map["price_to"].is_null());
        assert!(map.contains_key("warden_available"));
    }
}
