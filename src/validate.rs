//! Draft validation: a pure function from a draft to field-level errors.
//!
//! Validation runs in full on submit; there is no partial-success mode. The
//! caller proceeds to normalization only when the returned map is empty.

use crate::catalog::is_valid_locality;
use crate::details::TypeDetails;
use crate::draft::PropertyDraft;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Field name -> human-readable message. Empty when the draft is valid.
pub type ErrorMap = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationOptions {
    /// Enforce min_stay_duration <= max_stay_duration for short term stays.
    /// Off by default: the production form never enforced it, and silently
    /// tightening would reject previously accepted drafts.
    pub enforce_stay_bounds: bool,
}

/// Local, non-space segments around '@' and '.': the basic local@domain.tld shape.
fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"))
}

pub fn validate(draft: &PropertyDraft) -> ErrorMap {
    validate_with(draft, &ValidationOptions::default())
}

pub fn validate_with(draft: &PropertyDraft, options: &ValidationOptions) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let mut err = |field: &str, message: &str| {
        errors.insert(field.to_string(), message.to_string());
    };

    if draft.name.trim().is_empty() {
        err("name", "Property name is required");
    }
    let locality = draft.locality.trim();
    if locality.is_empty() {
        err("locality", "Locality is required");
    } else if !is_valid_locality(draft.city, locality) {
        err("locality", "Select a locality belonging to the chosen city");
    }
    if draft.address.trim().is_empty() {
        err("address", "Address is required");
    }
    if draft.description.trim().is_empty() {
        err("description", "Description is required");
    }

    if draft.price_from <= 0.0 {
        err("price_from", "Starting price must be greater than zero");
    }
    if draft.price_to != 0.0 && draft.price_to < draft.price_from {
        err("price_to", "Maximum price cannot be below the starting price");
    }
    if draft.offer_price != 0.0 && draft.offer_price >= draft.price_from {
        err("offer_price", "Offer price must be below the starting price");
    }

    if draft.total_floors < 1 {
        err("total_floors", "At least one floor is required");
    }
    if draft.rooms_per_floor < 1 {
        err("rooms_per_floor", "At least one room per floor is required");
    }

    if !draft.contact_phone.is_empty() {
        let digits: String = draft
            .contact_phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if digits.len() != 10 || !digits.chars().all(|c| c.is_ascii_digit()) {
            err("contact_phone", "Phone number must be exactly 10 digits");
        }
    }
    if !draft.contact_email.is_empty() && !email_pattern().is_match(&draft.contact_email) {
        err("contact_email", "Enter a valid email address");
    }

    if draft.latitude != 0.0 && !(-90.0..=90.0).contains(&draft.latitude) {
        err("latitude", "Latitude must be between -90 and 90");
    }
    if draft.longitude != 0.0 && !(-180.0..=180.0).contains(&draft.longitude) {
        err("longitude", "Longitude must be between -180 and 180");
    }

    if options.enforce_stay_bounds {
        if let TypeDetails::ShortStay(stay) = &draft.details {
            if stay.min_stay_duration > 0
                && stay.max_stay_duration > 0
                && stay.min_stay_duration > stay.max_stay_duration
            {
                err(
                    "max_stay_duration",
                    "Maximum stay cannot be shorter than the minimum stay",
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::City;
    use crate::details::ShortStayDetails;

    fn valid_draft() -> PropertyDraft {
        let mut draft = PropertyDraft::new();
        draft.name = "Green Valley PG".to_string();
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
    fn complete_draft_is_valid() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn required_fields_each_produce_their_error() {
        for field in ["name", "locality", "address", "description"] {
            let mut draft = valid_draft();
            match field {
                "name" => draft.name = "   ".to_string(),
                "locality" => draft.locality = String::new(),
                "address" => draft.address = " ".to_string(),
                _ => draft.description = String::new(),
            }
            let errors = validate(&draft);
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn price_from_must_be_positive() {
        let mut draft = valid_draft();
        draft.price_from = 0.0;
        assert!(validate(&draft).contains_key("price_from"));
        draft.price_from = -100.0;
        assert!(validate(&draft).contains_key("price_from"));
    }

    #[test]
    fn price_to_ordering_with_equal_boundary() {
        let mut draft = valid_draft();
        draft.price_to = 4999.0;
        assert!(validate(&draft).contains_key("price_to"));
        draft.price_to = 5000.0; // equal is allowed
        assert!(!validate(&draft).contains_key("price_to"));
        draft.price_to = 8000.0;
        assert!(!validate(&draft).contains_key("price_to"));
    }

    #[test]
    fn offer_price_equal_to_price_from_is_rejected() {
        let mut draft = valid_draft();
        draft.offer_price = 5000.0; // uses >=, not >
        assert!(validate(&draft).contains_key("offer_price"));
        draft.offer_price = 4500.0;
        assert!(!validate(&draft).contains_key("offer_price"));
    }

    #[test]
    fn structure_bounds() {
        let mut draft = valid_draft();
        draft.total_floors = 0;
        draft.rooms_per_floor = 0;
        let errors = validate(&draft);
        assert!(errors.contains_key("total_floors"));
        assert!(errors.contains_key("rooms_per_floor"));
        draft.total_floors = 1;
        draft.rooms_per_floor = 1;
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn phone_format() {
        let mut draft = valid_draft();
        draft.contact_phone = "1234567890".to_string();
        assert!(!validate(&draft).contains_key("contact_phone"));
        draft.contact_phone = "12 3456 7890".to_string(); // whitespace stripped first
        assert!(!validate(&draft).contains_key("contact_phone"));
        draft.contact_phone = "123456789".to_string();
        assert!(validate(&draft).contains_key("contact_phone"));
        draft.contact_phone = "123-456-7890".to_string();
        assert!(validate(&draft).contains_key("contact_phone"));
        draft.contact_phone = String::new(); // optional
        assert!(!validate(&draft).contains_key("contact_phone"));
    }

    #[test]
    fn email_shape() {
        let mut draft = valid_draft();
        draft.contact_email = "owner@example.com".to_string();
        assert!(!validate(&draft).contains_key("contact_email"));
        for bad in ["owner", "owner@example", "owner @example.com", "@x.y"] {
            draft.contact_email = bad.to_string();
            assert!(
                validate(&draft).contains_key("contact_email"),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn geo_bounds_are_inclusive() {
        let mut draft = valid_draft();
        draft.latitude = 90.0;
        assert!(!validate(&draft).contains_key("latitude"));
        draft.latitude = 90.0001;
        assert!(validate(&draft).contains_key("latitude"));
        draft.latitude = -90.0;
        assert!(!validate(&draft).contains_key("latitude"));
        draft.latitude = -91.0;
        assert!(validate(&draft).contains_key("latitude"));
        draft.latitude = 0.0;
        draft.longitude = 180.0;
        assert!(!validate(&draft).contains_key("longitude"));
        draft.longitude = 181.0;
        assert!(validate(&draft).contains_key("longitude"));
    }

    #[test]
    fn locality_is_checked_against_city_membership() {
        let mut draft = valid_draft();
        draft.set_city(City::Jaipur);
        assert!(draft.locality.is_empty());
        draft.locality = "Fatehpur".to_string(); // Sikar locality under Jaipur
        assert!(validate(&draft).contains_key("locality"));
        draft.locality = "Malviya Nagar".to_string();
        assert!(!validate(&draft).contains_key("locality"));
    }

    #[test]
    fn stay_bounds_only_enforced_when_opted_in() {
        let mut draft = valid_draft();
        draft.set_property_type(crate::catalog::PropertyType::ShortTermStay);
        draft.details = TypeDetails::ShortStay(ShortStayDetails {
            min_stay_duration: 10,
            max_stay_duration: 3,
            ..ShortStayDetails::default()
        });
        assert!(validate(&draft).is_empty());
        let opts = ValidationOptions {
            enforce_stay_bounds: true,
        };
        assert!(validate_with(&draft, &opts).contains_key("max_stay_duration"));
    }
}
