//! Per-city locality tables. Read-only configuration data.

use super::City;

/// Sentinel accepted for every city when the locality is not in the table.
pub const LOCALITY_OTHER: &str = "Other";

const SIKAR: &[&str] = &[
    "Fatehpur",
    "Piprali Road",
    "Station Road",
    "Radhakishanpura",
    "Shram Colony",
    "Navalgarh Road",
];

const JAIPUR: &[&str] = &[
    "Malviya Nagar",
    "Vaishali Nagar",
    "Mansarovar",
    "C-Scheme",
    "Jagatpura",
    "Pratap Nagar",
];

const KOTA: &[&str] = &[
    "Vigyan Nagar",
    "Talwandi",
    "Jawahar Nagar",
    "Mahaveer Nagar",
    "Indra Vihar",
];

pub fn localities_for(city: City) -> &'static [&'static str] {
    match city {
        City::Sikar => SIKAR,
        City::Jaipur => JAIPUR,
        City::Kota => KOTA,
    }
}

/// A locality is valid for a city when it appears in that city's table or is
/// the "Other" sentinel.
pub fn is_valid_locality(city: City, locality: &str) -> bool {
    locality == LOCALITY_OTHER || localities_for(city).contains(&locality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locality_membership_is_per_city() {
        assert!(is_valid_locality(City::Sikar, "Fatehpur"));
        assert!(!is_valid_locality(City::Jaipur, "Fatehpur"));
        assert!(is_valid_locality(City::Kota, "Talwandi"));
    }

    #[test]
    fn other_sentinel_is_valid_everywhere() {
        for city in City::ALL {
            assert!(is_valid_locality(city, LOCALITY_OTHER));
        }
    }

    #[test]
    fn unknown_locality_is_rejected() {
        assert!(!is_valid_locality(City::Sikar, "Nowhere"));
        assert!(!is_valid_locality(City::Sikar, ""));
    }
}
