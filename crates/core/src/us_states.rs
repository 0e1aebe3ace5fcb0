//! Reference set of US states, the District of Columbia, and the inhabited
//! territories, used to check the `state` part of a postal address.

/// A US jurisdiction that can appear in the `state` field of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jurisdiction {
    pub name: &'static str,
    pub abbreviation: &'static str,
}

const fn j(name: &'static str, abbreviation: &'static str) -> Jurisdiction {
    Jurisdiction { name, abbreviation }
}

/// The 50 states, followed by DC and the five inhabited territories.
pub const JURISDICTIONS: [Jurisdiction; 56] = [
    j("Alabama", "AL"),
    j("Alaska", "AK"),
    j("Arizona", "AZ"),
    j("Arkansas", "AR"),
    j("California", "CA"),
    j("Colorado", "CO"),
    j("Connecticut", "CT"),
    j("Delaware", "DE"),
    j("Florida", "FL"),
    j("Georgia", "GA"),
    j("Hawaii", "HI"),
    j("Idaho", "ID"),
    j("Illinois", "IL"),
    j("Indiana", "IN"),
    j("Iowa", "IA"),
    j("Kansas", "KS"),
    j("Kentucky", "KY"),
    j("Louisiana", "LA"),
    j("Maine", "ME"),
    j("Maryland", "MD"),
    j("Massachusetts", "MA"),
    j("Michigan", "MI"),
    j("Minnesota", "MN"),
    j("Mississippi", "MS"),
    j("Missouri", "MO"),
    j("Montana", "MT"),
    j("Nebraska", "NE"),
    j("Nevada", "NV"),
    j("New Hampshire", "NH"),
    j("New Jersey", "NJ"),
    j("New Mexico", "NM"),
    j("New York", "NY"),
    j("North Carolina", "NC"),
    j("North Dakota", "ND"),
    j("Ohio", "OH"),
    j("Oklahoma", "OK"),
    j("Oregon", "OR"),
    j("Pennsylvania", "PA"),
    j("Rhode Island", "RI"),
    j("South Carolina", "SC"),
    j("South Dakota", "SD"),
    j("Tennessee", "TN"),
    j("Texas", "TX"),
    j("Utah", "UT"),
    j("Vermont", "VT"),
    j("Virginia", "VA"),
    j("Washington", "WA"),
    j("West Virginia", "WV"),
    j("Wisconsin", "WI"),
    j("Wyoming", "WY"),
    j("District of Columbia", "DC"),
    j("American Samoa", "AS"),
    j("Guam", "GU"),
    j("Northern Mariana Islands", "MP"),
    j("Puerto Rico", "PR"),
    j("U.S. Virgin Islands", "VI"),
];

/// Whether `value` is a full name or two-letter abbreviation in
/// [`JURISDICTIONS`]. Matching is exact and case-sensitive.
pub fn is_valid_state(value: &str) -> bool {
    JURISDICTIONS
        .iter()
        .any(|s| s.name == value || s.abbreviation == value)
}
