//! US state and territory options for the address `state` field.

/// One selectable region: display name plus two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub name: &'static str,
    pub abbreviation: &'static str,
}

const fn state(name: &'static str, abbreviation: &'static str) -> UsState {
    UsState { name, abbreviation }
}

/// Dropdown options in display order.
pub const US_STATES: &[UsState] = &[
    state("Alabama", "AL"),
    state("Alaska", "AK"),
    state("American Samoa", "AS"),
    state("Arizona", "AZ"),
    state("Arkansas", "AR"),
    state("California", "CA"),
    state("Colorado", "CO"),
    state("Connecticut", "CT"),
    state("Delaware", "DE"),
    state("District Of Columbia", "DC"),
    state("Federated States Of Micronesia", "FM"),
    state("Florida", "FL"),
    state("Georgia", "GA"),
    state("Guam", "GU"),
    state("Hawaii", "HI"),
    state("Idaho", "ID"),
    state("Illinois", "IL"),
    state("Indiana", "IN"),
    state("Iowa", "IA"),
    state("Kansas", "KS"),
    state("Kentucky", "KY"),
    state("Louisiana", "LA"),
    state("Maine", "ME"),
    state("Marshall Islands", "MH"),
    state("Maryland", "MD"),
    state("Massachusetts", "MA"),
    state("Michigan", "MI"),
    state("Minnesota", "MN"),
    state("Mississippi", "MS"),
    state("Missouri", "MO"),
    state("Montana", "MT"),
    state("Nebraska", "NE"),
    state("Nevada", "NV"),
    state("New Hampshire", "NH"),
    state("New Jersey", "NJ"),
    state("New Mexico", "NM"),
    state("New York", "NY"),
    state("North Carolina", "NC"),
    state("North Dakota", "ND"),
    state("Northern Mariana Islands", "MP"),
    state("Ohio", "OH"),
    state("Oklahoma", "OK"),
    state("Oregon", "OR"),
    state("Palau", "PW"),
    state("Pennsylvania", "PA"),
    state("Puerto Rico", "PR"),
    state("Rhode Island", "RI"),
    state("South Carolina", "SC"),
    state("South Dakota", "SD"),
    state("Tennessee", "TN"),
    state("Texas", "TX"),
    state("Utah", "UT"),
    state("Vermont", "VT"),
    state("Virgin Islands", "VI"),
    state("Virginia", "VA"),
    state("Washington", "WA"),
    state("West Virginia", "WV"),
    state("Wisconsin", "WI"),
    state("Wyoming", "WY"),
];

/// Looks up a region by its two-letter code (case-insensitive).
pub fn find_state(abbreviation: &str) -> Option<&'static UsState> {
    let code = abbreviation.trim();
    US_STATES
        .iter()
        .find(|state| state.abbreviation.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::{find_state, US_STATES};
    use std::collections::HashSet;

    #[test]
    fn abbreviations_are_unique_two_letter_codes() {
        let mut seen = HashSet::new();
        for state in US_STATES {
            assert_eq!(state.abbreviation.len(), 2, "{}", state.name);
            assert!(seen.insert(state.abbreviation), "{}", state.abbreviation);
        }
    }

    #[test]
    fn find_state_ignores_case_and_whitespace() {
        assert_eq!(find_state(" ny ").map(|s| s.name), Some("New York"));
        assert!(find_state("XX").is_none());
    }
}
