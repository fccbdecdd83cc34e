//! Calendar month resolution.
//!
//! Every endpoint that takes a month name resolves it through this one
//! type, so the case-insensitive name-to-index mapping cannot drift
//! between queries.

use crate::error::DomainError;

/// A calendar month, indexed 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months, in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the 1-based calendar index (January = 1, December = 12).
    pub fn index(&self) -> u32 {
        *self as u32 + 1
    }

    /// Returns the full English name in lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Month {
    type Err = DomainError;

    /// Parses a full English month name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Month::ALL
            .iter()
            .find(|m| m.name() == lowered)
            .copied()
            .ok_or_else(|| DomainError::UnknownMonth(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_month_names_resolve_in_order() {
        let names = [
            "january",
            "february",
            "march",
            "april",
            "may",
            "june",
            "july",
            "august",
            "september",
            "october",
            "november",
            "december",
        ];
        for (i, name) in names.iter().enumerate() {
            let month: Month = name.parse().unwrap();
            assert_eq!(month.index(), i as u32 + 1);
        }
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!("March".parse::<Month>().unwrap(), Month::March);
        assert_eq!("DECEMBER".parse::<Month>().unwrap(), Month::December);
        assert_eq!("jUlY".parse::<Month>().unwrap(), Month::July);
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        assert!(matches!(
            "smarch".parse::<Month>(),
            Err(DomainError::UnknownMonth(_))
        ));
        // Abbreviations are not full names.
        assert!("mar".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for month in Month::ALL {
            assert_eq!(month.to_string().parse::<Month>().unwrap(), month);
        }
    }
}
