pub mod columns;
pub mod enums;
pub mod error;
pub mod params;

pub use enums::{Medal, Season, Sex};
pub use error::{ModelError, Result};
pub use params::{CategoryKind, MedalSelector, SeasonFilter, SexFilter};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn season_parses_case_insensitively() {
        assert_eq!(Season::from_str("Summer").unwrap(), Season::Summer);
        assert_eq!(Season::from_str("winter").unwrap(), Season::Winter);
        assert!(Season::from_str("spring").is_err());
    }

    #[test]
    fn medal_roundtrips_through_label() {
        for medal in Medal::all() {
            assert_eq!(Medal::from_str(medal.as_str()).unwrap(), medal);
        }
    }

    #[test]
    fn filters_expose_their_restriction() {
        assert_eq!(SeasonFilter::All.season(), None);
        assert_eq!(SeasonFilter::Winter.season(), Some(Season::Winter));
        assert_eq!(SexFilter::Female.sex(), Some(Sex::Female));
        assert_eq!(SexFilter::Both.sex(), None);
    }

    #[test]
    fn params_serialize() {
        let json = serde_json::to_string(&MedalSelector::Gold).expect("serialize selector");
        let round: MedalSelector = serde_json::from_str(&json).expect("deserialize selector");
        assert_eq!(round, MedalSelector::Gold);
    }
}
