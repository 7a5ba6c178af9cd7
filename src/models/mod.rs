//! Data model for scraped team season records

use serde::{Deserialize, Serialize};

/// One team season row scraped from a listing page.
///
/// Numeric fields hold zero either because the source cell contained "0" or
/// because coercion failed; downstream consumers cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub year: i32,
    pub wins: i32,
    pub losses: i32,
    /// Blank on the source site for pre-2000 seasons; the key is dropped
    /// from the JSON output when zero.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ot_losses: i32,
    pub win_percent: f64,
    pub goals_for: i32,
    pub goals_against: i32,
    pub diff: i32,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i32) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bruins() -> Team {
        Team {
            name: "Boston Bruins".to_string(),
            year: 1990,
            wins: 44,
            losses: 24,
            ot_losses: 0,
            win_percent: 0.55,
            goals_for: 299,
            goals_against: 264,
            diff: 35,
        }
    }

    #[test]
    fn zero_ot_losses_omitted_from_json() {
        let json = serde_json::to_string(&bruins()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Boston Bruins","year":1990,"wins":44,"losses":24,"win_percent":0.55,"goals_for":299,"goals_against":264,"diff":35}"#
        );
    }

    #[test]
    fn nonzero_ot_losses_kept_in_json() {
        let team = Team {
            year: 2011,
            ot_losses: 7,
            ..bruins()
        };
        let json = serde_json::to_string(&team).unwrap();
        assert!(json.contains(r#""ot_losses":7"#));
    }

    #[test]
    fn missing_ot_losses_deserializes_to_zero() {
        let json = r#"{"name":"Boston Bruins","year":1990,"wins":44,"losses":24,"win_percent":0.55,"goals_for":299,"goals_against":264,"diff":35}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team, bruins());
    }
}
