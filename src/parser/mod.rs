//! CSS-selector extraction of team rows from listing HTML

use std::str::FromStr;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::models::Team;

/// Fixed selector set for the listing table: one `.team` block per row, one
/// class per stat cell.
struct TeamSelectors {
    team: Selector,
    name: Selector,
    year: Selector,
    wins: Selector,
    losses: Selector,
    ot_losses: Selector,
    pct: Selector,
    gf: Selector,
    ga: Selector,
    diff: Selector,
}

impl TeamSelectors {
    fn new() -> Self {
        Self {
            team: Selector::parse(".team").unwrap(),
            name: Selector::parse(".name").unwrap(),
            year: Selector::parse(".year").unwrap(),
            wins: Selector::parse(".wins").unwrap(),
            losses: Selector::parse(".losses").unwrap(),
            ot_losses: Selector::parse(".ot-losses").unwrap(),
            pct: Selector::parse(".pct").unwrap(),
            gf: Selector::parse(".gf").unwrap(),
            ga: Selector::parse(".ga").unwrap(),
            diff: Selector::parse(".diff").unwrap(),
        }
    }
}

/// Extract every team row from one page of listing HTML, in document order.
///
/// The HTML parser is lenient and never fails outright; garbage input simply
/// matches zero rows. Zero-row pages are logged so a changed site layout
/// shows up in the logs.
pub fn parse_page(page: u32, html: &str) -> Vec<Team> {
    let selectors = TeamSelectors::new();
    let document = Html::parse_document(html);

    let mut teams = Vec::new();
    for row in document.select(&selectors.team) {
        teams.push(Team {
            name: field_text(row, &selectors.name),
            year: field_number(row, &selectors.year),
            wins: field_number(row, &selectors.wins),
            losses: field_number(row, &selectors.losses),
            // The ot-losses cell is blank for pre-2000 seasons, so a failed
            // coercion doubles as the "not present" signal. Open question:
            // the same silent default also swallows genuine parse failures
            // here and on every other numeric cell.
            ot_losses: field_number(row, &selectors.ot_losses),
            win_percent: field_number(row, &selectors.pct),
            goals_for: field_number(row, &selectors.gf),
            goals_against: field_number(row, &selectors.ga),
            diff: field_number(row, &selectors.diff),
        });
    }

    if teams.is_empty() {
        warn!("no team rows found on page {page}");
    }

    teams
}

fn field_text(row: ElementRef, selector: &Selector) -> String {
    row.select(selector).next().map_or_else(String::new, |el| {
        el.text().collect::<String>().trim().to_string()
    })
}

/// Numeric cells silently default to zero when the text does not parse; a
/// zero in the output is indistinguishable from a literal 0 on the page.
fn field_number<T: FromStr + Default>(row: ElementRef, selector: &Selector) -> T {
    field_text(row, selector).parse().unwrap_or_default()
}
