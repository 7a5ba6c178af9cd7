//! Concurrent fan-out: one fetch-and-parse task per listing page

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::models::Team;
use crate::parser;
use crate::traits::PageSource;

/// Page count on the listing site. Observed once, never validated against
/// the remote source.
pub const TOTAL_PAGES: u32 = 24;

/// Rows on a full page; together with `TOTAL_PAGES` this bounds the channel
/// so that senders never block.
pub const TEAMS_PER_PAGE: usize = 25;

/// Fetch and parse every listing page concurrently, one task per page, all
/// spawned eagerly.
///
/// A failed page contributes zero records and never aborts the run. The
/// returned order is an artifact of task completion timing; callers must not
/// rely on it.
pub async fn collect_teams(source: Arc<dyn PageSource>) -> Vec<Team> {
    let capacity = TOTAL_PAGES as usize * TEAMS_PER_PAGE;
    let (tx, mut rx) = mpsc::channel(capacity);

    let mut tasks = JoinSet::new();
    for page in 1..=TOTAL_PAGES {
        let source = Arc::clone(&source);
        let tx = tx.clone();
        tasks.spawn(async move { scrape_page(source, page, tx).await });
    }
    drop(tx);

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!("page task failed to complete: {e}");
        }
    }

    // All senders are gone by now, so this drains the buffer and stops.
    let mut teams = Vec::with_capacity(capacity);
    while let Some(team) = rx.recv().await {
        teams.push(team);
    }

    info!("collected {} teams from {} pages", teams.len(), TOTAL_PAGES);
    teams
}

async fn scrape_page(source: Arc<dyn PageSource>, page: u32, tx: mpsc::Sender<Team>) {
    let body = match source.fetch_page(page).await {
        Ok(body) => body,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    let html = String::from_utf8_lossy(&body);
    for team in parser::parse_page(page, &html) {
        if tx.send(team).await.is_err() {
            return;
        }
    }
}
