use std::sync::Arc;

use relato_engine::{CardState, FeedQuery, FeedStats, filter_reports};
use relato_types::{ReportId, ReportWithAuthor, UserId};
use tracing::{debug, warn};

use crate::Result;
use crate::gateway::Gateway;

/// Fetched feed plus the active query; filtering never goes back to the gateway.
#[derive(Debug, Clone, Default)]
pub struct FeedView {
    reports: Vec<ReportWithAuthor>,
    query: FeedQuery,
}

impl FeedView {
    pub fn new(reports: Vec<ReportWithAuthor>) -> Self {
        Self {
            reports,
            query: FeedQuery::default(),
        }
    }

    pub fn set_query(&mut self, query: FeedQuery) {
        self.query = query;
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    /// Everything fetched, newest first
    pub fn all(&self) -> &[ReportWithAuthor] {
        &self.reports
    }

    pub fn results(&self) -> Vec<&ReportWithAuthor> {
        filter_reports(&self.reports, &self.query)
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats::compute(&self.reports, self.results().len())
    }

    /// Drop a report locally after it was deleted
    pub fn remove(&mut self, id: &ReportId) -> bool {
        let before = self.reports.len();
        self.reports.retain(|r| r.report.id != *id);
        self.reports.len() != before
    }
}

pub struct FeedOps {
    gateway: Arc<dyn Gateway>,
}

impl FeedOps {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    pub fn load(&self) -> Result<FeedView> {
        let reports = self.gateway.list_reports()?;
        debug!(count = reports.len(), "feed loaded");
        Ok(FeedView::new(reports))
    }

    /// Like/save flags for `viewer` (all false when signed out) and the like count
    pub fn card_state(&self, viewer: Option<&UserId>, report_id: &ReportId) -> Result<CardState> {
        let like_count = self.gateway.count_likes(report_id)?;
        let (liked, saved) = match viewer {
            Some(user) => (
                self.gateway.is_liked(user, report_id)?,
                self.gateway.is_saved(user, report_id)?,
            ),
            None => (false, false),
        };
        Ok(CardState {
            liked,
            saved,
            like_count,
        })
    }

    /// Flip the like flag; the count is adjusted locally after the call succeeds
    pub fn toggle_like(
        &self,
        user: &UserId,
        report_id: &ReportId,
        state: CardState,
    ) -> Result<CardState> {
        let liked = !state.liked;
        self.gateway
            .set_liked(user, report_id, liked)
            .inspect_err(|e| warn!(report = %report_id, error = %e, "like toggle failed"))?;
        Ok(state.with_liked(liked))
    }

    pub fn toggle_save(
        &self,
        user: &UserId,
        report_id: &ReportId,
        state: CardState,
    ) -> Result<CardState> {
        let saved = !state.saved;
        self.gateway
            .set_saved(user, report_id, saved)
            .inspect_err(|e| warn!(report = %report_id, error = %e, "save toggle failed"))?;
        Ok(state.with_saved(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;
    use relato_types::Season;

    #[test]
    fn test_query_filters_locally() -> Result<()> {
        let gateway = fixtures::gateway();
        let ana = fixtures::user(&gateway, "ana@example.com", "Ana");
        fixtures::report(&gateway, ana, "Lisboa", ("PT", "Portugal"));
        fixtures::report(&gateway, ana, "Kyoto", ("JP", "Japão"));

        let mut view = FeedOps::new(gateway).load()?;
        assert_eq!(view.all().len(), 2);
        // Newest first
        assert_eq!(view.all()[0].report.title, "Kyoto");

        view.set_query(FeedQuery::new(Some("japão".to_string()), None));
        let titles: Vec<_> = view.results().iter().map(|r| r.report.title.clone()).collect();
        assert_eq!(titles, vec!["Kyoto"]);

        let stats = view.stats();
        assert_eq!(stats.total_reports, 2);
        assert_eq!(stats.distinct_countries, 2);
        assert_eq!(stats.results, 1);

        view.set_query(FeedQuery::new(None, Some(Season::Winter)));
        assert!(view.results().is_empty());
        Ok(())
    }

    #[test]
    fn test_toggle_like_adjusts_count_after_success() -> Result<()> {
        let gateway = fixtures::gateway();
        let ana = fixtures::user(&gateway, "ana@example.com", "Ana");
        let id = fixtures::report(&gateway, ana, "Lisboa", ("PT", "Portugal"));
        let feed = FeedOps::new(gateway);

        let state = feed.card_state(Some(&ana), &id)?;
        assert_eq!(state, CardState::default());

        let liked = feed.toggle_like(&ana, &id, state)?;
        assert!(liked.liked);
        assert_eq!(liked.like_count, 1);
        assert_eq!(feed.card_state(Some(&ana), &id)?.like_count, 1);

        let unliked = feed.toggle_like(&ana, &id, liked)?;
        assert!(!unliked.liked);
        assert_eq!(unliked.like_count, 0);
        Ok(())
    }

    #[test]
    fn test_toggle_save_round_trip() -> Result<()> {
        let gateway = fixtures::gateway();
        let ana = fixtures::user(&gateway, "ana@example.com", "Ana");
        let id = fixtures::report(&gateway, ana, "Lisboa", ("PT", "Portugal"));
        let feed = FeedOps::new(gateway);

        let saved = feed.toggle_save(&ana, &id, CardState::default())?;
        assert!(saved.saved);
        assert!(feed.card_state(Some(&ana), &id)?.saved);
        assert!(!feed.card_state(None, &id)?.saved);
        Ok(())
    }

    #[test]
    fn test_remove_drops_local_entry() -> Result<()> {
        let gateway = fixtures::gateway();
        let ana = fixtures::user(&gateway, "ana@example.com", "Ana");
        let id = fixtures::report(&gateway, ana, "Lisboa", ("PT", "Portugal"));

        let mut view = FeedOps::new(gateway).load()?;
        assert!(view.remove(&id));
        assert!(!view.remove(&id));
        assert!(view.all().is_empty());
        Ok(())
    }
}
