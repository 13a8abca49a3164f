//! `Planner` wires classification, tide lookup and a `SlotScorer` into the
//! day, window and ranking passes.

use std::collections::BTreeMap;

use surfcast_core::{
    DaySummary, LocationSlots, RankedEntry, ScoreInput, ScoringOptions, SlotScorer, SurfWindow,
    TideModel, classify,
};
use surfcast_scorer::RuleScorer;

use crate::window::{self, WindowConfig};
use crate::{ScoredSlot, day, rank};

/// Plans surf sessions for one or more locations.
///
/// The planner owns a scorer, a tide model and window tuning. Every
/// operation is a pure function of its arguments and that configuration, so
/// a planner can be shared freely between threads when its scorer allows.
///
/// # Examples
/// ```
/// use surfcast_core::{LocationSlots, ScoringOptions, SlotRecord};
/// use surfcast_planner::Planner;
///
/// let slot = |time: &str, offset| {
///     SlotRecord::at(time, offset)
///         .with_waves(1.5, 10.0)
///         .with_wind(8.0, 180.0)
///         .facing(0.0)
/// };
/// let hossegor = LocationSlots::new(
///     "hossegor",
///     vec![slot("2024-06-01T07:00", 0), slot("2024-06-01T08:00", 1)],
/// );
///
/// let planner = Planner::new();
/// let options = ScoringOptions::default();
/// let day = planner
///     .aggregate_day(&hossegor, "2024-06-01", &options)
///     .expect("two qualifying slots");
///
/// assert_eq!(day.slot_count, 2);
/// assert_eq!(planner.detect_windows(&hossegor, &options).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Planner<S = RuleScorer> {
    scorer: S,
    tide: TideModel,
    window: WindowConfig,
}

impl Planner<RuleScorer> {
    /// A planner using [`RuleScorer`] and the built-in tide table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scorer(RuleScorer)
    }
}

impl Default for Planner<RuleScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SlotScorer> Planner<S> {
    /// A planner using `scorer` and the built-in tide table.
    #[must_use]
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            tide: TideModel::builtin(),
            window: WindowConfig::default(),
        }
    }

    /// Replace the tide model.
    #[must_use]
    pub fn with_tide_model(mut self, tide: TideModel) -> Self {
        self.tide = tide;
        self
    }

    /// Replace the window tuning.
    #[must_use]
    pub const fn with_window_config(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Window tuning in force.
    #[must_use]
    pub const fn window_config(&self) -> WindowConfig {
        self.window
    }

    /// Tide model in use.
    #[must_use]
    pub const fn tide_model(&self) -> &TideModel {
        &self.tide
    }

    /// Classify and score every slot of `location`, in input order.
    #[must_use]
    pub fn score_slots<'a>(
        &self,
        location: &'a LocationSlots,
        options: &ScoringOptions,
    ) -> Vec<ScoredSlot<'a>> {
        let region = location.region.as_deref();
        location
            .slots
            .iter()
            .map(|slot| {
                let labels = classify(slot);
                let tide = self.tide.resolve(&location.location_id, region, slot.day_part);
                let quality = self.scorer.score(&ScoreInput {
                    slot,
                    labels: &labels,
                    tide: &tide,
                    options,
                });
                ScoredSlot {
                    slot,
                    date_key: slot.date_key(),
                    labels,
                    quality,
                }
            })
            .collect()
    }

    /// Summarise `location` on `date_key` using the active hard filters.
    ///
    /// Slots that fail `options.filters` are left out. Returns `None` when
    /// no slot on that day qualifies.
    #[must_use]
    pub fn aggregate_day(
        &self,
        location: &LocationSlots,
        date_key: &str,
        options: &ScoringOptions,
    ) -> Option<DaySummary> {
        let scored = self.score_slots(location, options);
        let qualifying = scored
            .iter()
            .filter(|entry| entry.date_key == date_key)
            .filter(|entry| options.filters.admits(&entry.labels))
            .collect();
        day::summarise(&location.location_id, date_key, qualifying)
    }

    /// Summarise `location` on `date_key` with every filter switched off.
    ///
    /// For descriptive views such as reports, where a day should be shown
    /// even if it fails the user's filters. Preferences still apply.
    #[must_use]
    pub fn describe_day(
        &self,
        location: &LocationSlots,
        date_key: &str,
        options: &ScoringOptions,
    ) -> Option<DaySummary> {
        self.aggregate_day(location, date_key, &options.without_filters())
    }

    /// Summaries for every calendar day present in `location`, in date
    /// order, each with its best window attached.
    ///
    /// Days where no slot passes the hard filters are omitted.
    #[must_use]
    pub fn summarise_days(
        &self,
        location: &LocationSlots,
        options: &ScoringOptions,
    ) -> Vec<DaySummary> {
        let scored = self.score_slots(location, options);
        let windows = self.windows_for(&location.location_id, &scored);
        let mut days: BTreeMap<&str, Vec<&ScoredSlot<'_>>> = BTreeMap::new();
        for entry in scored
            .iter()
            .filter(|entry| options.filters.admits(&entry.labels))
        {
            days.entry(entry.date_key.as_str()).or_default().push(entry);
        }
        days.into_iter()
            .filter_map(|(date_key, slots)| {
                let mut summary = day::summarise(&location.location_id, date_key, slots)?;
                let same_day: Vec<SurfWindow> = windows
                    .iter()
                    .filter(|candidate| candidate.date_key == date_key)
                    .cloned()
                    .collect();
                summary.best_window = window::best_window(&same_day).cloned();
                Some(summary)
            })
            .collect()
    }

    /// Surf windows across every day present in `location`.
    ///
    /// Slots are ordered by `(date_key, offset_hours)` first, so input order
    /// does not matter.
    #[must_use]
    pub fn detect_windows(
        &self,
        location: &LocationSlots,
        options: &ScoringOptions,
    ) -> Vec<SurfWindow> {
        let scored = self.score_slots(location, options);
        self.windows_for(&location.location_id, &scored)
    }

    /// Rank `locations` by their day score on `date_key`.
    ///
    /// Locations with no qualifying slot are dropped. Ties keep the order of
    /// `locations`. At most `top_limit` entries are returned.
    #[must_use]
    pub fn rank(
        &self,
        date_key: &str,
        locations: &[LocationSlots],
        top_limit: usize,
        options: &ScoringOptions,
    ) -> Vec<RankedEntry> {
        let summaries = locations
            .iter()
            .filter_map(|location| {
                let summary = self.aggregate_day(location, date_key, options);
                if summary.is_none() {
                    log::debug!(
                        "no qualifying slot for '{}' on {date_key}; not ranked",
                        location.location_id
                    );
                }
                summary
            })
            .collect();
        rank::rank_summaries(summaries, top_limit)
    }

    fn windows_for(&self, location_id: &str, scored: &[ScoredSlot<'_>]) -> Vec<SurfWindow> {
        let mut ordered: Vec<&ScoredSlot<'_>> = scored.iter().collect();
        ordered.sort_by(|lhs, rhs| {
            lhs.date_key
                .cmp(&rhs.date_key)
                .then_with(|| lhs.slot.offset_hours.cmp(&rhs.slot.offset_hours))
        });
        window::detect(location_id, &ordered, self.window)
    }
}
