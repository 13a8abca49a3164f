//! Test-only slot builders and a scorer with scripted results, used by unit,
//! behaviour and property tests across the workspace.

use std::collections::HashMap;

use crate::{ScoreInput, SlotQuality, SlotRecord, SlotScorer};

/// A slot with the "Scenario A" shape: north-facing break, 1.5 m at 10 s,
/// 8 kn offshore wind from the south.
#[must_use]
pub fn offshore_slot(time_key: &str, offset_hours: i64) -> SlotRecord {
    SlotRecord::at(time_key, offset_hours)
        .with_waves(1.5, 10.0)
        .with_wind(8.0, 180.0)
        .facing(0.0)
}

/// Hourly slots on `date` starting at local `first_hour`.
///
/// Offsets start at `first_offset` and rise by one per slot. Slots are
/// copies of [`offshore_slot`].
#[must_use]
pub fn hourly_slots(date: &str, first_hour: u32, first_offset: i64, count: u32) -> Vec<SlotRecord> {
    (0..count)
        .map(|step| {
            let hour = first_hour.saturating_add(step);
            offshore_slot(
                &format!("{date}T{hour:02}:00"),
                first_offset.saturating_add(i64::from(step)),
            )
        })
        .collect()
}

/// `SlotScorer` that returns scripted scores keyed by time key.
///
/// Unknown slots score zero. Reasons stay empty.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Script `score` for the slot at `time_key`.
    #[must_use]
    pub fn with_score(mut self, time_key: impl Into<String>, score: f64) -> Self {
        self.scores.insert(time_key.into(), score);
        self
    }

    /// Script scores for `slots` in order.
    #[must_use]
    pub fn with_scores<'a, I>(self, slots: &[SlotRecord], scores: I) -> Self
    where
        I: IntoIterator<Item = &'a f64>,
    {
        slots
            .iter()
            .zip(scores)
            .fold(self, |scorer, (slot, score)| {
                scorer.with_score(slot.time_key.clone(), *score)
            })
    }
}

impl SlotScorer for FixedScorer {
    fn score(&self, input: &ScoreInput<'_>) -> SlotQuality {
        let raw = self
            .scores
            .get(&input.slot.time_key)
            .copied()
            .unwrap_or_default();
        SlotQuality {
            score: Self::sanitise(raw),
            ..SlotQuality::default()
        }
    }
}
