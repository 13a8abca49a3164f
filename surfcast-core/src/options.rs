//! Caller-supplied filters and preferences.
//!
//! Nothing here is ambient: every scoring and aggregation call receives its
//! [`ScoringOptions`] explicitly.

use crate::ConditionLabels;
use crate::tags::tag_enum;

/// Optional filters, all off by default.
///
/// `min_surfable` and `beginner_friendly` act as hard filters during day
/// aggregation and ranking; every filter also adjusts slot scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Filters {
    /// Only slots with enough size and period.
    pub min_surfable: bool,
    /// Avoid challenging slots.
    pub beginner_friendly: bool,
    /// Favour clean slots and penalise choppy ones.
    pub prefer_clean: bool,
}

impl Filters {
    /// Whether a slot with `labels` passes the hard filters.
    ///
    /// # Examples
    /// ```
    /// use surfcast_core::{Filters, SlotRecord, classify};
    ///
    /// let small = classify(&SlotRecord::at("2024-06-01T07:00", 0).with_waves(0.5, 9.0));
    /// let filters = Filters { min_surfable: true, ..Filters::default() };
    ///
    /// assert!(!filters.admits(&small));
    /// assert!(Filters::default().admits(&small));
    /// ```
    #[must_use]
    pub const fn admits(&self, labels: &ConditionLabels) -> bool {
        !(self.min_surfable && !labels.min_surfable)
            && !(self.beginner_friendly && labels.challenging)
    }
}

tag_enum! {
    /// Self-declared surfing ability.
    pub enum SkillLevel {
        /// Still learning to catch and ride green waves.
        Beginner => "beginner",
        /// Comfortable in most everyday conditions.
        Intermediate => "intermediate",
        /// At home in big or powerful surf.
        Advanced => "advanced",
    }
}

/// Personal preferences layered on top of the filters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct UserPreferences {
    /// Self-declared ability.
    pub skill_level: SkillLevel,
    /// Smallest comfortable wave height in metres.
    pub preferred_min_height: f64,
    /// Largest comfortable wave height in metres.
    pub preferred_max_height: f64,
    /// Reward clean and penalise choppy slots.
    pub likes_clean: bool,
    /// Whether challenging slots are acceptable.
    pub can_handle_challenging: bool,
}

impl UserPreferences {
    /// Sensible defaults for a skill level.
    ///
    /// # Examples
    /// ```
    /// use surfcast_core::{SkillLevel, UserPreferences};
    ///
    /// let prefs = UserPreferences::for_skill(SkillLevel::Beginner);
    /// assert!(!prefs.can_handle_challenging);
    /// assert!(prefs.preferred_max_height <= 1.0);
    /// ```
    #[must_use]
    pub const fn for_skill(skill_level: SkillLevel) -> Self {
        match skill_level {
            SkillLevel::Beginner => Self {
                skill_level,
                preferred_min_height: 0.3,
                preferred_max_height: 1.0,
                likes_clean: true,
                can_handle_challenging: false,
            },
            SkillLevel::Intermediate => Self {
                skill_level,
                preferred_min_height: 0.6,
                preferred_max_height: 1.6,
                likes_clean: true,
                can_handle_challenging: false,
            },
            SkillLevel::Advanced => Self {
                skill_level,
                preferred_min_height: 1.0,
                preferred_max_height: 2.8,
                likes_clean: false,
                can_handle_challenging: true,
            },
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::for_skill(SkillLevel::Intermediate)
    }
}

/// Filters and optional preferences threaded into every call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScoringOptions {
    /// Active filters.
    pub filters: Filters,
    /// Preferences; `None` disables the preference rules entirely.
    pub preferences: Option<UserPreferences>,
}

impl ScoringOptions {
    /// Options with the given filters and no preferences.
    #[must_use]
    pub const fn with_filters(filters: Filters) -> Self {
        Self {
            filters,
            preferences: None,
        }
    }

    /// Attach preferences.
    #[must_use]
    pub const fn with_preferences(mut self, preferences: UserPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// The same options with every filter switched off.
    #[must_use]
    pub const fn without_filters(mut self) -> Self {
        self.filters = Filters {
            min_surfable: false,
            beginner_friendly: false,
            prefer_clean: false,
        };
        self
    }
}
