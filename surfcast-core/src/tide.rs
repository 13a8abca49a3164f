//! Heuristic tide context keyed by region and day part.
//!
//! This is not a tidal prediction. Each region profile states which tide
//! level a break usually sees in each part of the day and which levels the
//! break prefers. Profiles are resolved through a fixed fallback chain:
//! exact location id, then coarse region id, then the default profile.

use std::collections::{HashMap, HashSet};

use crate::DayPart;
use crate::tags::tag_enum;

/// Identifier of the profile used when nothing more specific matches.
pub const DEFAULT_PROFILE_ID: &str = "default";

tag_enum! {
    /// Approximate tide level.
    pub enum TideLevel {
        /// Around low water.
        Low => "low",
        /// Between low and high water.
        Mid => "mid",
        /// Around high water.
        High => "high",
    }
}

tag_enum! {
    /// Whether the tide level suits the break.
    pub enum TideSuitability {
        /// The level is one the break prefers.
        Good => "good",
        /// The break works, but not at its best.
        LessIdeal => "less-ideal",
    }
}

/// Tide level and suitability resolved for one slot.
///
/// Both fields are `None` only when no profile could be found at any level
/// of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TideContext {
    /// Approximate level for the slot's day part.
    pub tide_level: Option<TideLevel>,
    /// Verdict against the profile's preferred levels.
    pub tide_suitability: Option<TideSuitability>,
    /// Profile that produced the answer.
    pub profile_id: Option<String>,
}

impl TideContext {
    /// A context with no tide information.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            tide_level: None,
            tide_suitability: None,
            profile_id: None,
        }
    }
}

/// Tide behaviour of one region.
///
/// # Examples
/// ```
/// use surfcast_core::{DayPart, RegionTideProfile, TideLevel, TideSuitability};
///
/// let profile = RegionTideProfile::new("biscay")
///     .with_level(DayPart::Morning, TideLevel::Low)
///     .prefers(TideLevel::Mid);
///
/// assert_eq!(profile.level_for(DayPart::Morning), TideLevel::Low);
/// assert_eq!(profile.level_for(DayPart::Evening), TideLevel::Mid);
/// assert_eq!(profile.suitability(TideLevel::Mid), TideSuitability::Good);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTideProfile {
    id: String,
    levels: HashMap<DayPart, TideLevel>,
    preferred: HashSet<TideLevel>,
}

impl RegionTideProfile {
    /// Start an empty profile. Every day part reads as mid tide until set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            levels: HashMap::new(),
            preferred: HashSet::new(),
        }
    }

    /// Set the level seen during `day_part`.
    #[must_use]
    pub fn with_level(mut self, day_part: DayPart, level: TideLevel) -> Self {
        self.levels.insert(day_part, level);
        self
    }

    /// Mark `level` as one the region's breaks prefer.
    #[must_use]
    pub fn prefers(mut self, level: TideLevel) -> Self {
        self.preferred.insert(level);
        self
    }

    /// Profile identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Level for a day part, defaulting to mid when unset.
    #[must_use]
    pub fn level_for(&self, day_part: DayPart) -> TideLevel {
        self.levels.get(&day_part).copied().unwrap_or(TideLevel::Mid)
    }

    /// Judge a level against the preferred set.
    #[must_use]
    pub fn suitability(&self, level: TideLevel) -> TideSuitability {
        if self.preferred.contains(&level) {
            TideSuitability::Good
        } else {
            TideSuitability::LessIdeal
        }
    }
}

/// Levels per profile in morning, afternoon, evening order, then the
/// preferred levels.
type ProfileRow = (&'static str, [TideLevel; 3], &'static [TideLevel]);

const BUILTIN_PROFILES: &[ProfileRow] = &[
    (
        DEFAULT_PROFILE_ID,
        [TideLevel::Mid, TideLevel::High, TideLevel::Low],
        &[TideLevel::Mid],
    ),
    (
        "biscay",
        [TideLevel::Low, TideLevel::Mid, TideLevel::High],
        &[TideLevel::Mid, TideLevel::High],
    ),
    (
        "portugal-west",
        [TideLevel::Mid, TideLevel::Low, TideLevel::Mid],
        &[TideLevel::Low, TideLevel::Mid],
    ),
    (
        "california",
        [TideLevel::Low, TideLevel::Mid, TideLevel::High],
        &[TideLevel::Low, TideLevel::Mid],
    ),
    (
        "mediterranean",
        [TideLevel::Mid, TideLevel::Mid, TideLevel::Mid],
        &[TideLevel::Mid],
    ),
    (
        "australia-east",
        [TideLevel::High, TideLevel::Mid, TideLevel::Low],
        &[TideLevel::Mid, TideLevel::High],
    ),
];

const BUILTIN_LOCATIONS: &[(&str, &str)] = &[
    ("hossegor", "biscay"),
    ("la-graviere", "biscay"),
    ("biarritz", "biscay"),
    ("mundaka", "biscay"),
    ("ericeira", "portugal-west"),
    ("peniche", "portugal-west"),
    ("nazare", "portugal-west"),
    ("malibu", "california"),
    ("trestles", "california"),
    ("rincon", "california"),
    ("varazze", "mediterranean"),
    ("snapper-rocks", "australia-east"),
    ("byron-bay", "australia-east"),
];

const BUILTIN_REGIONS: &[(&str, &str)] = &[
    ("france-atlantic", "biscay"),
    ("basque-country", "biscay"),
    ("spain-north", "biscay"),
    ("portugal", "portugal-west"),
    ("california", "california"),
    ("us-west", "california"),
    ("mediterranean", "mediterranean"),
    ("italy", "mediterranean"),
    ("queensland", "australia-east"),
    ("new-south-wales", "australia-east"),
];

/// Static region profiles plus the id mappings that select them.
///
/// Ids are matched case-insensitively.
///
/// # Examples
/// ```
/// use surfcast_core::{DayPart, TideLevel, TideModel, TideSuitability};
///
/// let model = TideModel::builtin();
/// let tide = model.resolve("hossegor", None, DayPart::Afternoon);
///
/// assert_eq!(tide.tide_level, Some(TideLevel::Mid));
/// assert_eq!(tide.tide_suitability, Some(TideSuitability::Good));
/// assert_eq!(tide.profile_id.as_deref(), Some("biscay"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TideModel {
    profiles: HashMap<String, RegionTideProfile>,
    locations: HashMap<String, String>,
    regions: HashMap<String, String>,
    default_profile: String,
}

impl TideModel {
    /// A model with no profiles. Every lookup yields [`TideContext::unknown`].
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
            locations: HashMap::new(),
            regions: HashMap::new(),
            default_profile: DEFAULT_PROFILE_ID.to_owned(),
        }
    }

    /// The shipped table of regional profiles.
    #[must_use]
    pub fn builtin() -> Self {
        let mut model = Self::empty();
        for (id, levels, preferred) in BUILTIN_PROFILES {
            let mut profile = RegionTideProfile::new(*id);
            for (part, level) in DayPart::ALL.iter().zip(levels) {
                profile = profile.with_level(*part, *level);
            }
            for level in *preferred {
                profile = profile.prefers(*level);
            }
            model = model.with_profile(profile);
        }
        for (location, profile) in BUILTIN_LOCATIONS {
            model = model.with_location(*location, *profile);
        }
        for (region, profile) in BUILTIN_REGIONS {
            model = model.with_region(*region, *profile);
        }
        model
    }

    /// Add or replace a profile.
    #[must_use]
    pub fn with_profile(mut self, profile: RegionTideProfile) -> Self {
        self.profiles.insert(key(profile.id()), profile);
        self
    }

    /// Map an exact location id onto a profile.
    #[must_use]
    pub fn with_location(mut self, location_id: &str, profile_id: &str) -> Self {
        self.locations.insert(key(location_id), key(profile_id));
        self
    }

    /// Map a coarse region id onto a profile.
    #[must_use]
    pub fn with_region(mut self, region: &str, profile_id: &str) -> Self {
        self.regions.insert(key(region), key(profile_id));
        self
    }

    /// Choose the profile used when neither location nor region match.
    #[must_use]
    pub fn with_default_profile(mut self, profile_id: &str) -> Self {
        self.default_profile = key(profile_id);
        self
    }

    /// Walk the fallback chain for a location.
    #[must_use]
    pub fn profile_for(&self, location_id: &str, region: Option<&str>) -> Option<&RegionTideProfile> {
        let by_location = self
            .locations
            .get(&key(location_id))
            .and_then(|id| self.profiles.get(id));
        if by_location.is_some() {
            return by_location;
        }
        let by_region = region
            .and_then(|name| self.regions.get(&key(name)))
            .and_then(|id| self.profiles.get(id));
        if by_region.is_some() {
            return by_region;
        }
        log::debug!(
            "no tide profile for location '{location_id}' (region {region:?}); using '{}'",
            self.default_profile
        );
        self.profiles.get(&self.default_profile)
    }

    /// Resolve tide context for a slot's day part.
    #[must_use]
    pub fn resolve(&self, location_id: &str, region: Option<&str>, day_part: DayPart) -> TideContext {
        let Some(profile) = self.profile_for(location_id, region) else {
            return TideContext::unknown();
        };
        let level = profile.level_for(day_part);
        TideContext {
            tide_level: Some(level),
            tide_suitability: Some(profile.suitability(level)),
            profile_id: Some(profile.id().to_owned()),
        }
    }
}

impl Default for TideModel {
    fn default() -> Self {
        Self::builtin()
    }
}

fn key(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn model() -> TideModel {
        TideModel::builtin()
    }

    #[rstest]
    fn location_beats_region(model: TideModel) {
        let tide = model.resolve("Malibu", Some("portugal"), DayPart::Morning);
        assert_eq!(tide.profile_id.as_deref(), Some("california"));
        assert_eq!(tide.tide_level, Some(TideLevel::Low));
        assert_eq!(tide.tide_suitability, Some(TideSuitability::Good));
    }

    #[rstest]
    fn region_is_second_choice(model: TideModel) {
        let tide = model.resolve("unknown-reef", Some("Portugal"), DayPart::Afternoon);
        assert_eq!(tide.profile_id.as_deref(), Some("portugal-west"));
        assert_eq!(tide.tide_level, Some(TideLevel::Low));
    }

    #[rstest]
    #[case(DayPart::Morning, TideLevel::Mid, TideSuitability::Good)]
    #[case(DayPart::Afternoon, TideLevel::High, TideSuitability::LessIdeal)]
    #[case(DayPart::Evening, TideLevel::Low, TideSuitability::LessIdeal)]
    fn default_profile_catches_everything_else(
        model: TideModel,
        #[case] part: DayPart,
        #[case] level: TideLevel,
        #[case] suitability: TideSuitability,
    ) {
        let tide = model.resolve("nowhere", Some("atlantis"), part);
        assert_eq!(tide.profile_id.as_deref(), Some(DEFAULT_PROFILE_ID));
        assert_eq!(tide.tide_level, Some(level));
        assert_eq!(tide.tide_suitability, Some(suitability));
    }

    #[rstest]
    fn dangling_mapping_falls_through() {
        let model = TideModel::builtin().with_location("ghost", "missing-profile");
        let tide = model.resolve("ghost", Some("california"), DayPart::Morning);
        assert_eq!(tide.profile_id.as_deref(), Some("california"));
    }

    #[rstest]
    fn empty_model_has_no_context() {
        let tide = TideModel::empty().resolve("hossegor", None, DayPart::Morning);
        assert_eq!(tide, TideContext::unknown());
    }

    #[rstest]
    fn custom_default_profile() {
        let model = TideModel::empty()
            .with_profile(RegionTideProfile::new("Flat").prefers(TideLevel::Mid))
            .with_default_profile("flat");
        let tide = model.resolve("anywhere", None, DayPart::Evening);
        assert_eq!(tide.profile_id.as_deref(), Some("Flat"));
        assert_eq!(tide.tide_suitability, Some(TideSuitability::Good));
    }
}
