//! Derive categorical labels from a slot's numeric fields.
//!
//! Every function here is pure and deterministic given the four numeric
//! inputs and the coast orientation. Threshold boundaries are inclusive
//! exactly as the constants below are written.

#![expect(
    clippy::float_arithmetic,
    reason = "angle and threshold arithmetic is the purpose of this module"
)]

use crate::{
    ConditionLabels, ConditionTag, SizeBand, SlotRecord, SurfaceQuality, WindComfort, WindRelation,
};

/// Wave height above which a slot is challenging, in metres (exclusive).
pub const CHALLENGING_HEIGHT_M: f64 = 2.3;
/// Wind speed at which a slot is challenging, in knots (inclusive).
pub const CHALLENGING_WIND_KNOTS: f64 = 18.0;
/// Wave period at which a slot is challenging, in seconds (inclusive).
pub const CHALLENGING_PERIOD_S: f64 = 12.0;
/// Minimum surfable wave height in metres (inclusive).
pub const MIN_SURFABLE_HEIGHT_M: f64 = 0.9;
/// Minimum surfable wave period in seconds (inclusive).
pub const MIN_SURFABLE_PERIOD_S: f64 = 7.0;
/// Half-width of the offshore and onshore sectors in degrees.
pub const WIND_SECTOR_HALF_WIDTH_DEG: f64 = 45.0;
/// Half-width of the combined offshore plus cross-off sector in degrees.
pub const CROSS_OFF_HALF_WIDTH_DEG: f64 = 70.0;
/// Below this speed direction is ignored, in knots (exclusive).
pub const LIGHT_WIND_KNOTS: f64 = 5.0;
/// At or above this speed a slot is choppy whatever the direction.
pub const HARD_WIND_KNOTS: f64 = 17.0;
/// Highest wind speed a clean slot tolerates, in knots (inclusive).
pub const CLEAN_MAX_WIND_KNOTS: f64 = 14.0;
/// Smallest wave height a clean slot needs, in metres (inclusive).
pub const CLEAN_MIN_HEIGHT_M: f64 = 0.8;

/// Wrap an angle into `[0, 360)`. Non-finite input stays non-finite.
///
/// # Examples
/// ```
/// use surfcast_core::classify::normalise_degrees;
///
/// assert_eq!(normalise_degrees(-90.0), 270.0);
/// assert_eq!(normalise_degrees(360.0), 0.0);
/// ```
#[must_use]
pub fn normalise_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Smallest angle between two bearings, in `[0, 180]`.
///
/// # Examples
/// ```
/// use surfcast_core::classify::angular_distance;
///
/// assert_eq!(angular_distance(350.0, 10.0), 20.0);
/// assert_eq!(angular_distance(0.0, 180.0), 180.0);
/// ```
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let delta = (normalise_degrees(a) - normalise_degrees(b)).abs();
    delta.min(360.0 - delta)
}

/// Relate the wind to the direction the break faces.
///
/// The onshore centre is the coast orientation itself; the offshore centre
/// is its opposite. Offshore is tested first.
///
/// # Examples
/// ```
/// use surfcast_core::{WindRelation, classify::wind_relation};
///
/// // Coast faces north, wind from the south blows off the land.
/// assert_eq!(wind_relation(180.0, 0.0), Some(WindRelation::Offshore));
/// assert_eq!(wind_relation(10.0, 0.0), Some(WindRelation::Onshore));
/// assert_eq!(wind_relation(90.0, 0.0), Some(WindRelation::Cross));
/// assert_eq!(wind_relation(f64::NAN, 0.0), None);
/// ```
#[must_use]
pub fn wind_relation(wind_direction_deg: f64, coast_orientation_deg: f64) -> Option<WindRelation> {
    if !wind_direction_deg.is_finite() || !coast_orientation_deg.is_finite() {
        return None;
    }
    let onshore_centre = normalise_degrees(coast_orientation_deg);
    let offshore_centre = normalise_degrees(coast_orientation_deg + 180.0);
    let relation = if angular_distance(wind_direction_deg, offshore_centre)
        <= WIND_SECTOR_HALF_WIDTH_DEG
    {
        WindRelation::Offshore
    } else if angular_distance(wind_direction_deg, onshore_centre) <= WIND_SECTOR_HALF_WIDTH_DEG {
        WindRelation::Onshore
    } else {
        WindRelation::Cross
    };
    Some(relation)
}

/// Refine the wind relation into the five-way comfort scale.
#[must_use]
pub fn wind_comfort(slot: &SlotRecord, relation: Option<WindRelation>) -> WindComfort {
    if slot.wind_speed_knots < LIGHT_WIND_KNOTS {
        return WindComfort::LightVariable;
    }
    match relation {
        Some(WindRelation::Offshore) => WindComfort::Offshore,
        Some(WindRelation::Onshore) => WindComfort::Onshore,
        Some(WindRelation::Cross) => {
            let offshore_centre = normalise_degrees(slot.coast_orientation_deg + 180.0);
            if angular_distance(slot.wind_direction_deg, offshore_centre)
                <= CROSS_OFF_HALF_WIDTH_DEG
            {
                WindComfort::CrossOff
            } else {
                WindComfort::CrossShore
            }
        }
        None => WindComfort::CrossShore,
    }
}

/// Whether size, wind or period exceed what an average surfer enjoys.
///
/// Only finite measurements are compared; a non-finite field never makes a
/// slot challenging.
#[must_use]
pub fn is_challenging(slot: &SlotRecord) -> bool {
    measured(slot.wave_height_m).is_some_and(|height| height > CHALLENGING_HEIGHT_M)
        || measured(slot.wind_speed_knots).is_some_and(|speed| speed >= CHALLENGING_WIND_KNOTS)
        || measured(slot.wave_period_s).is_some_and(|period| period >= CHALLENGING_PERIOD_S)
}

/// Whether the swell is big and long enough to ride.
///
/// `false` unless both height and period are finite.
#[must_use]
pub fn is_min_surfable(slot: &SlotRecord) -> bool {
    measured(slot.wave_height_m).is_some_and(|height| height >= MIN_SURFABLE_HEIGHT_M)
        && measured(slot.wave_period_s).is_some_and(|period| period >= MIN_SURFABLE_PERIOD_S)
}

/// Whether every input of the condition tag is finite: wave height, wind
/// speed, wind direction and coast orientation.
///
/// Scoring rules keyed on the condition tag stay silent when this is `false`.
///
/// # Examples
/// ```
/// use surfcast_core::SlotRecord;
/// use surfcast_core::classify::conditions_measured;
///
/// let slot = SlotRecord::at("2024-06-01T07:00", 0).with_waves(1.5, 10.0);
/// assert!(conditions_measured(&slot));
/// assert!(!conditions_measured(&slot.with_wind(f64::NAN, 180.0)));
/// ```
#[must_use]
pub fn conditions_measured(slot: &SlotRecord) -> bool {
    [
        slot.wave_height_m,
        slot.wind_speed_knots,
        slot.wind_direction_deg,
        slot.coast_orientation_deg,
    ]
    .iter()
    .all(|value| value.is_finite())
}

fn measured(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Classify a slot as clean, mixed or choppy.
#[must_use]
pub fn condition_tag(
    slot: &SlotRecord,
    relation: Option<WindRelation>,
    challenging: bool,
) -> ConditionTag {
    if relation == Some(WindRelation::Onshore) || slot.wind_speed_knots >= HARD_WIND_KNOTS {
        ConditionTag::Choppy
    } else if relation == Some(WindRelation::Offshore)
        && slot.wind_speed_knots <= CLEAN_MAX_WIND_KNOTS
        && slot.wave_height_m >= CLEAN_MIN_HEIGHT_M
        && !challenging
    {
        ConditionTag::Clean
    } else {
        ConditionTag::Mixed
    }
}

/// Describe the texture of the surface.
///
/// The glassy band reads the raw wind `relation`, so a light offshore breeze
/// stays glassy even though its `comfort` is light and variable. The clean
/// band reads `comfort` (offshore or cross-offshore) or the condition `tag`.
#[must_use]
pub fn surface_quality(
    slot: &SlotRecord,
    relation: Option<WindRelation>,
    comfort: WindComfort,
    tag: ConditionTag,
) -> SurfaceQuality {
    let speed = slot.wind_speed_knots;
    let offshore = relation == Some(WindRelation::Offshore);
    let favourable = matches!(comfort, WindComfort::Offshore | WindComfort::CrossOff);
    if speed < 4.0 || (offshore && speed < 10.0) {
        SurfaceQuality::Glassy
    } else if (favourable && speed < 18.0) || (tag == ConditionTag::Clean && speed < 14.0) {
        SurfaceQuality::Clean
    } else if speed < 20.0 {
        SurfaceQuality::Bumpy
    } else {
        SurfaceQuality::Messy
    }
}

/// Derive every categorical label for a slot.
///
/// # Examples
/// ```
/// use surfcast_core::{ConditionTag, SlotRecord, SurfaceQuality, WindComfort, classify};
///
/// let slot = SlotRecord::at("2024-06-01T07:00", 0)
///     .with_waves(1.5, 10.0)
///     .with_wind(8.0, 180.0)
///     .facing(0.0);
/// let labels = classify(&slot);
///
/// assert_eq!(labels.condition_tag, ConditionTag::Clean);
/// assert_eq!(labels.wind_comfort, WindComfort::Offshore);
/// assert_eq!(labels.surface_quality, SurfaceQuality::Glassy);
/// assert!(labels.min_surfable);
/// assert!(!labels.challenging);
/// ```
#[must_use]
pub fn classify(slot: &SlotRecord) -> ConditionLabels {
    let relation = wind_relation(slot.wind_direction_deg, slot.coast_orientation_deg);
    let challenging = is_challenging(slot);
    let condition_tag = condition_tag(slot, relation, challenging);
    let wind_comfort = wind_comfort(slot, relation);
    ConditionLabels {
        condition_tag,
        size_band: SizeBand::from_height(slot.wave_height_m),
        wind_comfort,
        surface_quality: surface_quality(slot, relation, wind_comfort, condition_tag),
        challenging,
        min_surfable: is_min_surfable(slot),
        wind_relation: relation,
    }
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Sixteen-point compass label for a bearing, or `None` when not finite.
///
/// # Examples
/// ```
/// use surfcast_core::classify::cardinal_direction;
///
/// assert_eq!(cardinal_direction(0.0), Some("N"));
/// assert_eq!(cardinal_direction(224.0), Some("SW"));
/// assert_eq!(cardinal_direction(350.0), Some("N"));
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the sector index is floored and wrapped into 0..16 before the cast"
)]
pub fn cardinal_direction(degrees: f64) -> Option<&'static str> {
    if !degrees.is_finite() {
        return None;
    }
    let sector = ((normalise_degrees(degrees) + 11.25) / 22.5)
        .floor()
        .rem_euclid(16.0);
    COMPASS_POINTS.get(sector as usize).copied()
}
