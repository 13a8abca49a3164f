//! Categorical labels derived from a slot's raw numeric fields.

use crate::tags::tag_enum;

tag_enum! {
    /// Coarse clean/mixed/choppy classification of a slot.
    pub enum ConditionTag {
        /// Offshore, moderate wind on a rideable swell.
        Clean => "clean",
        /// Neither clean nor choppy.
        Mixed => "mixed",
        /// Onshore or strong wind.
        Choppy => "choppy",
    }
}

impl ConditionTag {
    /// Tie-break rank when votes are level: lower wins.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Mixed => 1,
            Self::Choppy => 2,
        }
    }
}

tag_enum! {
    /// Wave size expressed in body-relative bands.
    pub enum SizeBand {
        /// Below 0.3 m.
        Tiny => "tiny",
        /// 0.3 m up to 0.6 m.
        Knee => "knee",
        /// 0.6 m up to 1.0 m.
        Waist => "waist",
        /// 1.0 m up to 1.5 m.
        Shoulder => "shoulder",
        /// 1.5 m up to 2.0 m.
        Head => "head",
        /// 2.0 m and above.
        Overhead => "overhead",
    }
}

impl SizeBand {
    /// Band a wave height in metres. Each threshold opens the next band.
    ///
    /// # Examples
    /// ```
    /// use surfcast_core::SizeBand;
    ///
    /// assert_eq!(SizeBand::from_height(0.29), SizeBand::Tiny);
    /// assert_eq!(SizeBand::from_height(1.0), SizeBand::Shoulder);
    /// assert_eq!(SizeBand::from_height(2.0), SizeBand::Overhead);
    /// ```
    #[must_use]
    pub fn from_height(height_m: f64) -> Self {
        if height_m.is_nan() || height_m < 0.3 {
            Self::Tiny
        } else if height_m < 0.6 {
            Self::Knee
        } else if height_m < 1.0 {
            Self::Waist
        } else if height_m < 1.5 {
            Self::Shoulder
        } else if height_m < 2.0 {
            Self::Head
        } else {
            Self::Overhead
        }
    }
}

tag_enum! {
    /// Three-way relation between wind direction and the break's facing.
    pub enum WindRelation {
        /// Blowing from land to sea.
        Offshore => "offshore",
        /// Blowing from sea to land.
        Onshore => "onshore",
        /// Everything in between.
        Cross => "cross",
    }
}

tag_enum! {
    /// Five-way wind comfort used for presentation.
    pub enum WindComfort {
        /// Within 45 degrees of dead offshore.
        Offshore => "offshore",
        /// Between 45 and 70 degrees off the offshore axis.
        CrossOff => "cross-off",
        /// Across the break, neither helping nor hurting much.
        CrossShore => "cross-shore",
        /// Within 45 degrees of dead onshore.
        Onshore => "onshore",
        /// Too light for direction to matter.
        LightVariable => "light-variable",
    }
}

tag_enum! {
    /// Texture of the sea surface.
    pub enum SurfaceQuality {
        /// Little or no wind texture.
        Glassy => "glassy",
        /// Groomed by offshore or light wind.
        Clean => "clean",
        /// Some wind chop.
        Bumpy => "bumpy",
        /// Blown out.
        Messy => "messy",
    }
}

/// Every categorical view of a slot, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionLabels {
    /// Clean, mixed or choppy.
    pub condition_tag: ConditionTag,
    /// Body-relative size.
    pub size_band: SizeBand,
    /// Five-way wind comfort.
    pub wind_comfort: WindComfort,
    /// Texture of the surface.
    pub surface_quality: SurfaceQuality,
    /// Size, wind or period beyond what an average surfer enjoys.
    pub challenging: bool,
    /// Enough size and period to be worth paddling out.
    pub min_surfable: bool,
    /// Wind relation, or `None` when either angle is not finite.
    pub wind_relation: Option<WindRelation>,
}
