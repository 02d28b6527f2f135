use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Production department a scene file belongs to.
///
/// The variant order is significant: filename inference tries the codes in
/// this order when several could match at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Discipline {
    /// Modeling
    #[default]
    Mdl,
    Layout,
    /// Animation
    Anim,
    Previs,
    /// Lighting
    Lgt,
    Fx,
    /// Matchmove
    Mm,
    Shading,
    TechAnim,
    LookDev,
    Export,
    /// Rig puppet
    Rp,
    /// Rig skeleton
    Rs,
    /// Rig bound
    Rb,
    Rig,
}

impl Discipline {
    /// Every discipline in inference priority order.
    pub const ALL: [Discipline; 15] = [
        Discipline::Mdl,
        Discipline::Layout,
        Discipline::Anim,
        Discipline::Previs,
        Discipline::Lgt,
        Discipline::Fx,
        Discipline::Mm,
        Discipline::Shading,
        Discipline::TechAnim,
        Discipline::LookDev,
        Discipline::Export,
        Discipline::Rp,
        Discipline::Rs,
        Discipline::Rb,
        Discipline::Rig,
    ];

    /// Short code used inside filenames.
    pub const fn code(self) -> &'static str {
        match self {
            Discipline::Mdl => "MDL",
            Discipline::Layout => "LAYOUT",
            Discipline::Anim => "ANIM",
            Discipline::Previs => "PREVIS",
            Discipline::Lgt => "LGT",
            Discipline::Fx => "FX",
            Discipline::Mm => "MM",
            Discipline::Shading => "SHADING",
            Discipline::TechAnim => "TECHANIM",
            Discipline::LookDev => "LOOKDEV",
            Discipline::Export => "EXPORT",
            Discipline::Rp => "RP",
            Discipline::Rs => "RS",
            Discipline::Rb => "RB",
            Discipline::Rig => "RIG",
        }
    }

    /// Department folder name. Look-dev files live with lighting.
    pub const fn folder_name(self) -> &'static str {
        match self {
            Discipline::Mdl => "model",
            Discipline::Layout => "layout",
            Discipline::Anim => "anim",
            Discipline::Previs => "previs",
            Discipline::Lgt | Discipline::LookDev => "lighting",
            Discipline::Fx => "fx",
            Discipline::Mm => "matchmove",
            Discipline::Shading => "shading",
            Discipline::TechAnim => "techAnim",
            Discipline::Export => "export",
            Discipline::Rp => "rigPuppet",
            Discipline::Rs => "rigSkeleton",
            Discipline::Rb => "rigBound",
            Discipline::Rig => "rig",
        }
    }

    /// Rig sub-disciplines are filed underneath the main rig folder.
    pub const fn is_rig_variant(self) -> bool {
        matches!(self, Discipline::Rp | Discipline::Rs | Discipline::Rb)
    }

    /// Case-insensitive lookup by short code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|discipline| discipline.code().eq_ignore_ascii_case(code))
    }
}

impl Display for Discipline {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Discipline {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim())
            .ok_or_else(|| ModelError::UnknownDiscipline(s.to_string()))
    }
}
