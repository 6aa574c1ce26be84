use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Abilities the move pipeline consults. Anything else is modelled as `None`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityId {
    #[default]
    None,
    // Type changing
    Normalize,
    Aerilate,
    Pixilate,
    Refrigerate,
    Galvanize,
    LiquidVoice,
    // User power
    Technician,
    IronFist,
    StrongJaw,
    MegaLauncher,
    ToughClaws,
    Sharpness,
    Reckless,
    SandForce,
    Steelworker,
    Transistor,
    DragonsMaw,
    // Ally power
    Battery,
    PowerSpot,
    SteelySpirit,
    // Field auras
    FairyAura,
    DarkAura,
    AuraBreak,
    // Priority
    Prankster,
    GaleWings,
    Triage,
    // Effect chance
    SereneGrace,
    SheerForce,
    ShieldDust,
    // Accuracy
    WonderSkin,
    NoGuard,
    // Misc move hooks
    SkillLink,
    Infiltrator,
    LongReach,
    UnseenFist,
    MoldBreaker,
    Teravolt,
    Turboblaze,
    MagicBounce,
    RockHead,
    MagicGuard,
    Overcoat,
    Bulletproof,
    Soundproof,
    Dancer,
    Levitate,
    Sturdy,
    Damp,
    Commander,
}

impl AbilityId {
    /// Abilities that cannot be suppressed or overridden by Mold Breaker.
    pub fn is_unignorable(self) -> bool {
        matches!(self, AbilityId::Commander | AbilityId::None)
    }
}
