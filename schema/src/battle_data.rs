use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpAtk,
    SpDef,
    Spd,
    Acc,
    Eva,
}

impl Stat {
    /// Stats that carry a battle stage (-6..=6).
    pub const BATTLE_STATS: [Stat; 7] = [
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spd,
        Stat::Acc,
        Stat::Eva,
    ];

    /// Index into a battler's stage array. `Hp` has no stage.
    pub fn stage_index(self) -> Option<usize> {
        match self {
            Stat::Hp => None,
            Stat::Atk => Some(0),
            Stat::Def => Some(1),
            Stat::SpAtk => Some(2),
            Stat::SpDef => Some(3),
            Stat::Spd => Some(4),
            Stat::Acc => Some(5),
            Stat::Eva => Some(6),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Stat::Hp => "HP",
            Stat::Atk => "Attack",
            Stat::Def => "Defense",
            Stat::SpAtk => "Sp. Atk",
            Stat::SpDef => "Sp. Def",
            Stat::Spd => "Speed",
            Stat::Acc => "accuracy",
            Stat::Eva => "evasiveness",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEffect {
    Poison,
    Toxic,
    Paralysis,
    Sleep,
    Freeze,
    Burn,
    Faint,
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            StatusEffect::Poison => "poisoned",
            StatusEffect::Toxic => "badly poisoned",
            StatusEffect::Paralysis => "paralyzed",
            StatusEffect::Sleep => "asleep",
            StatusEffect::Freeze => "frozen",
            StatusEffect::Burn => "burned",
            StatusEffect::Faint => "fainted",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherType {
    Sunny,
    Rain,
    Sandstorm,
    Hail,
    Snow,
    Fog,
    HeavyRain,
    HarshSun,
    StrongWinds,
}

impl WeatherType {
    /// Primal weathers cannot be replaced by ordinary weather moves.
    pub fn is_immutable(self) -> bool {
        matches!(
            self,
            WeatherType::HeavyRain | WeatherType::HarshSun | WeatherType::StrongWinds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Misty,
    Electric,
    Grassy,
    Psychic,
}

/// Arena location used by Secret Power, Camouflage and Nature Power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BiomeType {
    #[default]
    Town,
    Plains,
    Grass,
    Sea,
    Lake,
    Cave,
    Mountain,
    Desert,
    Ice,
    Volcano,
    Graveyard,
    Forest,
    Space,
}

/// Volatile per-battler effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum BattlerTagType {
    Recharging,
    Flinched,
    Interrupted,
    Confused,
    Infatuated,
    Seeded,
    Nightmare,
    Frenzy,
    Charging,
    Encore,
    HelpingHand,
    Ingrain,
    AquaRing,
    Drowsy,
    Trapped,
    Bind,
    Wrap,
    FireSpin,
    Whirlpool,
    Clamp,
    SandTomb,
    MagmaStorm,
    Infestation,
    Protected,
    SpikyShield,
    KingsShield,
    BanefulBunker,
    Endure,
    Perish,
    Cursed,
    Charged,
    Minimized,
    Flying,
    Underground,
    Underwater,
    HiddenAway,
    CritBoost,
    NoCrit,
    AlwaysCrit,
    IgnoreAccuracy,
    Substitute,
    MagicCoat,
    Disabled,
    Torment,
    Taunt,
    Commanded,
    ReceiveDoubleDamage,
    TarShot,
    BeakBlastCharging,
    ShellTrap,
    Roosted,
    Grudge,
    DestinyBond,
    Centered,
    FireBoost,
}

impl BattlerTagType {
    pub fn is_trapping(self) -> bool {
        matches!(
            self,
            BattlerTagType::Trapped
                | BattlerTagType::Bind
                | BattlerTagType::Wrap
                | BattlerTagType::FireSpin
                | BattlerTagType::Whirlpool
                | BattlerTagType::Clamp
                | BattlerTagType::SandTomb
                | BattlerTagType::MagmaStorm
                | BattlerTagType::Infestation
        )
    }

    /// Tags that make a battler untargetable by most moves.
    pub fn is_semi_invulnerable(self) -> bool {
        matches!(
            self,
            BattlerTagType::Flying
                | BattlerTagType::Underground
                | BattlerTagType::Underwater
                | BattlerTagType::HiddenAway
        )
    }

    pub fn is_protection(self) -> bool {
        matches!(
            self,
            BattlerTagType::Protected
                | BattlerTagType::SpikyShield
                | BattlerTagType::KingsShield
                | BattlerTagType::BanefulBunker
        )
    }
}

impl fmt::Display for BattlerTagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Effects attached to the arena or to one side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArenaTagType {
    MudSport,
    WaterSport,
    Spikes,
    ToxicSpikes,
    StealthRock,
    StickyWeb,
    Reflect,
    LightScreen,
    AuroraVeil,
    Mist,
    Safeguard,
    Tailwind,
    Gravity,
    TrickRoom,
    WaterFirePledge,
    FireGrassPledge,
    GrassWaterPledge,
    FutureSight,
    DoomDesire,
    WideGuard,
    QuickGuard,
    CraftyShield,
    MatBlock,
    IonDeluge,
    FairyLock,
    Fog,
}

impl ArenaTagType {
    /// Entry hazards that Rapid Spin and Defog clear.
    pub fn is_trap(self) -> bool {
        matches!(
            self,
            ArenaTagType::Spikes
                | ArenaTagType::ToxicSpikes
                | ArenaTagType::StealthRock
                | ArenaTagType::StickyWeb
        )
    }

    pub fn max_layers(self) -> u8 {
        match self {
            ArenaTagType::Spikes => 3,
            ArenaTagType::ToxicSpikes => 2,
            _ => 1,
        }
    }

    pub fn is_screen(self) -> bool {
        matches!(
            self,
            ArenaTagType::Reflect | ArenaTagType::LightScreen | ArenaTagType::AuroraVeil
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArenaTagSide {
    Both,
    Player,
    Enemy,
}

impl ArenaTagSide {
    /// Whether a tag on `self` applies to a battler standing on `side`.
    pub fn covers(self, side: ArenaTagSide) -> bool {
        self == ArenaTagSide::Both || self == side
    }
}

/// Held item families that the move pipeline consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeldItemKind {
    WideLens,
    MultiLens,
    AttackTypeBooster(crate::PokemonType),
    LeftoversLike,
    Berry,
    FlameOrb,
    ToxicOrb,
    LuckyEgg,
}

impl HeldItemKind {
    /// Items that Thief, Covet and Knock Off may remove.
    pub fn is_transferable(self) -> bool {
        !matches!(self, HeldItemKind::LuckyEgg)
    }
}
