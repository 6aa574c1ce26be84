use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Identity of every move in the catalog. The discriminant is the catalog index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum MoveId {
    // Generation 1
    Pound,
    KarateChop,
    DoubleSlap,
    CometPunch,
    MegaPunch,
    FirePunch,
    IcePunch,
    ThunderPunch,
    Scratch,
    Guillotine,
    RazorWind,
    SwordsDance,
    Gust,
    WingAttack,
    Whirlwind,
    Fly,
    Bind,
    Slam,
    VineWhip,
    Stomp,
    DoubleKick,
    JumpKick,
    SandAttack,
    Headbutt,
    FuryAttack,
    HornDrill,
    Tackle,
    BodySlam,
    Wrap,
    TakeDown,
    Thrash,
    DoubleEdge,
    TailWhip,
    PoisonSting,
    Twineedle,
    PinMissile,
    Bite,
    Growl,
    Roar,
    Sing,
    Supersonic,
    SonicBoom,
    Disable,
    Ember,
    Flamethrower,
    Mist,
    WaterGun,
    HydroPump,
    Surf,
    IceBeam,
    Blizzard,
    Psybeam,
    HyperBeam,
    DrillPeck,
    Submission,
    LowKick,
    Counter,
    SeismicToss,
    Absorb,
    MegaDrain,
    LeechSeed,
    Growth,
    RazorLeaf,
    SolarBeam,
    PoisonPowder,
    StunSpore,
    SleepPowder,
    PetalDance,
    DragonRage,
    FireSpin,
    Thunderbolt,
    ThunderWave,
    Thunder,
    RockThrow,
    Earthquake,
    Fissure,
    Dig,
    Toxic,
    Psychic,
    Hypnosis,
    Agility,
    QuickAttack,
    Teleport,
    NightShade,
    Mimic,
    DoubleTeam,
    Recover,
    Minimize,
    DefenseCurl,
    ConfuseRay,
    LightScreen,
    Haze,
    Reflect,
    FocusEnergy,
    Metronome,
    MirrorMove,
    SelfDestruct,
    FireBlast,
    Waterfall,
    Clamp,
    Swift,
    SkullBash,
    SoftBoiled,
    HighJumpKick,
    DreamEater,
    SkyAttack,
    Psywave,
    Splash,
    Explosion,
    Bonemerang,
    Rest,
    RockSlide,
    TriAttack,
    SuperFang,
    Slash,
    Substitute,
    Struggle,
    // Generation 2
    Sketch,
    TripleKick,
    Thief,
    MindReader,
    Nightmare,
    Snore,
    Curse,
    Flail,
    Conversion2,
    Protect,
    MachPunch,
    FeintAttack,
    Spikes,
    ZapCannon,
    LockOn,
    Detect,
    Endure,
    Rollout,
    FalseSwipe,
    FuryCutter,
    MetalClaw,
    SleepTalk,
    HealBell,
    SacredFire,
    Magnitude,
    DynamicPunch,
    Megahorn,
    RapidSpin,
    MorningSun,
    Synthesis,
    Moonlight,
    CrossChop,
    Twister,
    RainDance,
    SunnyDay,
    Crunch,
    MirrorCoat,
    PsychUp,
    ExtremeSpeed,
    AncientPower,
    ShadowBall,
    FutureSight,
    Whirlpool,
    BeatUp,
    // Generation 3
    FakeOut,
    Uproar,
    Hail,
    Facade,
    FocusPunch,
    HelpingHand,
    MagicCoat,
    Superpower,
    KnockOff,
    Endeavor,
    Eruption,
    WaterSpout,
    Ingrain,
    Yawn,
    Assist,
    IceBall,
    Howl,
    BulkUp,
    CalmMind,
    DragonDance,
    MudSport,
    WaterSport,
    WeatherBall,
    Overheat,
    RockTomb,
    SecretPower,
    Camouflage,
    Revenge,
    // Generation 4
    Gravity,
    Roost,
    WakeUpSlap,
    BrickBreak,
    UTurn,
    CloseCombat,
    Fling,
    Punishment,
    LastResort,
    SuckerPunch,
    ToxicSpikes,
    AquaRing,
    FlareBlitz,
    AuraSphere,
    DarkPulse,
    DrainPunch,
    BraveBird,
    NastyPlot,
    BulletPunch,
    StealthRock,
    GrassKnot,
    Copycat,
    HeadSmash,
    Defog,
    TrickRoom,
    Brine,
    Avalanche,
    Tailwind,
    MetalBurst,
    // Generation 5
    HeavySlam,
    StoredPower,
    Acrobatics,
    Hex,
    Venoshock,
    EchoedVoice,
    FinalGambit,
    Soak,
    ShellSmash,
    Scald,
    Hurricane,
    AfterYou,
    Quash,
    DragonTail,
    StormThrow,
    FrostBreath,
    ReflectType,
    // Generation 6
    TrickOrTreat,
    ForestsCurse,
    Moonblast,
    DrainingKiss,
    Boomburst,
    MistyTerrain,
    GrassyTerrain,
    ElectricTerrain,
    SpikyShield,
    KingsShield,
    StickyWeb,
    // Generation 7
    BellyDrum,
    Instruct,
    PollenPuff,
    FirstImpression,
    BeakBlast,
    PsychicFangs,
    PhotonGeyser,
    MindBlown,
    PsychicTerrain,
    // Generation 8
    ShellSideArm,
    TerrainPulse,
    ExpandingForce,
    RisingVoltage,
    GrassyGlide,
    SteelRoller,
    BoltBeak,
    TripleAxel,
    SurgingStrikes,
    SteelBeam,
    DualWingbeat,
    // Generation 9
    TeraBlast,
    TeraStarstorm,
    RevelationDance,
    PopulationBomb,
    ShedTail,
    UpperHand,
    BloodMoon,
    GigatonHammer,
    FickleBeam,
    RagingFury,
    Outrage,
    Reversal,
    WringOut,
    Memento,
    WaterPledge,
    FirePledge,
}

impl MoveId {
    /// Human-readable name derived from the variant ("DoubleEdge" -> "Double Edge").
    pub fn display_name(self) -> String {
        let raw = format!("{:?}", self);
        let mut out = String::with_capacity(raw.len() + 4);
        for (i, ch) in raw.chars().enumerate() {
            if i > 0 && (ch.is_ascii_uppercase() || (ch.is_ascii_digit() && !out.ends_with(' '))) {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_splits_words() {
        assert_eq!(MoveId::DoubleEdge.display_name(), "Double Edge");
        assert_eq!(MoveId::Conversion2.display_name(), "Conversion 2");
        assert_eq!(MoveId::Pound.display_name(), "Pound");
    }
}
