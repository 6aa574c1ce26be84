//! Opaque battle messages.
//!
//! The engine only produces `BattleMessage { key, params }`; rendering is a
//! table lookup plus `{PLACEHOLDER}` substitution so front ends can swap the
//! table for a localized one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleMessage {
    pub key: String,
    pub params: Vec<(String, String)>,
}

impl BattleMessage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.push((name.to_string(), value.into()));
        self
    }

    /// Render against the built-in English table. Unknown keys render as the key itself.
    pub fn format(&self) -> String {
        let template = template_for(&self.key).unwrap_or(self.key.as_str());
        substitute(template, &self.params)
    }
}

/// Replace every `{NAME}` in `template` with its parameter value.
pub fn substitute(template: &str, params: &[(String, String)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

fn template_for(key: &str) -> Option<&'static str> {
    let template = match key {
        "battle:attackFailed" => "But it failed!",
        "battle:attackMissed" => "{TARGET}'s attack missed!",
        "battle:noEffect" => "It doesn't affect {TARGET}!",
        "battle:hitResultOneHitKO" => "It's a one-hit KO!",
        "battle:statRose" => "{POKEMON}'s {STAT} rose!",
        "battle:statSharplyRose" => "{POKEMON}'s {STAT} rose sharply!",
        "battle:statFell" => "{POKEMON}'s {STAT} fell!",
        "battle:statHarshlyFell" => "{POKEMON}'s {STAT} harshly fell!",
        "battle:statWontGoAnyHigher" => "{POKEMON}'s {STAT} won't go any higher!",
        "battle:statWontGoAnyLower" => "{POKEMON}'s {STAT} won't go any lower!",
        "battle:hpIsFull" => "{POKEMON}'s HP is full!",
        "battle:healed" => "{POKEMON} had its HP restored.",
        "battle:statusCured" => "{POKEMON} was cured of its {STATUS} status.",
        "battle:statusApplied" => "{POKEMON} is now {STATUS}!",
        "battle:hitCount" => "Hit {COUNT} time(s)!",
        "battle:drainedEnergy" => "{POKEMON} had its energy drained!",
        "battle:recoil" => "{POKEMON} was damaged by the recoil!",
        "battle:keptGoingAndCrashed" => "{POKEMON} kept going and crashed!",
        "battle:useMove" => "{POKEMON} used {MOVE}!",
        "battle:splash" => "But nothing happened!",
        "moveTriggers:chargingUp" => "{USER} is charging up!",
        "moveTriggers:tookInSunlight" => "{USER} absorbed light!",
        "moveTriggers:flewUpHigh" => "{USER} flew up high!",
        "moveTriggers:dugAHole" => "{USER} burrowed its way under the ground!",
        "moveTriggers:loweredItsHead" => "{USER} tucked in its head!",
        "moveTriggers:isGlowing" => "{USER} became cloaked in a harsh light!",
        "moveTriggers:whippedUpAWhirlwind" => "{USER} whipped up a whirlwind!",
        "moveTriggers:foresawAnAttack" => "{USER} foresaw an attack!",
        "moveTriggers:tighteningFocus" => "{USER} is tightening its focus!",
        "moveTriggers:lostFocus" => "{USER} lost its focus and couldn't move!",
        "moveTriggers:startedHeatingUpBeak" => "{USER} started heating up its beak!",
        "moveTriggers:cutOwnHpAndMaximizedStat" => {
            "{POKEMON} cut its own HP and maximized its {STAT}!"
        }
        "moveTriggers:cutHpPowerUpMove" => "{POKEMON} cut its own HP to power up its move!",
        "moveTriggers:copiedStatChanges" => "{POKEMON} copied {TARGET}'s stat changes!",
        "moveTriggers:statsReset" => "All stat changes were eliminated!",
        "moveTriggers:copyType" => "{POKEMON}'s type became the same as {TARGET}'s!",
        "moveTriggers:transformedIntoType" => "{POKEMON} transformed into the {TYPE} type!",
        "moveTriggers:addType" => "{TYPE} type was added to {POKEMON}!",
        "moveTriggers:stoleItem" => "{POKEMON} stole {TARGET}'s {ITEM}!",
        "moveTriggers:knockedOffItem" => "{POKEMON} knocked off {TARGET}'s {ITEM}!",
        "moveTriggers:sketchedMove" => "{POKEMON} sketched {MOVE}!",
        "moveTriggers:learnedMove" => "{POKEMON} learned {MOVE}!",
        "moveTriggers:instructingMove" => "{USER} followed {TARGET}'s instructions!",
        "moveTriggers:afterYou" => "{TARGET} took the kind offer!",
        "moveTriggers:forceLast" => "{TARGET}'s move was postponed!",
        "moveTriggers:cursedItself" => "{POKEMON} cut its own HP and put a curse on {TARGET}!",
        "moveTriggers:cannotUseMove" => "{POKEMON} cannot use {MOVE}!",
        "moveTriggers:disabledMove" => "{POKEMON}'s {MOVE} was disabled!",
        "moveTriggers:substituteCreated" => "{POKEMON} put in a substitute!",
        "moveTriggers:substituteNotEnoughHp" => "But it does not have enough HP left to make a substitute!",
        "moveTriggers:substituteOnOverlap" => "{POKEMON} already has a substitute!",
        "moveTriggers:trappedBy" => "{POKEMON} was trapped by {MOVE}!",
        "moveTriggers:switchedOut" => "{POKEMON} went back!",
        "moveTriggers:dragged" => "{POKEMON} was dragged out!",
        "moveTriggers:protected" => "{POKEMON} protected itself!",
        "moveTriggers:braced" => "{POKEMON} braced itself!",
        "moveTriggers:tookAim" => "{POKEMON} took aim at {TARGET}!",
        "moveTriggers:helpingHand" => "{USER} is ready to help {TARGET}!",
        "moveTriggers:spikesScattered" => "Spikes were scattered around {SIDE}!",
        "moveTriggers:screensShattered" => "{TARGET}'s protective screens shattered!",
        "moveTriggers:weatherChanged" => "The weather changed to {WEATHER}!",
        "moveTriggers:terrainChanged" => "The terrain changed to {TERRAIN}!",
        "moveTriggers:terrainCleared" => "The terrain returned to normal.",
        "moveTriggers:fellAsleepRest" => "{POKEMON} slept and became healthy!",
        "moveTriggers:chargedUpElectric" => "{POKEMON} began charging power!",
        "moveTriggers:noValidMoves" => "But there was no valid move to call!",
        _ => return None,
    };
    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_substitutes_every_parameter() {
        let msg = BattleMessage::new("battle:statRose")
            .with("POKEMON", "Pikachu")
            .with("STAT", "Speed");
        assert_eq!(msg.format(), "Pikachu's Speed rose!");
    }

    #[test]
    fn test_unknown_key_renders_raw() {
        assert_eq!(BattleMessage::new("custom text").format(), "custom text");
    }

    #[test]
    fn test_substitute_leaves_unmatched_placeholders() {
        let params = vec![("USER".to_string(), "Onix".to_string())];
        assert_eq!(
            substitute("{USER} hit {TARGET}", &params),
            "Onix hit {TARGET}"
        );
    }
}
