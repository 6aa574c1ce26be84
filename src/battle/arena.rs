//! Weather, terrain and arena tags.

use crate::battle::field::BattlerIndex;
use schema::{ArenaTagSide, ArenaTagType, BiomeType, MoveId, PokemonType, TerrainType, WeatherType};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub weather_type: WeatherType,
    pub turns_left: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    pub terrain_type: TerrainType,
    pub turns_left: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaTag {
    pub tag_type: ArenaTagType,
    pub side: ArenaTagSide,
    /// 0 means the tag lasts until removed.
    pub turns_left: u8,
    pub layers: u8,
    pub source_move: Option<MoveId>,
    pub source_index: Option<BattlerIndex>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Arena {
    pub weather: Option<Weather>,
    pub terrain: Option<Terrain>,
    pub tags: Vec<ArenaTag>,
    pub biome: BiomeType,
    /// Cloud Nine / Air Lock on the field.
    pub weather_suppressed: bool,
}

impl Arena {
    pub fn new(biome: BiomeType) -> Self {
        Self {
            biome,
            ..Self::default()
        }
    }

    /// Active, unsuppressed weather.
    pub fn weather_type(&self) -> Option<WeatherType> {
        if self.weather_suppressed {
            return None;
        }
        self.weather.map(|w| w.weather_type)
    }

    pub fn terrain_type(&self) -> Option<TerrainType> {
        self.terrain.map(|t| t.terrain_type)
    }

    /// Set the weather. Fails when it is already active or a primal weather is in place.
    pub fn try_set_weather(&mut self, weather_type: WeatherType, turns: u8) -> bool {
        if let Some(current) = self.weather {
            if current.weather_type == weather_type || current.weather_type.is_immutable() {
                return false;
            }
        }
        debug!(?weather_type, turns, "weather set");
        self.weather = Some(Weather {
            weather_type,
            turns_left: turns,
        });
        true
    }

    pub fn clear_weather(&mut self) -> bool {
        self.weather.take().is_some()
    }

    pub fn try_set_terrain(&mut self, terrain_type: TerrainType, turns: u8) -> bool {
        if self.terrain_type() == Some(terrain_type) {
            return false;
        }
        debug!(?terrain_type, turns, "terrain set");
        self.terrain = Some(Terrain {
            terrain_type,
            turns_left: turns,
        });
        true
    }

    pub fn clear_terrain(&mut self) -> bool {
        self.terrain.take().is_some()
    }

    /// Add a tag, or stack a layer on an existing one. Fails at the layer cap.
    pub fn add_tag(
        &mut self,
        tag_type: ArenaTagType,
        turns: u8,
        source_move: Option<MoveId>,
        source_index: Option<BattlerIndex>,
        side: ArenaTagSide,
    ) -> bool {
        if let Some(existing) = self
            .tags
            .iter_mut()
            .find(|t| t.tag_type == tag_type && t.side == side)
        {
            if existing.layers >= tag_type.max_layers() {
                return false;
            }
            existing.layers += 1;
            debug!(?tag_type, ?side, layers = existing.layers, "arena tag layered");
            return true;
        }
        debug!(?tag_type, ?side, turns, "arena tag added");
        self.tags.push(ArenaTag {
            tag_type,
            side,
            turns_left: turns,
            layers: 1,
            source_move,
            source_index,
        });
        true
    }

    /// First tag of this type on any side.
    pub fn get_tag(&self, tag_type: ArenaTagType) -> Option<&ArenaTag> {
        self.tags.iter().find(|t| t.tag_type == tag_type)
    }

    /// Tag of this type affecting `side` (a `Both` tag affects every side).
    pub fn get_tag_on_side(&self, tag_type: ArenaTagType, side: ArenaTagSide) -> Option<&ArenaTag> {
        self.tags
            .iter()
            .find(|t| t.tag_type == tag_type && (t.side.covers(side) || side == ArenaTagSide::Both))
    }

    pub fn has_tag(&self, tag_type: ArenaTagType) -> bool {
        self.get_tag(tag_type).is_some()
    }

    pub fn remove_tag(&mut self, tag_type: ArenaTagType) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t.tag_type != tag_type);
        before != self.tags.len()
    }

    pub fn remove_tag_on_side(&mut self, tag_type: ArenaTagType, side: ArenaTagSide) -> bool {
        let before = self.tags.len();
        self.tags
            .retain(|t| !(t.tag_type == tag_type && (side == ArenaTagSide::Both || t.side == side)));
        before != self.tags.len()
    }

    /// Remove every tag on `side` matching `pred`. Returns how many were removed.
    pub fn remove_tags_where(
        &mut self,
        side: ArenaTagSide,
        pred: impl Fn(ArenaTagType) -> bool,
    ) -> usize {
        let before = self.tags.len();
        self.tags.retain(|t| {
            let on_side = side == ArenaTagSide::Both || t.side == side;
            !(on_side && pred(t.tag_type))
        });
        before - self.tags.len()
    }

    pub fn layers_on_side(&self, tag_type: ArenaTagType, side: ArenaTagSide) -> u8 {
        self.tags
            .iter()
            .find(|t| t.tag_type == tag_type && t.side == side)
            .map(|t| t.layers)
            .unwrap_or(0)
    }

    pub fn is_gravity(&self) -> bool {
        self.has_tag(ArenaTagType::Gravity)
    }

    pub fn is_fog(&self) -> bool {
        self.weather_type() == Some(WeatherType::Fog) || self.has_tag(ArenaTagType::Fog)
    }

    /// Type Camouflage turns the user into for the current biome and terrain.
    pub fn biome_type(&self) -> PokemonType {
        if let Some(terrain) = self.terrain_type() {
            return match terrain {
                TerrainType::Electric => PokemonType::Electric,
                TerrainType::Grassy => PokemonType::Grass,
                TerrainType::Misty => PokemonType::Fairy,
                TerrainType::Psychic => PokemonType::Psychic,
            };
        }
        match self.biome {
            BiomeType::Town | BiomeType::Plains => PokemonType::Normal,
            BiomeType::Grass | BiomeType::Forest => PokemonType::Grass,
            BiomeType::Sea | BiomeType::Lake => PokemonType::Water,
            BiomeType::Cave | BiomeType::Mountain => PokemonType::Rock,
            BiomeType::Desert => PokemonType::Ground,
            BiomeType::Ice => PokemonType::Ice,
            BiomeType::Volcano => PokemonType::Fire,
            BiomeType::Graveyard => PokemonType::Ghost,
            BiomeType::Space => PokemonType::Dragon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spikes_stack_to_three_layers() {
        let mut arena = Arena::default();
        for _ in 0..3 {
            assert!(arena.add_tag(ArenaTagType::Spikes, 0, None, None, ArenaTagSide::Enemy));
        }
        assert!(!arena.add_tag(ArenaTagType::Spikes, 0, None, None, ArenaTagSide::Enemy));
        assert_eq!(arena.layers_on_side(ArenaTagType::Spikes, ArenaTagSide::Enemy), 3);
        assert_eq!(arena.layers_on_side(ArenaTagType::Spikes, ArenaTagSide::Player), 0);
    }

    #[test]
    fn test_primal_weather_cannot_be_replaced() {
        let mut arena = Arena::default();
        assert!(arena.try_set_weather(WeatherType::HeavyRain, 0));
        assert!(!arena.try_set_weather(WeatherType::Sunny, 5));
        assert_eq!(arena.weather_type(), Some(WeatherType::HeavyRain));
    }

    #[test]
    fn test_suppressed_weather_reads_as_none() {
        let mut arena = Arena::default();
        arena.try_set_weather(WeatherType::Rain, 5);
        arena.weather_suppressed = true;
        assert_eq!(arena.weather_type(), None);
    }

    #[test]
    fn test_both_side_tag_covers_each_side() {
        let mut arena = Arena::default();
        arena.add_tag(ArenaTagType::MudSport, 5, None, None, ArenaTagSide::Both);
        assert!(arena
            .get_tag_on_side(ArenaTagType::MudSport, ArenaTagSide::Player)
            .is_some());
    }

    #[test]
    fn test_remove_traps_on_one_side() {
        let mut arena = Arena::default();
        arena.add_tag(ArenaTagType::Spikes, 0, None, None, ArenaTagSide::Player);
        arena.add_tag(ArenaTagType::StealthRock, 0, None, None, ArenaTagSide::Player);
        arena.add_tag(ArenaTagType::Spikes, 0, None, None, ArenaTagSide::Enemy);
        assert_eq!(arena.remove_tags_where(ArenaTagSide::Player, |t| t.is_trap()), 2);
        assert_eq!(arena.tags.len(), 1);
    }
}
