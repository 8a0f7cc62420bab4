use crate::error::{GameError, Result};
use std::str::FromStr;

pub const DEFAULT_FOOD: u32 = 2;
pub const DEFAULT_TUNNELS: usize = 3;
pub const DEFAULT_TUNNEL_LENGTH: usize = 8;
pub const DEFAULT_MOAT_FREQUENCY: usize = 3;
pub const DEFAULT_BEE_ARMOR: i32 = 3;
pub const DEFAULT_BEE_DAMAGE: i32 = 1;
/// Most bees one game may schedule
pub const MAX_SCHEDULED_BEES: u64 = 100_000;

/// Standard schedule: a trickle first, then bigger swarms
const DEFAULT_WAVES: [(u32, u32); 8] = [
    (2, 1),
    (3, 1),
    (5, 2),
    (7, 1),
    (9, 2),
    (11, 3),
    (13, 2),
    (15, 4),
];

/// A batch of bees leaving the hive on a given turn, written `TURN:COUNT`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wave {
    pub turn: u32,
    pub count: u32,
}

impl FromStr for Wave {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GameError::InvalidConfig(format!("wave must be TURN:COUNT, got {s:?}"));
        let (turn, count) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Wave {
            turn: turn.trim().parse().map_err(|_| invalid())?,
            count: count.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Everything fixed when a game starts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub food: u32,
    pub tunnels: usize,
    pub tunnel_length: usize,
    /// Every n-th step is flooded; 0 disables water
    pub moat_frequency: usize,
    pub bee_armor: i32,
    pub bee_damage: i32,
    pub waves: Vec<Wave>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            food: DEFAULT_FOOD,
            tunnels: DEFAULT_TUNNELS,
            tunnel_length: DEFAULT_TUNNEL_LENGTH,
            moat_frequency: DEFAULT_MOAT_FREQUENCY,
            bee_armor: DEFAULT_BEE_ARMOR,
            bee_damage: DEFAULT_BEE_DAMAGE,
            waves: default_waves(),
            seed: None,
        }
    }
}

/// The standard wave schedule
pub fn default_waves() -> Vec<Wave> {
    DEFAULT_WAVES
        .iter()
        .map(|&(turn, count)| Wave { turn, count })
        .collect()
}

impl GameConfig {
    /// Reject shapes no game can be played on
    pub fn validate(&self) -> Result<()> {
        if self.tunnels == 0 {
            return Err(GameError::InvalidConfig("need at least one tunnel".into()));
        }
        if self.tunnel_length == 0 {
            return Err(GameError::InvalidConfig("tunnels need at least one step".into()));
        }
        if self.bee_armor <= 0 {
            return Err(GameError::InvalidConfig("bees need positive armor".into()));
        }
        if self.bee_damage < 0 {
            return Err(GameError::InvalidConfig("bee damage cannot be negative".into()));
        }
        let scheduled: u64 = self.waves.iter().map(|w| u64::from(w.count)).sum();
        if scheduled == 0 {
            return Err(GameError::InvalidConfig("no bees scheduled".into()));
        }
        if scheduled > MAX_SCHEDULED_BEES {
            return Err(GameError::InvalidConfig(format!(
                "{scheduled} bees scheduled, at most {MAX_SCHEDULED_BEES} allowed"
            )));
        }
        Ok(())
    }
}
