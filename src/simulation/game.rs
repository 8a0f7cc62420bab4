use crate::ant::{Ant, AntKind};
use crate::boost::Boost;
use crate::colony::{Colony, Hive};
use crate::config::GameConfig;
use crate::error::Result;
use crate::simulation::Event;

/// Where the game stands after a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// A bee reached the queen
    Lost,
    /// Every bee is gone, hive included
    Won,
}

/// A running skirmish: the colony, the hive and the turn counter.
///
/// This is the only way to change the board from outside. Every request
/// either applies in full or fails with a `GameError` and leaves the
/// game untouched.
#[derive(Clone, Debug)]
pub struct Game {
    colony: Colony,
    hive: Hive,
    turn: u32,
    rng: fastrand::Rng,
}

impl Game {
    pub fn new(colony: Colony, hive: Hive, rng: fastrand::Rng) -> Self {
        Self {
            colony,
            hive,
            turn: 0,
            rng,
        }
    }

    /// Build a game from validated configuration
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        let colony = Colony::new(
            config.food,
            config.tunnels,
            config.tunnel_length,
            config.moat_frequency,
        )?;
        let mut hive = Hive::new(config.bee_armor, config.bee_damage);
        for wave in &config.waves {
            hive.add_wave(wave.turn, wave.count);
        }
        let rng = if let Some(seed) = config.seed {
            fastrand::Rng::with_seed(seed)
        } else {
            fastrand::Rng::new()
        };

        Ok(Self::new(colony, hive, rng))
    }

    /// Play one turn: ants, then bees, then place effects, then the
    /// hive's wave for this turn.
    pub fn take_turn(&mut self) {
        self.colony.ants_act(&mut self.rng);
        self.colony.bees_act();
        self.colony.places_act();
        self.hive.invade(&mut self.colony, self.turn, &mut self.rng);
        self.turn += 1;
    }

    /// Losing is checked first: a bee at the queen loses even if it was
    /// the last one.
    pub fn outcome(&self) -> Outcome {
        if self.colony.queen_has_bees() {
            Outcome::Lost
        } else if self.colony.bee_count() + self.hive.pending() == 0 {
            Outcome::Won
        } else {
            Outcome::Ongoing
        }
    }

    /// Deploy an ant named `ant_type` at `"tunnel,step"`
    pub fn deploy(&mut self, ant_type: &str, coords: &str) -> Result<()> {
        let kind: AntKind = ant_type.parse()?;
        let at = self.colony.locate(coords)?;
        self.colony.deploy_ant(Ant::new(kind), at)
    }

    /// Remove the top ant at `"tunnel,step"`; removing nothing is fine
    pub fn remove(&mut self, coords: &str) -> Result<Option<Ant>> {
        let at = self.colony.locate(coords)?;
        Ok(self.colony.remove_ant(at))
    }

    /// Give the ant at `"tunnel,step"` a boost from stock
    pub fn boost(&mut self, boost: &str, coords: &str) -> Result<()> {
        let at = self.colony.locate(coords)?;
        let boost: Boost = boost.parse()?;
        self.colony.apply_boost(boost, at)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn food(&self) -> u32 {
        self.colony.food()
    }

    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    pub fn hive(&self) -> &Hive {
        &self.hive
    }

    /// Bees still waiting in the hive
    pub fn hive_bee_count(&self) -> usize {
        self.hive.pending()
    }

    /// Names of boosts currently in stock
    pub fn boost_names(&self) -> Vec<&'static str> {
        self.colony.boosts().available().map(Boost::as_str).collect()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.colony.drain_events()
    }
}
