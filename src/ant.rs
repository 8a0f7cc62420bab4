use crate::bee::{Bee, BeeStatus};
use crate::boost::Boost;
use crate::colony::{Colony, PlaceId};
use crate::error::GameError;
use crate::insect::Insect;
use crate::simulation::Event;
use std::str::FromStr;

/// Damage of a thrown leaf
pub const LEAF_DAMAGE: i32 = 1;
/// Damage BugSpray deals to every bee on the place and to the sprayer
pub const BUG_SPRAY_DAMAGE: i32 = 10;
/// Throwing range without and with FlyingLeaf
pub const SHORT_RANGE: usize = 3;
pub const LONG_RANGE: usize = 5;

/// Eater digestion cycle, one step per turn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Digestion {
    #[default]
    Hungry,
    Digesting1,
    Digesting2,
    Digesting3,
    Digested,
}

/// Eater internals: where it is in the cycle and who it swallowed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stomach {
    pub digestion: Digestion,
    captive: Option<Bee>,
}

impl Stomach {
    pub fn captive(&self) -> Option<&Bee> {
        self.captive.as_ref()
    }

    fn digest(&mut self, colony: &mut Colony, here: PlaceId) {
        self.digestion = match self.digestion {
            Digestion::Hungry => {
                let target = colony.closest_bee(here, 0, 0);
                match target.and_then(|t| colony.take_bee(t)) {
                    Some(bee) => {
                        colony.record(Event::Eaten {
                            place: colony.place(here).name().to_string(),
                            bee: bee.name(),
                        });
                        self.captive = Some(bee);
                        Digestion::Digesting1
                    }
                    None => Digestion::Hungry,
                }
            }
            Digestion::Digesting1 => Digestion::Digesting2,
            Digestion::Digesting2 => Digestion::Digesting3,
            Digestion::Digesting3 => Digestion::Digested,
            Digestion::Digested => {
                if let Some(bee) = self.captive.take() {
                    colony.record(Event::Released {
                        place: colony.place(here).name().to_string(),
                        bee: bee.name(),
                    });
                    colony.add_bee(here, bee);
                }
                Digestion::Hungry
            }
        };
    }
}

/// Closed set of ant types; the Eater carries its stomach inline
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AntKind {
    Grower,
    Thrower,
    Eater(Stomach),
    Scuba,
    Guard,
}

impl FromStr for AntKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grower" => Ok(AntKind::Grower),
            "thrower" => Ok(AntKind::Thrower),
            "eater" => Ok(AntKind::Eater(Stomach::default())),
            "scuba" => Ok(AntKind::Scuba),
            "guard" => Ok(AntKind::Guard),
            _ => Err(GameError::UnknownUnitType(s.to_string())),
        }
    }
}

impl AntKind {
    /// Type names accepted by `from_str`, for help output
    pub const NAMES: [&'static str; 5] = ["Grower", "Thrower", "Eater", "Scuba", "Guard"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AntKind::Grower => "Grower",
            AntKind::Thrower => "Thrower",
            AntKind::Eater(_) => "Eater",
            AntKind::Scuba => "Scuba",
            AntKind::Guard => "Guard",
        }
    }

    pub const fn food_cost(&self) -> u32 {
        match self {
            AntKind::Grower => 1,
            AntKind::Scuba => 5,
            AntKind::Thrower | AntKind::Eater(_) | AntKind::Guard => 4,
        }
    }

    const fn starting_armor(&self) -> i32 {
        match self {
            AntKind::Eater(_) | AntKind::Guard => 2,
            AntKind::Grower | AntKind::Thrower | AntKind::Scuba => 1,
        }
    }
}

/// What a Grower turns up on a single roll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harvest {
    Food,
    Boost(Boost),
}

impl Harvest {
    /// Map a uniform roll in [0, 1) onto the grower's yield table
    pub fn from_roll(roll: f64) -> Option<Harvest> {
        if roll < 0.6 {
            Some(Harvest::Food)
        } else if roll < 0.7 {
            Some(Harvest::Boost(Boost::FlyingLeaf))
        } else if roll < 0.8 {
            Some(Harvest::Boost(Boost::StickyLeaf))
        } else if roll < 0.9 {
            Some(Harvest::Boost(Boost::IcyLeaf))
        } else if roll < 0.95 {
            Some(Harvest::Boost(Boost::BugSpray))
        } else {
            None
        }
    }
}

/// Result of taking damage
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Wound {
    /// Armor ran out; the holder must take the ant off the board
    pub expired: bool,
    /// Bee an Eater spat back out; belongs on the Eater's place
    pub coughed_up: Option<Bee>,
}

/// Defender deployed by the player
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    kind: AntKind,
    armor: i32,
    boost: Option<Boost>,
}

impl Ant {
    /// Create a fresh ant of the given kind with its starting armor
    pub fn new(kind: AntKind) -> Self {
        let armor = kind.starting_armor();
        Self {
            kind,
            armor,
            boost: None,
        }
    }

    pub fn kind(&self) -> &AntKind {
        &self.kind
    }

    pub fn food_cost(&self) -> u32 {
        self.kind.food_cost()
    }

    pub fn boost(&self) -> Option<Boost> {
        self.boost
    }

    /// Set the pending boost, replacing any unused one
    pub fn set_boost(&mut self, boost: Boost) {
        self.boost = Some(boost);
    }

    #[inline]
    pub fn is_guard(&self) -> bool {
        matches!(self.kind, AntKind::Guard)
    }

    #[inline]
    pub fn is_scuba(&self) -> bool {
        matches!(self.kind, AntKind::Scuba)
    }

    /// Eater with a bee in its stomach
    pub fn is_full(&self) -> bool {
        matches!(&self.kind, AntKind::Eater(stomach) if stomach.captive.is_some())
    }

    /// Eater state, None for every other kind
    pub fn digestion(&self) -> Option<Digestion> {
        match &self.kind {
            AntKind::Eater(stomach) => Some(stomach.digestion),
            _ => None,
        }
    }

    /// Take damage. An Eater struck early in digestion coughs its bee back up.
    pub fn reduce_armor(&mut self, amount: i32) -> Wound {
        self.armor -= amount;
        let mut coughed_up = None;

        if let AntKind::Eater(stomach) = &mut self.kind {
            if self.armor > 0 {
                if stomach.digestion == Digestion::Digesting1 {
                    coughed_up = stomach.captive.take();
                    stomach.digestion = Digestion::Digesting3;
                }
            } else if matches!(
                stomach.digestion,
                Digestion::Digesting1 | Digestion::Digesting2
            ) {
                coughed_up = stomach.captive.take();
            }
        }

        Wound {
            expired: self.armor <= 0,
            coughed_up,
        }
    }

    /// Run this turn's action from `here`, returns false if the ant expired
    /// doing it. The ant is detached from its place while it acts.
    pub fn act(&mut self, colony: &mut Colony, here: PlaceId, rng: &mut fastrand::Rng) -> bool {
        match self.kind {
            AntKind::Grower => {
                match Harvest::from_roll(rng.f64()) {
                    Some(Harvest::Food) => colony.increase_food(1),
                    Some(Harvest::Boost(boost)) => colony.add_boost(boost),
                    None => {}
                }
                true
            }
            AntKind::Thrower | AntKind::Scuba => self.throw_leaf(colony, here),
            AntKind::Eater(ref mut stomach) => {
                stomach.digest(colony, here);
                true
            }
            AntKind::Guard => true,
        }
    }

    fn throw_leaf(&mut self, colony: &mut Colony, here: PlaceId) -> bool {
        let place = colony.place(here).name().to_string();
        let boost = self.boost.take();

        if boost == Some(Boost::BugSpray) {
            colony.record(Event::Sprayed {
                ant: self.name(),
                place: place.clone(),
            });
            while let Some(target) = colony.closest_bee(here, 0, 0) {
                colony.damage_bee(target, BUG_SPRAY_DAMAGE);
            }
            let wound = self.reduce_armor(BUG_SPRAY_DAMAGE);
            if wound.expired {
                colony.record(Event::Expired {
                    insect: self.name(),
                    place,
                });
            }
            return !wound.expired;
        }

        let range = if boost == Some(Boost::FlyingLeaf) {
            LONG_RANGE
        } else {
            SHORT_RANGE
        };
        let Some(target) = colony.closest_bee(here, 0, range) else {
            return true;
        };

        colony.record(Event::Thrown {
            ant: self.name(),
            place,
            bee: format!("Bee#{}", target.bee),
            target: colony.place(target.place).name().to_string(),
        });
        if colony.damage_bee(target, LEAF_DAMAGE) {
            return true;
        }

        let status = match boost {
            Some(Boost::StickyLeaf) => BeeStatus::Snared,
            Some(Boost::IcyLeaf) => BeeStatus::Chilled,
            _ => return true,
        };
        if let Some(bee) = colony.bee_mut(target) {
            bee.set_status(status);
            colony.record(Event::Afflicted {
                bee: format!("Bee#{}", target.bee),
                status,
            });
        }
        true
    }
}

impl Insect for Ant {
    fn name(&self) -> String {
        self.kind.as_str().to_string()
    }

    fn armor(&self) -> i32 {
        self.armor
    }
}
