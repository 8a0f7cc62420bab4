use crate::insect::Insect;

/// One-turn condition inflicted by a boosted leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeeStatus {
    /// Cannot advance this turn (StickyLeaf)
    Snared,
    /// Cannot sting this turn (IcyLeaf)
    Chilled,
}

impl BeeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            BeeStatus::Snared => "stuck",
            BeeStatus::Chilled => "cold",
        }
    }
}

/// What a bee decided to do this turn; the colony carries it out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeeAction {
    /// Sting the ant blocking the place for this much damage
    Sting(i32),
    /// Move one place toward the queen
    Advance,
    /// Held in place by a status
    Idle,
}

/// Attacker spawned by the hive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bee {
    pub id: u32,
    armor: i32,
    damage: i32,
    status: Option<BeeStatus>,
}

impl Bee {
    /// Create a new bee with the given armor and sting damage
    pub fn new(id: u32, armor: i32, damage: i32) -> Self {
        Self {
            id,
            armor,
            damage,
            status: None,
        }
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn status(&self) -> Option<BeeStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: BeeStatus) {
        self.status = Some(status);
    }

    /// Take damage, returns true if the bee expired
    pub fn reduce_armor(&mut self, amount: i32) -> bool {
        self.armor -= amount;
        self.armor <= 0
    }

    /// Decide this turn's action. A blocked bee never advances, and the
    /// status is spent whichever branch is taken.
    pub fn act(&mut self, blocked: bool) -> BeeAction {
        let status = self.status.take();
        if blocked {
            if status == Some(BeeStatus::Chilled) {
                BeeAction::Idle
            } else {
                BeeAction::Sting(self.damage)
            }
        } else if self.is_alive() && status != Some(BeeStatus::Snared) {
            BeeAction::Advance
        } else {
            BeeAction::Idle
        }
    }
}

impl Insect for Bee {
    fn name(&self) -> String {
        format!("Bee#{}", self.id)
    }

    fn armor(&self) -> i32 {
        self.armor
    }
}
