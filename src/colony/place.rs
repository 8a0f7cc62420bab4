use crate::ant::Ant;
use crate::bee::Bee;
use crate::insect::Insect;

/// Index of a place inside its colony
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub(crate) usize);

/// Handle on one bee: where it is and which one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeeRef {
    pub place: PlaceId,
    pub bee: u32,
}

/// Behaviour variant of a place, fixed when the colony is dug
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceKind {
    /// Dry tunnel section
    Tunnel,
    /// Flooded section: drowns one non-Scuba occupant per turn
    Water,
    /// Innermost chamber every tunnel exits into
    Queen,
}

impl PlaceKind {
    pub const fn label(self) -> &'static str {
        match self {
            PlaceKind::Tunnel => "tunnel",
            PlaceKind::Water => "water",
            PlaceKind::Queen => "queen",
        }
    }
}

/// Which ant slot of a place
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Ant,
    Guard,
}

/// Outcome of a bee stinging the place's occupant
#[derive(Debug, PartialEq, Eq)]
pub struct Sting {
    pub victim: String,
    pub expired: bool,
    pub coughed_up: Option<String>,
}

/// One cell of the tunnel graph.
///
/// Holds at most one ant plus one guard on top of it, and any number of
/// bees in arrival order. `exit` leads toward the queen, `entrance` toward
/// the hive.
#[derive(Clone, Debug)]
pub struct Place {
    name: String,
    kind: PlaceKind,
    exit: Option<PlaceId>,
    entrance: Option<PlaceId>,
    ant: Option<Ant>,
    guard: Option<Ant>,
    bees: Vec<Bee>,
}

impl Place {
    /// Create an empty place leading to `exit`
    pub fn new(name: impl Into<String>, kind: PlaceKind, exit: Option<PlaceId>) -> Self {
        Self {
            name: name.into(),
            kind,
            exit,
            entrance: None,
            ant: None,
            guard: None,
            bees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlaceKind {
        self.kind
    }

    #[inline]
    pub fn is_water(&self) -> bool {
        self.kind == PlaceKind::Water
    }

    pub fn exit(&self) -> Option<PlaceId> {
        self.exit
    }

    pub fn entrance(&self) -> Option<PlaceId> {
        self.entrance
    }

    pub(crate) fn set_entrance(&mut self, entrance: PlaceId) {
        self.entrance = Some(entrance);
    }

    /// The ant exposed to bees: the guard if there is one
    pub fn ant(&self) -> Option<&Ant> {
        self.guard.as_ref().or(self.ant.as_ref())
    }

    pub(crate) fn ant_mut(&mut self) -> Option<&mut Ant> {
        self.guard.as_mut().or(self.ant.as_mut())
    }

    /// The ant under the guard (or the only ant)
    pub fn guarded(&self) -> Option<&Ant> {
        self.ant.as_ref()
    }

    pub fn guard(&self) -> Option<&Ant> {
        self.guard.as_ref()
    }

    /// Both ants on this place, guarded one first
    pub fn ants(&self) -> impl Iterator<Item = &Ant> {
        self.ant.iter().chain(self.guard.iter())
    }

    /// Bees in arrival order
    pub fn bees(&self) -> &[Bee] {
        &self.bees
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.ant().is_some()
    }

    /// Put an ant down. A Guard takes the guard slot, any other kind the
    /// ant slot; the ant is handed back if its slot is taken.
    pub fn add_ant(&mut self, ant: Ant) -> Result<(), Ant> {
        let slot = if ant.is_guard() {
            &mut self.guard
        } else {
            &mut self.ant
        };
        if slot.is_some() {
            return Err(ant);
        }
        *slot = Some(ant);
        Ok(())
    }

    /// Take the guard off if present, otherwise the ant
    pub fn remove_ant(&mut self) -> Option<Ant> {
        self.guard.take().or_else(|| self.ant.take())
    }

    pub(crate) fn take_slot(&mut self, slot: Slot) -> Option<Ant> {
        match slot {
            Slot::Ant => self.ant.take(),
            Slot::Guard => self.guard.take(),
        }
    }

    pub(crate) fn restore_slot(&mut self, slot: Slot, ant: Ant) {
        match slot {
            Slot::Ant => self.ant = Some(ant),
            Slot::Guard => self.guard = Some(ant),
        }
    }

    pub fn add_bee(&mut self, bee: Bee) {
        self.bees.push(bee);
    }

    /// Take a bee off this place, keeping the others in arrival order
    pub fn remove_bee(&mut self, id: u32) -> Option<Bee> {
        let idx = self.bees.iter().position(|b| b.id == id)?;
        Some(self.bees.remove(idx))
    }

    pub(crate) fn bee_mut(&mut self, id: u32) -> Option<&mut Bee> {
        self.bees.iter_mut().find(|b| b.id == id)
    }

    /// Deal `damage` to the exposed ant. An expired ant is removed and any
    /// bee it coughs up rejoins this place.
    pub fn sting_occupant(&mut self, damage: i32) -> Option<Sting> {
        let slot = if self.guard.is_some() {
            &mut self.guard
        } else {
            &mut self.ant
        };
        let ant = slot.as_mut()?;
        let victim = ant.name();
        let wound = ant.reduce_armor(damage);
        if wound.expired {
            *slot = None;
        }

        let coughed_up = wound.coughed_up.map(|bee| {
            let name = bee.name();
            self.bees.push(bee);
            name
        });

        Some(Sting {
            victim,
            expired: wound.expired,
            coughed_up,
        })
    }

    /// End-of-turn effect. Water drowns the exposed ant unless it is a
    /// Scuba; at most one ant goes per call.
    pub fn flood(&mut self) -> Option<Ant> {
        if !self.is_water() {
            return None;
        }
        let drowning = self.ant().is_some_and(|ant| !ant.is_scuba());
        if drowning {
            self.remove_ant()
        } else {
            None
        }
    }
}
