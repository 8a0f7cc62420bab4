use crate::ant::Ant;
use crate::bee::{Bee, BeeAction};
use crate::boost::{Boost, BoostStock};
use crate::colony::coords::Coords;
use crate::colony::place::{BeeRef, Place, PlaceId, PlaceKind, Slot};
use crate::error::{GameError, Result};
use crate::insect::Insect;
use crate::simulation::Event;

/// The queen's chamber is always the first place
pub const QUEEN: PlaceId = PlaceId(0);

/// The ants' side of the board: every place, the food store and the boost
/// stock.
///
/// Places live in one arena. Index 0 is the queen; tunnel `t`, step `s`
/// sits at `1 + t * len + s`, so walking the arena from 1 visits places
/// tunnel by tunnel, shallowest step first. Step 0 exits into the queen
/// and the deepest step of each tunnel is where bees come in.
#[derive(Clone, Debug)]
pub struct Colony {
    places: Vec<Place>,
    tunnel_length: usize,
    entrances: Vec<PlaceId>,
    food: u32,
    boosts: BoostStock,
    events: Vec<Event>,
}

impl Colony {
    /// Dig `tunnels` tunnels of `tunnel_length` steps. Every
    /// `moat_frequency`-th step is flooded (0 = never).
    pub fn new(
        food: u32,
        tunnels: usize,
        tunnel_length: usize,
        moat_frequency: usize,
    ) -> Result<Self> {
        if tunnels == 0 || tunnel_length == 0 {
            return Err(GameError::InvalidConfig(format!(
                "colony needs at least one tunnel step, got {tunnels}x{tunnel_length}"
            )));
        }

        let mut places = Vec::with_capacity(1 + tunnels * tunnel_length);
        places.push(Place::new("Ant Queen", PlaceKind::Queen, None));
        let mut entrances = Vec::with_capacity(tunnels);

        for tunnel in 0..tunnels {
            let mut exit = QUEEN;
            for step in 0..tunnel_length {
                let kind = if moat_frequency != 0 && (step + 1) % moat_frequency == 0 {
                    PlaceKind::Water
                } else {
                    PlaceKind::Tunnel
                };
                let id = PlaceId(places.len());
                let name = format!("{}[{},{}]", kind.label(), tunnel, step);
                places.push(Place::new(name, kind, Some(exit)));
                if exit != QUEEN {
                    places[exit.0].set_entrance(id);
                }
                exit = id;
            }
            entrances.push(exit);
        }

        Ok(Self {
            places,
            tunnel_length,
            entrances,
            food,
            boosts: BoostStock::starting(),
            events: Vec::new(),
        })
    }

    /// Get a place by id
    ///
    /// Ids are only handed out by this colony, so indexing cannot miss.
    #[inline]
    pub fn place(&self, id: PlaceId) -> &Place {
        &self.places[id.0]
    }

    pub fn queen(&self) -> &Place {
        self.place(QUEEN)
    }

    /// Look up the place at tunnel `tunnel`, step `step`
    pub fn place_at(&self, tunnel: usize, step: usize) -> Option<PlaceId> {
        (tunnel < self.tunnel_count() && step < self.tunnel_length)
            .then(|| PlaceId(1 + tunnel * self.tunnel_length + step))
    }

    /// Resolve a `"tunnel,step"` string to a place
    pub fn locate(&self, coords: &str) -> Result<PlaceId> {
        let parsed: Coords = coords.parse()?;
        self.place_at(parsed.tunnel, parsed.step)
            .ok_or_else(|| GameError::InvalidLocation(coords.to_string()))
    }

    pub fn tunnel_count(&self) -> usize {
        self.entrances.len()
    }

    pub fn tunnel_length(&self) -> usize {
        self.tunnel_length
    }

    /// Tunnels as rows of places, shallowest step first
    pub fn tunnels(&self) -> impl Iterator<Item = &[Place]> {
        self.places[1..].chunks(self.tunnel_length)
    }

    /// Deepest place of each tunnel, where invading bees land
    pub fn entrances(&self) -> &[PlaceId] {
        &self.entrances
    }

    pub fn food(&self) -> u32 {
        self.food
    }

    pub fn boosts(&self) -> &BoostStock {
        &self.boosts
    }

    /// Bees have reached the queen
    pub fn queen_has_bees(&self) -> bool {
        !self.queen().bees().is_empty()
    }

    /// Live bees on the board, including those inside an Eater
    pub fn bee_count(&self) -> usize {
        self.places
            .iter()
            .map(|p| p.bees().len() + p.ants().filter(|a| a.is_full()).count())
            .sum()
    }

    /// Ids of every tunnel place in scan order
    fn tunnel_ids(&self) -> impl Iterator<Item = PlaceId> {
        (1..self.places.len()).map(PlaceId)
    }

    /// Pay for `ant` and put it down at `at`
    pub fn deploy_ant(&mut self, ant: Ant, at: PlaceId) -> Result<()> {
        let cost = ant.food_cost();
        if self.food < cost {
            return Err(GameError::InsufficientResources);
        }
        self.places[at.0]
            .add_ant(ant)
            .map_err(|_| GameError::LocationOccupied)?;
        self.food -= cost;
        Ok(())
    }

    /// Take the top ant (guard first) off `at`. No refund.
    pub fn remove_ant(&mut self, at: PlaceId) -> Option<Ant> {
        let ant = self.places[at.0].remove_ant()?;
        self.record(Event::Removed {
            ant: ant.name(),
            place: self.place(at).name().to_string(),
        });
        Some(ant)
    }

    /// Hand one boost from stock to the exposed ant at `at`
    pub fn apply_boost(&mut self, boost: Boost, at: PlaceId) -> Result<()> {
        if self.boosts.count(boost) == 0 {
            return Err(GameError::UnknownBoost(boost.as_str().to_string()));
        }
        let place = &mut self.places[at.0];
        let place_name = place.name().to_string();
        let ant = place.ant_mut().ok_or(GameError::NoDefenderPresent)?;
        ant.set_boost(boost);
        let ant_name = ant.name();

        self.boosts.take(boost);
        self.record(Event::BoostGiven {
            ant: ant_name,
            place: place_name,
            boost,
        });
        Ok(())
    }

    /// First bee found walking from `from` toward the hive, between `min`
    /// and `max` steps away (inclusive). Within a place the earliest
    /// arrival wins.
    pub fn closest_bee(&self, from: PlaceId, min: usize, max: usize) -> Option<BeeRef> {
        let mut current = Some(from);
        for distance in 0..=max {
            let id = current?;
            let place = self.place(id);
            if distance >= min {
                if let Some(bee) = place.bees().first() {
                    return Some(BeeRef { place: id, bee: bee.id });
                }
            }
            current = place.entrance();
        }
        None
    }

    pub(crate) fn bee_mut(&mut self, target: BeeRef) -> Option<&mut Bee> {
        self.places[target.place.0].bee_mut(target.bee)
    }

    pub(crate) fn take_bee(&mut self, target: BeeRef) -> Option<Bee> {
        self.places[target.place.0].remove_bee(target.bee)
    }

    pub fn add_bee(&mut self, at: PlaceId, bee: Bee) {
        self.places[at.0].add_bee(bee);
    }

    /// Hurt a bee, removing it if it expires. Returns true on expiry.
    pub(crate) fn damage_bee(&mut self, target: BeeRef, amount: i32) -> bool {
        let place = &mut self.places[target.place.0];
        let Some(bee) = place.bee_mut(target.bee) else {
            return false;
        };
        if !bee.reduce_armor(amount) {
            return false;
        }
        let insect = bee.name();
        let place_name = place.name().to_string();
        place.remove_bee(target.bee);
        self.record(Event::Expired {
            insect,
            place: place_name,
        });
        true
    }

    pub(crate) fn increase_food(&mut self, amount: u32) {
        self.food = self.food.saturating_add(amount);
        self.record(Event::FoodFound);
    }

    /// Put a found boost into stock
    pub fn add_boost(&mut self, boost: Boost) {
        self.boosts.add(boost);
        self.record(Event::BoostFound { boost });
    }

    pub(crate) fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Hand over everything logged since the last drain
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Phase 1: every ant acts, in scan order. A guarded ant acts before
    /// its guard.
    pub fn ants_act(&mut self, rng: &mut fastrand::Rng) {
        let occupied: Vec<PlaceId> = self
            .tunnel_ids()
            .filter(|id| self.place(*id).is_blocked())
            .collect();

        for id in occupied {
            self.slot_act(id, Slot::Ant, rng);
            self.slot_act(id, Slot::Guard, rng);
        }
    }

    /// Detach the ant so it can reach the rest of the colony, then put it
    /// back unless it expired while acting.
    fn slot_act(&mut self, id: PlaceId, slot: Slot, rng: &mut fastrand::Rng) {
        let Some(mut ant) = self.places[id.0].take_slot(slot) else {
            return;
        };
        if ant.act(self, id, rng) {
            self.places[id.0].restore_slot(slot, ant);
        }
    }

    /// Phase 2: every bee on the board at the start of the phase acts once
    pub fn bees_act(&mut self) {
        let mut snapshot = Vec::new();
        for id in self.tunnel_ids() {
            snapshot.extend(
                self.place(id)
                    .bees()
                    .iter()
                    .map(|bee| BeeRef { place: id, bee: bee.id }),
            );
        }

        for target in snapshot {
            self.bee_act(target);
        }
    }

    fn bee_act(&mut self, target: BeeRef) {
        let place = &mut self.places[target.place.0];
        let blocked = place.is_blocked();
        let place_name = place.name().to_string();
        let Some(bee) = place.bee_mut(target.bee) else {
            return;
        };
        let bee_name = bee.name();

        match bee.act(blocked) {
            BeeAction::Sting(damage) => {
                let Some(sting) = place.sting_occupant(damage) else {
                    return;
                };
                self.record(Event::Stung {
                    bee: bee_name,
                    ant: sting.victim.clone(),
                    place: place_name.clone(),
                });
                if let Some(bee) = sting.coughed_up {
                    self.record(Event::CoughedUp {
                        bee,
                        place: place_name.clone(),
                    });
                }
                if sting.expired {
                    self.record(Event::Expired {
                        insect: sting.victim,
                        place: place_name,
                    });
                }
            }
            BeeAction::Advance => {
                let Some(exit) = place.exit() else {
                    return;
                };
                if let Some(bee) = place.remove_bee(target.bee) {
                    self.places[exit.0].add_bee(bee);
                }
            }
            BeeAction::Idle => {}
        }
    }

    /// Phase 3: end-of-turn place effects, in scan order
    pub fn places_act(&mut self) {
        for id in self.tunnel_ids() {
            if let Some(ant) = self.places[id.0].flood() {
                self.record(Event::Drowned {
                    ant: ant.name(),
                    place: self.place(id).name().to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::{AntKind, Digestion};

    fn colony(food: u32, tunnels: usize, length: usize) -> Colony {
        Colony::new(food, tunnels, length, 0).unwrap()
    }

    fn ant(kind: &str) -> Ant {
        Ant::new(kind.parse().unwrap())
    }

    fn at(colony: &Colony, coords: &str) -> PlaceId {
        colony.locate(coords).unwrap()
    }

    #[test]
    fn test_zero_sized_colony_rejected() {
        assert!(matches!(Colony::new(5, 0, 4, 0), Err(GameError::InvalidConfig(_))));
        assert!(matches!(Colony::new(5, 2, 0, 0), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_layout_and_links() {
        let colony = Colony::new(0, 2, 3, 2).unwrap();

        assert_eq!(colony.tunnel_count(), 2);
        let names: Vec<&str> = colony.tunnels().next().unwrap().iter().map(Place::name).collect();
        assert_eq!(names, ["tunnel[0,0]", "water[0,1]", "tunnel[0,2]"]);

        let first = at(&colony, "1,0");
        assert_eq!(colony.place(first).exit(), Some(QUEEN));
        assert_eq!(colony.place(first).entrance(), Some(at(&colony, "1,1")));
        assert_eq!(colony.place(at(&colony, "1,2")).entrance(), None);
        assert_eq!(colony.entrances(), [at(&colony, "0,2"), at(&colony, "1,2")]);
    }

    #[test]
    fn test_locate_rejects_out_of_range() {
        let colony = colony(0, 2, 3);

        assert!(matches!(colony.locate("2,0"), Err(GameError::InvalidLocation(_))));
        assert!(matches!(colony.locate("0,3"), Err(GameError::InvalidLocation(_))));
        assert!(matches!(colony.locate("zero"), Err(GameError::InvalidLocation(_))));
    }

    #[test]
    fn test_deploy_charges_food() {
        let mut colony = colony(5, 1, 3);
        let spot = at(&colony, "0,0");

        colony.deploy_ant(ant("thrower"), spot).unwrap();
        assert_eq!(colony.food(), 1);
        assert!(matches!(
            colony.deploy_ant(ant("thrower"), at(&colony, "0,1")),
            Err(GameError::InsufficientResources)
        ));
        assert_eq!(colony.food(), 1);
    }

    #[test]
    fn test_deploy_on_occupied_keeps_food() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("grower"), spot).unwrap();

        assert!(matches!(
            colony.deploy_ant(ant("thrower"), spot),
            Err(GameError::LocationOccupied)
        ));
        assert_eq!(colony.food(), 9);
    }

    #[test]
    fn test_apply_boost_consumes_stock() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("thrower"), spot).unwrap();

        colony.apply_boost(Boost::IcyLeaf, spot).unwrap();
        assert_eq!(colony.place(spot).ant().unwrap().boost(), Some(Boost::IcyLeaf));
        assert_eq!(colony.boosts().count(Boost::IcyLeaf), 0);
        assert!(matches!(
            colony.apply_boost(Boost::IcyLeaf, spot),
            Err(GameError::UnknownBoost(_))
        ));
    }

    #[test]
    fn test_apply_boost_needs_ant() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,1");

        assert!(matches!(
            colony.apply_boost(Boost::FlyingLeaf, spot),
            Err(GameError::NoDefenderPresent)
        ));
        assert_eq!(colony.boosts().count(Boost::FlyingLeaf), 1);
    }

    #[test]
    fn test_closest_bee_walks_toward_hive() {
        let mut colony = colony(0, 1, 6);
        let start = at(&colony, "0,0");

        assert_eq!(colony.closest_bee(start, 0, 0), None);
        colony.add_bee(at(&colony, "0,4"), Bee::new(1, 3, 1));
        colony.add_bee(at(&colony, "0,2"), Bee::new(2, 3, 1));
        colony.add_bee(at(&colony, "0,2"), Bee::new(3, 3, 1));

        let nearest = colony.closest_bee(start, 0, 3).unwrap();
        assert_eq!(nearest.bee, 2);
        assert_eq!(colony.closest_bee(start, 0, 1), None);
        assert_eq!(colony.closest_bee(start, 3, 5).map(|b| b.bee), Some(1));
        assert_eq!(colony.closest_bee(at(&colony, "0,5"), 0, 5), None);
    }

    #[test]
    fn test_closest_bee_at_zero_iff_bees_here() {
        let mut colony = colony(0, 1, 2);
        let here = at(&colony, "0,1");

        assert!(colony.closest_bee(here, 0, 0).is_none());
        colony.add_bee(here, Bee::new(4, 3, 1));
        assert_eq!(colony.closest_bee(here, 0, 0).map(|b| b.place), Some(here));
    }

    #[test]
    fn test_bee_sting_and_advance() {
        let mut colony = colony(10, 1, 3);
        colony.deploy_ant(ant("eater"), at(&colony, "0,1")).unwrap();
        colony.add_bee(at(&colony, "0,1"), Bee::new(1, 3, 1));
        colony.add_bee(at(&colony, "0,2"), Bee::new(2, 3, 1));

        colony.bees_act();

        let blocked = colony.place(at(&colony, "0,1"));
        assert_eq!(blocked.ant().unwrap().armor(), 1);
        let ids: Vec<u32> = blocked.bees().iter().map(|b| b.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_each_bee_moves_once_per_phase() {
        let mut colony = colony(0, 1, 4);
        colony.add_bee(at(&colony, "0,3"), Bee::new(1, 3, 1));

        colony.bees_act();

        assert_eq!(colony.place(at(&colony, "0,2")).bees().len(), 1);
        assert!(colony.place(at(&colony, "0,1")).bees().is_empty());
    }

    #[test]
    fn test_bee_reaches_queen() {
        let mut colony = colony(0, 1, 1);
        colony.add_bee(at(&colony, "0,0"), Bee::new(1, 3, 1));

        colony.bees_act();

        assert!(colony.queen_has_bees());
        assert_eq!(colony.bee_count(), 1);
    }

    #[test]
    fn test_guarded_ant_still_acts() {
        let mut colony = colony(10, 1, 4);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("thrower"), spot).unwrap();
        colony.deploy_ant(ant("guard"), spot).unwrap();
        colony.add_bee(at(&colony, "0,2"), Bee::new(1, 3, 1));

        colony.ants_act(&mut fastrand::Rng::with_seed(1));

        assert_eq!(colony.place(at(&colony, "0,2")).bees()[0].armor(), 2);
        assert!(colony.place(spot).ant().unwrap().is_guard());
        assert_eq!(colony.place(spot).guarded().unwrap().name(), "Thrower");
    }

    #[test]
    fn test_bug_spray_clears_place() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,1");
        colony.deploy_ant(ant("thrower"), spot).unwrap();
        for id in 0..3 {
            colony.add_bee(spot, Bee::new(id, 5, 1));
        }
        colony.add_bee(at(&colony, "0,2"), Bee::new(9, 5, 1));
        colony.add_boost(Boost::BugSpray);
        colony.apply_boost(Boost::BugSpray, spot).unwrap();

        colony.ants_act(&mut fastrand::Rng::with_seed(1));

        assert!(colony.place(spot).bees().is_empty());
        assert!(colony.place(spot).ant().is_none());
        assert_eq!(colony.place(at(&colony, "0,2")).bees().len(), 1);
        let events = colony.drain_events();
        let expired = events
            .iter()
            .filter(|e| matches!(e, Event::Expired { .. }))
            .count();
        assert_eq!(expired, 4);
    }

    #[test]
    fn test_boost_spent_even_without_target() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("thrower"), spot).unwrap();
        colony.apply_boost(Boost::FlyingLeaf, spot).unwrap();

        colony.ants_act(&mut fastrand::Rng::with_seed(1));

        assert_eq!(colony.place(spot).ant().unwrap().boost(), None);
    }

    #[test]
    fn test_flying_leaf_extends_range() {
        let mut colony = colony(10, 1, 6);
        let spot = at(&colony, "0,0");
        let far = at(&colony, "0,5");
        colony.deploy_ant(ant("scuba"), spot).unwrap();
        colony.add_bee(far, Bee::new(1, 3, 1));
        let mut rng = fastrand::Rng::with_seed(1);

        colony.ants_act(&mut rng);
        assert_eq!(colony.place(far).bees()[0].armor(), 3);

        colony.apply_boost(Boost::FlyingLeaf, spot).unwrap();
        colony.ants_act(&mut rng);
        assert_eq!(colony.place(far).bees()[0].armor(), 2);
    }

    #[test]
    fn test_sticky_leaf_snares_target() {
        let mut colony = colony(10, 1, 4);
        let spot = at(&colony, "0,0");
        let bee_spot = at(&colony, "0,3");
        colony.deploy_ant(ant("thrower"), spot).unwrap();
        colony.add_bee(bee_spot, Bee::new(1, 3, 1));
        colony.apply_boost(Boost::StickyLeaf, spot).unwrap();

        colony.ants_act(&mut fastrand::Rng::with_seed(1));
        colony.bees_act();

        let bee = &colony.place(bee_spot).bees()[0];
        assert_eq!(bee.armor(), 2);
        assert_eq!(bee.status(), None);
    }

    #[test]
    fn test_icy_leaf_stops_sting() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("thrower"), spot).unwrap();
        colony.add_bee(spot, Bee::new(1, 3, 1));
        colony.apply_boost(Boost::IcyLeaf, spot).unwrap();

        colony.ants_act(&mut fastrand::Rng::with_seed(1));
        colony.bees_act();

        assert_eq!(colony.place(spot).ant().unwrap().armor(), 1);
    }

    #[test]
    fn test_eater_digestion_cycle() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,1");
        colony.deploy_ant(ant("eater"), spot).unwrap();
        colony.add_bee(spot, Bee::new(1, 3, 1));
        let mut rng = fastrand::Rng::with_seed(1);

        let expected = [
            Digestion::Digesting1,
            Digestion::Digesting2,
            Digestion::Digesting3,
            Digestion::Digested,
        ];
        for state in expected {
            colony.ants_act(&mut rng);
            let eater = colony.place(spot).ant().unwrap();
            assert_eq!(eater.digestion(), Some(state));
            assert!(eater.is_full());
            assert!(colony.place(spot).bees().is_empty());
            assert_eq!(colony.bee_count(), 1);
        }

        colony.ants_act(&mut rng);
        let eater = colony.place(spot).ant().unwrap();
        assert_eq!(eater.digestion(), Some(Digestion::Hungry));
        assert!(!eater.is_full());
        let released = &colony.place(spot).bees()[0];
        assert_eq!((released.id, released.armor()), (1, 3));
    }

    #[test]
    fn test_hungry_eater_without_prey_waits() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("eater"), spot).unwrap();
        colony.add_bee(at(&colony, "0,1"), Bee::new(1, 3, 1));

        colony.ants_act(&mut fastrand::Rng::with_seed(1));

        assert_eq!(
            colony.place(spot).ant().unwrap().kind(),
            &AntKind::Eater(Default::default())
        );
    }

    #[test]
    fn test_stung_eater_coughs_up() {
        let mut colony = colony(10, 1, 3);
        let spot = at(&colony, "0,1");
        colony.deploy_ant(ant("eater"), spot).unwrap();
        colony.add_bee(spot, Bee::new(1, 3, 1));
        colony.ants_act(&mut fastrand::Rng::with_seed(1));
        colony.add_bee(spot, Bee::new(2, 3, 1));

        colony.bees_act();

        let place = colony.place(spot);
        assert_eq!(place.ant().unwrap().digestion(), Some(Digestion::Digesting3));
        let ids: Vec<u32> = place.bees().iter().map(|b| b.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn test_grower_yields_something_over_time() {
        let mut colony = colony(1, 1, 2);
        colony.deploy_ant(ant("grower"), at(&colony, "0,0")).unwrap();
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..50 {
            colony.ants_act(&mut rng);
        }

        let boosts: u32 = Boost::ALL.iter().map(|b| colony.boosts().count(*b)).sum();
        assert!(colony.food() + boosts > 4);
    }

    #[test]
    fn test_food_store_saturates() {
        let mut colony = colony(u32::MAX - 1, 1, 2);

        colony.increase_food(1);
        colony.increase_food(1);
        assert_eq!(colony.food(), u32::MAX);
    }

    #[test]
    fn test_places_act_drowns_in_water() {
        let mut colony = Colony::new(20, 1, 2, 2).unwrap();
        let wet = at(&colony, "0,1");
        colony.deploy_ant(ant("thrower"), wet).unwrap();

        colony.places_act();
        assert!(colony.place(wet).ant().is_none());

        colony.deploy_ant(ant("scuba"), wet).unwrap();
        colony.places_act();
        assert!(colony.place(wet).ant().is_some());
        assert!(colony
            .drain_events()
            .iter()
            .any(|e| matches!(e, Event::Drowned { .. })));
    }

    #[test]
    fn test_remove_without_refund() {
        let mut colony = colony(4, 1, 2);
        let spot = at(&colony, "0,0");
        colony.deploy_ant(ant("thrower"), spot).unwrap();

        assert!(colony.remove_ant(spot).is_some());
        assert_eq!(colony.food(), 0);
        assert!(colony.remove_ant(spot).is_none());
    }
}
