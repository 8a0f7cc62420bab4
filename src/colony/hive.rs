use crate::bee::Bee;
use crate::colony::Colony;
use crate::insect::Insect;
use crate::simulation::Event;
use std::collections::BTreeMap;

/// Where the bees come from: a fixed schedule of waves, each released on
/// its turn into randomly chosen tunnel entrances.
#[derive(Clone, Debug)]
pub struct Hive {
    bee_armor: i32,
    bee_damage: i32,
    waves: BTreeMap<u32, Vec<Bee>>,
    next_id: u32,
}

impl Hive {
    /// Create an empty hive whose bees get the given stats
    pub fn new(bee_armor: i32, bee_damage: i32) -> Self {
        Self {
            bee_armor,
            bee_damage,
            waves: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Schedule `count` bees for `turn`. Waves for the same turn add up.
    /// Scheduling stops once bee ids run out.
    pub fn add_wave(&mut self, turn: u32, count: u32) -> &mut Self {
        let wave = self.waves.entry(turn).or_default();
        for _ in 0..count {
            let Some(next_id) = self.next_id.checked_add(1) else {
                break;
            };
            wave.push(Bee::new(self.next_id, self.bee_armor, self.bee_damage));
            self.next_id = next_id;
        }
        self
    }

    /// Bees still waiting in the hive
    pub fn pending(&self) -> usize {
        self.waves.values().map(Vec::len).sum()
    }

    /// Scheduled waves as `(turn, size)`, earliest first
    pub fn waves(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.waves.iter().map(|(turn, bees)| (*turn, bees.len()))
    }

    /// Release the wave scheduled for `turn`, if any. Each bee picks its
    /// entrance independently. Returns how many bees came out.
    pub fn invade(&mut self, colony: &mut Colony, turn: u32, rng: &mut fastrand::Rng) -> usize {
        let Some(wave) = self.waves.remove(&turn) else {
            return 0;
        };
        let released = wave.len();

        for bee in wave {
            let entrances = colony.entrances();
            let entrance = entrances[rng.usize(..entrances.len())];
            colony.record(Event::Invaded {
                bee: bee.name(),
                place: colony.place(entrance).name().to_string(),
            });
            colony.add_bee(entrance, bee);
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waves_accumulate() {
        let mut hive = Hive::new(3, 1);
        hive.add_wave(2, 1).add_wave(4, 3).add_wave(2, 2);

        assert_eq!(hive.pending(), 6);
        assert_eq!(hive.waves().collect::<Vec<_>>(), [(2, 3), (4, 3)]);
    }

    #[test]
    fn test_wave_stops_when_ids_run_out() {
        let mut hive = Hive::new(3, 1);
        hive.next_id = u32::MAX - 2;
        hive.add_wave(0, 5);

        assert_eq!(hive.pending(), 2);
    }

    #[test]
    fn test_invade_only_on_scheduled_turn() {
        let mut colony = Colony::new(0, 3, 4, 0).unwrap();
        let mut hive = Hive::new(3, 1);
        hive.add_wave(1, 5);
        let mut rng = fastrand::Rng::with_seed(3);

        assert_eq!(hive.invade(&mut colony, 0, &mut rng), 0);
        assert_eq!(colony.bee_count(), 0);

        assert_eq!(hive.invade(&mut colony, 1, &mut rng), 5);
        assert_eq!(hive.pending(), 0);
        assert_eq!(colony.bee_count(), 5);

        let at_entrances: usize = colony
            .entrances()
            .iter()
            .map(|id| colony.place(*id).bees().len())
            .sum();
        assert_eq!(at_entrances, 5);

        assert_eq!(hive.invade(&mut colony, 1, &mut rng), 0);
    }

    #[test]
    fn test_bees_get_hive_stats() {
        let mut colony = Colony::new(0, 1, 2, 0).unwrap();
        let mut hive = Hive::new(4, 2);
        hive.add_wave(0, 2);

        hive.invade(&mut colony, 0, &mut fastrand::Rng::with_seed(1));

        let entrance = colony.entrances()[0];
        let bees = colony.place(entrance).bees();
        assert_eq!(bees.len(), 2);
        assert!(bees.iter().all(|b| b.armor() == 4 && b.damage() == 2));
        assert_ne!(bees[0].id, bees[1].id);
    }
}
