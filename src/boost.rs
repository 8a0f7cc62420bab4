use crate::error::GameError;
use std::str::FromStr;

/// Single-use modifiers found by growers and handed to one ant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Boost {
    /// Extends throwing range from 3 to 5
    FlyingLeaf = 0,
    /// Snares the target bee for a turn
    StickyLeaf = 1,
    /// Chills the target bee for a turn
    IcyLeaf = 2,
    /// Hits every bee on the ant's place, and the ant itself
    BugSpray = 3,
}

impl FromStr for Boost {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flyingleaf" | "reach" => Ok(Boost::FlyingLeaf),
            "stickyleaf" | "snare" => Ok(Boost::StickyLeaf),
            "icyleaf" | "chill" => Ok(Boost::IcyLeaf),
            "bugspray" | "repellant" => Ok(Boost::BugSpray),
            _ => Err(GameError::UnknownBoost(s.to_string())),
        }
    }
}

impl Boost {
    /// All boost kinds
    pub const ALL: [Boost; 4] = [
        Boost::FlyingLeaf,
        Boost::StickyLeaf,
        Boost::IcyLeaf,
        Boost::BugSpray,
    ];

    /// Get boost index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Boost::FlyingLeaf => "FlyingLeaf",
            Boost::StickyLeaf => "StickyLeaf",
            Boost::IcyLeaf => "IcyLeaf",
            Boost::BugSpray => "BugSpray",
        }
    }
}

/// Colony inventory of boosts, one counter per kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoostStock {
    counts: [u32; 4],
}

impl BoostStock {
    /// One of each leaf, no spray
    pub fn starting() -> Self {
        Self { counts: [1, 1, 1, 0] }
    }

    #[inline]
    pub fn count(&self, boost: Boost) -> u32 {
        self.counts[boost.index()]
    }

    /// Put one boost into stock; a full counter stays full
    pub fn add(&mut self, boost: Boost) {
        let slot = &mut self.counts[boost.index()];
        *slot = slot.saturating_add(1);
    }

    /// Take one boost out of stock, false if none left
    pub fn take(&mut self, boost: Boost) -> bool {
        let slot = &mut self.counts[boost.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Boost kinds with a positive count, in declaration order
    pub fn available(&self) -> impl Iterator<Item = Boost> + '_ {
        Boost::ALL.into_iter().filter(|b| self.count(*b) > 0)
    }
}
