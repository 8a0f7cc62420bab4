use crate::bee::BeeStatus;
use crate::boost::Boost;
use std::fmt;

/// Something worth telling the player, recorded as it happens
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    FoodFound,
    BoostFound { boost: Boost },
    BoostGiven { ant: String, place: String, boost: Boost },
    Thrown { ant: String, place: String, bee: String, target: String },
    Afflicted { bee: String, status: BeeStatus },
    Sprayed { ant: String, place: String },
    Eaten { place: String, bee: String },
    CoughedUp { place: String, bee: String },
    Released { place: String, bee: String },
    Stung { bee: String, ant: String, place: String },
    Expired { insect: String, place: String },
    Drowned { ant: String, place: String },
    Removed { ant: String, place: String },
    Invaded { bee: String, place: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FoodFound => write!(f, "Found some food!"),
            Event::BoostFound { boost } => write!(f, "Found a {}!", boost.as_str()),
            Event::BoostGiven { ant, place, boost } => {
                write!(f, "{ant}({place}) is given a {}", boost.as_str())
            }
            Event::Thrown {
                ant,
                place,
                bee,
                target,
            } => write!(f, "{ant}({place}) throws a leaf at {bee}({target})"),
            Event::Afflicted { bee, status } => write!(f, "{bee} is {}!", status.as_str()),
            Event::Sprayed { ant, place } => {
                write!(f, "{ant}({place}) sprays bug repellant everywhere!")
            }
            Event::Eaten { place, bee } => write!(f, "Eater({place}) eats {bee}!"),
            Event::CoughedUp { place, bee } => write!(f, "Eater({place}) coughs up {bee}!"),
            Event::Released { place, bee } => write!(f, "Eater({place}) spits out {bee}"),
            Event::Stung { bee, ant, place } => write!(f, "{bee}({place}) stings {ant}!"),
            Event::Expired { insect, place } => {
                write!(f, "{insect}({place}) ran out of armor and expired")
            }
            Event::Drowned { ant, place } => write!(f, "{ant}({place}) drowned"),
            Event::Removed { ant, place } => write!(f, "{ant} removed from {place}"),
            Event::Invaded { bee, place } => write!(f, "{bee} flies into {place}"),
        }
    }
}
