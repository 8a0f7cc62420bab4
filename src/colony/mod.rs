pub mod colony;
pub mod coords;
pub mod hive;
pub mod place;

pub use colony::{Colony, QUEEN};
pub use coords::Coords;
pub use hive::Hive;
pub use place::{BeeRef, Place, PlaceId, PlaceKind, Sting};
