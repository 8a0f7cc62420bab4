/// Shared surface of everything living in the tunnels.
///
/// Armor doubles as health: an insect whose armor drops to zero or below
/// has expired and is taken off the board by whoever holds it.
pub trait Insect {
    /// Display name, e.g. `Thrower` or `Bee#3`
    fn name(&self) -> String;

    /// Remaining armor
    fn armor(&self) -> i32;

    /// Check if the insect still has armor left
    #[inline]
    fn is_alive(&self) -> bool {
        self.armor() > 0
    }
}
