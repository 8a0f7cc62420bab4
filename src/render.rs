use crate::ant::{Ant, AntKind};
use crate::colony::Place;
use crate::simulation::{Event, Game};
use colored::{ColoredString, Colorize};

/// Draw the whole board: header, every tunnel with its ants and bees, and
/// the hive's remaining swarm next to the first tunnel.
pub fn render_board(game: &Game) -> String {
    let colony = game.colony();
    let length = colony.tunnel_length();
    let ruler = (0..length)
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join("    ");

    let mut map = String::with_capacity(256 * (colony.tunnel_count() + 1));
    map.push_str(&"The Colony is under attack!".bold().to_string());
    map.push('\n');
    map.push_str(&format!(
        "Turn: {}, Food: {}, Boosts available: [{}]\n",
        game.turn(),
        game.food(),
        game.boost_names().join(",")
    ));
    map.push_str(&format!("     {ruler}      Hive\n"));

    for (i, tunnel) in colony.tunnels().enumerate() {
        map.push_str("    ");
        map.push_str(&"=====".repeat(length));
        if i == 0 {
            map.push_str("    ");
            map.push_str(&bee_cell(game.hive_bee_count()));
        }
        map.push('\n');

        map.push_str(&format!("{i})  "));
        for place in tunnel {
            map.push_str(&icon_for(place).to_string());
            map.push(' ');
            map.push_str(&bee_cell(place.bees().len()));
            map.push(' ');
        }
        map.push_str("\n    ");

        for place in tunnel {
            if place.is_water() {
                map.push_str(&"~~~~".on_cyan().to_string());
                map.push(' ');
            } else {
                map.push_str("==== ");
            }
        }
        map.push('\n');
    }
    map.push_str(&format!("     {ruler}\n"));
    map
}

/// `B` plus the count when more than one, blank when empty
fn bee_cell(count: usize) -> String {
    match count {
        0 => "  ".to_string(),
        1 => format!("{} ", bee_icon()),
        n => format!("{}{}", bee_icon(), n),
    }
}

fn bee_icon() -> ColoredString {
    "B".black().on_yellow()
}

/// Icon for the place's ants; a guard underlines whatever it protects
fn icon_for(place: &Place) -> ColoredString {
    match (place.guard(), place.guarded()) {
        (Some(_), Some(ant)) => symbol(ant).underline(),
        (Some(_), None) => "x".underline(),
        (None, Some(ant)) => symbol(ant),
        (None, None) => " ".normal(),
    }
}

/// One-letter symbol per ant kind; a full Eater is highlighted
pub fn symbol(ant: &Ant) -> ColoredString {
    match ant.kind() {
        AntKind::Grower => "G".green(),
        AntKind::Thrower => "T".red(),
        AntKind::Eater(_) if ant.is_full() => "E".yellow().on_magenta(),
        AntKind::Eater(_) => "E".magenta(),
        AntKind::Scuba => "S".cyan(),
        AntKind::Guard => "x".underline(),
    }
}

/// Style an event line for the terminal
pub fn paint_event(event: &Event) -> ColoredString {
    let line = event.to_string();
    match event {
        Event::Stung { .. } | Event::Expired { .. } => line.red(),
        Event::Thrown { .. } | Event::Sprayed { .. } => line.green(),
        Event::Afflicted { .. } | Event::BoostGiven { .. } => line.cyan(),
        Event::FoodFound | Event::BoostFound { .. } => line.yellow(),
        Event::Eaten { .. } | Event::CoughedUp { .. } | Event::Released { .. } => line.magenta(),
        Event::Drowned { .. } => line.blue(),
        Event::Removed { .. } | Event::Invaded { .. } => line.dimmed(),
    }
}

/// Colour switched off for as long as the guard lives. Holders are
/// serialized since the override is process-wide.
#[cfg(test)]
pub(crate) struct NoColor {
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl NoColor {
    pub(crate) fn new() -> Self {
        static COLOR_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let lock = COLOR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        colored::control::set_override(false);
        Self { _lock: lock }
    }
}

#[cfg(test)]
impl Drop for NoColor {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}
