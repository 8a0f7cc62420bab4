use crate::config::{
    default_waves, GameConfig, Wave, DEFAULT_BEE_ARMOR, DEFAULT_BEE_DAMAGE, DEFAULT_FOOD,
    DEFAULT_MOAT_FREQUENCY, DEFAULT_TUNNELS, DEFAULT_TUNNEL_LENGTH,
};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for a game of Ants vs. Bees
#[derive(Parser, Debug)]
#[command(name = "ants_vs_bees", about = "🐜 Defend the ant queen's tunnels from the bees")]
pub struct Args {
    /// Starting food
    #[arg(short = 'f', long, default_value_t = DEFAULT_FOOD)]
    pub food: u32,

    /// Number of tunnels
    #[arg(short = 't', long, default_value_t = DEFAULT_TUNNELS)]
    pub tunnels: usize,

    /// Steps per tunnel
    #[arg(short = 'l', long, default_value_t = DEFAULT_TUNNEL_LENGTH)]
    pub length: usize,

    /// Flood every n-th step (0 = no water)
    #[arg(long, default_value_t = DEFAULT_MOAT_FREQUENCY)]
    pub moat: usize,

    /// Armor of every bee
    #[arg(long, default_value_t = DEFAULT_BEE_ARMOR)]
    pub bee_armor: i32,

    /// Sting damage of every bee
    #[arg(long, default_value_t = DEFAULT_BEE_DAMAGE)]
    pub bee_damage: i32,

    /// Bee wave as TURN:COUNT, repeatable (default: standard schedule)
    #[arg(short = 'w', long = "wave", value_name = "TURN:COUNT")]
    pub waves: Vec<Wave>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read commands from this file instead of stdin
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Suppress event logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

impl Args {
    /// Game configuration described by these arguments
    pub fn config(&self) -> GameConfig {
        let waves = if self.waves.is_empty() {
            default_waves()
        } else {
            self.waves.clone()
        };
        GameConfig {
            food: self.food,
            tunnels: self.tunnels,
            tunnel_length: self.length,
            moat_frequency: self.moat,
            bee_armor: self.bee_armor,
            bee_damage: self.bee_damage,
            waves,
            seed: self.seed,
        }
    }
}
