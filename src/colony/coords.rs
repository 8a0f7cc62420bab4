use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Tunnel/step address written as `"tunnel,step"`, e.g. `"0,6"`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coords {
    pub tunnel: usize,
    pub step: usize,
}

impl FromStr for Coords {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidLocation(s.to_string());
        let (tunnel, step) = s.split_once(',').ok_or_else(invalid)?;
        Ok(Coords {
            tunnel: tunnel.trim().parse().map_err(|_| invalid())?,
            step: step.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.tunnel, self.step)
    }
}
