//! Role vocabulary shared by the tier list and the matchup lookup.
//!
//! The presentation layer speaks in labels (`Top`, `Mid`, ...), the server in
//! lane enums (`TOP`, `MIDDLE`, ...). Both directions go through [`Role::lane`]
//! and [`Lane::role`], which the compiler checks for exhaustiveness.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lane {
    Top,
    Jungle,
    Middle,
    Bottom,
    Utility,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

    pub fn label(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Bot => "Bot",
            Role::Support => "Support",
        }
    }

    pub fn lane(self) -> Lane {
        match self {
            Role::Top => Lane::Top,
            Role::Jungle => Lane::Jungle,
            Role::Mid => Lane::Middle,
            Role::Bot => Lane::Bottom,
            Role::Support => Lane::Utility,
        }
    }

    /// Case-insensitive label lookup. `Adc` is accepted as an alias of `Bot`.
    pub fn from_label(label: &str) -> Result<Role, StatsError> {
        let wanted = label.trim();
        if wanted.eq_ignore_ascii_case("adc") {
            return Ok(Role::Bot);
        }
        Role::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatsError::UnknownRole(label.to_string()))
    }
}

impl Lane {
    pub fn as_str(self) -> &'static str {
        match self {
            Lane::Top => "TOP",
            Lane::Jungle => "JUNGLE",
            Lane::Middle => "MIDDLE",
            Lane::Bottom => "BOTTOM",
            Lane::Utility => "UTILITY",
        }
    }

    pub fn role(self) -> Role {
        match self {
            Lane::Top => Role::Top,
            Lane::Jungle => Role::Jungle,
            Lane::Middle => Role::Mid,
            Lane::Bottom => Role::Bot,
            Lane::Utility => Role::Support,
        }
    }

    pub fn from_backend(value: &str) -> Option<Lane> {
        Role::ALL
            .into_iter()
            .map(Role::lane)
            .find(|lane| lane.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_label(s)
    }
}

/// Role selection of the tier list. `All` disables role filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn lane(self) -> Option<Lane> {
        match self {
            RoleFilter::All => None,
            RoleFilter::Only(role) => Some(role.lane()),
        }
    }
}

impl FromStr for RoleFilter {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(RoleFilter::All)
        } else {
            Role::from_label(s).map(RoleFilter::Only)
        }
    }
}
