//! Output models: the composite player snapshot and its season history.

pub mod season;
pub mod snapshot;

pub use season::{SeasonHistory, SeasonLabel, SeasonRecord};
pub use snapshot::{
    MatchSummary, ParticipantSummary, Performance, PlayerSnapshot, RankedEntry, RunePage,
    RuneStyle, SideRecord, SideStats, TopChampion,
};
