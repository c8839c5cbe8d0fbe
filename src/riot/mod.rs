mod client;
mod endpoints;
pub mod models;
mod region;
mod resolver;
pub mod smurf;
pub mod types;

pub use client::RiotClient;
pub use models::{LiveGame, LiveGameParticipant, ParticipantRank, RankedRecord, Team};
pub use region::Platform;
pub use resolver::PlayerLookup;
