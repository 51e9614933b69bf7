pub mod roster;

pub use roster::{AgentRoster, AgentRosterError};
