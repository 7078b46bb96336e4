//! Game systems, each applied by the engine in response to a timer or command.

pub mod countdown;
pub mod hit;
pub mod snapshot;
pub mod spawner;
