//! # agent-catalog
//!
//! Built-in agents and the table that maps registry `module`/`class` strings
//! to their constructors.
//!
//! | module                         | class                 | kind              |
//! |--------------------------------|-----------------------|-------------------|
//! | `agents.task_agent`            | `TaskAgent`           | `task`            |
//! | `agents.research_agent`        | `ResearchAgent`       | `research`        |
//! | `agents.travel_agent`          | `TravelAgent`         | `travel`          |
//! | `agents.release_quality_agent` | `ReleaseQualityAgent` | `release_quality` |

pub mod agents;
pub mod catalog;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testing;

pub use agents::{ReleaseQualityAgent, ResearchAgent, TaskAgent, TravelAgent};
pub use catalog::{Catalog, Constructor};
