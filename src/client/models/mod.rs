//! Linear domain entities
//!
//! These are the types the rest of the crate works with. They are built from
//! the raw response shapes in `client::schema` by `client::mapper`, never
//! deserialized straight off the wire. All of them serialize with camelCase
//! keys, and absent relations serialize as `null`.

mod cycle;
mod initiative;
mod issue;
mod label;
mod org;
mod project;
mod team;
mod user;
mod workflow;

pub use cycle::{Cycle, CycleSummary};
pub use initiative::Initiative;
pub use issue::Issue;
pub use label::Label;
pub use org::Organisation;
pub use project::{Project, ProjectSummary};
pub use team::Team;
pub use user::User;
pub use workflow::WorkflowState;
