pub mod controller;
pub mod error;
pub mod models;
pub mod roster;
pub mod store;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use controller::{AddMemberPolicy, Mutation, PersistIntent, RosterController};
pub use error::{CoreError, Result};
pub use models::capability::{AuthenticatedUser, Capability};
pub use models::member::Member;
pub use models::member_field::MemberField;
pub use models::notice::{Notice, Severity};
pub use models::seed::SEED_MEMBERS;
pub use roster::Roster;
pub use store::{
    HydrateResult, HydrateSource, RosterStore, SeedReason,
    error::{Result as StorageResult, StorageError},
    file_slot::FileSlot,
    slot::{MemorySlot, RosterSlot},
};
pub use validation::MemberValidator;
pub use view::{RosterQuery, RosterView, filter};
