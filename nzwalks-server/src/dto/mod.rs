//! Wire-facing DTOs and their mapping to and from repository types
//!
//! Each mapping is a plain `From`/`TryFrom` impl copying fields 1:1.
//! Request types only become drafts after required text is validated.

pub mod region;
pub mod walk;
pub mod walk_difficulty;

pub use region::{AddRegionRequest, RegionDto, UpdateRegionRequest};
pub use walk::{AddWalkRequest, UpdateWalkRequest, WalkDto};
pub use walk_difficulty::{AddWalkDifficultyRequest, UpdateWalkDifficultyRequest, WalkDifficultyDto};
