//! Walk difficulty DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{WalkDifficulty, WalkDifficultyDraft};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub code: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkDifficultyRequest {
    #[serde(alias = "Code")]
    pub code: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkDifficultyRequest {
    #[serde(alias = "Code")]
    pub code: Uuid,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(d: WalkDifficulty) -> Self {
        Self {
            id: d.id,
            code: d.code,
        }
    }
}

impl From<AddWalkDifficultyRequest> for WalkDifficultyDraft {
    fn from(req: AddWalkDifficultyRequest) -> Self {
        Self { code: req.code }
    }
}

impl From<UpdateWalkDifficultyRequest> for WalkDifficultyDraft {
    fn from(req: UpdateWalkDifficultyRequest) -> Self {
        Self { code: req.code }
    }
}
