//! Walk DTOs
//!
//! Reads return the walk with its region and difficulty nested; writes
//! return the flat walk.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RegionDto, WalkDifficultyDto};
use crate::db::repos::{Walk, WalkDetail, WalkDraft};
use crate::models::{require_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_difficulty: Option<WalkDifficultyDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Length")]
    pub length: f64,
    #[serde(alias = "RegionId")]
    pub region_id: Uuid,
    #[serde(alias = "WalkDifficultyId")]
    pub walk_difficulty_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Length")]
    pub length: f64,
    #[serde(alias = "RegionId")]
    pub region_id: Uuid,
    #[serde(alias = "WalkDifficultyId")]
    pub walk_difficulty_id: Uuid,
}

impl From<Walk> for WalkDto {
    fn from(w: Walk) -> Self {
        Self {
            id: w.id,
            name: w.name,
            length: w.length,
            region_id: w.region_id,
            walk_difficulty_id: w.walk_difficulty_id,
            region: None,
            walk_difficulty: None,
        }
    }
}

impl From<WalkDetail> for WalkDto {
    fn from(d: WalkDetail) -> Self {
        Self {
            region: Some(RegionDto::from(d.region)),
            walk_difficulty: Some(WalkDifficultyDto::from(d.walk_difficulty)),
            ..Self::from(d.walk)
        }
    }
}

impl TryFrom<AddWalkRequest> for WalkDraft {
    type Error = ValidationError;

    fn try_from(req: AddWalkRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", req.name)?,
            length: req.length,
            region_id: req.region_id,
            walk_difficulty_id: req.walk_difficulty_id,
        })
    }
}

impl TryFrom<UpdateWalkRequest> for WalkDraft {
    type Error = ValidationError;

    fn try_from(req: UpdateWalkRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", req.name)?,
            length: req.length,
            region_id: req.region_id,
            walk_difficulty_id: req.walk_difficulty_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{Region, WalkDifficulty};
    use serde_json::json;

    fn walk() -> Walk {
        Walk {
            id: Uuid::new_v4(),
            name: "Milford Track".into(),
            length: 53.5,
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn flat_walk_omits_relations() {
        let w = walk();
        let value = serde_json::to_value(WalkDto::from(w.clone())).unwrap();

        assert_eq!(
            value,
            json!({
                "id": w.id,
                "name": "Milford Track",
                "length": 53.5,
                "regionId": w.region_id,
                "walkDifficultyId": w.walk_difficulty_id
            })
        );
    }

    #[test]
    fn detail_nests_relations() {
        let w = walk();
        let detail = WalkDetail {
            region: Region {
                id: w.region_id,
                code: "STL".into(),
                name: "Southland".into(),
                area: 1.0,
                lat: 2.0,
                long: 3.0,
                population: 4.0,
            },
            walk_difficulty: WalkDifficulty {
                id: w.walk_difficulty_id,
                code: Uuid::new_v4(),
            },
            walk: w.clone(),
        };

        let dto = WalkDto::from(detail);
        assert_eq!(dto.id, w.id);
        assert_eq!(dto.region.as_ref().map(|r| r.id), Some(w.region_id));
        assert_eq!(
            dto.walk_difficulty.as_ref().map(|d| d.id),
            Some(w.walk_difficulty_id)
        );
    }

    #[test]
    fn accepts_pascal_case_ids() {
        let region_id = Uuid::new_v4();
        let difficulty_id = Uuid::new_v4();
        let req: AddWalkRequest = serde_json::from_value(json!({
            "Name": "Kepler Track",
            "Length": 60,
            "RegionId": region_id,
            "WalkDifficultyId": difficulty_id
        }))
        .unwrap();

        let draft = WalkDraft::try_from(req).unwrap();
        assert_eq!(draft.region_id, region_id);
        assert_eq!(draft.walk_difficulty_id, difficulty_id);
    }
}
