//! Region DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Region, RegionDraft};
use crate::models::{require_text, ValidationError};

/// Region as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: f64,
}

/// POST /Regions body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Area")]
    pub area: f64,
    #[serde(alias = "Lat")]
    pub lat: f64,
    #[serde(alias = "Long")]
    pub long: f64,
    #[serde(alias = "Population")]
    pub population: f64,
}

/// PUT /Regions/{id} body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Area")]
    pub area: f64,
    #[serde(alias = "Lat")]
    pub lat: f64,
    #[serde(alias = "Long")]
    pub long: f64,
    #[serde(alias = "Population")]
    pub population: f64,
}

impl From<Region> for RegionDto {
    fn from(r: Region) -> Self {
        Self {
            id: r.id,
            code: r.code,
            name: r.name,
            area: r.area,
            lat: r.lat,
            long: r.long,
            population: r.population,
        }
    }
}

impl TryFrom<AddRegionRequest> for RegionDraft {
    type Error = ValidationError;

    fn try_from(req: AddRegionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            code: require_text("code", req.code)?,
            name: require_text("name", req.name)?,
            area: req.area,
            lat: req.lat,
            long: req.long,
            population: req.population,
        })
    }
}

impl TryFrom<UpdateRegionRequest> for RegionDraft {
    type Error = ValidationError;

    fn try_from(req: UpdateRegionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            code: require_text("code", req.code)?,
            name: require_text("name", req.name)?,
            area: req.area,
            lat: req.lat,
            long: req.long,
            population: req.population,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case() {
        let id = Uuid::new_v4();
        let dto = RegionDto::from(Region {
            id,
            code: "STL".into(),
            name: "Southland".into(),
            area: 31218.0,
            lat: -45.85,
            long: 168.36,
            population: 100000.0,
        });

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": id,
                "code": "STL",
                "name": "Southland",
                "area": 31218.0,
                "lat": -45.85,
                "long": 168.36,
                "population": 100000.0
            })
        );
    }

    #[test]
    fn accepts_pascal_case_fields() {
        let req: AddRegionRequest = serde_json::from_value(json!({
            "Code": "NSN",
            "Name": "Nelson",
            "Area": 8.0,
            "Lat": -41.2,
            "Long": 173.3,
            "Population": 50000
        }))
        .unwrap();

        let draft = RegionDraft::try_from(req).unwrap();
        assert_eq!(draft.code, "NSN");
        assert_eq!(draft.population, 50000.0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let req = UpdateRegionRequest {
            code: "TKI".into(),
            name: "  ".into(),
            area: 1.0,
            lat: 0.0,
            long: 0.0,
            population: 0.0,
        };

        assert_eq!(
            RegionDraft::try_from(req).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }
}
