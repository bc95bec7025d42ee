//! Record schemas served by the dashboard API.
//!
//! Field names on the wire are camelCase; the two floor-area-ratio fields keep
//! their upper-case acronym (`currentFAR`, `allowedFAR`).

use serde::{Deserialize, Serialize};

/// Identity assigned by the store, unique and increasing per record type.
pub type RecordId = u32;

/// A development site (one tax lot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: RecordId,
    pub name: String,
    pub block_number: i32,
    pub lot_number: i32,
    /// Built floor area ratio today
    #[serde(rename = "currentFAR")]
    pub current_far: f64,
    /// Zoning maximum; `current_far <= allowed_far` is expected but not enforced
    #[serde(rename = "allowedFAR")]
    pub allowed_far: f64,
    pub potential_units: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub zoning: String,
}

/// Fields of a site before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSite {
    pub name: String,
    pub block_number: i32,
    pub lot_number: i32,
    #[serde(rename = "currentFAR")]
    pub current_far: f64,
    #[serde(rename = "allowedFAR")]
    pub allowed_far: f64,
    pub potential_units: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub zoning: String,
}

impl NewSite {
    pub(crate) fn into_site(self, id: RecordId) -> Site {
        Site {
            id,
            name: self.name,
            block_number: self.block_number,
            lot_number: self.lot_number,
            current_far: self.current_far,
            allowed_far: self.allowed_far,
            potential_units: self.potential_units,
            latitude: self.latitude,
            longitude: self.longitude,
            zoning: self.zoning,
        }
    }
}

/// One hypothetical development configuration for a site.
///
/// `site_id` is an advisory reference: nothing checks that the site exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: RecordId,
    pub site_id: RecordId,
    pub name: String,
    pub description: String,
    pub unit_count: u32,
    /// 0-100, not validated
    pub affordable_percentage: u32,
    /// Feet
    pub building_height: f64,
    pub stories: u32,
    pub square_footage: u32,
    pub far: f64,
    /// Months
    pub construction_timeline: u32,
    /// Millions of dollars
    pub estimated_cost: f64,
    pub image_url: String,
}

/// Fields of a scenario before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScenario {
    pub site_id: RecordId,
    pub name: String,
    pub description: String,
    pub unit_count: u32,
    pub affordable_percentage: u32,
    pub building_height: f64,
    pub stories: u32,
    pub square_footage: u32,
    pub far: f64,
    pub construction_timeline: u32,
    pub estimated_cost: f64,
    pub image_url: String,
}

impl NewScenario {
    pub(crate) fn into_scenario(self, id: RecordId) -> Scenario {
        Scenario {
            id,
            site_id: self.site_id,
            name: self.name,
            description: self.description,
            unit_count: self.unit_count,
            affordable_percentage: self.affordable_percentage,
            building_height: self.building_height,
            stories: self.stories,
            square_footage: self.square_footage,
            far: self.far,
            construction_timeline: self.construction_timeline,
            estimated_cost: self.estimated_cost,
            image_url: self.image_url,
        }
    }
}

/// A dashboard user. Only the Argon2 hash of the password is kept, and it is
/// never serialized.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Credentials for a user that has not been stored yet.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_site() -> Site {
        NewSite {
            name: "Test Lot".to_string(),
            block_number: 100,
            lot_number: 7,
            current_far: 1.5,
            allowed_far: 3.0,
            potential_units: 12,
            latitude: 40.7,
            longitude: -73.9,
            zoning: "R6".to_string(),
        }
        .into_site(9)
    }

    #[test]
    fn test_site_json_field_names() {
        let value = serde_json::to_value(sample_site()).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["blockNumber"], 100);
        assert_eq!(value["lotNumber"], 7);
        assert_eq!(value["currentFAR"], 1.5);
        assert_eq!(value["allowedFAR"], 3.0);
        assert_eq!(value["potentialUnits"], 12);
        assert!(value.get("current_far").is_none());
    }

    #[test]
    fn test_scenario_json_field_names() {
        let scenario = NewScenario {
            site_id: 1,
            name: "Tower".to_string(),
            description: "Tall".to_string(),
            unit_count: 10,
            affordable_percentage: 30,
            building_height: 50.0,
            stories: 5,
            square_footage: 9000,
            far: 2.0,
            construction_timeline: 18,
            estimated_cost: 4.5,
            image_url: "/img.jpg".to_string(),
        }
        .into_scenario(3);

        let value = serde_json::to_value(&scenario).unwrap();
        for key in [
            "id",
            "siteId",
            "unitCount",
            "affordablePercentage",
            "buildingHeight",
            "squareFootage",
            "constructionTimeline",
            "estimatedCost",
            "imageUrl",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_user_hash_never_serialized_or_printed() {
        let user = User {
            id: 1,
            username: "planner".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("passwordHash"));
        assert!(!format!("{:?}", user).contains("argon2"));
    }
}
