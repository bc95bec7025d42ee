//! Fixture rows loaded into every new store.
//!
//! Three Brooklyn/Queens lots and four development scenarios for the first
//! one. Figures are illustrative, not computed.

use crate::model::{NewScenario, NewSite, RecordId};

pub fn sites() -> Vec<NewSite> {
    vec![
        NewSite {
            name: "Bed-Stuy R7A Corner Lot".to_string(),
            block_number: 1847,
            lot_number: 32,
            current_far: 1.8,
            allowed_far: 4.0,
            potential_units: 48,
            latitude: 40.6872,
            longitude: -73.9418,
            zoning: "R7A".to_string(),
        },
        NewSite {
            name: "Williamsburg R6 Lot".to_string(),
            block_number: 2382,
            lot_number: 15,
            current_far: 2.1,
            allowed_far: 2.43,
            potential_units: 24,
            latitude: 40.7081,
            longitude: -73.9571,
            zoning: "R6".to_string(),
        },
        NewSite {
            name: "Long Island City Waterfront Parcel".to_string(),
            block_number: 477,
            lot_number: 7,
            current_far: 0.9,
            allowed_far: 5.6,
            potential_units: 120,
            latitude: 40.7447,
            longitude: -73.9485,
            zoning: "M1-4/R7X".to_string(),
        },
    ]
}

/// Scenarios proposed for `site_id`
pub fn scenarios(site_id: RecordId) -> Vec<NewScenario> {
    vec![
        NewScenario {
            site_id,
            name: "Maximum Density Residential".to_string(),
            description: "Builds to the full allowed FAR with a Universal Affordability \
                          Preference bonus and 25% of units at 60% AMI."
                .to_string(),
            unit_count: 48,
            affordable_percentage: 25,
            building_height: 85.0,
            stories: 8,
            square_footage: 52_000,
            far: 4.0,
            construction_timeline: 24,
            estimated_cost: 28.5,
            image_url: "/images/scenarios/maximum-density.jpg".to_string(),
        },
        NewScenario {
            site_id,
            name: "Mixed-Income Housing".to_string(),
            description: "Ground-floor retail with mixed-income apartments above; 40% of \
                          units split between 40% and 80% AMI tiers."
                .to_string(),
            unit_count: 42,
            affordable_percentage: 40,
            building_height: 75.0,
            stories: 7,
            square_footage: 46_000,
            far: 3.6,
            construction_timeline: 22,
            estimated_cost: 24.8,
            image_url: "/images/scenarios/mixed-income.jpg".to_string(),
        },
        NewScenario {
            site_id,
            name: "Passive House Design".to_string(),
            description: "Certified Passive House envelope with all-electric systems, trading \
                          some floor area for thicker walls and lower operating costs."
                .to_string(),
            unit_count: 36,
            affordable_percentage: 30,
            building_height: 65.0,
            stories: 6,
            square_footage: 40_000,
            far: 3.2,
            construction_timeline: 28,
            estimated_cost: 26.2,
            image_url: "/images/scenarios/passive-house.jpg".to_string(),
        },
        NewScenario {
            site_id,
            name: "Senior Affordable Housing".to_string(),
            description: "Fully affordable senior building under the AIRS program with \
                          community space on the ground floor."
                .to_string(),
            unit_count: 40,
            affordable_percentage: 100,
            building_height: 70.0,
            stories: 7,
            square_footage: 43_000,
            far: 3.4,
            construction_timeline: 20,
            estimated_cost: 22.1,
            image_url: "/images/scenarios/senior-affordable.jpg".to_string(),
        },
    ]
}
