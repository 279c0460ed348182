//! services/api/src/seed.rs
//!
//! The fixed seed catalog the service starts from. Nothing outside this
//! module depends on where spots originate, only on the spot schema.

use study_spots_core::domain::{CrowdLevel, NoiseLevel, Review, Spot, SpotType};
use uuid::Uuid;

fn review(user_name: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id: Uuid::new_v4(),
        user_id: format!("seed-{}", user_name.to_lowercase().replace(' ', "-")),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

/// Eight spots spanning every spot type, noise level, and crowd level.
pub fn seed_spots() -> Vec<Spot> {
    vec![
        Spot {
            id: "1".to_string(),
            name: "Central Library".to_string(),
            spot_type: SpotType::Library,
            description: "Four floors of silent stacks and individual study carrels. \
                          The top floor has the best natural light on campus."
                .to_string(),
            image: "https://picsum.photos/seed/central-library/800/600".to_string(),
            noise_level: NoiseLevel::Quiet,
            crowd_level: CrowdLevel::Medium,
            last_updated: None,
            has_outlets: true,
            has_food: false,
            has_wifi: true,
            rating: 4.7,
            reviews: vec![
                review(
                    "Maya R.",
                    5,
                    "The carrels on the fourth floor are perfect for exam week.",
                    "April 12, 2026",
                ),
                review(
                    "Daniel K.",
                    4,
                    "Quiet as promised, but outlets near the windows fill up fast.",
                    "March 28, 2026",
                ),
            ],
            location: "Main Quad, Building A".to_string(),
        },
        Spot {
            id: "2".to_string(),
            name: "The Daily Grind".to_string(),
            spot_type: SpotType::Cafe,
            description: "The busiest coffee shop on campus. Steady background hum, \
                          big communal tables, and food until late."
                .to_string(),
            image: "https://picsum.photos/seed/daily-grind/800/600".to_string(),
            noise_level: NoiseLevel::Moderate,
            crowd_level: CrowdLevel::High,
            last_updated: None,
            has_outlets: true,
            has_food: true,
            has_wifi: true,
            rating: 4.2,
            reviews: vec![review(
                "Priya S.",
                4,
                "Great espresso and the wifi actually holds up at peak hours.",
                "April 3, 2026",
            )],
            location: "Student Union, Ground Floor".to_string(),
        },
        Spot {
            id: "3".to_string(),
            name: "Sculpture Garden".to_string(),
            spot_type: SpotType::Outdoor,
            description: "Shaded benches among the art installations. No power, no \
                          distractions, just birdsong."
                .to_string(),
            image: "https://picsum.photos/seed/sculpture-garden/800/600".to_string(),
            noise_level: NoiseLevel::Quiet,
            crowd_level: CrowdLevel::Low,
            last_updated: None,
            has_outlets: false,
            has_food: false,
            has_wifi: false,
            rating: 4.5,
            reviews: Vec::new(),
            location: "Behind the Arts Center".to_string(),
        },
        Spot {
            id: "4".to_string(),
            name: "Engineering Commons".to_string(),
            spot_type: SpotType::CommonArea,
            description: "Open-plan group work area with whiteboards on every wall \
                          and a vending corner. Expect project teams arguing loudly."
                .to_string(),
            image: "https://picsum.photos/seed/engineering-commons/800/600".to_string(),
            noise_level: NoiseLevel::Loud,
            crowd_level: CrowdLevel::High,
            last_updated: None,
            has_outlets: true,
            has_food: true,
            has_wifi: true,
            rating: 3.9,
            reviews: vec![review(
                "Jonas W.",
                3,
                "Great for group work, hopeless for reading.",
                "February 19, 2026",
            )],
            location: "Engineering Building, Level 2".to_string(),
        },
        Spot {
            id: "5".to_string(),
            name: "Science Library Annex".to_string(),
            spot_type: SpotType::Library,
            description: "The overflow reading room most students forget exists. \
                          Rarely more than half full, even during finals."
                .to_string(),
            image: "https://picsum.photos/seed/science-annex/800/600".to_string(),
            noise_level: NoiseLevel::Moderate,
            crowd_level: CrowdLevel::Low,
            last_updated: None,
            has_outlets: true,
            has_food: false,
            has_wifi: true,
            rating: 4.4,
            reviews: Vec::new(),
            location: "North Campus, Lab Block C".to_string(),
        },
        Spot {
            id: "6".to_string(),
            name: "Campus Green".to_string(),
            spot_type: SpotType::Outdoor,
            description: "The big lawn in front of the clock tower. Bring a blanket; \
                          frisbees pass overhead between lectures."
                .to_string(),
            image: "https://picsum.photos/seed/campus-green/800/600".to_string(),
            noise_level: NoiseLevel::Loud,
            crowd_level: CrowdLevel::Medium,
            last_updated: None,
            has_outlets: false,
            has_food: false,
            has_wifi: true,
            rating: 4.0,
            reviews: Vec::new(),
            location: "Central Lawn".to_string(),
        },
        Spot {
            id: "7".to_string(),
            name: "Corner Beans".to_string(),
            spot_type: SpotType::Cafe,
            description: "Small independent cafe just inside the west gate. Window \
                          seats, decent pastries, and regulars who nurse one cup for hours."
                .to_string(),
            image: "https://picsum.photos/seed/corner-beans/800/600".to_string(),
            noise_level: NoiseLevel::Moderate,
            crowd_level: CrowdLevel::Medium,
            last_updated: None,
            has_outlets: false,
            has_food: true,
            has_wifi: true,
            rating: 4.1,
            reviews: Vec::new(),
            location: "West Gate".to_string(),
        },
        Spot {
            id: "8".to_string(),
            name: "Humanities Lounge".to_string(),
            spot_type: SpotType::CommonArea,
            description: "Armchairs, a kettle, and an honor-system bookshelf. \
                          Unofficially silent after 6pm."
                .to_string(),
            image: "https://picsum.photos/seed/humanities-lounge/800/600".to_string(),
            noise_level: NoiseLevel::Quiet,
            crowd_level: CrowdLevel::Low,
            last_updated: None,
            has_outlets: true,
            has_food: false,
            has_wifi: true,
            rating: 4.3,
            reviews: Vec::new(),
            location: "Humanities Hall, Third Floor".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let spots = seed_spots();
        let ids: HashSet<&str> = spots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), spots.len());
    }

    #[test]
    fn seed_spans_every_enum_value() {
        let spots = seed_spots();
        for spot_type in [
            SpotType::Library,
            SpotType::Cafe,
            SpotType::Outdoor,
            SpotType::CommonArea,
        ] {
            assert!(spots.iter().any(|s| s.spot_type == spot_type));
        }
        for noise in [NoiseLevel::Quiet, NoiseLevel::Moderate, NoiseLevel::Loud] {
            assert!(spots.iter().any(|s| s.noise_level == noise));
        }
        for crowd in [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High] {
            assert!(spots.iter().any(|s| s.crowd_level == crowd));
        }
    }
}
