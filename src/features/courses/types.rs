//! Course records. These are the only collection with a persistence
//! endpoint, so the shape matches the course API's JSON contract.

use crate::features::records::Keyed;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price in whole rupees.
    pub price: u32,
    pub image_url: String,
    pub curriculum: Vec<String>,
}

impl Keyed for Course {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Starting list shown before the remote list loads (and kept when the
/// course API is unreachable).
pub fn seed() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            name: "React Masterclass".to_string(),
            description: "Complete React course from basics to advanced".to_string(),
            price: 14_999,
            image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee".to_string(),
            curriculum: vec![
                "React Basics".to_string(),
                "Hooks".to_string(),
                "State Management".to_string(),
                "Advanced Patterns".to_string(),
            ],
        },
        Course {
            id: 2,
            name: "Advanced JavaScript".to_string(),
            description: "Deep dive into JavaScript concepts".to_string(),
            price: 12_499,
            image_url: "https://images.unsplash.com/photo-1627398242454-45a1465c2479".to_string(),
            curriculum: vec![
                "ES6+".to_string(),
                "Promises".to_string(),
                "Async/Await".to_string(),
                "Design Patterns".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_camel_case() {
        let course = Course {
            id: 7,
            name: "Rust".to_string(),
            description: "Systems programming".to_string(),
            price: 9_999,
            image_url: "https://example.com/rust.png".to_string(),
            curriculum: vec!["Ownership".to_string()],
        };

        let json = serde_json::to_string(&course).expect("serialize");
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("image_url"));

        let back: Course = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, course);
    }

    #[test]
    fn seed_ids_are_unique() {
        let courses = seed();
        let mut ids: Vec<u32> = courses.iter().map(|course| course.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), courses.len());
    }
}
