//! Course reviews moderated on the content page. Local state only.

use crate::features::records::Keyed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub course_name: String,
    /// 1-5 stars.
    pub rating: u8,
    pub comment: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Awaiting moderation; approved reviews have this cleared.
    pub in_review: bool,
}

impl Review {
    /// Uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|first| first.to_ascii_uppercase())
            .collect()
    }
}

impl Keyed for Review {
    fn key(&self) -> u32 {
        self.id
    }
}

pub fn seed() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "Arjun Mehta".to_string(),
            course_name: "React Masterclass".to_string(),
            rating: 5,
            comment: "Brilliant course. The sections on hooks and state management finally made \
                      everything click for me."
                .to_string(),
            date: "2024-01-18".to_string(),
            in_review: false,
        },
        Review {
            id: 2,
            name: "Sneha Reddy".to_string(),
            course_name: "Advanced JavaScript".to_string(),
            rating: 4,
            comment: "Great depth on promises and async patterns. Would love more exercises in \
                      the design patterns module."
                .to_string(),
            date: "2024-02-02".to_string(),
            in_review: false,
        },
        Review {
            id: 3,
            name: "Karan Joshi".to_string(),
            course_name: "Advanced Python".to_string(),
            rating: 5,
            comment: "Savyasaachi is an amazing instructor. Clear explanations and real-world \
                      projects."
                .to_string(),
            date: "2024-02-11".to_string(),
            in_review: true,
        },
        Review {
            id: 4,
            name: "Meera Iyer".to_string(),
            course_name: "UI/UX Design".to_string(),
            rating: 3,
            comment: "Good content overall but the pacing in the later weeks felt rushed."
                .to_string(),
            date: "2024-02-14".to_string(),
            in_review: true,
        },
    ]
}
