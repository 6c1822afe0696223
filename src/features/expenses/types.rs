//! Expense records for the expense tracker. Local state only.

use crate::features::records::Keyed;

/// Fixed category list offered by the add form.
pub const CATEGORIES: [&str; 6] = [
    "Supplies",
    "Equipment",
    "Software",
    "Maintenance",
    "Training",
    "Other",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: u32,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Amount in whole rupees.
    pub amount: u32,
    pub category: String,
    pub description: String,
}

impl Keyed for Expense {
    fn key(&self) -> u32 {
        self.id
    }
}

pub fn seed() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            date: "2024-02-21".to_string(),
            amount: 5_000,
            category: "Supplies".to_string(),
            description: "Teaching materials".to_string(),
        },
        Expense {
            id: 2,
            date: "2024-02-20".to_string(),
            amount: 3_500,
            category: "Equipment".to_string(),
            description: "Projector repair".to_string(),
        },
        Expense {
            id: 3,
            date: "2024-02-19".to_string(),
            amount: 2_800,
            category: "Software".to_string(),
            description: "Learning platform subscription".to_string(),
        },
    ]
}
