//! Teacher records for the staff directory. Purely local state; there is no
//! persistence endpoint for this collection.

use crate::features::records::Keyed;

/// Employment status options offered by the add/edit form.
pub const EMPLOYMENT_TYPES: [&str; 3] = ["Permanent", "Contract", "Intern"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub subject: String,
    pub status: String,
    pub email: String,
    pub phone: String,
}

impl Teacher {
    /// Uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .map(|first| first.to_ascii_uppercase())
            .collect()
    }
}

impl Keyed for Teacher {
    fn key(&self) -> u32 {
        self.id
    }
}

pub fn seed() -> Vec<Teacher> {
    vec![
        Teacher {
            id: 1,
            name: "Dr. Pallavi Kamra".to_string(),
            role: "Director".to_string(),
            subject: "Teacher Training & Student Counseling".to_string(),
            status: "Permanent".to_string(),
            email: "dr.pallavi.k@neevcode.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        },
        Teacher {
            id: 2,
            name: "Savyasaachi V.".to_string(),
            role: "Lead Instructor".to_string(),
            subject: "Advanced Python".to_string(),
            status: "Permanent".to_string(),
            email: "savyasaachi.v@neevcode.com".to_string(),
            phone: "+91 98765 43211".to_string(),
        },
        Teacher {
            id: 3,
            name: "Shine Rijie".to_string(),
            role: "Design Lead".to_string(),
            subject: "UI/UX Design".to_string(),
            status: "Permanent".to_string(),
            email: "shine.r@neevcode.com".to_string(),
            phone: "+91 98765 43212".to_string(),
        },
        Teacher {
            id: 4,
            name: "Ashish Jaisawl".to_string(),
            role: "Technical Instructor".to_string(),
            subject: "Networking".to_string(),
            status: "Intern".to_string(),
            email: "ashish.j@neevcode.com".to_string(),
            phone: "+91 98765 43213".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let teacher = &seed()[0];
        assert_eq!(teacher.initials(), "DPK");
    }
}
