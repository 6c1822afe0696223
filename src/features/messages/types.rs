//! Student enquiry messages shown in the inbox. Local state only.

use crate::features::records::Keyed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnquiryMessage {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    /// ISO timestamp of receipt.
    pub date: String,
    pub is_read: bool,
}

impl EnquiryMessage {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match against sender name, email, and body.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.full_name().to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.message.to_lowercase().contains(&query)
    }
}

impl Keyed for EnquiryMessage {
    fn key(&self) -> u32 {
        self.id
    }
}

pub fn seed() -> Vec<EnquiryMessage> {
    vec![
        EnquiryMessage {
            id: 1,
            first_name: "Rajesh".to_string(),
            last_name: "Kumar".to_string(),
            email: "rajesh.kumar@example.com".to_string(),
            message: "I'm interested in the Python course. Can you provide more details about \
                      the curriculum and duration?"
                .to_string(),
            date: "2023-07-15T10:30:00".to_string(),
            is_read: true,
        },
        EnquiryMessage {
            id: 2,
            first_name: "Aisha".to_string(),
            last_name: "Patel".to_string(),
            email: "aisha.patel@example.com".to_string(),
            message: "I'm having trouble accessing the course materials. I purchased the Web \
                      Development course last week but can't access the videos."
                .to_string(),
            date: "2023-07-18T14:45:00".to_string(),
            is_read: false,
        },
        EnquiryMessage {
            id: 3,
            first_name: "Sanjay".to_string(),
            last_name: "Gupta".to_string(),
            email: "sanjay.gupta@example.com".to_string(),
            message: "I wanted to inquire about your corporate training options. We have a team \
                      of 15 developers who need upskilling in React and Node.js."
                .to_string(),
            date: "2023-07-19T09:15:00".to_string(),
            is_read: false,
        },
        EnquiryMessage {
            id: 4,
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            message: "I completed the Data Science course and it was excellent! I'm wondering if \
                      you offer any advanced courses on machine learning or AI?"
                .to_string(),
            date: "2023-07-20T11:20:00".to_string(),
            is_read: true,
        },
        EnquiryMessage {
            id: 5,
            first_name: "Vikram".to_string(),
            last_name: "Singh".to_string(),
            email: "vikram.singh@example.com".to_string(),
            message: "Do you offer any discounts for students? I'm currently pursuing my \
                      Bachelor's in Computer Science and am interested in your cybersecurity \
                      course."
                .to_string(),
            date: "2023-07-21T16:05:00".to_string(),
            is_read: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_searches_name_email_and_body() {
        let message = &seed()[0];
        assert!(message.matches("rajesh"));
        assert!(message.matches("KUMAR@example"));
        assert!(message.matches("python course"));
        assert!(!message.matches("cybersecurity"));
    }

    #[test]
    fn empty_query_matches_everything() {
        for message in seed() {
            assert!(message.matches(""));
            assert!(message.matches("   "));
        }
    }
}
