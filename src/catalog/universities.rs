use crate::domain::model::{CampusSize, CampusType, Requirements, UniversityRecord};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Reference universities shipped with the crate, in display order.
pub(crate) fn reference_universities() -> Vec<UniversityRecord> {
    vec![
        UniversityRecord {
            id: "1".to_string(),
            name: "Stanford University".to_string(),
            location: "Palo Alto, California".to_string(),
            country: "United States".to_string(),
            ranking: 3,
            tuition_fee: 56169,
            acceptance_rate: 4.0,
            programs: strings(&[
                "Computer Science",
                "Engineering",
                "Business",
                "Medicine",
                "Law",
            ]),
            requirements: Requirements {
                gpa: 3.9,
                ielts: 7.0,
                toefl: 100,
                sat: Some(1520),
            },
            features: strings(&[
                "Silicon Valley Location",
                "Top Research",
                "Alumni Network",
                "Innovation Hub",
            ]),
            description: "Stanford University is a prestigious private research university known for its academic excellence and innovation in technology.".to_string(),
            scholarships: true,
            campus_type: Some(CampusType::Suburban),
            size: Some(CampusSize::Large),
        },
        UniversityRecord {
            id: "2".to_string(),
            name: "University of Oxford".to_string(),
            location: "Oxford".to_string(),
            country: "United Kingdom".to_string(),
            ranking: 2,
            tuition_fee: 47000,
            acceptance_rate: 17.0,
            programs: strings(&[
                "Liberal Arts",
                "Sciences",
                "Engineering",
                "Medicine",
                "Philosophy",
            ]),
            requirements: Requirements {
                gpa: 3.8,
                ielts: 7.5,
                toefl: 110,
                sat: None,
            },
            features: strings(&[
                "Historic Institution",
                "Tutorial System",
                "World-Class Faculty",
                "Research Excellence",
            ]),
            description: "The University of Oxford is one of the oldest universities in the world, renowned for its academic tradition and excellence.".to_string(),
            scholarships: true,
            campus_type: Some(CampusType::Urban),
            size: Some(CampusSize::Large),
        },
        UniversityRecord {
            id: "3".to_string(),
            name: "University of Toronto".to_string(),
            location: "Toronto, Ontario".to_string(),
            country: "Canada".to_string(),
            ranking: 25,
            tuition_fee: 35000,
            acceptance_rate: 43.0,
            programs: strings(&[
                "Engineering",
                "Medicine",
                "Business",
                "Computer Science",
                "Arts",
            ]),
            requirements: Requirements {
                gpa: 3.5,
                ielts: 6.5,
                toefl: 89,
                sat: None,
            },
            features: strings(&[
                "Diverse Community",
                "Research Opportunities",
                "City Campus",
                "Strong Alumni",
            ]),
            description: "The University of Toronto is a public research university and one of the most prestigious universities in Canada.".to_string(),
            scholarships: true,
            campus_type: Some(CampusType::Urban),
            size: Some(CampusSize::Large),
        },
        UniversityRecord {
            id: "4".to_string(),
            name: "University of Melbourne".to_string(),
            location: "Melbourne, Victoria".to_string(),
            country: "Australia".to_string(),
            ranking: 33,
            tuition_fee: 32000,
            acceptance_rate: 70.0,
            programs: strings(&[
                "Business",
                "Engineering",
                "Medicine",
                "Arts",
                "Science",
            ]),
            requirements: Requirements {
                gpa: 3.3,
                ielts: 6.5,
                toefl: 79,
                sat: None,
            },
            features: strings(&[
                "Vibrant City",
                "Research Excellence",
                "International Community",
                "Industry Connections",
            ]),
            description: "The University of Melbourne is a public research university located in Melbourne, Australia, known for its strong academic programs.".to_string(),
            scholarships: true,
            campus_type: Some(CampusType::Urban),
            size: Some(CampusSize::Large),
        },
        UniversityRecord {
            id: "5".to_string(),
            name: "ETH Zurich".to_string(),
            location: "Zurich".to_string(),
            country: "Switzerland".to_string(),
            ranking: 7,
            tuition_fee: 1500,
            acceptance_rate: 8.0,
            programs: strings(&[
                "Engineering",
                "Computer Science",
                "Natural Sciences",
                "Mathematics",
                "Architecture",
            ]),
            requirements: Requirements {
                gpa: 3.7,
                ielts: 7.0,
                toefl: 100,
                sat: None,
            },
            features: strings(&[
                "Low Tuition",
                "Research Excellence",
                "Innovation Focus",
                "Mountain Setting",
            ]),
            description: "ETH Zurich is a public research university specializing in science, technology, engineering and mathematics.".to_string(),
            scholarships: false,
            campus_type: Some(CampusType::Urban),
            size: Some(CampusSize::Medium),
        },
        UniversityRecord {
            id: "6".to_string(),
            name: "National University of Singapore".to_string(),
            location: "Singapore".to_string(),
            country: "Singapore".to_string(),
            ranking: 11,
            tuition_fee: 38000,
            acceptance_rate: 5.0,
            programs: strings(&[
                "Engineering",
                "Business",
                "Computer Science",
                "Medicine",
                "Law",
            ]),
            requirements: Requirements {
                gpa: 3.6,
                ielts: 6.5,
                toefl: 85,
                sat: None,
            },
            features: strings(&[
                "Global Hub",
                "Research Excellence",
                "Modern Facilities",
                "Career Opportunities",
            ]),
            description: "NUS is the flagship university of Singapore, known for its strong programs in engineering and business.".to_string(),
            scholarships: true,
            campus_type: Some(CampusType::Urban),
            size: Some(CampusSize::Large),
        },
    ]
}
