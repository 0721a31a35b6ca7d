//! Built-in seed data and JSON seed loading.
//!
//! The server starts from this dataset unless a seed file is given, and the
//! client uses the same dataset as its offline copy, so both sides answer
//! the same queries the same way.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use catalog_api_rs::models::Item;
use thiserror::Error;

/// Errors that can occur while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// I/O error during file read.
    #[error("failed to read seed file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of items.
    #[error("invalid seed file '{path}': {source}")]
    Json {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Two items share an id.
    #[error("duplicate item id in seed data: {id}")]
    DuplicateId { id: String },

    /// An item has a negative or non-finite price.
    #[error("invalid price {price} for item {id}")]
    InvalidPrice { id: String, price: f64 },
}

struct SeedItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: f64,
    available: bool,
    instructor: &'static str,
    duration: &'static str,
    level: &'static str,
    tags: &'static [&'static str],
    enrollment_count: u32,
    rating: f64,
}

impl From<&SeedItem> for Item {
    fn from(seed: &SeedItem) -> Self {
        Item {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            price: seed.price,
            available: seed.available,
            instructor: seed.instructor.to_string(),
            duration: seed.duration.to_string(),
            level: seed.level.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            enrollment_count: Some(seed.enrollment_count),
            rating: Some(seed.rating),
        }
    }
}

const SEED_ITEMS: &[SeedItem] = &[
    SeedItem {
        id: "1",
        name: "Introduction to Web Development",
        description: "Learn the fundamentals of HTML, CSS, and JavaScript to build responsive websites from scratch.",
        category: "Web Development",
        price: 49.99,
        available: true,
        instructor: "Dr. Sarah Johnson",
        duration: "8 weeks",
        level: "Beginner",
        tags: &["html", "css", "javascript", "web"],
        enrollment_count: 3452,
        rating: 4.7,
    },
    SeedItem {
        id: "2",
        name: "Advanced React & Redux",
        description: "Master React.js and Redux by building complex, real-world applications with advanced state management.",
        category: "Web Development",
        price: 79.99,
        available: true,
        instructor: "Michael Chen",
        duration: "10 weeks",
        level: "Advanced",
        tags: &["react", "redux", "javascript", "frontend"],
        enrollment_count: 2187,
        rating: 4.8,
    },
    SeedItem {
        id: "3",
        name: "Data Science Fundamentals",
        description: "An introduction to data science using Python, including data analysis, visualization, and basic machine learning.",
        category: "Data Science",
        price: 59.99,
        available: false,
        instructor: "Dr. Emily Rodriguez",
        duration: "12 weeks",
        level: "Intermediate",
        tags: &["python", "data analysis", "machine learning", "statistics"],
        enrollment_count: 5671,
        rating: 4.5,
    },
    SeedItem {
        id: "4",
        name: "UX/UI Design Principles",
        description: "Learn the core principles of user experience and interface design to create intuitive, user-friendly digital products.",
        category: "Design",
        price: 69.99,
        available: true,
        instructor: "Alex Thompson",
        duration: "6 weeks",
        level: "Beginner",
        tags: &["design", "user experience", "interface", "wireframing"],
        enrollment_count: 1893,
        rating: 4.6,
    },
    SeedItem {
        id: "5",
        name: "DevOps & CI/CD Pipeline Implementation",
        description: "Master the tools and practices for continuous integration and deployment in modern software development.",
        category: "DevOps",
        price: 89.99,
        available: true,
        instructor: "James Wilson",
        duration: "8 weeks",
        level: "Advanced",
        tags: &["devops", "docker", "kubernetes", "jenkins", "aws"],
        enrollment_count: 1245,
        rating: 4.9,
    },
    SeedItem {
        id: "6",
        name: "Mobile App Development with Flutter",
        description: "Build cross-platform mobile applications for iOS and Android using Google's Flutter framework.",
        category: "Mobile Development",
        price: 59.99,
        available: true,
        instructor: "Priya Patel",
        duration: "9 weeks",
        level: "Intermediate",
        tags: &["flutter", "dart", "mobile", "ios", "android"],
        enrollment_count: 2876,
        rating: 4.7,
    },
    SeedItem {
        id: "7",
        name: "Cybersecurity Essentials",
        description: "Learn fundamental security concepts and practices to protect systems and networks from common threats.",
        category: "Security",
        price: 69.99,
        available: true,
        instructor: "Robert Santiago",
        duration: "10 weeks",
        level: "Intermediate",
        tags: &["security", "network", "encryption", "threats"],
        enrollment_count: 3217,
        rating: 4.8,
    },
    SeedItem {
        id: "8",
        name: "Blockchain Development",
        description: "Comprehensive guide to blockchain technology and developing decentralized applications with Ethereum and Solidity.",
        category: "Blockchain",
        price: 99.99,
        available: false,
        instructor: "David Kim",
        duration: "12 weeks",
        level: "Advanced",
        tags: &["blockchain", "ethereum", "solidity", "web3"],
        enrollment_count: 982,
        rating: 4.4,
    },
    SeedItem {
        id: "9",
        name: "AI & Machine Learning",
        description: "In-depth exploration of artificial intelligence algorithms and machine learning models using Python and TensorFlow.",
        category: "Data Science",
        price: 99.99,
        available: true,
        instructor: "Dr. Lisa Montgomery",
        duration: "14 weeks",
        level: "Advanced",
        tags: &["ai", "machine learning", "python", "tensorflow"],
        enrollment_count: 4328,
        rating: 4.9,
    },
    SeedItem {
        id: "10",
        name: "SQL for Data Analysis",
        description: "Master SQL for effective data querying, manipulation, and analysis in business environments.",
        category: "Database",
        price: 39.99,
        available: true,
        instructor: "Thomas Jenkins",
        duration: "4 weeks",
        level: "Beginner",
        tags: &["sql", "database", "data analysis", "business"],
        enrollment_count: 5912,
        rating: 4.5,
    },
    SeedItem {
        id: "11",
        name: "Cloud Architecture on AWS",
        description: "Design, implement and manage scalable cloud infrastructure using Amazon Web Services.",
        category: "Cloud Computing",
        price: 79.99,
        available: true,
        instructor: "Maria Garcia",
        duration: "10 weeks",
        level: "Intermediate",
        tags: &["aws", "cloud", "architecture", "devops"],
        enrollment_count: 2345,
        rating: 4.7,
    },
    SeedItem {
        id: "12",
        name: "NodeJS Backend Development",
        description: "Build robust, scalable backend services and APIs using Node.js, Express, and MongoDB.",
        category: "Web Development",
        price: 59.99,
        available: true,
        instructor: "Daniel Brown",
        duration: "8 weeks",
        level: "Intermediate",
        tags: &["nodejs", "express", "mongodb", "backend"],
        enrollment_count: 3178,
        rating: 4.6,
    },
];

/// Returns the built-in catalog, in display order.
pub fn seed_items() -> Vec<Item> {
    SEED_ITEMS.iter().map(Item::from).collect()
}

/// Loads items from a JSON file containing an array of items.
///
/// # Errors
///
/// - Returns `SeedError::ReadError` if the file cannot be read.
/// - Returns `SeedError::Json` if the contents are not an array of items.
/// - Returns `SeedError::DuplicateId` or `SeedError::InvalidPrice` if the
///   items break the collection invariants.
pub fn load_seed_file(path: &Path) -> Result<Vec<Item>, SeedError> {
    let contents = fs::read_to_string(path).map_err(|e| SeedError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let items: Vec<Item> = serde_json::from_str(&contents).map_err(|e| SeedError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_items(&items)?;
    Ok(items)
}

/// Checks that ids are unique and prices are non-negative.
pub fn validate_items(items: &[Item]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(SeedError::DuplicateId {
                id: item.id.clone(),
            });
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(SeedError::InvalidPrice {
                id: item.id.clone(),
                price: item.price,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_seed_items_are_valid() {
        let items = seed_items();
        assert_eq!(items.len(), 12);
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let items = seed_items();
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.id, (index + 1).to_string());
        }
    }

    #[test]
    fn test_seed_items_have_metadata() {
        for item in seed_items() {
            assert!(!item.tags.is_empty(), "item {} has no tags", item.id);
            assert!(item.enrollment_count.is_some());
            assert!(item.rating.is_some());
        }
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&seed_items()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_seed_file(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Advanced React & Redux");
    }

    #[test]
    fn test_load_seed_file_missing() {
        let err = load_seed_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::ReadError { .. }));
    }

    #[test]
    fn test_load_seed_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Json { .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut items = seed_items();
        items[1].id = "1".to_string();

        let err = validate_items(&items).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId { ref id } if id == "1"));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut items = seed_items();
        items[0].price = -5.0;

        let err = validate_items(&items).unwrap_err();
        assert!(matches!(err, SeedError::InvalidPrice { .. }));
    }
}
