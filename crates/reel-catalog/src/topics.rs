//! Subtopic tables per category.

use crate::Category;

/// The authored subtopics for a category, in display order.
pub fn subtopics(category: Category) -> &'static [&'static str] {
    match category {
        Category::ComputerScience => &[
            "Artificial Intelligence",
            "Machine Learning",
            "Web Development",
            "Mobile App Development",
            "Cybersecurity",
            "Data Structures & Algorithms",
        ],
        Category::Art => &[
            "Renaissance Art",
            "Impressionism",
            "Modern Art",
            "Digital Art",
            "Sculpture",
            "Photography",
        ],
        Category::Physics => &[
            "Quantum Mechanics",
            "General Relativity",
            "Astrophysics",
            "Thermodynamics",
            "Particle Physics",
        ],
        Category::History => &[
            "Ancient Rome",
            "World War II",
            "The Silk Road",
            "The Cold War",
            "Ancient Egypt",
        ],
        Category::Biology => &[
            "Genetics",
            "Evolutionary Biology",
            "Marine Biology",
            "Botany",
            "Neuroscience",
        ],
        Category::Chemistry => &[
            "Organic Chemistry",
            "Inorganic Chemistry",
            "Physical Chemistry",
            "Biochemistry",
        ],
        Category::Literature => &[
            "Shakespearean Tragedies",
            "Modernist Poetry",
            "Post-colonial Literature",
            "Russian Classics",
        ],
        Category::Music => &[
            "Classical Music Theory",
            "Jazz Improvisation",
            "Electronic Music Production",
            "History of Rock & Roll",
        ],
        Category::Geography => &[
            "Physical Geography",
            "Human Geography",
            "Geopolitics",
            "Cartography",
        ],
        Category::Mathematics => &[
            "Calculus",
            "Linear Algebra",
            "Number Theory",
            "Topology",
        ],
    }
}
