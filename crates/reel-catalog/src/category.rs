//! Browse categories.

/// The fixed top-level browse categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    ComputerScience,
    Art,
    Physics,
    History,
    Biology,
    Chemistry,
    Literature,
    Music,
    Geography,
    Mathematics,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 10] = [
        Category::ComputerScience,
        Category::Art,
        Category::Physics,
        Category::History,
        Category::Biology,
        Category::Chemistry,
        Category::Literature,
        Category::Music,
        Category::Geography,
        Category::Mathematics,
    ];

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::Art => "Art",
            Category::Physics => "Physics",
            Category::History => "History",
            Category::Biology => "Biology",
            Category::Chemistry => "Chemistry",
            Category::Literature => "Literature",
            Category::Music => "Music",
            Category::Geography => "Geography",
            Category::Mathematics => "Mathematics",
        }
    }

    /// Icon name the host UI maps to an asset.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::ComputerScience => "desktopcomputer",
            Category::Art => "paintpalette",
            Category::Physics => "atom",
            Category::History => "scroll",
            Category::Biology => "leaf",
            Category::Chemistry => "testtube.2",
            Category::Literature => "book",
            Category::Music => "guitars",
            Category::Geography => "map",
            Category::Mathematics => "function",
        }
    }

    /// Key into the subtopic tables.
    ///
    /// Computer Science is authored under "Software"; every other category
    /// is keyed by its own label.
    pub fn topic_key(&self) -> &'static str {
        match self {
            Category::ComputerScience => "Software",
            other => other.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_icons_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in Category::ALL.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.icon(), b.icon());
            }
        }
    }

    #[test]
    fn test_topic_key_remapping() {
        assert_eq!(Category::ComputerScience.topic_key(), "Software");
        assert_eq!(Category::Physics.topic_key(), "Physics");
    }
}
