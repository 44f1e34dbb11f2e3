//! Built-in question bank.

use super::types::{Category, ContentError, Question};
use ratatui::style::Color;

/// All categories in menu order.
pub const ALL_CATEGORIES: &[Category] = &[
    // ═══════════════════════════════════════════════════════════════
    // ANIMALS
    // ═══════════════════════════════════════════════════════════════
    Category {
        id: "animals",
        name: "Wild Animals",
        description: "Creatures great and small",
        emoji: "🦁",
        color: Color::Green,
        questions: &[
            Question {
                prompt: "Which animal is known as the 'King of the Jungle'?",
                options: &["Tiger", "Lion", "Elephant", "Gorilla"],
                correct_answer: 1,
                fun_fact: Some("Lions actually live in grasslands and savannas, not jungles!"),
            },
            Question {
                prompt: "How many hearts does an octopus have?",
                options: &["1", "2", "3", "4"],
                correct_answer: 2,
                fun_fact: Some("Two hearts pump blood to the gills, one pumps it to the rest of the body."),
            },
            Question {
                prompt: "What is the only mammal capable of true flight?",
                options: &["Flying squirrel", "Sugar glider", "Bat", "Colugo"],
                correct_answer: 2,
                fun_fact: Some("Bats make up about a fifth of all mammal species."),
            },
            Question {
                prompt: "Which bird can fly backwards?",
                options: &["Hummingbird", "Sparrow", "Eagle", "Penguin"],
                correct_answer: 0,
                fun_fact: None,
            },
            Question {
                prompt: "What do you call a group of flamingos?",
                options: &["A flock", "A flamboyance", "A parade", "A blush"],
                correct_answer: 1,
                fun_fact: Some("Flamingos are pink because of the shrimp and algae they eat."),
            },
        ],
    },
    // ═══════════════════════════════════════════════════════════════
    // SCIENCE
    // ═══════════════════════════════════════════════════════════════
    Category {
        id: "science",
        name: "Science Lab",
        description: "Atoms, cells and everything between",
        emoji: "🔬",
        color: Color::Cyan,
        questions: &[
            Question {
                prompt: "What is the chemical symbol for gold?",
                options: &["Go", "Gd", "Au", "Ag"],
                correct_answer: 2,
                fun_fact: Some("'Au' comes from the Latin word 'aurum'."),
            },
            Question {
                prompt: "What gas do plants absorb from the air?",
                options: &["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
                correct_answer: 1,
                fun_fact: None,
            },
            Question {
                prompt: "How many bones are in the adult human body?",
                options: &["186", "206", "226", "256"],
                correct_answer: 1,
                fun_fact: Some("Babies are born with around 300 bones that fuse as they grow."),
            },
            Question {
                prompt: "What is the hardest natural substance?",
                options: &["Quartz", "Iron", "Diamond", "Granite"],
                correct_answer: 2,
                fun_fact: Some("Diamonds are made of carbon atoms arranged in a rigid lattice."),
            },
        ],
    },
    // ═══════════════════════════════════════════════════════════════
    // SPACE
    // ═══════════════════════════════════════════════════════════════
    Category {
        id: "space",
        name: "Outer Space",
        description: "Planets, stars and beyond",
        emoji: "🚀",
        color: Color::Magenta,
        questions: &[
            Question {
                prompt: "Which planet is known as the Red Planet?",
                options: &["Venus", "Jupiter", "Mars", "Mercury"],
                correct_answer: 2,
                fun_fact: Some("Mars looks red because of iron oxide, better known as rust."),
            },
            Question {
                prompt: "What is the largest planet in our solar system?",
                options: &["Saturn", "Jupiter", "Neptune", "Earth"],
                correct_answer: 1,
                fun_fact: Some("More than 1,300 Earths could fit inside Jupiter."),
            },
            Question {
                prompt: "How long does sunlight take to reach Earth?",
                options: &["8 seconds", "8 minutes", "8 hours", "8 days"],
                correct_answer: 1,
                fun_fact: None,
            },
            Question {
                prompt: "Who was the first person to walk on the Moon?",
                options: &["Buzz Aldrin", "Yuri Gagarin", "Neil Armstrong", "Sally Ride"],
                correct_answer: 2,
                fun_fact: Some("The footprints left in 1969 are still there, since the Moon has no wind."),
            },
        ],
    },
    // ═══════════════════════════════════════════════════════════════
    // GEOGRAPHY
    // ═══════════════════════════════════════════════════════════════
    Category {
        id: "geography",
        name: "World Tour",
        description: "Countries, rivers and capitals",
        emoji: "🌍",
        color: Color::Blue,
        questions: &[
            Question {
                prompt: "What is the capital of Australia?",
                options: &["Sydney", "Melbourne", "Canberra", "Perth"],
                correct_answer: 2,
                fun_fact: Some("Canberra was purpose-built as a compromise between Sydney and Melbourne."),
            },
            Question {
                prompt: "Which is the longest river in the world?",
                options: &["Amazon", "Nile", "Yangtze", "Mississippi"],
                correct_answer: 1,
                fun_fact: None,
            },
            Question {
                prompt: "Which country has the most islands?",
                options: &["Indonesia", "Philippines", "Sweden", "Japan"],
                correct_answer: 2,
                fun_fact: Some("Sweden has over 260,000 islands, most of them uninhabited."),
            },
        ],
    },
    // ═══════════════════════════════════════════════════════════════
    // HISTORY
    // ═══════════════════════════════════════════════════════════════
    Category {
        id: "history",
        name: "Time Travel",
        description: "Famous moments from the past",
        emoji: "🏛️",
        color: Color::Yellow,
        questions: &[
            Question {
                prompt: "Which ancient wonder still stands today?",
                options: &[
                    "Colossus of Rhodes",
                    "Great Pyramid of Giza",
                    "Hanging Gardens",
                    "Lighthouse of Alexandria",
                ],
                correct_answer: 1,
                fun_fact: Some("The Great Pyramid was the tallest man-made structure for nearly 4,000 years."),
            },
            Question {
                prompt: "In which year did the Titanic sink?",
                options: &["1905", "1912", "1918", "1923"],
                correct_answer: 1,
                fun_fact: None,
            },
            Question {
                prompt: "Who painted the Mona Lisa?",
                options: &["Michelangelo", "Raphael", "Leonardo da Vinci", "Donatello"],
                correct_answer: 2,
                fun_fact: Some("The Mona Lisa has no visible eyebrows."),
            },
        ],
    },
];

pub fn all_categories() -> &'static [Category] {
    ALL_CATEGORIES
}

/// Look up a category by id, failing fast on unknown or empty categories.
pub fn find_category(id: &str) -> Result<&'static Category, ContentError> {
    let category = ALL_CATEGORIES
        .iter()
        .find(|category| category.id == id)
        .ok_or_else(|| ContentError::CategoryNotFound(id.to_string()))?;

    if category.questions.is_empty() {
        return Err(ContentError::EmptyCategory(id.to_string()));
    }
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_category() {
        let category = find_category("animals").unwrap();
        assert_eq!(category.name, "Wild Animals");
        assert_eq!(category.question_count(), 5);
    }

    #[test]
    fn test_find_unknown_category() {
        assert_eq!(
            find_category("dinosaurs").unwrap_err(),
            ContentError::CategoryNotFound("dinosaurs".to_string())
        );
    }

    #[test]
    fn test_category_ids_are_unique() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in &ALL_CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_bank_is_well_formed() {
        for category in all_categories() {
            assert!(!category.questions.is_empty(), "{} is empty", category.id);
            for question in category.questions {
                assert!(
                    question.correct_answer < question.options.len(),
                    "bad answer index in {}: {}",
                    category.id,
                    question.prompt
                );
            }
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ContentError::CategoryNotFound("x".to_string());
        assert_eq!(err.to_string(), "category not found: x");
    }
}
