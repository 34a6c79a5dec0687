//! Static program content: the five-day BIP week the diary tracks.
//!
//! Supplied to the engine at initialization and never mutated; resets
//! only touch the per-day progress state, not this content.

use crate::model::{Day, QuestionId, QuizQuestion, Session};

fn session(time: &str, title: &str, location: &str) -> Session {
    Session::new(time, title, location)
}

fn question(id: &str, prompt: &str, options: [&str; 4], correct_index: usize) -> QuizQuestion {
    QuizQuestion::new(
        QuestionId::new(id),
        prompt,
        options.iter().map(|o| (*o).to_owned()).collect(),
        correct_index,
    )
    .expect("seed question should be valid")
}

/// Builds the five seed days in their fresh state.
///
/// # Panics
///
/// Panics if the embedded content is malformed, which would be a
/// programming error caught by the seed tests.
#[must_use]
pub fn bip_program() -> Vec<Day> {
    vec![day_one(), day_two(), day_three(), day_four(), day_five()]
}

fn day_one() -> Day {
    Day::new(
        1,
        "8 December",
        "Monday",
        "The Beginning",
        vec![
            session("10:30-11:45", "Fantazmat (UKW students)", "K001"),
            session(
                "11:45-13:00",
                "No Player Left Behind: Inclusive Game Design",
                "K001",
            ),
            session("13:00-14:00", "Lunch", ""),
            session("14:00", "Integration and board games", "C116/117"),
        ],
        vec![
            question(
                "q1-1",
                "What is the main goal of inclusive game design?",
                [
                    "Making games cheaper",
                    "Ensuring everyone can play regardless of ability",
                    "Reducing development time",
                    "Increasing difficulty",
                ],
                1,
            ),
            question(
                "q1-2",
                "What type of activity was planned for the afternoon?",
                [
                    "VR session",
                    "Integration and board games",
                    "Project work",
                    "Lecture",
                ],
                1,
            ),
            question(
                "q1-3",
                "What does accessibility in gaming primarily focus on?",
                [
                    "Graphics quality",
                    "Removing barriers for players with disabilities",
                    "Online multiplayer",
                    "Game pricing",
                ],
                1,
            ),
            question(
                "q1-4",
                "Why are board games useful for team integration?",
                [
                    "They are expensive",
                    "They encourage communication and collaboration",
                    "They require no interaction",
                    "They are only for children",
                ],
                1,
            ),
        ],
    )
}

fn day_two() -> Day {
    Day::new(
        2,
        "9 December",
        "Tuesday",
        "Design Quest",
        vec![
            session("10:30-13:00", "Design Leverage - Alex Polin", "K001"),
            session("13:00", "Fantazmat - LARP", "K001"),
        ],
        vec![
            question(
                "q2-1",
                "What does LARP stand for?",
                [
                    "Live Action Role Playing",
                    "Linear Action Response Program",
                    "Level Adjusted Role Program",
                    "Live Animation Rendering Process",
                ],
                0,
            ),
            question(
                "q2-2",
                "Design Leverage focuses on using design to:",
                [
                    "Cut costs only",
                    "Create meaningful impact and engagement",
                    "Speed up production",
                    "Reduce team size",
                ],
                1,
            ),
            question(
                "q2-3",
                "What is a key benefit of LARP in educational contexts?",
                [
                    "Passive learning",
                    "Immersive experiential learning",
                    "Solo study",
                    "Reading comprehension",
                ],
                1,
            ),
            question(
                "q2-4",
                "What element is essential for a successful LARP experience?",
                [
                    "Expensive costumes",
                    "Player engagement and narrative immersion",
                    "Large venues only",
                    "Computer graphics",
                ],
                1,
            ),
        ],
    )
}

fn day_three() -> Day {
    Day::new(
        3,
        "10 December",
        "Wednesday",
        "Asset Mastery",
        vec![
            session(
                "10:30-12:30",
                "Assets Design for game development - Mikołaj Gembiak",
                "B101A",
            ),
            session("12:30-15:00", "Vobacom", "C116/117"),
            session("15:00", "VR in games practical case study", "C116/117"),
            session("15:00", "Afternoon activity", ""),
        ],
        vec![
            question(
                "q3-1",
                "What are game assets?",
                [
                    "Only 3D models",
                    "Visual, audio, and interactive elements in a game",
                    "Marketing materials",
                    "Source code files",
                ],
                1,
            ),
            question(
                "q3-2",
                "VR stands for:",
                [
                    "Variable Reality",
                    "Virtual Reality",
                    "Visual Rendering",
                    "Verified Response",
                ],
                1,
            ),
            question(
                "q3-3",
                "What is important when designing game assets?",
                [
                    "Making them as complex as possible",
                    "Consistency, optimization, and style coherence",
                    "Using only one color",
                    "Avoiding any animation",
                ],
                1,
            ),
            question(
                "q3-4",
                "What advantage does VR offer for learning?",
                [
                    "It is always cheaper than traditional methods",
                    "It provides immersive, hands-on experiences",
                    "It requires no equipment",
                    "It only works for gaming",
                ],
                1,
            ),
        ],
    )
}

fn day_four() -> Day {
    Day::new(
        4,
        "11 December",
        "Thursday",
        "Business & Bugs",
        vec![
            session(
                "10:30-12:00",
                "Business models in games - Iosep Berikashvili",
                "C116/117",
            ),
            session("12:00-14:00", "Project preparation", "C116/117"),
            session(
                "14:00-16:00",
                "Vivid Games - \"What are bugs and how to find them\"",
                "C116/117",
            ),
            session("16:00", "Afternoon Activity", ""),
        ],
        vec![
            question(
                "q4-1",
                "What is a common game business model?",
                [
                    "Free-to-play with microtransactions",
                    "Pay per hour",
                    "Subscription to hardware",
                    "None exist",
                ],
                0,
            ),
            question(
                "q4-2",
                "What is a 'bug' in game development?",
                [
                    "A feature request",
                    "An unintended error or flaw in the software",
                    "A type of game character",
                    "A marketing term",
                ],
                1,
            ),
            question(
                "q4-3",
                "QA in game development stands for:",
                [
                    "Quick Analysis",
                    "Quality Assurance",
                    "Question & Answer",
                    "Quota Achievement",
                ],
                1,
            ),
            question(
                "q4-4",
                "Why is bug testing important before game release?",
                [
                    "It is optional and rarely done",
                    "It ensures a smooth player experience and prevents crashes",
                    "It only matters for mobile games",
                    "It increases the game price",
                ],
                1,
            ),
        ],
    )
}

fn day_five() -> Day {
    Day::new(
        5,
        "12 December",
        "Friday",
        "Final Boss",
        vec![
            session("10:30-11:30", "Topic TBA - dr Michał Mochocki", "C116/117"),
            session("11:30-12:30", "Projects presentation", "C116/117"),
            session("12:30-13:00", "Certificates awards", "C116/117"),
            session("13:00", "Lunch", "C116/117"),
        ],
        vec![
            question(
                "q5-1",
                "What is the purpose of project presentations?",
                [
                    "To waste time",
                    "To demonstrate learning and receive feedback",
                    "To compete for prizes only",
                    "To avoid discussion",
                ],
                1,
            ),
            question(
                "q5-2",
                "What makes gamification effective in education?",
                [
                    "Adding points to everything",
                    "Meaningful engagement, feedback loops, and motivation",
                    "Making everything competitive",
                    "Removing all structure",
                ],
                1,
            ),
            question(
                "q5-3",
                "A key takeaway from the BIP program is:",
                [
                    "Games have no educational value",
                    "Gamification can enhance learning when thoughtfully applied",
                    "Theory is more important than practice",
                    "Certificates are the only goal",
                ],
                1,
            ),
            question(
                "q5-4",
                "What skill is most valuable when presenting a project?",
                [
                    "Speaking as fast as possible",
                    "Clear communication and demonstrating your learning",
                    "Avoiding questions",
                    "Reading directly from slides",
                ],
                1,
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn program_has_five_fresh_days() {
        let days = bip_program();
        assert_eq!(days.len(), 5);

        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.day_number() as usize, i + 1);
            assert!(day.entries().is_empty());
            assert!(!day.is_completed());
            assert!(!day.is_quiz_completed());
            assert!(!day.completion_xp_claimed());
            assert_eq!(day.xp(), 0);
        }
    }

    #[test]
    fn every_day_has_a_four_question_quiz() {
        for day in bip_program() {
            assert_eq!(day.quiz().len(), 4, "day {}", day.day_number());
            assert!(!day.sessions().is_empty());
        }
    }

    #[test]
    fn question_ids_are_unique_across_the_program() {
        let days = bip_program();
        let ids: HashSet<_> = days
            .iter()
            .flat_map(Day::quiz)
            .map(|q| q.id().as_str().to_owned())
            .collect();
        let total: usize = days.iter().map(|d| d.quiz().len()).sum();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn quest_labels_match_the_week() {
        let labels: Vec<_> = bip_program()
            .iter()
            .map(|d| d.quest_label().to_owned())
            .collect();
        assert_eq!(
            labels,
            [
                "The Beginning",
                "Design Quest",
                "Asset Mastery",
                "Business & Bugs",
                "Final Boss"
            ]
        );
    }
}
