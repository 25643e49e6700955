/// A single multiple-choice question of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTION_COUNT: usize = 4;

/// The four questions of the Prime Day quiz, in funnel order.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "Do you know what Amazon Prime Day is?",
        options: [
            "Yes, of course! I look forward to it every year",
            "I've heard of it, but I've never used it",
            "No, what's that?",
            "I don't care about these things",
        ],
    },
    Question {
        prompt: "Have you ever bought anything on Prime Day?",
        options: [
            "Yes! And it was VERY worthwhile",
            "I bought a little something or other",
            "I just browse the prices...",
            "I've never bought anything on this date",
        ],
    },
    Question {
        prompt: "What do you like most about Amazon?",
        options: [
            "Fast delivery",
            "Low price",
            "Reliable reviews",
            "Variety of products",
        ],
    },
    Question {
        prompt: "Which of these areas would most impact your routine with a good Prime Day discount?",
        options: [
            "Kitchen items that make everyday life easier",
            "Accessories for vehicle maintenance",
            "Technical computer equipment",
            "Adventure sports articles",
        ],
    },
];
