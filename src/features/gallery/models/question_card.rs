/// One card on the assessment landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
    /// Backend endpoints that serve the exercise; empty for client-only ones
    pub endpoints: &'static [&'static str],
}

pub const QUESTIONS: [QuestionCard; 10] = [
    QuestionCard {
        id: 1,
        title: "Roman Numerals Converter",
        description: "Convert numbers to Roman numerals using JavaScript logic",
        route: "/ques1",
        endpoints: &["POST /api/numerals/roman", "GET /api/numerals/roman/{numeral}"],
    },
    QuestionCard {
        id: 2,
        title: "Paginated Product List",
        description: "Implement pagination using dummy API without UI libraries",
        route: "/ques2",
        endpoints: &["GET /api/products"],
    },
    QuestionCard {
        id: 3,
        title: "Debounced Search",
        description: "Build a search bar with debounced API calls",
        route: "/ques3",
        endpoints: &["GET /api/products/search"],
    },
    QuestionCard {
        id: 4,
        title: "API Rate Limiting",
        description: "Implement rate limiting in Next.js API routes",
        route: "/ques4",
        endpoints: &["GET /api/limited"],
    },
    QuestionCard {
        id: 5,
        title: "NextAuth Authentication",
        description: "Role-based access control using NextAuth.js",
        route: "/ques5",
        endpoints: &[],
    },
    QuestionCard {
        id: 6,
        title: "Infinite Scroll",
        description: "Create infinite scrolling product list",
        route: "/ques6",
        endpoints: &["GET /api/products/feed"],
    },
    QuestionCard {
        id: 7,
        title: "Custom Toast System",
        description: "Build a reusable toast notification system",
        route: "/ques7",
        endpoints: &["GET /api/toasts", "POST /api/toasts", "DELETE /api/toasts/{id}"],
    },
    QuestionCard {
        id: 8,
        title: "Nested Comments",
        description: "Implement a comment section with nested replies",
        route: "/ques8",
        endpoints: &["GET /api/comments", "POST /api/comments"],
    },
    QuestionCard {
        id: 9,
        title: "Theme Toggle",
        description: "Create light/dark mode toggle with persistence",
        route: "/ques9",
        endpoints: &[],
    },
    QuestionCard {
        id: 10,
        title: "File Upload",
        description: "File upload with preview functionality",
        route: "/ques10",
        endpoints: &["POST /api/upload", "GET /api/uploads"],
    },
];
