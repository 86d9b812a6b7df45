//! Fixed vocabularies used by the resume field extractor and the heuristic analyzer.
//! Tune extraction here; the algorithms only reference these lists.

/// Tokens that identify a degree. Compared against the lower-cased token.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "b.tech", "m.tech", "bsc", "msc", "ba", "ma",
];

/// Contact-field labels that are never reported as skills.
pub const SKILL_STOPLIST: &[&str] = &["name", "email", "phone", "address"];

/// Extracted preferences containing any of these are dropped.
pub const PREFERENCE_CONTACT_WORDS: &[&str] = &["email", "phone", "address", "name"];

/// Lines containing any of these open an interests section.
pub const INTEREST_SECTION_HEADERS: &[&str] = &[
    "interests",
    "hobbies",
    "preferences",
    "personal interests",
    "areas of interest",
    "passionate about",
    "enthusiastic about",
    "activities",
    "extracurricular",
    "volunteer work",
];

/// Lines containing any of these close an interests section.
pub const COMPETING_SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "achievements",
    "professional summary",
];

/// Sentences containing any of these feed the preference fallback.
pub const INTEREST_INDICATORS: &[&str] = &[
    "passionate",
    "interested in",
    "enthusiastic",
    "love",
    "enjoy",
    "fascinated",
    "dedicated to",
    "committed to",
];

/// Bullet markers; interest lines starting with one are skipped.
pub const BULLET_PREFIXES: &[char] = &['•', '-', '*'];

pub const MAX_SKILLS: usize = 10;
pub const MAX_PREFERENCES: usize = 8;
/// Lines searched after the first "education" line when looking for study years.
pub const EDUCATION_WINDOW_LINES: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Heuristic analyzer lexicons
// ────────────────────────────────────────────────────────────────────────────

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another",
];

pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours", "he",
    "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "who",
    "whom", "whose", "which", "what",
];

pub const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "of", "off",
    "over", "under", "via", "within", "without", "across", "toward", "towards", "since", "until",
    "as", "per", "like",
];

pub const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "while", "if", "than",
    "whether", "when", "where",
];

pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

pub const COMMON_VERBS: &[&str] = &[
    "love", "enjoy", "build", "develop", "design", "lead", "manage", "create", "work",
    "learn", "explore", "volunteer", "contribute", "implement", "analyze", "analyse", "improve",
    "teach", "mentor", "play", "read", "write", "travel", "participate", "organize", "organise",
    "led", "built", "made", "ran", "won", "wrote", "taught", "seek", "seeking", "pursue",
    "pursuing", "get", "use", "help",
];

pub const ADVERBS: &[&str] = &["very", "also", "not", "currently", "always", "often", "well"];

pub const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ible", "able", "ive", "ic"];

/// Title-case words that do not start or continue a person name.
pub const NON_NAME_WORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective", "contact",
    "education", "experience", "skills", "projects", "certifications", "achievements",
    "interests", "hobbies", "references", "professional", "technical", "work", "personal",
    "university", "institute", "college", "school", "academy", "department", "faculty",
    "engineering", "science", "sciences", "technology", "computer", "data", "software",
    "bachelor", "master", "intern", "internship", "developer", "engineer", "manager",
    "present", "current", "email", "phone", "address", "linkedin", "github", "street", "road",
    "january", "february", "march", "april", "june", "july", "august", "september", "october",
    "november", "december", "machine", "learning", "deep", "artificial", "intelligence",
    "natural", "language", "processing", "vision", "analytics", "analysis", "development",
    "web", "mobile", "cloud", "computing", "security", "systems", "networks", "design",
    "research", "robotics", "finance", "marketing", "business", "management", "product",
    "full", "stack", "frontend", "backend", "open", "source",
];

/// Non-empty lines at the top of a resume where an all-caps name is accepted.
pub const HEADER_LINES: usize = 3;

/// Title-case words marking an organization name.
pub const ORGANIZATION_MARKERS: &[&str] = &[
    "university", "institute", "college", "school", "academy", "inc", "ltd", "llc", "corp",
    "corporation", "company", "labs", "technologies", "foundation",
];
