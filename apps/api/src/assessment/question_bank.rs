//! Question Bank: the fixed multiple-choice catalogue for the knowledge test.
//!
//! Four categories of ten questions each. The bank is read-only content compiled
//! into the binary. Clients only ever receive [`PublicQuestion`], which is derived
//! from the same [`Question`] record the grader reads, so the two views cannot drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AssessmentError;

/// Number of questions in every category.
pub const QUESTIONS_PER_CATEGORY: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Categories and tracks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Aptitude,
    Verbal,
    ItDomain,
    NonItDomain,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Aptitude,
        Category::Verbal,
        Category::ItDomain,
        Category::NonItDomain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Aptitude => "aptitude",
            Category::Verbal => "verbal",
            Category::ItDomain => "it_domain",
            Category::NonItDomain => "non_it_domain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AssessmentError::UnknownCategory(s.to_string()))
    }
}

/// The candidate's chosen track. Decides which domain category a test sitting uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    #[default]
    It,
    NonIt,
}

impl Track {
    /// `"IT"` (any case) or `"it_domain"` selects the IT track; anything else is non-IT.
    pub fn from_domain(domain: &str) -> Self {
        match domain.trim().to_lowercase().as_str() {
            "it" | "it_domain" => Track::It,
            _ => Track::NonIt,
        }
    }

    pub fn domain_category(&self) -> Category {
        match self {
            Track::It => Category::ItDomain,
            Track::NonIt => Category::NonItDomain,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Question records
// ────────────────────────────────────────────────────────────────────────────

/// A multiple-choice item. `correct_answer` is always one of `options`, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
}

/// Answer-withheld view sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicQuestion {
    #[serde(rename = "question")]
    pub text: &'static str,
    pub options: [&'static str; 4],
}

impl Question {
    pub fn public_view(&self) -> PublicQuestion {
        PublicQuestion {
            text: self.text,
            options: self.options,
        }
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}

const fn q(text: &'static str, options: [&'static str; 4], correct_answer: &'static str) -> Question {
    Question {
        text,
        options,
        correct_answer,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Bank access
// ────────────────────────────────────────────────────────────────────────────

/// The full category set. Fixed and exhaustive.
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Full records, answer key included. Never serialize these to a client.
pub fn questions(category: Category) -> &'static [Question; QUESTIONS_PER_CATEGORY] {
    match category {
        Category::Aptitude => &APTITUDE,
        Category::Verbal => &VERBAL,
        Category::ItDomain => &IT_DOMAIN,
        Category::NonItDomain => &NON_IT_DOMAIN,
    }
}

pub fn public_questions(category: Category) -> Vec<PublicQuestion> {
    questions(category).iter().map(Question::public_view).collect()
}

/// The three categories a test sitting covers: aptitude, verbal and the track's domain.
pub fn categories_for_track(track: Track) -> [Category; 3] {
    [Category::Aptitude, Category::Verbal, track.domain_category()]
}

/// Grades selected options position-by-position against the answer key.
/// Selections past the tenth are ignored; missing ones count as wrong.
pub fn grade(category: Category, selected: &[String]) -> u8 {
    questions(category)
        .iter()
        .zip(selected)
        .filter(|(question, answer)| question.is_correct(answer))
        .count() as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Catalogue
// ────────────────────────────────────────────────────────────────────────────

static APTITUDE: [Question; QUESTIONS_PER_CATEGORY] = [
    q("A train 150m long passes a pole in 15 seconds. Speed in km/hr?", ["30", "36", "45", "50"], "36"),
    q("The average of first 50 natural numbers is?", ["25.25", "25.5", "25", "26"], "25.5"),
    q("If 20% of a = b, then b% of 20 is the same as:", ["4% of a", "5% of a", "20% of a", "None"], "4% of a"),
    q("Square root of 0.0009 is?", ["0.03", "0.003", "0.3", "0.0003"], "0.03"),
    q("Find the odd one out: 3, 5, 11, 14, 17, 21", ["14", "17", "21", "3"], "14"),
    q("100 + 50 * 2 = ?", ["300", "200", "250", "150"], "200"),
    q("HCF of 12, 18, 24 is?", ["3", "4", "6", "12"], "6"),
    q("Next number: 1, 4, 9, 16, 25, ?", ["30", "35", "36", "49"], "36"),
    q("Area of circle with radius 7 (π=22/7)?", ["154", "44", "49", "144"], "154"),
    q("Convert 0.75 to percentage.", ["7.5%", "75%", "0.75%", "750%"], "75%"),
];

static VERBAL: [Question; QUESTIONS_PER_CATEGORY] = [
    q("Synonym of 'Fragile'?", ["Strong", "Weak", "Delicate", "Flexible"], "Delicate"),
    q("Antonym of 'Gigantic'?", ["Huge", "Small", "Tiny", "Short"], "Tiny"),
    q("Correct spelling?", ["Occurrence", "Occurence", "Ocurrence", "Occurance"], "Occurrence"),
    q("Fill: She __ to the gym every day.", ["go", "going", "goes", "gone"], "goes"),
    q("A person who writes books is an:", ["Actor", "Author", "Artist", "Architect"], "Author"),
    q("Opposite of 'Arrival'?", ["Departure", "Exit", "Coming", "Stay"], "Departure"),
    q("Idiom: 'Piece of cake' means?", ["Delicious", "Very easy", "Hard work", "Something sweet"], "Very easy"),
    q("Select the verb: 'He runs fast.'", ["He", "runs", "fast", "None"], "runs"),
    q("Synonym of 'Benevolent'?", ["Cruel", "Kind", "Rich", "Smart"], "Kind"),
    q("Plural of 'Mouse'?", ["Mouses", "Mice", "Micey", "Mice-s"], "Mice"),
];

static IT_DOMAIN: [Question; QUESTIONS_PER_CATEGORY] = [
    q("Main memory of computer?", ["HDD", "RAM", "ROM", "SSD"], "RAM"),
    q(
        "HTTP stands for?",
        ["Hyper Transfer Text Protocol", "HyperText Transfer Protocol", "High Text Transfer Protocol", "None"],
        "HyperText Transfer Protocol",
    ),
    q(
        "Father of C Language?",
        ["Dennis Ritchie", "James Gosling", "Guido van Rossum", "Bjarne Stroustrup"],
        "Dennis Ritchie",
    ),
    q("Which is not a programming language?", ["Python", "HTML", "Java", "C++"], "HTML"),
    q("1 Byte equals?", ["4 bits", "8 bits", "16 bits", "32 bits"], "8 bits"),
    q("Standard port for HTTP?", ["21", "25", "80", "443"], "80"),
    q(
        "SQL stands for?",
        ["Simple Query Language", "Structured Query Language", "Sequential Query Language", "None"],
        "Structured Query Language",
    ),
    q("Extension of Python file?", [".py", ".pt", ".ph", ".python"], ".py"),
    q("Which is an Operating System?", ["Chrome", "Linux", "Word", "Oracle"], "Linux"),
    q("Data structure following LIFO?", ["Queue", "Stack", "Tree", "Array"], "Stack"),
];

static NON_IT_DOMAIN: [Question; QUESTIONS_PER_CATEGORY] = [
    q(
        "Who is often called the Father of Management?",
        ["Peter Drucker", "Henry Fayol", "F.W. Taylor", "Elon Musk"],
        "F.W. Taylor",
    ),
    q(
        "4 P's of Marketing include Product, Price, Place and?",
        ["Promotion", "People", "Process", "Profit"],
        "Promotion",
    ),
    q("SWOT analysis: 'S' stands for?", ["Safety", "Strength", "Smart", "Salary"], "Strength"),
    q(
        "Full form of HR?",
        ["Human Resources", "High Relations", "Home Room", "Heavy Recruitment"],
        "Human Resources",
    ),
    q("Which is a liability?", ["Cash", "Machinery", "Bank Loan", "Inventory"], "Bank Loan"),
    q("Process of hiring people is?", ["Selection", "Recruitment", "Orientation", "Training"], "Recruitment"),
    q(
        "CEO stands for?",
        ["Chief Executive Officer", "Chief Energy Officer", "Core Executive Officer", "None"],
        "Chief Executive Officer",
    ),
    q("A planned spending sheet is a:", ["Ledger", "Balance Sheet", "Budget", "Invoice"], "Budget"),
    q("Which is a leadership style?", ["Autocratic", "Systematic", "Mathematical", "Logical"], "Autocratic"),
    q("Exchange of goods for money is?", ["Barter", "Sales", "Purchase", "Audit"], "Sales"),
];
