/// Terms a prospective customer tends to mention when they are serious
/// about a project.
const QUALIFYING_TERMS: [&str; 7] = [
    "budget",
    "timeline",
    "business",
    "website",
    "redesign",
    "development",
    "ecommerce",
];

const QUALIFICATION_THRESHOLD: usize = 3;

/// Decide whether a lead qualifies for a consultation offer based on what
/// they said so far. The conversation is lowercased and matched by
/// substring; a lead qualifies when at least three distinct terms appear.
/// Pure and deterministic.
pub fn qualify_lead<S: AsRef<str>>(utterances: &[S]) -> bool {
    let conversation = utterances
        .iter()
        .map(|u| u.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    QUALIFYING_TERMS
        .iter()
        .filter(|term| conversation.contains(*(*term)))
        .count()
        >= QUALIFICATION_THRESHOLD
}
