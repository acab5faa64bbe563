//! Deterministic heuristic classifier used when the remote path fails.
//!
//! Pattern-matches the normalized responses against three keyword buckets
//! (business, technology, social) plus an entrepreneurial-signal check, and
//! maps the winning bucket to a fixed recommendation with hand-authored
//! explanations. Pure and total: same input, same output, no I/O.

use std::collections::BTreeMap;

use cs_protocol::{Explanations, FormattedResponse, RecommendationCore};

/// A keyword bucket: a response credits it when any selection contains any
/// marker (case-insensitive).
struct Bucket {
    name: &'static str,
    markers: &'static [&'static str],
}

const BUSINESS: Bucket = Bucket {
    name: "business",
    markers: &[
        "business",
        "entrepreneur",
        "leadership",
        "commerce",
        "finance",
        "sales",
    ],
};

const TECHNOLOGY: Bucket = Bucket {
    name: "technology",
    markers: &[
        "technology",
        "technical",
        "stem",
        "engineering",
        "digital",
        "data",
    ],
};

const SOCIAL: Bucket = Bucket {
    name: "social",
    markers: &[
        "social",
        "collaborat",
        "team",
        "helping others",
        "communication",
        "community",
    ],
};

/// How many responses must credit a bucket before it decides the outcome.
const BUCKET_THRESHOLD: usize = 3;

/// Classify the formatted responses into a structured recommendation.
pub fn classify(formatted: &[FormattedResponse]) -> RecommendationCore {
    let business_count = bucket_count(formatted, &BUSINESS);
    let tech_count = bucket_count(formatted, &TECHNOLOGY);
    let social_count = bucket_count(formatted, &SOCIAL);
    let entrepreneurial = entrepreneurial_pattern(formatted);

    tracing::debug!(
        business_count,
        tech_count,
        social_count,
        entrepreneurial,
        "heuristic bucket scan"
    );

    // First matching rule wins.
    let (primary, alternatives): (&str, [&str; 3]) =
        if entrepreneurial || business_count >= BUCKET_THRESHOLD {
            (
                "Entrepreneur",
                [
                    "Business Development Manager",
                    "Sales Director",
                    "Marketing Manager",
                ],
            )
        } else if tech_count >= BUCKET_THRESHOLD {
            (
                "Technology Manager",
                [
                    "Product Manager",
                    "Technical Project Manager",
                    "Digital Strategist",
                ],
            )
        } else if social_count >= BUCKET_THRESHOLD {
            (
                "Team Leader",
                [
                    "HR Manager",
                    "Community Manager",
                    "Public Relations Specialist",
                ],
            )
        } else {
            (
                "Career Counselor",
                ["Data Analyst", "Project Manager", "UX Designer"],
            )
        };

    let alternative_careers: Vec<String> = alternatives.iter().map(|s| s.to_string()).collect();
    let alternative_explanations: BTreeMap<String, String> = alternatives
        .iter()
        .map(|career| (career.to_string(), explanation_for(career).to_string()))
        .collect();

    RecommendationCore {
        primary_career: primary.into(),
        alternative_careers,
        explanations: Explanations {
            primary_career: explanation_for(primary).into(),
            alternative_careers: alternative_explanations,
        },
    }
}

/// Count how many responses credit `bucket` (each response at most once).
fn bucket_count(formatted: &[FormattedResponse], bucket: &Bucket) -> usize {
    let count = formatted
        .iter()
        .filter(|response| credits(response, bucket))
        .count();
    tracing::trace!(bucket = bucket.name, count, "bucket credited");
    count
}

fn credits(response: &FormattedResponse, bucket: &Bucket) -> bool {
    response.selections.iter().any(|selection| {
        let lower = selection.to_lowercase();
        bucket.markers.iter().any(|marker| lower.contains(marker))
    })
}

/// Strong entrepreneurial signal across three specific question/answer
/// pairings.
///
/// Unlike the bucket scan these are exact-substring, case-sensitive tests:
/// the risk-tolerance option spells "entrepreneurial" lowercase while the
/// work-life option is capitalized, and only those exact spellings count.
fn entrepreneurial_pattern(formatted: &[FormattedResponse]) -> bool {
    let pairing = |question_marker: &str, selection_marker: &str| {
        formatted.iter().any(|response| {
            response.question_text.contains(question_marker)
                && response
                    .selections
                    .iter()
                    .any(|selection| selection.contains(selection_marker))
        })
    };

    pairing("career decisions", "entrepreneurial")
        || pairing("impact", "Build successful")
        || pairing("work-life", "Entrepreneurial")
}

/// Closed explanation table covering every career name any branch can emit.
fn explanation_for(career: &str) -> &'static str {
    match career {
        "Entrepreneur" => {
            "Your responses show a strong appetite for risk, ownership, and building \
             things from the ground up. Entrepreneurship rewards exactly that mix of \
             drive and independence."
        }
        "Business Development Manager" => {
            "You combine commercial instinct with relationship building, which is the \
             core of finding and growing new business."
        }
        "Sales Director" => {
            "Persuasion and goal orientation stand out in your answers; leading a \
             revenue organization puts both to work every day."
        }
        "Marketing Manager" => {
            "You read people and markets well and enjoy shaping how ideas are \
             positioned and presented."
        }
        "Technology Manager" => {
            "Technical depth paired with an interest in coordinating people points \
             toward leading engineering work rather than only doing it."
        }
        "Product Manager" => {
            "You sit comfortably between technical detail and user needs, which is \
             the natural home of product work."
        }
        "Technical Project Manager" => {
            "Structured planning combined with technical fluency makes \
             delivery-focused engineering roles a strong fit."
        }
        "Digital Strategist" => {
            "You track how technology shifts markets and like turning that insight \
             into direction for others."
        }
        "Team Leader" => {
            "Collaboration and people focus run through your answers; leading a \
             close-knit team plays directly to that strength."
        }
        "HR Manager" => {
            "You care about how people grow and fit together, which is the heart of \
             people operations."
        }
        "Community Manager" => {
            "Building belonging and keeping conversations healthy matches your \
             social energy."
        }
        "Public Relations Specialist" => {
            "You communicate clearly and think about how a message lands with its \
             audience before sending it."
        }
        "Career Counselor" => {
            "Your profile is balanced across interests, and you show genuine \
             curiosity about how people find their path — a counselor's instinct."
        }
        "Data Analyst" => {
            "An analytical streak in your answers suggests you enjoy finding the \
             story hidden in information."
        }
        "Project Manager" => {
            "You break problems into manageable steps and keep work organized, the \
             core of reliable project delivery."
        }
        "UX Designer" => {
            "You combine creativity with attention to how things actually feel to \
             use."
        }
        _ => "A well-rounded match for your assessment profile.",
    }
}
