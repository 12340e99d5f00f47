//! Heuristic password strength estimation, independent of how a password
//! was generated. Purely structural: length plus character class diversity,
//! no dictionary or breach list lookups.

/// Ordered strength categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
            Self::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// The maximum score [`estimate_strength`] can assign: three length tiers
/// plus four character classes.
pub const MAX_SCORE: u8 = 7;

/// The outcome of analyzing one candidate password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub category: Strength,
    pub score: u8,
    /// Labels of the criteria that contributed to the score.
    pub criteria: Vec<&'static str>,
}

/// Scores `candidate` and maps the score to a category. A pure function,
/// identical input always yields an identical report. The empty string is
/// valid and lands in the lowest category.
pub fn estimate_strength(candidate: &str) -> StrengthReport {
    let mut score = 0;
    let mut criteria = Vec::new();

    let length = candidate.chars().count();
    for (threshold, label) in [
        (8, "length of 8 or more"),
        (12, "length of 12 or more"),
        (16, "length of 16 or more"),
    ] {
        if length >= threshold {
            score += 1;
            criteria.push(label);
        }
    }

    for (present, label) in [
        (
            candidate.chars().any(|c| c.is_ascii_lowercase()),
            "contains lowercase",
        ),
        (
            candidate.chars().any(|c| c.is_ascii_uppercase()),
            "contains uppercase",
        ),
        (
            candidate.chars().any(|c| c.is_ascii_digit()),
            "contains digits",
        ),
        (
            candidate.chars().any(|c| !c.is_alphanumeric()),
            "contains symbols",
        ),
    ] {
        if present {
            score += 1;
            criteria.push(label);
        }
    }

    let category = match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        5..=6 => Strength::Strong,
        _ => Strength::VeryStrong,
    };

    StrengthReport {
        category,
        score,
        criteria,
    }
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength_test;
