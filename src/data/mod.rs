//! Compiled-in skill board defaults.
//!
//! The fallback list is the ground truth when the remote resource is
//! unavailable; the placeholder list is provisional data for offline or
//! optimistic reconciliation. Edit these to fit your own board.

/// Default ordered fallback list of skills.
pub fn fallback_skills() -> Vec<String> {
    [
        "TypeScript",
        "JavaScript",
        "React",
        "Node.js",
        "Python",
        "Go",
        "Rust",
        "SQL",
        "Docker",
        "GraphQL",
        "HTML",
        "CSS",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Provisional list shown while remote data is pending or unreachable.
pub fn placeholder_skills() -> Vec<String> {
    ["TypeScript", "JavaScript", "React", "Python"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Skills currently in development; display-only marker.
pub fn developing_skills() -> Vec<String> {
    vec!["GraphQL".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_no_duplicates() {
        let skills = fallback_skills();
        let mut seen = std::collections::HashSet::new();
        for skill in &skills {
            assert!(seen.insert(skill), "duplicate fallback skill: {skill}");
        }
    }

    #[test]
    fn placeholder_is_subset_of_fallback() {
        let fallback = fallback_skills();
        for skill in placeholder_skills() {
            assert!(fallback.contains(&skill), "{skill} missing from fallback");
        }
    }

    #[test]
    fn developing_skills_are_known() {
        let fallback = fallback_skills();
        for skill in developing_skills() {
            assert!(fallback.contains(&skill), "{skill} missing from fallback");
        }
    }
}
