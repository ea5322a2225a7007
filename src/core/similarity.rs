use std::collections::HashSet;

/// Lower-case a list of labels into a set
///
/// Tags are compared case-insensitively everywhere, so every comparison goes
/// through this normalisation first.
pub fn normalize_tags<I, S>(tags: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect()
}

/// Jaccard similarity of two already-normalised tag sets
///
/// Two empty sets have similarity 0, not 1: no information is not a match.
#[inline]
pub fn jaccard_sets(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union.max(1) as f64
}

/// Jaccard similarity of two label lists, ignoring case
///
/// # Arguments
/// * `a` - First list of labels
/// * `b` - Second list of labels
///
/// # Returns
/// `|a ∩ b| / |a ∪ b|` in the range 0.0 to 1.0
pub fn jaccard<A, B, S, T>(a: A, b: B) -> f64
where
    A: IntoIterator<Item = S>,
    B: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    jaccard_sets(&normalize_tags(a), &normalize_tags(b))
}

/// Check whether any of `labels` appears in a normalised tag set
#[inline]
pub fn has_any_tag(tags: &HashSet<String>, labels: &[String]) -> bool {
    labels.iter().any(|label| tags.contains(&label.to_lowercase()))
}
