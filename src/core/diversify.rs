use crate::models::ScoredRecipe;
use crate::core::similarity::{jaccard_sets, normalize_tags};

/// Greedy MMR re-ranking over a scored pool
///
/// The first pick is the highest raw score. Every later pick maximises
/// `(1 - w) * score - w * max_similarity`, where `max_similarity` is the
/// largest tag Jaccard between the candidate and anything already picked.
/// Ties go to the candidate seen first in `pool`, so a pool sorted by score
/// with `w = 0` comes back unchanged.
///
/// # Arguments
/// * `pool` - Scored candidates, usually sorted by score descending
/// * `diversity_weight` - 0.0 is pure score order, 1.0 is pure novelty
/// * `k` - Maximum number of recipes to return
///
/// # Returns
/// Up to `k` recipes in selection order
pub fn diversify<'a>(
    pool: &[ScoredRecipe<'a>],
    diversity_weight: f64,
    k: usize,
) -> Vec<ScoredRecipe<'a>> {
    let target = k.min(pool.len());
    if target == 0 {
        return Vec::new();
    }

    let tag_sets: Vec<_> = pool.iter().map(|s| normalize_tags(&s.recipe.tags)).collect();
    let mut taken = vec![false; pool.len()];
    // Highest similarity to any selected recipe, refreshed after each pick
    let mut max_similarity = vec![0.0_f64; pool.len()];
    let mut selected = Vec::with_capacity(target);

    while selected.len() < target {
        let mut best: Option<(usize, f64)> = None;

        for (idx, candidate) in pool.iter().enumerate() {
            if taken[idx] {
                continue;
            }

            let value = if selected.is_empty() {
                candidate.score
            } else {
                (1.0 - diversity_weight) * candidate.score
                    - diversity_weight * max_similarity[idx]
            };

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((idx, value));
            }
        }

        let Some((picked, _)) = best else { break };
        taken[picked] = true;
        selected.push(pool[picked]);

        for idx in 0..pool.len() {
            if !taken[idx] {
                let sim = jaccard_sets(&tag_sets[idx], &tag_sets[picked]);
                if sim > max_similarity[idx] {
                    max_similarity[idx] = sim;
                }
            }
        }
    }

    selected
}
