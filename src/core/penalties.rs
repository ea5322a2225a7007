/// Keeps the overage ratio finite when the limit is zero
pub const PENALTY_EPSILON: f64 = 1e-6;

/// Days per week; the weekly budget is split into this many equal meals
pub const MEALS_PER_WEEK: u32 = 7;

/// Quadratic soft penalty for a value over a limit
///
/// Returns 0 when either side is unknown or the value is within the limit.
/// Otherwise returns `-strength * ((value - limit) / (limit + ε))²`, which is
/// small for marginal overages and grows without bound for large ones.
///
/// # Arguments
/// * `value` - Observed value (minutes, cents, ...)
/// * `limit` - Ceiling the value should stay under
/// * `strength` - Scale of the penalty
#[inline]
pub fn soft_penalty_over(value: Option<u32>, limit: Option<u32>, strength: f64) -> f64 {
    let (value, limit) = match (value, limit) {
        (Some(v), Some(l)) => (v, l),
        _ => return 0.0,
    };

    if value <= limit {
        return 0.0;
    }

    let overage = f64::from(value - limit) / (f64::from(limit) + PENALTY_EPSILON);
    -strength * overage.powi(2)
}

/// Per-meal share of a weekly budget
///
/// A missing or zero weekly budget means "no budget".
#[inline]
pub fn per_meal_budget(weekly_budget_cents: Option<u32>) -> Option<u32> {
    weekly_budget_cents
        .filter(|&budget| budget > 0)
        .map(|budget| budget / MEALS_PER_WEEK)
}
