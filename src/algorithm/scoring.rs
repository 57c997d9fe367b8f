//! Linear scoring: covered targets minus a fixed cost per placed island

/// Score of an assignment covering `covered` targets with `placed` islands
pub fn score(covered: usize, placed: usize, unit_island_cost: f64) -> f64 {
    covered as f64 - placed as f64 * unit_island_cost
}

/// Best score any extension of a partial assignment could still reach
///
/// Assumes every one of the `remaining` targets is covered at no further island cost.
/// The bound only holds if `remaining` counts every uncovered target that some later
/// placement could still cover, including targets already passed over.
pub fn optimistic_bound(score: f64, remaining: usize) -> f64 {
    score + remaining as f64
}
