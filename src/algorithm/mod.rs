/// Fixed-size cell bitsets backing occupancy and exclusion masks
pub mod bitset;
/// Linear scoring of partial and complete assignments
pub mod scoring;
/// Time-boxed backtracking search over candidate shapes
pub mod search;
/// Bounded breadth-first generation of candidate island shapes
pub mod shapes;
/// Output container for placed island groups
pub mod solution;
/// Detection of embedded tether structures inside cell sets
pub mod tether;
