mod engine;
mod error;
mod sequence;

pub use engine::{partition, sort, sort_all, sort_with_params, sort_with_stats, swap};
pub use error::SortError;
pub use sequence::Sequence;

/// Literal contents the binary sorts and reports on.
pub const SEED: [i32; 7] = [3, 10, 6, 12, 9, 12, 15];

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub depth_limit_factor: usize,
    pub depth_limit_slack: usize,
    pub depth_limit_cap: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    depth_limit_factor: 4,
    depth_limit_slack: 16,
    depth_limit_cap: 8192,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortParams {
    /// Deepest recursive call allowed to partition; the top-level call is depth 1.
    pub max_depth: usize,
}

impl SortParams {
    /// Depth budget for a sequence of `len` elements.
    ///
    /// Distinct inputs recurse roughly `len` deep, so the budget is capped at
    /// `TUNED_PARAMS.depth_limit_cap` to keep the call stack bounded. Longer
    /// inputs that recurse past the cap fail with
    /// [`SortError::DepthExceeded`] instead of overflowing the stack.
    pub const fn for_len(len: usize) -> Self {
        let budget = len
            .saturating_mul(TUNED_PARAMS.depth_limit_factor)
            .saturating_add(TUNED_PARAMS.depth_limit_slack);
        let max_depth = if budget < TUNED_PARAMS.depth_limit_cap {
            budget
        } else {
            TUNED_PARAMS.depth_limit_cap
        };
        Self { max_depth }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    pub partitions: usize,
    pub swaps: usize,
    pub max_depth: usize,
}

/// Sorts [`SEED`] over its full range and returns the value left in the last
/// position.
pub fn run_seeded() -> Result<i32, SortError> {
    let mut seq = Sequence::new(SEED);
    sort(&mut seq, 0, SEED.len() - 1)?;
    seq.get(SEED.len() - 1)
}
