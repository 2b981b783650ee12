use tracing::{debug, trace, warn};

use crate::{Sequence, SortError, SortParams, SortStats};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Split {
    boundary: usize,
    swapped_with: usize,
}

/// Exchanges the elements at `a` and `b`.
pub fn swap<const N: usize>(seq: &mut Sequence<N>, a: usize, b: usize) -> Result<(), SortError> {
    seq.swap(a, b)
}

/// Partitions the inclusive range `[low, high]` around `seq[high]` and
/// returns the split index.
///
/// The downward scan starts at `low` and keeps walking left while the
/// elements are `<= pivot`, so it can run below `low`, down to the front of
/// the sequence. The returned index may therefore be smaller than `low`.
/// Exactly one swap is issued, even when both positions coincide.
pub fn partition<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
) -> Result<usize, SortError> {
    let mut stats = SortStats::default();
    partition_split(seq, low, high, &mut stats).map(|split| split.boundary)
}

/// Sorts the inclusive range `[low, high]` with the default depth budget.
pub fn sort<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
) -> Result<(), SortError> {
    sort_with_stats(seq, low, high).map(|_| ())
}

/// Sorts the whole sequence.
pub fn sort_all<const N: usize>(seq: &mut Sequence<N>) -> Result<SortStats, SortError> {
    match N.checked_sub(1) {
        Some(high) => sort_with_stats(seq, 0, high),
        None => Ok(SortStats::default()),
    }
}

pub fn sort_with_stats<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
) -> Result<SortStats, SortError> {
    sort_with_params(seq, low, high, SortParams::for_len(N))
}

#[tracing::instrument(level = "debug", skip(seq, params), fields(len = N, max_depth = params.max_depth))]
pub fn sort_with_params<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
    params: SortParams,
) -> Result<SortStats, SortError> {
    let mut stats = SortStats::default();
    match sort_range(seq, low, high, 1, &params, &mut stats) {
        Ok(()) => {
            debug!(
                partitions = stats.partitions,
                swaps = stats.swaps,
                max_depth = stats.max_depth,
                "sort finished"
            );
            Ok(stats)
        }
        Err(err) => {
            warn!(%err, partitions = stats.partitions, "sort aborted");
            Err(err)
        }
    }
}

fn sort_range<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
    depth: usize,
    params: &SortParams,
    stats: &mut SortStats,
) -> Result<(), SortError> {
    if low >= high {
        return Ok(());
    }
    if depth > params.max_depth {
        return Err(SortError::DepthExceeded { depth, low, high });
    }
    stats.max_depth = stats.max_depth.max(depth);

    let split = partition_split(seq, low, high, stats)?;
    let pivot_index = split.boundary;

    if let Some(left_high) = pivot_index.checked_sub(1) {
        sort_range(seq, low, left_high, depth + 1, params, stats)?;
    }

    // The split never exceeds `low + 1`, so the left call above is a no-op and
    // the only state change since entry is the partition swap.
    let right_low = pivot_index + 1;
    if right_low == low && seq.get(pivot_index)? == seq.get(split.swapped_with)? {
        return Err(SortError::Stalled { low, high });
    }

    sort_range(seq, right_low, high, depth + 1, params, stats)
}

fn partition_split<const N: usize>(
    seq: &mut Sequence<N>,
    low: usize,
    high: usize,
    stats: &mut SortStats,
) -> Result<Split, SortError> {
    if low > high {
        return Err(SortError::InvalidRange { low, high });
    }
    let pivot = seq.get(high)?;

    // `boundary` is one past the downward scan's stopping index, which keeps
    // the scan unsigned when it walks off the front of the sequence.
    let mut boundary = low + 1;
    while boundary > 0 && seq.get(boundary - 1)? <= pivot {
        boundary -= 1;
    }

    let mut j = boundary;
    while j < high && seq.get(j)? <= pivot {
        j += 1;
    }

    swap(seq, boundary, j)?;
    stats.swaps += 1;
    stats.partitions += 1;
    trace!(low, high, pivot, boundary, swapped_with = j, "partition");

    Ok(Split {
        boundary,
        swapped_with: j,
    })
}
