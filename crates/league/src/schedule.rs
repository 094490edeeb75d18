//! Round-robin pairing generation.

/// All unordered pairings `{i, j}` with `i < j` over `n` teams, in index order.
///
/// Every team meets every other team exactly once: no self-pairings, no
/// reverse duplicates, `n * (n - 1) / 2` pairings in total.
pub fn round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    let mut pairings = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairings.push((i, j));
        }
    }
    pairings
}

/// How many matches a full round robin over `n` teams plays.
pub fn total_matches(n: usize) -> usize {
    n.saturating_sub(1) * n / 2
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
