use crate::core::pairing::PairBucket;
use crate::core::PairResult;
use chrono::Duration;

/// Collapses repeated pairs within each bucket.
///
/// For every entry still carrying a positive duration, all later entries
/// for the same unordered employee pair are folded into it and zeroed out;
/// afterwards every non-positive entry is dropped. Leaves at most one entry
/// per unordered pair per project, carrying the summed overlap, at the
/// position of its first occurrence.
pub fn merge_pairs(buckets: &mut [PairBucket]) {
    for bucket in buckets.iter_mut() {
        merge_bucket(&mut bucket.pairs);
    }
}

fn merge_bucket(pairs: &mut Vec<PairResult>) {
    for first in 0..pairs.len() {
        if pairs[first].shared <= Duration::zero() {
            continue;
        }

        for second in first + 1..pairs.len() {
            if pairs[second].shared > Duration::zero()
                && pairs[second].same_employees(&pairs[first])
            {
                let consumed = pairs[second].shared;
                pairs[first].shared = pairs[first].shared + consumed;
                pairs[second].shared = Duration::zero();
            }
        }
    }

    pairs.retain(|pair| pair.shared > Duration::zero());
}
