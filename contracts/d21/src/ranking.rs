use soroban_sdk::{Env, Vec};

use crate::types::Subject;

/// Orders subjects by tally, highest first. Subjects with equal tallies keep
/// their relative input order.
///
/// Bottom-up merge sort over host vectors.
pub fn rank(env: &Env, subjects: Vec<Subject>) -> Vec<Subject> {
    let len = subjects.len();
    let mut src = subjects;
    let mut width: u32 = 1;

    while width < len {
        let mut dst = Vec::new(env);
        let mut lo: u32 = 0;

        while lo < len {
            let mid = lo.saturating_add(width).min(len);
            let hi = mid.saturating_add(width).min(len);
            merge_runs(&src, &mut dst, lo, mid, hi);
            lo = hi;
        }

        src = dst;
        width = width.saturating_mul(2);
    }

    src
}

/// Appends the merge of `src[lo..mid]` and `src[mid..hi]` to `dst`.
fn merge_runs(src: &Vec<Subject>, dst: &mut Vec<Subject>, lo: u32, mid: u32, hi: u32) {
    let (mut i, mut j) = (lo, mid);

    while i < mid && j < hi {
        let left = src.get_unchecked(i);
        let right = src.get_unchecked(j);
        // Strictly greater only, so ties resolve to the left run.
        if right.tally > left.tally {
            dst.push_back(right);
            j += 1;
        } else {
            dst.push_back(left);
            i += 1;
        }
    }
    while i < mid {
        dst.push_back(src.get_unchecked(i));
        i += 1;
    }
    while j < hi {
        dst.push_back(src.get_unchecked(j));
        j += 1;
    }
}
