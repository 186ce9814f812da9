//! Top-down merge sort.

/// Merge sort. Stable: ties are taken from the left run.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mut scratch = items.to_vec();
    split(&mut scratch, items);
}

/// Sort `target` using `source` (holding the same elements) as scratch.
///
/// Runs alternate roles at each level so each element is copied once per
/// level.
fn split<T: Ord + Clone>(source: &mut [T], target: &mut [T]) {
    let len = target.len();
    if len <= 1 {
        return;
    }
    let middle = len / 2;
    {
        let (source_left, source_right) = source.split_at_mut(middle);
        let (target_left, target_right) = target.split_at_mut(middle);
        split(target_left, source_left);
        split(target_right, source_right);
    }
    merge(&source[..middle], &source[middle..], target);
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
