//! Quadratic comparison sorts.

/// Bubble sort. Stops early once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut end = items.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                last_swap = i;
            }
        }
        // Everything past the last swap is already in place.
        end = last_swap;
    }
}

/// Insertion sort. Stable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut smallest = i;
        for j in (i + 1)..items.len() {
            if items[j] < items[smallest] {
                smallest = j;
            }
        }
        if smallest != i {
            items.swap(i, smallest);
        }
    }
}
