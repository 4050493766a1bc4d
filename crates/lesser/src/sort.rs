//! Index-based in-place sorting.
//!
//! These routines only see indices: `less(data, i, j)` compares, and
//! [`Sequence::swap`] moves. That is the contract a [`Less`](crate::Less)
//! predicate is built for, and it lets any [`Sequence`] be sorted without
//! `Ord` on its elements.
//!
//! - [`slice`]: introsort (median-of-three quicksort, heapsort once the
//!   recursion budget runs out, insertion sort for short ranges).
//! - [`stable`]: insertion-sorted blocks merged with a rotation-based
//!   symmetric merge. In place, O(n log² n) swaps.

use crate::Sequence;

/// Ranges at most this long are insertion sorted.
const INSERTION_THRESHOLD: usize = 12;

/// Block length for the stable sort's initial insertion pass.
const STABLE_BLOCK: usize = 20;

/// Sort `data` in place. Not stable.
pub fn slice<C, F>(data: &mut C, less: F)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    let n = data.len();
    if n < 2 {
        return;
    }
    let max_depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
    quick_sort(data, &less, 0, n, max_depth);
}

/// Sort `data` in place, keeping equal elements in their original order.
pub fn stable<C, F>(data: &mut C, less: F)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    let n = data.len();
    let mut block = STABLE_BLOCK;
    let (mut a, mut b) = (0, block);
    while b <= n {
        insertion_sort(data, &less, a, b);
        a = b;
        b += block;
    }
    insertion_sort(data, &less, a, n);

    while block < n {
        let (mut a, mut b) = (0, 2 * block);
        while b <= n {
            sym_merge(data, &less, a, a + block, b);
            a = b;
            b += 2 * block;
        }
        let m = a + block;
        if m < n {
            sym_merge(data, &less, a, m, n);
        }
        block *= 2;
    }
}

/// Whether `data` is sorted under `less`.
pub fn is_sorted<C, F>(data: &C, less: F) -> bool
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    (1..data.len()).rev().all(|i| !less(data, i, i - 1))
}

fn insertion_sort<C, F>(data: &mut C, less: &F, a: usize, b: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    for i in a + 1..b {
        let mut j = i;
        while j > a && less(data, j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn quick_sort<C, F>(data: &mut C, less: &F, mut a: usize, mut b: usize, mut max_depth: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    while b - a > INSERTION_THRESHOLD {
        if max_depth == 0 {
            heap_sort(data, less, a, b);
            return;
        }
        max_depth -= 1;
        let p = partition(data, less, a, b);
        // Recurse into the smaller side, loop on the larger.
        if p - a < b - p {
            quick_sort(data, less, a, p, max_depth);
            a = p + 1;
        } else {
            quick_sort(data, less, p + 1, b, max_depth);
            b = p;
        }
    }
    if b - a > 1 {
        insertion_sort(data, less, a, b);
    }
}

/// Order `x <= y <= z` so `y` holds the median.
fn median_of_three<C, F>(data: &mut C, less: &F, x: usize, y: usize, z: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    if less(data, y, x) {
        data.swap(y, x);
    }
    if less(data, z, y) {
        data.swap(z, y);
        if less(data, y, x) {
            data.swap(y, x);
        }
    }
}

/// Partition `[a, b)` around a median-of-three pivot; returns its final index.
fn partition<C, F>(data: &mut C, less: &F, a: usize, b: usize) -> usize
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    let m = a + (b - a) / 2;
    median_of_three(data, less, a, m, b - 1);
    data.swap(a, m);

    // Pivot stays at `a`; [a + 1, store) holds elements less than it.
    let mut store = a + 1;
    for i in a + 1..b {
        if less(data, i, a) {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(a, store - 1);
    store - 1
}

fn heap_sort<C, F>(data: &mut C, less: &F, a: usize, b: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    let first = a;
    let hi = b - a;
    for i in (0..hi / 2).rev() {
        sift_down(data, less, i, hi, first);
    }
    for i in (0..hi).rev() {
        data.swap(first, first + i);
        sift_down(data, less, 0, i, first);
    }
}

/// Restore the max-heap property below `lo` within `[0, hi)`, offset by `first`.
fn sift_down<C, F>(data: &mut C, less: &F, lo: usize, hi: usize, first: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    let mut root = lo;
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && less(data, first + child, first + child + 1) {
            child += 1;
        }
        if !less(data, first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}

/// Merge the sorted runs `[lo, split)` and `[split, hi)` in place.
///
/// Symmetric merge (Kim & Kutzner): find the cut that balances the two
/// runs, rotate the middle into place, recurse on both halves.
fn sym_merge<C, F>(data: &mut C, less: &F, lo: usize, split: usize, hi: usize)
where
    C: Sequence + ?Sized,
    F: Fn(&C, usize, usize) -> bool,
{
    // A single element on the left: binary search its slot and bubble it.
    if split - lo == 1 {
        let (mut low, mut high) = (split, hi);
        while low < high {
            let pivot = low + (high - low) / 2;
            if less(data, pivot, lo) {
                low = pivot + 1;
            } else {
                high = pivot;
            }
        }
        for k in lo..low - 1 {
            data.swap(k, k + 1);
        }
        return;
    }

    // A single element on the right: same, from the other side.
    if hi - split == 1 {
        let (mut low, mut high) = (lo, split);
        while low < high {
            let pivot = low + (high - low) / 2;
            if less(data, split, pivot) {
                high = pivot;
            } else {
                low = pivot + 1;
            }
        }
        for k in (low + 1..=split).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let mid = lo + (hi - lo) / 2;
    let total = mid + split;
    let (mut start, mut stop) = if split > mid {
        (total - hi, mid)
    } else {
        (lo, split)
    };
    let last = total - 1;
    while start < stop {
        let cut = start + (stop - start) / 2;
        if less(data, last - cut, cut) {
            stop = cut;
        } else {
            start = cut + 1;
        }
    }

    let end = total - start;
    if start < split && split < end {
        rotate(data, start, split, end);
    }
    if lo < start && start < mid {
        sym_merge(data, less, lo, start, mid);
    }
    if mid < end && end < hi {
        sym_merge(data, less, mid, end, hi);
    }
}

/// Rotate `[lo, mid)` and `[mid, hi)` past each other using block swaps.
fn rotate<C: Sequence + ?Sized>(data: &mut C, lo: usize, mid: usize, hi: usize) {
    let mut left = mid - lo;
    let mut right = hi - mid;
    while left != right {
        if left > right {
            swap_range(data, mid - left, mid, right);
            left -= right;
        } else {
            swap_range(data, mid - left, mid + right - left, left);
            right -= left;
        }
    }
    swap_range(data, mid - left, mid, left);
}

fn swap_range<C: Sequence + ?Sized>(data: &mut C, from: usize, to: usize, count: usize) {
    for i in 0..count {
        data.swap(from + i, to + i);
    }
}
