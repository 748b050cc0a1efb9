use super::*;
use crate::UnsortedError;
use alloc::{vec, vec::Vec};

fn odds() -> impl Iterator<Item = i64> + Clone {
    (1..).step_by(2)
}
fn evens() -> impl Iterator<Item = i64> + Clone {
    (2..).step_by(2)
}

#[test]
fn infinite_sources() {
    let merged: Vec<_> = merge_sorted(odds, evens).take(6).collect();
    assert_eq!(merged, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn finite_and_infinite_sources() {
    let merged: Vec<_> = merge_sorted(|| vec![0], evens).take(4).collect();
    assert_eq!(merged, [0, 2, 4, 6]);

    let merged: Vec<_> = merge_sorted(odds, || vec![-1]).take(3).collect();
    assert_eq!(merged, [-1, 1, 3]);
}

#[test]
fn finite_sources_are_fully_drained() {
    let merged: Vec<_> = merge_sorted(|| vec![1, 5, 9, 10, 11], || vec![2, 3]).collect();
    assert_eq!(merged, [1, 2, 3, 5, 9, 10, 11]);

    let merged: Vec<u8> = merge_sorted(Vec::new, || vec![7, 8]).collect();
    assert_eq!(merged, [7, 8]);

    let merged: Vec<u8> = merge_sorted(Vec::new, Vec::new).collect();
    assert!(merged.is_empty());
}

#[test]
fn duplicates_are_preserved() {
    let merged: Vec<_> = merge_sorted(|| vec![1, 2, 2, 3], || vec![2, 3, 3]).collect();
    assert_eq!(merged, [1, 2, 2, 2, 3, 3, 3]);
}

#[test]
fn ties_go_to_the_second_source() {
    // Tag every element with its source to observe which one wins a tie.
    let first = || vec![(1, 'a'), (2, 'a')];
    let second = || vec![(1, 'b'), (2, 'b')];
    let merged: Vec<_> = merge_sorted_by(first, second, |x, y| x.0 < y.0).collect();
    assert_eq!(merged, [(1, 'b'), (1, 'a'), (2, 'b'), (2, 'a')]);
}

#[test]
fn factories_can_be_reused() {
    let first: Vec<_> = merge_sorted(&odds, &evens).take(4).collect();
    let second: Vec<_> = merge_sorted(&odds, &evens).take(4).collect();
    assert_eq!(first, [1, 2, 3, 4]);
    assert_eq!(first, second);
}

#[test]
fn custom_ordering() {
    let descending = |a: &i64, b: &i64| a > b;
    let merged: Vec<_> = MergeSorted::new_by(vec![10, 4, 1], vec![7, 4], descending).collect();
    assert_eq!(merged, [10, 7, 4, 4, 1]);
}

#[test]
fn exhausted_sources_are_not_polled_again() {
    // A source which would restart after returning `None` if it were polled again.
    let mut calls = 0;
    let flaky = core::iter::from_fn(move || {
        calls += 1;
        if calls == 1 { Some(5) } else if calls == 2 { None } else { Some(0) }
    });
    let merged: Vec<_> = MergeSorted::new(flaky, vec![1, 6, 7]).collect();
    assert_eq!(merged, [1, 5, 6, 7]);
}

#[test]
fn size_hint_combines_sources() {
    let merged = MergeSorted::new(vec![1, 2, 3], vec![4, 5]);
    assert_eq!(merged.size_hint(), (5, Some(5)));
    let merged = MergeSorted::new(odds(), vec![4, 5]);
    assert_eq!(merged.size_hint().1, None);
}

#[test]
fn clones_resume_independently() {
    let mut merged = merge_sorted(odds, evens);
    merged.nth(2);
    let copy = merged.clone();
    assert_eq!(merged.take(3).collect::<Vec<_>>(), [4, 5, 6]);
    assert_eq!(copy.take(3).collect::<Vec<_>>(), [4, 5, 6]);
}

#[test]
fn checked_merge_of_sorted_sources() {
    let merged: Result<Vec<_>, _> = MergeSorted::new(vec![1, 3, 5], vec![2, 2, 4])
        .checked()
        .collect();
    assert_eq!(merged, Ok(vec![1, 2, 2, 3, 4, 5]));
}

#[test]
fn checked_merge_reports_unsorted_source() {
    let mut merged = MergeSorted::new(vec![1, 2], vec![3, 9, 4, 10]).checked();
    let sorted_prefix: Vec<_> = merged.by_ref().take(4).collect();
    assert_eq!(sorted_prefix, [Ok(1), Ok(2), Ok(3), Ok(9)]);
    assert_eq!(
        merged.next(),
        Some(Err(UnsortedError {
            origin: Source::Second,
            index: 2,
        })),
    );
    assert_eq!(merged.next(), None);
    assert_eq!(merged.size_hint(), (0, Some(0)));
}

#[test]
fn checked_merge_of_infinite_sources() {
    let merged: Vec<_> = merge_sorted(odds, evens)
        .checked()
        .take(5)
        .collect::<Result<_, _>>()
        .expect("both sources are sorted");
    assert_eq!(merged, [1, 2, 3, 4, 5]);
}

#[test]
fn source_display() {
    let error = UnsortedError {
        origin: Source::First,
        index: 7,
    };
    assert_eq!(
        alloc::string::ToString::to_string(&error),
        "first merge source is not sorted: element 7 is less than its predecessor",
    );
    assert_eq!(alloc::format!("{:>7}", Source::Second), " second");
}

fn assert_send_sync<T: Send + Sync>(_: &T) {}

#[test]
fn merges_are_send_and_sync() {
    let merge = merge_sorted(odds, evens);
    assert_send_sync(&merge);
    assert_send_sync(&merge_sorted_by(|| vec![3, 2], || vec![1], |a: &i32, b: &i32| a > b));
    assert_send_sync(&merge.checked());
}
