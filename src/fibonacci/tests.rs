use super::*;
use ibig::UBig;

#[test]
fn first_terms() {
    let mut sequence = fibonacci();
    let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233];
    for term in expected.iter().copied() {
        assert_eq!(sequence.next(), Some(term));
    }
}

#[test]
fn recurrence_holds() {
    let terms: alloc::vec::Vec<u64> = fibonacci().take(60).collect();
    for window in terms.windows(3) {
        assert_eq!(window[2], window[0] + window[1]);
    }
}

#[test]
fn last_representable_u64_term() {
    // F(93) is the largest Fibonacci number which fits into a u64.
    let last = fibonacci().nth(93);
    assert_eq!(last, Some(12_200_160_415_121_876_738));
}

#[test]
fn other_numeric_types() {
    let small: alloc::vec::Vec<u16> = Fibonacci::new().take(5).collect();
    assert_eq!(small, [0, 1, 1, 2, 3]);
    let wide = Fibonacci::<u128>::new().nth(150);
    assert_eq!(wide, Some(9_969_216_677_189_303_386_214_405_760_200));
}

#[test]
fn arbitrary_precision() {
    let hundredth = Fibonacci::<UBig>::new().nth(100).expect("infinite sequence");
    let expected: UBig = "354224848179261915075".parse().expect("valid literal");
    assert_eq!(hundredth, expected);
}

#[test]
fn fresh_iterators_are_independent() {
    let mut first = fibonacci();
    first.nth(20);
    let mut second = fibonacci();
    assert_eq!(second.next(), Some(0));
    assert_eq!(first.next(), Some(10946));
}

#[test]
fn size_hint_is_unbounded() {
    assert_eq!(fibonacci().size_hint(), (usize::MAX, None));
}

#[test]
fn checked_sequence_ends_instead_of_overflowing() {
    let all: alloc::vec::Vec<u64> = checked_fibonacci().collect();
    assert_eq!(all.len(), 94);
    assert_eq!(all[93], 12_200_160_415_121_876_738);

    // F(13) = 233 is the last term which fits into a u8.
    let mut small = Fibonacci::<u8>::new().checked();
    assert_eq!(small.by_ref().last(), Some(233));
    assert_eq!(small.next(), None);
    assert_eq!(small.size_hint(), (0, Some(0)));
}

#[test]
fn checked_sequence_resumes_where_the_plain_one_stopped() {
    let mut plain = Fibonacci::<u8>::new();
    plain.nth(11);
    let rest: alloc::vec::Vec<u8> = plain.checked().collect();
    assert_eq!(rest, [144, 233]);
}

#[test]
fn sequences_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    assert_send_sync(&fibonacci());
    assert_send_sync(&checked_fibonacci());
    assert_send_sync(&Fibonacci::<UBig>::new());
    assert_send_sync(&crate::bottles_of_beer());
}
