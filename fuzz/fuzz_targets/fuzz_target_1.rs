#![no_main]

use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary::Arbitrary;

use fenwick::FenwickTree;

#[derive(Arbitrary, Debug)]
enum Action {
    Get(usize),
    Add(usize, i16),
    Set(usize, i16),
    RangeSum(usize, usize),
    FindStop(i32, bool),
    Init(Vec<i16>, bool),
}

fuzz_target!(|input: (u8, Vec<Action>)| {
    let (n, data) = input;
    let n = usize::from(n);
    let mut v = vec![0i64; n];
    let mut f = FenwickTree::<i64>::new(n);
    for action in data {
        match action {
            Action::Get(i) => assert_eq!(v.get(i).copied(), f.get(i).ok()),
            Action::Add(i, x) => {
                let x = i64::from(x);
                assert_eq!(i < n, f.add(i, x).is_ok());
                if let Some(y) = v.get_mut(i) {
                    *y += x;
                }
            }
            Action::Set(i, x) => {
                let x = i64::from(x);
                assert_eq!(i < n, f.set(i, x).is_ok());
                if let Some(y) = v.get_mut(i) {
                    *y = x;
                }
            }
            Action::RangeSum(start, stop) => {
                let expected = (start < stop && stop <= n).then(|| v[start..stop].iter().sum::<i64>());
                assert_eq!(expected, f.range_sum(start, stop).ok());
            }
            Action::FindStop(value, strict) => {
                // the search needs non-decreasing prefix sums
                if v.iter().all(|&x| x >= 0) {
                    let value = i64::from(value);
                    let mut sum = 0;
                    let expected = v.iter().position(|&x| {
                        sum += x;
                        if strict { sum > value } else { sum >= value }
                    });
                    let stop = if strict { f.find_stop_strict(value) } else { f.find_stop(value) };
                    assert_eq!(expected.map(|i| i + 1), stop);
                }
            }
            Action::Init(values, exact) => {
                let values: Vec<i64> = if exact && !values.is_empty() {
                    // stretch or truncate to exactly `n` values
                    values.iter().cycle().take(n).copied().map(i64::from).collect()
                } else {
                    values.into_iter().map(i64::from).collect()
                };
                if values.len() == n {
                    f.init(&values).unwrap();
                    v = values;
                } else {
                    assert!(f.init(&values).is_err());
                }
            }
        }
    }
    assert_eq!(v, f.frequencies());
});
