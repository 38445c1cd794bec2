// Chapter 09: stateful property testing.
// The subjects are two tiny stateful containers; the tests replay random
// operation sequences against each one and a trivially-correct reference
// model, checking agreement after every step.

use std::collections::HashMap;

/// Returns the sum of two integers.
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// An up/down counter with reset.
#[derive(Debug, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// A string-keyed value store.
#[derive(Debug, Default)]
pub struct KvStore {
    data: HashMap<String, i64>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: i64) {
        self.data.insert(key.to_owned(), value);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.data.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, TestResult};
    use quickcheck_macros::quickcheck;

    // ========================================================================
    // Example: Plain Properties
    // ========================================================================

    #[quickcheck]
    fn sum_is_commutative(a: i32, b: i32) -> bool {
        sum(a as i64, b as i64) == sum(b as i64, a as i64)
    }

    #[quickcheck]
    fn sum_with_zero_is_identity(a: i64) -> bool {
        sum(a, 0) == a
    }

    // TestResult::discard skips inputs outside the property's domain.
    #[quickcheck]
    fn division_undoes_multiplication(a: i32, b: i32) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }
        let product = (a as i64) * (b as i64);
        TestResult::from_bool(product / (b as i64) == a as i64)
    }

    // ========================================================================
    // Example: Counter vs. Model
    // ========================================================================

    #[derive(Debug, Clone, Copy)]
    enum CounterOp {
        Increment,
        Decrement,
        Reset,
    }

    impl Arbitrary for CounterOp {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&[CounterOp::Increment, CounterOp::Decrement, CounterOp::Reset])
                .unwrap()
        }
    }

    #[quickcheck]
    fn counter_agrees_with_model(ops: Vec<CounterOp>) -> bool {
        let mut counter = Counter::new();
        let mut model: i64 = 0;

        for op in ops {
            match op {
                CounterOp::Increment => {
                    counter.increment();
                    model += 1;
                }
                CounterOp::Decrement => {
                    counter.decrement();
                    model -= 1;
                }
                CounterOp::Reset => {
                    counter.reset();
                    model = 0;
                }
            }

            if counter.value() != model {
                return false;
            }
        }
        true
    }

    // ========================================================================
    // Example: Key-Value Store vs. Model
    // ========================================================================

    const KEYS: [&str; 5] = ["a", "b", "c", "d", "e"];

    #[derive(Debug, Clone, Copy)]
    enum KvOp {
        Set(u8, i64),
        Get(u8),
        Remove(u8),
    }

    impl KvOp {
        fn key(index: u8) -> &'static str {
            KEYS[index as usize % KEYS.len()]
        }
    }

    impl Arbitrary for KvOp {
        fn arbitrary(g: &mut Gen) -> Self {
            match *g.choose(&[0u8, 1, 2]).unwrap() {
                0 => KvOp::Set(u8::arbitrary(g), i64::arbitrary(g)),
                1 => KvOp::Get(u8::arbitrary(g)),
                _ => KvOp::Remove(u8::arbitrary(g)),
            }
        }
    }

    #[quickcheck]
    fn kv_store_agrees_with_model(ops: Vec<KvOp>) -> bool {
        let mut store = KvStore::new();
        let mut model: HashMap<&'static str, i64> = HashMap::new();

        for op in ops {
            match op {
                KvOp::Set(index, value) => {
                    let key = KvOp::key(index);
                    store.set(key, value);
                    model.insert(key, value);
                }
                KvOp::Get(index) => {
                    let key = KvOp::key(index);
                    if store.get(key) != model.get(key).copied() {
                        return false;
                    }
                }
                KvOp::Remove(index) => {
                    let key = KvOp::key(index);
                    store.remove(key);
                    model.remove(key);
                }
            }

            if store.len() != model.len() {
                return false;
            }
        }
        true
    }
}
