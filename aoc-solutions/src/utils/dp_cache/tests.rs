//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 {
            vec![]
        } else {
            vec![n - 1, n - 2]
        }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 {
            *n as u64
        } else {
            deps[0] + deps[1]
        }
    }
}

struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |next| next + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0).unwrap(), 0);
    assert_eq!(cache.get(&1).unwrap(), 1);
    assert_eq!(cache.get(&2).unwrap(), 1);
    assert_eq!(cache.get(&10).unwrap(), 55);
    assert_eq!(cache.get(&20).unwrap(), 6765);
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::new(
        VecBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(count.get(), 4);

    // Cached, no recompute
    assert_eq!(cache.get(&0).unwrap(), 50);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_collatz_with_hashmap_backend() {
    let cache = DpCache::new(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1).unwrap(), 0);
    assert_eq!(cache.get(&8).unwrap(), 3);
    assert_eq!(cache.get(&6).unwrap(), 8);
    assert_eq!(cache.get(&27).unwrap(), 111);
}

#[test]
fn test_backends_agree() {
    struct Squares;

    impl DpProblem<usize, u64> for Squares {
        fn deps(&self, n: &usize) -> Vec<usize> {
            if *n == 0 { vec![] } else { vec![n - 1] }
        }

        // n^2 = (n-1)^2 + 2n - 1
        fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
            deps.first().map_or(0, |prev| prev + 2 * *n as u64 - 1)
        }
    }

    let vec_cache = DpCache::new(VecBackend::with_capacity(64), Squares);
    let map_cache = DpCache::new(HashMapBackend::new(), Squares);

    for n in (0..50).rev() {
        let expected = (n * n) as u64;
        assert_eq!(vec_cache.get(&n).unwrap(), expected);
        assert_eq!(map_cache.get(&n).unwrap(), expected);
    }
}

#[test]
fn test_cycle_is_reported() {
    struct Loop;

    impl DpProblem<u8, u8> for Loop {
        fn deps(&self, n: &u8) -> Vec<u8> {
            vec![(n + 1) % 3]
        }

        fn compute(&self, _n: &u8, deps: Vec<u8>) -> u8 {
            deps[0]
        }
    }

    let cache = DpCache::new(HashMapBackend::new(), Loop);
    assert_eq!(cache.get(&0), Err(DpCacheError::Cycle("0".to_string())));
    // A failed lookup leaves nothing half-resolved behind
    assert_eq!(cache.get(&1), Err(DpCacheError::Cycle("1".to_string())));
}

#[test]
fn test_into_backend_keeps_computed_values() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);
    cache.get(&5).unwrap();

    let backend = cache.into_backend();
    assert_eq!(backend.get(&5), Some(&5));
    assert_eq!(backend.get(&3), Some(&2));
    assert_eq!(backend.get(&6), None);
}

#[test]
fn test_vec_backend_sparse_insert() {
    let mut backend: VecBackend<i32> = VecBackend::new();
    backend.insert(5, 42);

    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.get(&10), None);

    backend.insert(10, 100);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&10), Some(&100));
}
