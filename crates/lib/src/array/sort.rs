//! Sorting.
//!
//! All sorts are stable, fire the hook once and move the cursor to the first
//! entry, even when the order does not change.
//!
//! | method | compares | order | keys |
//! |---|---|---|---|
//! | `sort` / `r_sort` / `u_sort` | values | asc / desc / caller | renumbered `0..n` |
//! | `a_sort` / `a_r_sort` / `u_a_sort` | values | asc / desc / caller | kept |
//! | `k_sort` / `k_r_sort` / `u_k_sort` | keys | asc / desc / caller | kept |
//! | `nat_sort` / `nat_case_sort` | values, natural order | asc | kept |
//! | `r_nat_sort` / `r_nat_case_sort` | values, natural order | asc, then reversed | kept |

use std::cmp::Ordering;

use super::{ArrayObject, MutationHook};
use crate::collate::SortFlag;
use crate::{Element, Key, OrderedMap};

impl<V, H: MutationHook> ArrayObject<V, H> {
    /// Sorts values with `cmp`, discarding keys
    pub fn u_sort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.sort_values_by("u_sort", |a, b| cmp(a, b));
    }

    /// Sorts values with `cmp`, keeping keys
    pub fn u_a_sort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.map.sort_by(|_, a, _, b| cmp(a, b));
        self.updated("u_a_sort", true);
    }

    /// Sorts entries by key with `cmp`
    pub fn u_k_sort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        self.map.sort_by(|a, _, b, _| cmp(a, b));
        self.updated("u_k_sort", true);
    }

    fn sort_values_by<F>(&mut self, operation: &'static str, cmp: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut values = std::mem::take(&mut self.map).into_values();
        values.sort_by(cmp);
        self.replace_map(OrderedMap::from(values), operation);
    }
}

impl<V: Element, H: MutationHook> ArrayObject<V, H> {
    /// Sorts values ascending, discarding keys
    pub fn sort(&mut self, flag: SortFlag) {
        self.sort_values_by("sort", |a, b| a.compare(b, flag));
    }

    /// Sorts values descending, discarding keys
    pub fn r_sort(&mut self, flag: SortFlag) {
        self.sort_values_by("r_sort", |a, b| b.compare(a, flag));
    }

    /// Sorts values ascending, keeping keys
    pub fn a_sort(&mut self, flag: SortFlag) {
        self.map.sort_by(|_, a, _, b| a.compare(b, flag));
        self.updated("a_sort", true);
    }

    /// Sorts values descending, keeping keys
    pub fn a_r_sort(&mut self, flag: SortFlag) {
        self.map.sort_by(|_, a, _, b| b.compare(a, flag));
        self.updated("a_r_sort", true);
    }

    /// Sorts entries by key, ascending
    pub fn k_sort(&mut self, flag: SortFlag) {
        self.map.sort_by(|a, _, b, _| a.compare(b, flag));
        self.updated("k_sort", true);
    }

    /// Sorts entries by key, descending
    pub fn k_r_sort(&mut self, flag: SortFlag) {
        self.map.sort_by(|a, _, b, _| b.compare(a, flag));
        self.updated("k_r_sort", true);
    }

    /// Sorts values in natural order, keeping keys
    pub fn nat_sort(&mut self) {
        self.natural("nat_sort", SortFlag::Natural, false);
    }

    /// Sorts values in case-insensitive natural order, keeping keys
    pub fn nat_case_sort(&mut self) {
        self.natural("nat_case_sort", SortFlag::NaturalCaseInsensitive, false);
    }

    /// Sorts values in natural order, then reverses the result
    pub fn r_nat_sort(&mut self) {
        self.natural("r_nat_sort", SortFlag::Natural, true);
    }

    /// Sorts values in case-insensitive natural order, then reverses the result
    pub fn r_nat_case_sort(&mut self) {
        self.natural("r_nat_case_sort", SortFlag::NaturalCaseInsensitive, true);
    }

    fn natural(&mut self, operation: &'static str, flag: SortFlag, reversed: bool) {
        self.map.sort_by(|_, a, _, b| a.compare(b, flag));
        if reversed {
            self.map.reverse();
        }
        self.updated(operation, true);
    }
}
