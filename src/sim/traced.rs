use std::cell::RefCell;

use super::cache::DirectMappedCache;
use crate::matrix::{Load, Store};

const ELEMENT_BYTES: usize = std::mem::size_of::<i32>();

/// A buffer placed at a simulated byte address. Every `load` and `store`
/// is fed to the shared cache before touching the real data.
pub struct Traced<'c, T> {
    inner: T,
    base: usize,
    cache: &'c RefCell<DirectMappedCache>,
}

impl<'c, T> Traced<'c, T> {
    pub fn new(inner: T, base: usize, cache: &'c RefCell<DirectMappedCache>) -> Self {
        Self { inner, base, cache }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    #[inline]
    fn touch(&self, idx: usize) {
        self.cache.borrow_mut().access(self.base + idx * ELEMENT_BYTES);
    }
}

impl<T: Load> Load for Traced<'_, T> {
    fn load(&self, idx: usize) -> i32 {
        self.touch(idx);
        self.inner.load(idx)
    }
}

impl<T: Store> Store for Traced<'_, T> {
    fn store(&mut self, idx: usize, value: i32) {
        self.touch(idx);
        self.inner.store(idx, value);
    }
}
