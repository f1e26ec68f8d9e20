//! 惰性序列 (stream)
//!
//! `Stream` 包裝一個 `Iterator`。中間操作 (`map`、`filter`、`peek`、`skip`、
//! `limit`) 只組裝管線，不會執行任何東西；只有終端操作 (`for_each`、
//! `any_match`、`find_first`、`reduce` 等) 會驅動元素流過整條管線。
//! 一條沒有終端操作的管線被丟棄時，`peek` 的副作用完全不會發生。

use crate::core::comparator::Comparator;
use rand::Rng;
use regex::Regex;
use std::iter;

#[must_use = "streams are lazy and do nothing unless a terminal operation is called"]
pub struct Stream<I> {
    iter: I,
}

impl<I: Iterator> Stream<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    // ---- 中間操作 ----

    pub fn map<B, F>(self, mapper: F) -> Stream<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Stream::new(self.iter.map(mapper))
    }

    pub fn filter<P>(self, predicate: P) -> Stream<iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Stream::new(self.iter.filter(predicate))
    }

    /// 元素經過時執行副作用，不改變序列
    pub fn peek<F>(self, action: F) -> Stream<iter::Inspect<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Stream::new(self.iter.inspect(action))
    }

    pub fn skip(self, n: usize) -> Stream<iter::Skip<I>> {
        Stream::new(self.iter.skip(n))
    }

    pub fn limit(self, max_size: usize) -> Stream<iter::Take<I>> {
        Stream::new(self.iter.take(max_size))
    }

    /// 穩定排序：比較結果相等的元素保持原本的相對順序
    pub fn sorted(self, comparator: &Comparator<'_, I::Item>) -> Stream<std::vec::IntoIter<I::Item>> {
        let mut items: Vec<I::Item> = self.iter.collect();
        items.sort_by(|a, b| comparator.compare(a, b));
        Stream::new(items.into_iter())
    }

    // ---- 終端操作 ----

    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.iter.for_each(action)
    }

    pub fn collect_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    /// 空序列回傳 false
    pub fn any_match<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.any(|item| predicate(&item))
    }

    /// 空序列回傳 true
    pub fn all_match<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.iter.all(|item| predicate(&item))
    }

    /// 空序列回傳 true
    pub fn none_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    pub fn find_first(mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// 循序執行時與 `find_first` 相同，呼叫端不應依賴回傳的是哪一個元素
    pub fn find_any(self) -> Option<I::Item> {
        self.find_first()
    }

    pub fn max(self, comparator: &Comparator<'_, I::Item>) -> Option<I::Item> {
        self.iter.max_by(|a, b| comparator.compare(a, b))
    }

    pub fn min(self, comparator: &Comparator<'_, I::Item>) -> Option<I::Item> {
        self.iter.min_by(|a, b| comparator.compare(a, b))
    }

    /// 有初始值的歸約，空序列直接回傳 `identity`
    pub fn reduce<F>(self, identity: I::Item, op: F) -> I::Item
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.iter.fold(identity, op)
    }

    /// 沒有初始值的歸約，空序列回傳 `None`；由左至右依序累加
    pub fn reduce_unseeded<F>(self, op: F) -> Option<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.iter.reduce(op)
    }

    /// 三參數歸約：`accumulator` 將元素併入部分結果，`combiner` 合併兩個部分結果
    pub fn reduce_with<U, A, C>(self, identity: U, accumulator: A, combiner: C) -> U
    where
        U: Clone,
        A: FnMut(U, I::Item) -> U,
        C: FnMut(U, U) -> U,
    {
        self.reduce_partitioned(1, identity, accumulator, combiner)
    }

    /// 以循序方式模擬分區歸約
    ///
    /// 元素依序切成最多 `partitions` 段，每段從 `identity` 的副本開始用
    /// `accumulator` 累加，再由左至右以 `combiner` 合併。只要 `identity`
    /// 是 `combiner` 的單位元素且兩者相容，結果與單段累加相同。
    pub fn reduce_partitioned<U, A, C>(
        self,
        partitions: usize,
        identity: U,
        mut accumulator: A,
        mut combiner: C,
    ) -> U
    where
        U: Clone,
        A: FnMut(U, I::Item) -> U,
        C: FnMut(U, U) -> U,
    {
        let items: Vec<I::Item> = self.iter.collect();
        let chunk_size = items.len().div_ceil(partitions.max(1)).max(1);

        let mut items = items.into_iter().peekable();
        let mut partials = Vec::new();
        while items.peek().is_some() {
            let partial = items
                .by_ref()
                .take(chunk_size)
                .fold(identity.clone(), &mut accumulator);
            partials.push(partial);
        }

        tracing::trace!("reduced {} partitions", partials.len());
        partials.into_iter().reduce(&mut combiner).unwrap_or(identity)
    }
}

impl<I: Iterator> IntoIterator for Stream<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iter
    }
}

/// 從切片建立 stream，元素為借用
pub trait StreamSource<T> {
    fn stream(&self) -> Stream<std::slice::Iter<'_, T>>;
}

impl<T> StreamSource<T> for [T] {
    fn stream(&self) -> Stream<std::slice::Iter<'_, T>> {
        Stream::new(self.iter())
    }
}

// ---- 建立 stream 的方式 ----

pub fn of<C: IntoIterator>(items: C) -> Stream<C::IntoIter> {
    Stream::new(items.into_iter())
}

pub fn empty<T>() -> Stream<iter::Empty<T>> {
    Stream::new(iter::empty())
}

/// 無限 stream，每個元素由 `supplier` 產生
pub fn generate<T, F>(supplier: F) -> Stream<iter::RepeatWith<F>>
where
    F: FnMut() -> T,
{
    Stream::new(iter::repeat_with(supplier))
}

/// 無限 stream：`seed`、`f(seed)`、`f(f(seed))`...
pub fn iterate<T, F>(seed: T, mut f: F) -> Stream<impl Iterator<Item = T>>
where
    F: FnMut(&T) -> T,
{
    Stream::new(iter::successors(Some(seed), move |previous| Some(f(previous))))
}

/// 無限的 `[low, high)` 隨機整數；範圍為空時得到空 stream
pub fn random_ints(low: i32, high: i32) -> Stream<impl Iterator<Item = i32>> {
    let range = (low < high).then_some(low..high);
    Stream::new(range.into_iter().flat_map(|range| {
        let mut rng = rand::thread_rng();
        iter::repeat_with(move || rng.gen_range(range.clone()))
    }))
}

pub fn chars(text: &str) -> Stream<std::str::Chars<'_>> {
    Stream::new(text.chars())
}

/// 以正規表達式切割字串
pub fn split_as_stream<'r, 'h>(pattern: &'r Regex, text: &'h str) -> Stream<regex::Split<'r, 'h>> {
    Stream::new(pattern.split(text))
}
