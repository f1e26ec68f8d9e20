use std::cmp::Ordering;

/// 可組合的比較器
///
/// 比較器是純函數：不持有狀態、沒有副作用。`then_comparing` 只在前面的
/// 比較結果為 `Equal` 時才會呼叫後面的比較器。
pub struct Comparator<'a, T: ?Sized> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<'a, T: ?Sized> Comparator<'a, T> {
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<'a, T: ?Sized + 'a> Comparator<'a, T> {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self {
            compare: Box::new(compare),
        }
    }

    /// 依鍵值函數產生的比較器（遞增）
    pub fn comparing<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }

    pub fn then_comparing(self, next: Comparator<'a, T>) -> Self {
        Self::new(move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)))
    }

    pub fn then_comparing_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        self.then_comparing(Comparator::comparing(key))
    }

    pub fn reversed(self) -> Self {
        Self::new(move |a, b| self.compare(b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Person;

    #[test]
    fn test_comparing_by_key() {
        let by_age = Comparator::comparing(Person::age);
        let young = Person::new("a1", "1", 1);
        let old = Person::new("h7", "7", 7);

        assert_eq!(by_age.compare(&young, &old), Ordering::Less);
        assert_eq!(by_age.compare(&old, &young), Ordering::Greater);
        assert_eq!(by_age.compare(&old, &old), Ordering::Equal);
    }

    #[test]
    fn test_then_comparing_only_breaks_ties() {
        let cmp = Comparator::comparing(Person::age)
            .then_comparing_key(|p: &Person| p.last_name().to_string());

        let a = Person::new("x", "b", 3);
        let b = Person::new("y", "a", 3);
        let c = Person::new("z", "a", 4);

        assert_eq!(cmp.compare(&a, &b), Ordering::Greater);
        assert_eq!(cmp.compare(&a, &c), Ordering::Less);
    }

    #[test]
    fn test_tie_breakers_in_declared_order() {
        let cmp = Comparator::comparing(Person::age)
            .then_comparing_key(|p: &Person| p.last_name().to_string())
            .then_comparing_key(|p: &Person| p.first_name().to_string());

        let a = Person::new("b", "same", 3);
        let b = Person::new("a", "same", 3);

        assert_eq!(cmp.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_reversed() {
        let cmp = Comparator::<i32>::natural().reversed();
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator_on_str() {
        let by_length = Comparator::<str>::new(|a, b| a.len().cmp(&b.len()));
        assert_eq!(by_length.compare("abc", "de"), Ordering::Greater);
    }
}
