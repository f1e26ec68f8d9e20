/// 以函數值表示的謂詞
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

pub fn predicate<'a, T, F>(test: F) -> Predicate<'a, T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + 'a,
{
    Box::new(test)
}

/// `p1` 為 false 時不再評估 `p2`
pub fn and<'a, T: ?Sized + 'a>(p1: Predicate<'a, T>, p2: Predicate<'a, T>) -> Predicate<'a, T> {
    Box::new(move |t: &T| p1(t) && p2(t))
}

/// `p1` 為 true 時不再評估 `p2`
pub fn or<'a, T: ?Sized + 'a>(p1: Predicate<'a, T>, p2: Predicate<'a, T>) -> Predicate<'a, T> {
    Box::new(move |t: &T| p1(t) || p2(t))
}

pub fn negate<'a, T: ?Sized + 'a>(p: Predicate<'a, T>) -> Predicate<'a, T> {
    Box::new(move |t: &T| !p(t))
}

pub fn is_equal_to<'a, T>(value: T) -> Predicate<'a, T>
where
    T: PartialEq + 'a,
{
    Box::new(move |t: &T| *t == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Person;
    use std::cell::Cell;

    #[test]
    fn test_and_or() {
        let over_two = predicate(|p: &Person| p.age() > 2);
        let under_six = predicate(|p: &Person| p.age() < 6);
        let between = and(over_two, under_six);

        assert!(between(&Person::new("c3", "3", 3)));
        assert!(!between(&Person::new("h7", "7", 7)));

        let young = predicate(|p: &Person| p.age() < 2);
        let old = predicate(|p: &Person| p.age() > 7);
        let extreme = or(young, old);

        assert!(extreme(&Person::new("a1", "1", 1)));
        assert!(extreme(&Person::new("j8", "8", 8)));
        assert!(!extreme(&Person::new("d4", "4", 4)));
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Cell::new(0);
        let never = predicate(|_: &i32| false);
        let counting = predicate(|_: &i32| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(!and(never, counting)(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_is_equal_to() {
        let is_paris = is_equal_to("Paris Fr".to_string());
        assert!(is_paris(&"Paris Fr".to_string()));
        assert!(!is_paris(&"Shanghai".to_string()));
        assert!(negate(is_equal_to(3))(&4));
    }

    #[test]
    fn test_predicate_over_str() {
        let short = predicate(|s: &str| s.len() < 20);
        assert!(short("hello"));
        assert!(!short("a string that is clearly too long"));
    }
}
