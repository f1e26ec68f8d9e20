use serde::{Deserialize, Serialize};
use std::fmt;

/// 人員資料，建立後不再修改；需要變更時以 `with_*` 產生新的實例
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn with_first_name(self, first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..self
        }
    }

    pub fn with_last_name(self, last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            ..self
        }
    }

    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{firstName='{}', lastName='{}', age={}}}",
            self.first_name, self.last_name, self.age
        )
    }
}

/// 城市，以名稱作為相等與雜湊的依據，可直接當作 `HashMap` 的鍵
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct City {
    name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 預設的八人名單，順序刻意打亂
pub fn default_roster() -> Vec<Person> {
    vec![
        Person::new("h7", "7", 7),
        Person::new("a1", "1", 1),
        Person::new("c3", "3", 3),
        Person::new("d4", "4", 4),
        Person::new("b2", "2", 2),
        Person::new("e5", "5", 5),
        Person::new("f6", "6", 6),
        Person::new("j8", "8", 8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;
    use std::hash::{Hash, Hasher};

    fn hash_of(city: &City) -> u64 {
        let mut hasher = DefaultHasher::new();
        city.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_city_equality_by_name() {
        let a = City::new("Paris Fr");
        let b = City::new(String::from("Paris Fr"));

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, City::new("Shanghai"));
    }

    #[test]
    fn test_city_interchangeable_as_key() {
        let mut map = HashMap::new();
        map.insert(City::new("New York"), 1);
        map.insert(City::new("New York"), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&City::new("New York")), Some(&2));
    }

    #[test]
    fn test_with_copies_untouched_fields() {
        let original = Person::new("h7", "7", 7);
        let upper = original.clone().with_first_name("H7");

        assert_eq!(upper.first_name(), "H7");
        assert_eq!(upper.last_name(), "7");
        assert_eq!(upper.age(), 7);
        assert_eq!(original.first_name(), "h7");
        assert_eq!(original.clone().with_age(70).age(), 70);
    }

    #[test]
    fn test_default_roster_order() {
        let ages: Vec<u32> = default_roster().iter().map(Person::age).collect();
        assert_eq!(ages, vec![7, 1, 3, 4, 2, 5, 6, 8]);
    }

    #[test]
    fn test_default_person() {
        let person = Person::default();
        assert_eq!(person.first_name(), "");
        assert_eq!(person.age(), 0);
    }
}
