use crate::core::comparator::Comparator;
use crate::core::context::DemoContext;
use crate::core::optional::Present;
use crate::core::predicate::{predicate, Predicate};
use crate::domain::model::Person;
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// 函數值的各種寫法：比較器、無參數動作、存取器、二元運算、消費者、供應者、謂詞
pub struct CreateFunction;

impl Demo for CreateFunction {
    fn name(&self) -> &'static str {
        "create_function"
    }

    fn description(&self) -> &'static str {
        "closures and function values"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let by_length = Comparator::<str>::new(|s1, s2| s1.len().cmp(&s2.len()));
        ctx.emit(format!(
            "compare(\"three\", \"two\") by length: {:?}",
            by_length.compare("three", "two")
        ));

        let runnable = || {
            let mut i = 0;
            while i < 10 {
                ctx.emit_inline("haha");
                i += 1;
            }
        };
        ctx.emit("runnable: ");
        runnable();

        let persons = ctx.roster();
        let first = persons.first().present()?;

        // 閉包與方法參照是同一件事
        let f1 = |person: &Person| person.age();
        let f2: fn(&Person) -> u32 = Person::age;
        ctx.emit(format!("closure age: {}, method age: {}", f1(first), f2(first)));

        let sum = |i1: i32, i2: i32| i1 + i2;
        let sum2: fn(i32, i32) -> i32 = std::ops::Add::add;
        let max: fn(i32, i32) -> i32 = i32::max;
        ctx.emit(format!(
            "sum(3, 4) = {}, sum2(3, 4) = {}, max(3, 4) = {}",
            sum(3, 4),
            sum2(3, 4),
            max(3, 4)
        ));

        let printer = |s: &str| ctx.emit(s);
        printer("printed through a consumer");

        let person_supplier: fn() -> Person = Person::default;
        ctx.emit(format!("supplied: {}", person_supplier()));

        let age_gt_20: Predicate<'_, Person> = predicate(|person: &Person| person.age() > 20);
        let older = persons.iter().filter(|p| age_gt_20(*p)).count();
        ctx.emit(format!("persons older than 20: {}", older));

        Ok(())
    }
}
