use crate::core::comparator::Comparator;
use crate::core::context::DemoContext;
use crate::core::list;
use crate::domain::model::Person;
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// 比較器的寫法：手寫閉包、鍵值函數、串接次要條件
pub struct WaysOfComparator;

impl WaysOfComparator {
    fn emit_sorted(ctx: &DemoContext, label: &str, persons: &[Person], comparator: &Comparator<'_, Person>) {
        let mut sorted = persons.to_vec();
        list::sort(&mut sorted, comparator);
        let names: Vec<&str> = sorted.iter().map(Person::first_name).collect();
        ctx.emit(format!("{}: {}", label, names.join(", ")));
    }
}

impl Demo for WaysOfComparator {
    fn name(&self) -> &'static str {
        "ways_of_comparator"
    }

    fn description(&self) -> &'static str {
        "comparators from closures and key extractors"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let persons = ctx.roster();

        // 手寫閉包，參數對調即為遞減
        let cmp_age = Comparator::new(|p1: &Person, p2: &Person| p2.age().cmp(&p1.age()));
        let cmp_first_name =
            Comparator::new(|p1: &Person, p2: &Person| p2.first_name().cmp(p1.first_name()));
        let cmp_last_name =
            Comparator::new(|p1: &Person, p2: &Person| p2.last_name().cmp(p1.last_name()));
        Self::emit_sorted(ctx, "age desc", &persons, &cmp_age);
        Self::emit_sorted(ctx, "first name desc", &persons, &cmp_first_name);
        Self::emit_sorted(ctx, "last name desc", &persons, &cmp_last_name);

        // 鍵值函數
        let f1 = |p: &Person| p.age();
        let cmp_person = Comparator::comparing(f1);
        let cmp_person_age = Comparator::comparing(Person::age);
        let cmp_person_last_name = Comparator::comparing(|p: &Person| p.last_name().to_string());
        Self::emit_sorted(ctx, "by f1", &persons, &cmp_person);
        Self::emit_sorted(ctx, "by age", &persons, &cmp_person_age);
        Self::emit_sorted(ctx, "by last name", &persons, &cmp_person_last_name);

        let cmp = cmp_person_age.then_comparing(cmp_person_last_name);
        let cmp2 = cmp.then_comparing_key(|p: &Person| p.first_name().to_string());
        Self::emit_sorted(ctx, "by age, last name, first name", &persons, &cmp2);

        Ok(())
    }
}
