use crate::core::context::DemoContext;
use crate::core::optional::Present;
use crate::core::stream::StreamSource;
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// 簡單的歸約：match、find、reduce
pub struct Reductions;

/// 三參數歸約示範時使用的分區數
const PARTITIONS: usize = 3;

impl Demo for Reductions {
    fn name(&self) -> &'static str {
        "reductions"
    }

    fn description(&self) -> &'static str {
        "match, find and reduce"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let persons = ctx.roster();

        let any = persons.stream().any_match(|p| p.age() > 2);
        let all = persons.stream().all_match(|p| p.age() > 2);
        let none = persons.stream().none_match(|p| p.age() > 2);
        ctx.emit(format!("age > 2: any={} all={} none={}", any, all, none));

        // find 回傳 Option，序列為空或沒有符合的元素時為 None
        let opt1 = persons.stream().filter(|p| p.age() > 2).find_any();
        let opt2 = persons.stream().filter(|p| p.age() > 2).find_first();
        let opt3 = persons.stream().filter(|p| p.age() > 200).find_first();
        ctx.emit(opt1.present()?);
        ctx.emit(opt2.present()?);
        if let Some(p) = opt3 {
            ctx.emit(p);
        }

        // 沒有初始值時回傳 Option；結合律是假設而非保證
        let sum_of_ages = persons.stream().map(|p| p.age()).reduce(0, |a1, a2| a1 + a2);
        let max_of_ages = persons.stream().map(|p| p.age()).reduce(0, u32::max);
        let opt4 = persons.stream().map(|p| p.age()).reduce_unseeded(u32::max);
        ctx.emit(format!("sum of ages: {}", sum_of_ages));
        ctx.emit(format!("max of ages: {}", max_of_ages));
        ctx.emit(format!("max of ages (unseeded): {}", opt4.present()?));

        // 初始值、累加器、合併器；合併器決定各分區結果如何合併
        let ages = persons.stream().reduce_partitioned(
            PARTITIONS,
            Vec::new(),
            |mut list, p| {
                list.push(p.age());
                list
            },
            |mut list1, list2| {
                list1.extend(list2);
                list1
            },
        );
        ages.iter().for_each(|age| ctx.emit(age));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{default_roster, Person};
    use crate::utils::error::TourError;

    #[test]
    fn test_reductions_output() {
        let ctx = DemoContext::new("reductions", default_roster());
        Reductions.run(&ctx).unwrap();
        let lines = ctx.into_lines();

        assert_eq!(lines[0], "age > 2: any=true all=false none=false");
        assert_eq!(lines[1], "Person{firstName='h7', lastName='7', age=7}");
        assert_eq!(lines[2], "Person{firstName='h7', lastName='7', age=7}");
        assert_eq!(lines[3], "sum of ages: 36");
        assert_eq!(lines[4], "max of ages: 8");
        assert_eq!(lines[5], "max of ages (unseeded): 8");
        assert_eq!(&lines[6..], &["7", "1", "3", "4", "2", "5", "6", "8"]);
    }

    #[test]
    fn test_no_match_propagates_absent_value() {
        let roster = vec![Person::new("a1", "1", 1), Person::new("b2", "2", 2)];
        let ctx = DemoContext::new("reductions", roster);

        let result = Reductions.run(&ctx);
        assert!(matches!(result, Err(TourError::NoValuePresent)));
        assert_eq!(ctx.lines(), vec!["age > 2: any=false all=false none=true"]);
    }
}
