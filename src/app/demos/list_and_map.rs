use crate::core::comparator::Comparator;
use crate::core::context::DemoContext;
use crate::core::grouping::{compute_if_absent, merge_all, put_if_absent};
use crate::core::list::{replace_all, sort_then_reverse};
use crate::core::optional::Present;
use crate::domain::model::{City, Person};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 清單的 replace_all 與排序，以及 Map 的 put_if_absent / compute_if_absent / merge
pub struct ListAndMap;

fn format_persons(persons: &[Person]) -> String {
    let items: Vec<String> = persons.iter().map(Person::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn emit_grouped(ctx: &DemoContext, map: &HashMap<City, Vec<Person>>) {
    // HashMap 沒有固定順序，輸出前依城市名稱排序
    let mut cities: Vec<&City> = map.keys().collect();
    cities.sort();
    for city in cities {
        ctx.emit(format!("{}\t:{}", city.name(), format_persons(&map[city])));
    }
}

impl Demo for ListAndMap {
    fn name(&self) -> &'static str {
        "list_and_map"
    }

    fn description(&self) -> &'static str {
        "replace_all, composite sort, map grouping and merge"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let persons = ctx.roster();
        let mut person_list = persons.clone();

        ctx.separator();
        replace_all(&mut person_list, |person| {
            person
                .clone()
                .with_first_name(person.first_name().to_uppercase())
                .with_last_name(person.last_name().to_uppercase())
        });
        person_list.iter().for_each(|p| ctx.emit(p));

        ctx.separator();
        let by_age_then_last_name = Comparator::comparing(Person::age)
            .then_comparing_key(|p: &Person| p.last_name().to_string());
        sort_then_reverse(&mut person_list, &by_age_then_last_name);
        person_list.iter().for_each(|p| ctx.emit(p));

        let new_york = City::new("New York");
        let shanghai = City::new("Shanghai");
        let paris = City::new("Paris Fr");

        let person = |index: usize| persons.get(index).cloned().present();

        let mut map1: HashMap<City, Vec<Person>> = HashMap::new();
        put_if_absent(&mut map1, paris.clone(), Vec::new());
        map1.get_mut(&paris).present()?.push(person(0)?);
        compute_if_absent(&mut map1, new_york.clone(), |_| Vec::new()).push(person(6)?);
        compute_if_absent(&mut map1, new_york.clone(), |_| Vec::new()).push(person(2)?);

        let mut map2: HashMap<City, Vec<Person>> = HashMap::new();
        put_if_absent(&mut map2, paris.clone(), Vec::new());
        map2.get_mut(&paris).present()?.push(person(3)?);
        map2.get_mut(&paris).present()?.push(person(5)?);
        compute_if_absent(&mut map2, new_york.clone(), |_| Vec::new()).push(person(1)?);
        compute_if_absent(&mut map2, new_york, |_| Vec::new()).push(person(4)?);
        compute_if_absent(&mut map2, shanghai, |_| Vec::new()).push(person(7)?);

        // map1 併入 map2：map2 原有的人在前，map1 的人接在後面
        merge_all(&mut map2, map1, |mut existing, incoming| {
            existing.extend(incoming);
            existing
        });

        ctx.separator();
        emit_grouped(ctx, &map2);

        Ok(())
    }
}
