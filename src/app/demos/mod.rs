//! 七個示範程序，依 `all()` 的順序執行

pub mod comparators;
pub mod functions;
pub mod list_and_map;
pub mod predicates;
pub mod reductions;
pub mod stream_patterns;
pub mod stream_pipeline;

use crate::domain::ports::Demo;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::validate_unique;

pub use comparators::WaysOfComparator;
pub use functions::CreateFunction;
pub use list_and_map::ListAndMap;
pub use predicates::ClosureVsNamed;
pub use reductions::Reductions;
pub use stream_patterns::StreamPatterns;
pub use stream_pipeline::StreamPipeline;

/// 預設順序的全部示範
pub fn all() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(CreateFunction),
        Box::new(WaysOfComparator),
        Box::new(ClosureVsNamed),
        Box::new(ListAndMap),
        Box::new(StreamPatterns),
        Box::new(StreamPipeline),
        Box::new(Reductions),
    ]
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|demo| demo.name()).collect()
}

/// 依指定名稱與順序挑選示範
pub fn select(names: &[String]) -> Result<Vec<Box<dyn Demo>>> {
    validate_unique("demos", names)?;

    let mut available = all();
    let mut selected = Vec::with_capacity(names.len());

    for name in names {
        let position = available
            .iter()
            .position(|demo| demo.name() == name.as_str())
            .ok_or_else(|| TourError::UnknownDemo { name: name.clone() })?;
        selected.push(available.remove(position));
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            names(),
            vec![
                "create_function",
                "ways_of_comparator",
                "closure_vs_named",
                "list_and_map",
                "stream_patterns",
                "stream_pipeline",
                "reductions",
            ]
        );
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let selected = select(&["reductions".to_string(), "create_function".to_string()]).unwrap();
        let names: Vec<&str> = selected.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["reductions", "create_function"]);
    }

    #[test]
    fn test_select_unknown_demo() {
        let result = select(&["nope".to_string()]);
        assert!(matches!(result, Err(TourError::UnknownDemo { name }) if name == "nope"));
    }

    #[test]
    fn test_select_duplicate_is_invalid_value() {
        let result = select(&["reductions".to_string(), "reductions".to_string()]);
        assert!(matches!(
            result,
            Err(TourError::InvalidConfigValueError { field, value, .. })
                if field == "demos" && value == "reductions"
        ));
    }
}
