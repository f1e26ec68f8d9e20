pub mod builder;
pub mod comparator;
pub mod context;
pub mod grouping;
pub mod list;
pub mod optional;
pub mod predicate;
pub mod stream;
pub mod tour;

pub use crate::domain::model::{City, Person};
pub use crate::domain::ports::{ConfigProvider, Demo};
pub use crate::utils::error::Result;
