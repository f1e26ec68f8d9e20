use crate::core::context::DemoContext;
use crate::domain::model::Person;
use crate::utils::error::Result;

/// 一個示範程序：讀取上下文中的名單，把輸出寫回上下文
pub trait Demo {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    fn run(&self, ctx: &DemoContext) -> Result<()>;
}

pub trait ConfigProvider {
    fn tour_name(&self) -> &str;
    fn roster(&self) -> &[Person];
    /// `None` 代表依預設順序執行全部示範
    fn selected_demos(&self) -> Option<&[String]>;
}
