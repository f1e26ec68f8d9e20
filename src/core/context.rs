use crate::domain::model::Person;
use std::cell::RefCell;
use std::fmt::Display;

/// 示範執行上下文：提供名單並收集輸出行
///
/// 輸出使用 `RefCell`，讓同一條 stream 上的多個閉包（例如 `peek` 與
/// `for_each`）可以同時借用上下文寫入。
#[derive(Debug)]
pub struct DemoContext {
    demo_name: String,
    roster: Vec<Person>,
    lines: RefCell<Vec<String>>,
}

impl DemoContext {
    pub fn new(demo_name: impl Into<String>, roster: Vec<Person>) -> Self {
        Self {
            demo_name: demo_name.into(),
            roster,
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn demo_name(&self) -> &str {
        &self.demo_name
    }

    /// 每次呼叫都回傳名單的新副本，示範之間互不影響
    pub fn roster(&self) -> Vec<Person> {
        self.roster.clone()
    }

    pub fn emit(&self, line: impl Display) {
        self.lines.borrow_mut().push(line.to_string());
    }

    /// 不換行輸出，接在上一行後面
    pub fn emit_inline(&self, text: impl Display) {
        let mut lines = self.lines.borrow_mut();
        match lines.last_mut() {
            Some(last) => last.push_str(&text.to_string()),
            None => lines.push(text.to_string()),
        }
    }

    pub fn separator(&self) {
        self.emit("==============================================");
    }

    pub fn line_count(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::default_roster;

    #[test]
    fn test_emit_collects_lines_in_order() {
        let ctx = DemoContext::new("test", default_roster());
        ctx.emit(1);
        ctx.emit("two");

        assert_eq!(ctx.lines(), vec!["1".to_string(), "two".to_string()]);
        assert_eq!(ctx.demo_name(), "test");
    }

    #[test]
    fn test_emit_inline_appends_to_last_line() {
        let ctx = DemoContext::new("test", Vec::new());
        ctx.emit_inline("ha");
        ctx.emit_inline("ha");
        ctx.emit("next");

        assert_eq!(ctx.into_lines(), vec!["haha".to_string(), "next".to_string()]);
    }

    #[test]
    fn test_roster_is_a_fresh_copy() {
        let ctx = DemoContext::new("test", default_roster());
        let mut first = ctx.roster();
        first.clear();

        assert_eq!(ctx.roster().len(), 8);
    }
}
