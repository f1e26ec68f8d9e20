use crate::core::context::DemoContext;
use crate::core::predicate::{and, is_equal_to, negate, or, predicate, Predicate};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// 明確定義的型別，對照下面的閉包寫法
struct MaxLength {
    limit: usize,
}

impl MaxLength {
    fn test(&self, s: &str) -> bool {
        s.len() < self.limit
    }
}

/// 同一個謂詞的兩種寫法，以及謂詞的組合
pub struct ClosureVsNamed;

impl Demo for ClosureVsNamed {
    fn name(&self) -> &'static str {
        "closure_vs_named"
    }

    fn description(&self) -> &'static str {
        "named type versus closure, predicate combinators"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let explicit = MaxLength { limit: 20 };
        let p1: Predicate<'_, str> = predicate(move |s: &str| explicit.test(s));
        let p2: Predicate<'_, str> = predicate(|s: &str| s.len() < 20);

        for word in ["lambda", "a sentence longer than twenty"] {
            ctx.emit(format!("{:?}: named={} closure={}", word, p1(word), p2(word)));
        }

        let starts_with_a = predicate(|s: &String| s.starts_with('a'));
        let is_book = is_equal_to("book".to_string());
        let either = or(starts_with_a, is_book);
        let short = predicate(|s: &String| s.len() <= 4);
        let short_and_either = and(either, short);
        let not_short = negate(predicate(|s: &String| s.len() <= 4));

        for word in ["book", "apple", "ax", "pen"].map(String::from) {
            ctx.emit(format!(
                "{}: (starts with a or book) and short = {}, not short = {}",
                word,
                short_and_either(&word),
                not_short(&word)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_forms_agree() {
        let ctx = DemoContext::new("closure_vs_named", Vec::new());
        ClosureVsNamed.run(&ctx).unwrap();
        let lines = ctx.into_lines();

        assert_eq!(lines[0], "\"lambda\": named=true closure=true");
        assert_eq!(lines[1], "\"a sentence longer than twenty\": named=false closure=false");
        assert_eq!(lines[2], "book: (starts with a or book) and short = true, not short = false");
        assert_eq!(lines[3], "apple: (starts with a or book) and short = false, not short = true");
        assert_eq!(lines[4], "ax: (starts with a or book) and short = true, not short = false");
        assert_eq!(lines[5], "pen: (starts with a or book) and short = false, not short = false");
    }
}
