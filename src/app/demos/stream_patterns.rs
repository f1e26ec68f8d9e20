use crate::core::builder::StreamBuilder;
use crate::core::context::DemoContext;
use crate::core::stream::{self, StreamSource};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use regex::Regex;

/// 建立 stream 的各種方式
pub struct StreamPatterns;

const SAMPLE_SIZE: usize = 5;

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Demo for StreamPatterns {
    fn name(&self) -> &'static str {
        "stream_patterns"
    }

    fn description(&self) -> &'static str {
        "stream sources and the stream builder"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let persons = ctx.roster();
        ctx.emit(format!("from a list: {} elements", persons.stream().count()));

        ctx.emit(format!("empty: {} elements", stream::empty::<String>().count()));
        ctx.emit(format!("singleton: [{}]", join(stream::of(["one"]))));
        ctx.emit(format!("several: [{}]", join(stream::of(["one", "two", "three"]))));

        // 無限 stream 必須先 limit
        let constant = stream::generate(|| "one").limit(SAMPLE_SIZE);
        ctx.emit(format!("constant: [{}]", join(constant)));
        let growing = stream::iterate("+".to_string(), |s| format!("{}+", s)).limit(SAMPLE_SIZE);
        ctx.emit(format!("growing: [{}]", join(growing)));
        let random_count = stream::random_ints(0, 100).limit(SAMPLE_SIZE).count();
        ctx.emit(format!("random: {} values", random_count));

        let letters = stream::chars("hello").map(|c| c as u32);
        ctx.emit(format!("chars of hello: [{}]", join(letters)));

        let non_letters = Regex::new(r"[^\p{L}]")?;
        let words = stream::split_as_stream(&non_letters, "book, pen and paper");
        ctx.emit(format!("regex split: [{}]", join(words)));

        let mut builder = StreamBuilder::new();
        builder.add("one")?.add("two")?.add("three")?;
        builder.accept("four")?;
        let built = builder.build()?;
        built.for_each(|s| ctx.emit(format!("built: {}", s)));

        // build 之後再加入會被拒絕
        if let Err(e) = builder.add("five") {
            ctx.emit(format!("add after build rejected: {}", e));
        }

        Ok(())
    }
}
