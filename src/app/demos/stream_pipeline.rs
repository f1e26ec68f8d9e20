use crate::core::context::DemoContext;
use crate::core::stream::StreamSource;
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// 中間操作：map、filter、peek、skip、limit
pub struct StreamPipeline;

impl Demo for StreamPipeline {
    fn name(&self) -> &'static str {
        "stream_pipeline"
    }

    fn description(&self) -> &'static str {
        "map, filter, peek, skip and limit"
    }

    fn run(&self, ctx: &DemoContext) -> Result<()> {
        let persons = ctx.roster();

        persons
            .stream()
            .map(|p| p.age())
            .filter(|age| *age > 2)
            .for_each(|age| ctx.emit(age));

        ctx.separator();
        persons
            .stream()
            .filter(|p| p.age() > 2)
            .for_each(|p| ctx.emit(p));

        // peek 適合除錯：每個元素經過時印出
        ctx.separator();
        persons
            .stream()
            .map(|p| p.age())
            .peek(|age| ctx.emit(format!("peek {}", age)))
            .filter(|age| *age > 2)
            .for_each(|age| ctx.emit(age));

        // 沒有終端操作，整條管線不會執行，不會有任何輸出
        ctx.separator();
        let before = ctx.line_count();
        let _never_consumed = persons
            .stream()
            .map(|p| p.age())
            .peek(|age| ctx.emit(format!("peek {}", age)))
            .filter(|age| *age > 2)
            .peek(|age| ctx.emit(format!("peek {}", age)));
        tracing::debug!(
            "pipeline without terminal emitted {} lines",
            ctx.line_count() - before
        );

        // 略過兩個，最多保留三個
        ctx.separator();
        persons
            .stream()
            .skip(2)
            .limit(3)
            .filter(|p| p.age() > 2)
            .for_each(|p| ctx.emit(p));

        Ok(())
    }
}
