use crate::app::demos;
use crate::core::context::DemoContext;
use crate::domain::model::Person;
use crate::domain::ports::{ConfigProvider, Demo};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

/// 單一示範的輸出
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub name: String,
    pub lines: Vec<String>,
    pub duration_ms: u128,
}

impl DemoReport {
    pub fn to_text(&self) -> String {
        let mut text = format!("== {} ==", self.name);
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TourReport {
    pub tour_name: String,
    pub generated_at: DateTime<Utc>,
    pub demos: Vec<DemoReport>,
}

impl TourReport {
    pub fn to_text(&self) -> String {
        self.demos
            .iter()
            .map(DemoReport::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn demo(&self, name: &str) -> Option<&DemoReport> {
        self.demos.iter().find(|d| d.name == name)
    }
}

/// 依序執行示範程序；任何一個失敗就中止並回傳錯誤
pub struct TourEngine {
    tour_name: String,
    roster: Vec<Person>,
    demos: Vec<Box<dyn Demo>>,
    monitor: SystemMonitor,
}

impl TourEngine {
    pub fn new(tour_name: impl Into<String>, roster: Vec<Person>, demos: Vec<Box<dyn Demo>>) -> Self {
        Self {
            tour_name: tour_name.into(),
            roster,
            demos,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let selected = match config.selected_demos() {
            Some(names) => demos::select(names)?,
            None => demos::all(),
        };
        Ok(Self::new(config.tour_name(), config.roster().to_vec(), selected))
    }

    pub fn new_with_monitoring(mut self, monitor_enabled: bool) -> Self {
        self.monitor = SystemMonitor::new(monitor_enabled);
        self
    }

    pub fn demo_names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|d| d.name()).collect()
    }

    pub fn run(&self) -> Result<TourReport> {
        self.run_with(|_| {})
    }

    /// 每完成一個示範就呼叫 `on_demo`，讓呼叫端可以即時輸出
    pub fn run_with<F>(&self, mut on_demo: F) -> Result<TourReport>
    where
        F: FnMut(&DemoReport),
    {
        tracing::info!(
            "🚀 Starting tour '{}' with {} demos",
            self.tour_name,
            self.demos.len()
        );
        self.monitor.log_stats("start");

        let mut reports = Vec::with_capacity(self.demos.len());
        for demo in &self.demos {
            tracing::debug!("Running demo '{}': {}", demo.name(), demo.description());
            let started = Instant::now();

            let ctx = DemoContext::new(demo.name(), self.roster.clone());
            if let Err(e) = demo.run(&ctx) {
                tracing::error!("❌ Demo '{}' failed: {}", demo.name(), e);
                return Err(e);
            }

            let report = DemoReport {
                name: demo.name().to_string(),
                lines: ctx.into_lines(),
                duration_ms: started.elapsed().as_millis(),
            };
            tracing::debug!(
                "Demo '{}' produced {} lines in {}ms",
                report.name,
                report.lines.len(),
                report.duration_ms
            );
            self.monitor.log_stats(demo.name());

            on_demo(&report);
            reports.push(report);
        }

        self.monitor.log_final_stats();
        tracing::info!("✅ Tour '{}' completed", self.tour_name);

        Ok(TourReport {
            tour_name: self.tour_name.clone(),
            generated_at: Utc::now(),
            demos: reports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::default_roster;
    use crate::utils::error::TourError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MockDemo {
        name: &'static str,
        fail: bool,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Demo for MockDemo {
        fn name(&self) -> &'static str {
            self.name
        }

        fn run(&self, ctx: &DemoContext) -> Result<()> {
            self.log.borrow_mut().push(self.name);
            ctx.emit(format!("{} saw {} persons", self.name, ctx.roster().len()));
            if self.fail {
                return Err(TourError::NoValuePresent);
            }
            Ok(())
        }
    }

    fn mock(name: &'static str, fail: bool, log: &Rc<RefCell<Vec<&'static str>>>) -> Box<dyn Demo> {
        Box::new(MockDemo {
            name,
            fail,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_runs_demos_in_declared_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let engine = TourEngine::new(
            "test",
            default_roster(),
            vec![mock("b", false, &log), mock("a", false, &log), mock("c", false, &log)],
        );

        let report = engine.run().unwrap();

        assert_eq!(*log.borrow(), vec!["b", "a", "c"]);
        assert_eq!(engine.demo_names(), vec!["b", "a", "c"]);
        assert_eq!(report.demos.len(), 3);
        assert_eq!(report.demo("a").unwrap().lines, vec!["a saw 8 persons"]);
    }

    #[test]
    fn test_error_stops_the_tour() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let engine = TourEngine::new(
            "test",
            default_roster(),
            vec![mock("a", false, &log), mock("b", true, &log), mock("c", false, &log)],
        );

        let mut finished = Vec::new();
        let result = engine.run_with(|report| finished.push(report.name.clone()));

        assert!(matches!(result, Err(TourError::NoValuePresent)));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(finished, vec!["a"]);
    }

    #[test]
    fn test_report_formats() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let engine = TourEngine::new("formats", Vec::new(), vec![mock("only", false, &log)]);
        let report = engine.run().unwrap();

        assert_eq!(report.to_text(), "== only ==\nonly saw 0 persons");

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["tour_name"], "formats");
        assert_eq!(json["demos"][0]["lines"][0], "only saw 0 persons");
    }
}
