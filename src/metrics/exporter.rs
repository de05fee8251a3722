use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::SimMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for simulator metrics snapshots.
///
/// Writes in the Prometheus text exposition format so sweep drivers can dump
/// per-instance counters for scraping or offline diffing.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
            .into_inner()
            .expect("metrics exporter writer poisoned")
    }

    fn write_counter(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} counter", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .expect("metrics exporter writer poisoned");
        let _ = writeln!(writer, "# TYPE {} gauge", name);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<SimMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &SimMetricsSnapshot) {
        self.write_counter(&self.metric_name("add_calls_total"), snapshot.add_calls);
        self.write_counter(&self.metric_name("add_hits_total"), snapshot.add_hits);
        self.write_counter(&self.metric_name("add_misses_total"), snapshot.add_misses);
        self.write_counter(
            &self.metric_name("evicted_entries_total"),
            snapshot.evicted_entries,
        );
        self.write_counter(
            &self.metric_name("remove_calls_total"),
            snapshot.remove_calls,
        );
        self.write_counter(
            &self.metric_name("remove_found_total"),
            snapshot.remove_found,
        );
        self.write_counter(
            &self.metric_name("split_requests_total"),
            snapshot.split_requests,
        );
        self.write_counter(
            &self.metric_name("split_blocks_total"),
            snapshot.split_blocks,
        );
        self.write_counter(&self.metric_name("check_calls_total"), snapshot.check_calls);
        self.write_counter(&self.metric_name("check_hits_total"), snapshot.check_hits);
        self.write_gauge(
            &self.metric_name("resident_keys"),
            snapshot.resident_len as u64,
        );
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
        self.write_gauge(&self.metric_name("clock"), snapshot.clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_prometheus_text() {
        let exporter = PrometheusTextExporter::new("replay", Vec::new());
        let snapshot = SimMetricsSnapshot {
            add_calls: 10,
            add_hits: 4,
            add_misses: 6,
            evicted_entries: 3,
            resident_len: 2,
            capacity: 2,
            clock: 10,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_writer()).unwrap();
        assert!(text.contains("# TYPE replay_add_calls_total counter"));
        assert!(text.contains("replay_add_calls_total 10"));
        assert!(text.contains("replay_add_hits_total 4"));
        assert!(text.contains("# TYPE replay_resident_keys gauge"));
        assert!(text.contains("replay_clock 10"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&SimMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_writer()).unwrap();
        assert!(text.contains("add_calls_total 0"));
        assert!(!text.contains("_add_calls_total"));
    }
}
