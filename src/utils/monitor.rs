use std::fmt;
#[cfg(feature = "monitor")]
use std::sync::Mutex;
#[cfg(feature = "monitor")]
use std::time::{Duration, Instant};
#[cfg(feature = "monitor")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// The three steps of a restructure run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Read,
    Restructure,
    Write,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Read => "read comments",
            Phase::Restructure => "restructure tag_details",
            Phase::Write => "write output",
        };
        f.write_str(label)
    }
}

#[cfg(feature = "monitor")]
#[derive(Debug, Clone)]
pub struct PhaseSample {
    pub phase: Phase,
    pub records: usize,
    pub resident_mb: u64,
    pub peak_mb: u64,
    pub elapsed: Duration,
}

/// Samples this process's resident memory after each phase and reports
/// throughput at the end. Disabled monitors never touch `sysinfo`.
#[cfg(feature = "monitor")]
pub struct SystemMonitor {
    state: Option<Mutex<ProcessProbe>>,
    started: Instant,
}

#[cfg(feature = "monitor")]
struct ProcessProbe {
    system: System,
    pid: Pid,
    peak_mb: u64,
}

#[cfg(feature = "monitor")]
impl ProcessProbe {
    fn resident_mb(&mut self) -> Option<u64> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        let mb = self.system.process(self.pid)?.memory() / 1024 / 1024;
        self.peak_mb = self.peak_mb.max(mb);
        Some(mb)
    }
}

#[cfg(feature = "monitor")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let state = if enabled {
            match sysinfo::get_current_pid() {
                Ok(pid) => Some(Mutex::new(ProcessProbe {
                    system: System::new(),
                    pid,
                    peak_mb: 0,
                })),
                Err(e) => {
                    tracing::warn!("Process stats disabled, cannot read PID: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            state,
            started: Instant::now(),
        }
    }

    pub fn sample(&self, phase: Phase, records: usize) -> Option<PhaseSample> {
        let mut probe = self.state.as_ref()?.lock().ok()?;
        let resident_mb = probe.resident_mb()?;

        Some(PhaseSample {
            phase,
            records,
            resident_mb,
            peak_mb: probe.peak_mb,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_phase(&self, phase: Phase, records: usize) {
        if let Some(sample) = self.sample(phase, records) {
            tracing::info!(
                "📊 {} - {} records, RSS {}MB (peak {}MB), {:?} elapsed",
                sample.phase,
                sample.records,
                sample.resident_mb,
                sample.peak_mb,
                sample.elapsed
            );
        }
    }

    pub fn log_summary(&self, total_records: usize) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let peak_mb = state.lock().map(|probe| probe.peak_mb).unwrap_or(0);
        let elapsed = self.started.elapsed();
        let per_second = total_records as f64 / elapsed.as_secs_f64().max(f64::EPSILON);

        tracing::info!(
            "📊 {} records in {:?} ({:.0} records/s), peak RSS {}MB",
            total_records,
            elapsed,
            per_second,
            peak_mb
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_some()
    }
}

#[cfg(feature = "monitor")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 未啟用 monitor feature 時的空實現
#[cfg(not(feature = "monitor"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "monitor"))]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            tracing::warn!("Monitoring requested but the `monitor` feature is disabled");
        }
        Self
    }

    pub fn log_phase(&self, _phase: Phase, _records: usize) {}

    pub fn log_summary(&self, _total_records: usize) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
