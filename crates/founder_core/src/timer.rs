//! Deep-work focus timer.
//!
//! # Responsibility
//! - Count running seconds driven by the caller's once-per-second callback.
//! - Fire a notifier each time elapsed time reaches a milestone multiple.
//!
//! # Invariants
//! - `tick` is a no-op while stopped.
//! - A milestone fires exactly once per multiple of the interval.
//! - `reset` stops the timer and zeroes the counter.
//!
//! # See also
//! - `format_clock` for the `HH:MM:SS` display.

use log::info;

const DEFAULT_MILESTONE_SECS: u64 = 3600;
const DEFAULT_MILESTONE_MESSAGE: &str = "Good work, that is a full hour of focus. \
Keep going for the next hour and take a mock test now.";

/// Milestone settings for a focus session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimerConfig {
    /// Seconds between milestones. Zero disables milestones.
    pub milestone_interval_secs: u64,
    pub message: String,
}

impl Default for FocusTimerConfig {
    fn default() -> Self {
        Self {
            milestone_interval_secs: DEFAULT_MILESTONE_SECS,
            message: DEFAULT_MILESTONE_MESSAGE.to_string(),
        }
    }
}

/// Receives milestone notifications. Delivery (speech, toast, log) is up
/// to the implementor.
pub trait MilestoneNotifier {
    /// `milestone` counts from 1 for the first interval reached.
    fn on_milestone(&mut self, milestone: u64, message: &str);
}

impl<F> MilestoneNotifier for F
where
    F: FnMut(u64, &str),
{
    fn on_milestone(&mut self, milestone: u64, message: &str) {
        self(milestone, message)
    }
}

/// Notifier that records milestones in the core log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl MilestoneNotifier for LogNotifier {
    fn on_milestone(&mut self, milestone: u64, _message: &str) {
        info!("event=focus_milestone module=timer status=ok milestone={milestone}");
    }
}

pub struct FocusTimer<N: MilestoneNotifier = LogNotifier> {
    config: FocusTimerConfig,
    notifier: N,
    elapsed_secs: u64,
    running: bool,
}

impl FocusTimer<LogNotifier> {
    pub fn new(config: FocusTimerConfig) -> Self {
        Self::with_notifier(config, LogNotifier)
    }
}

impl Default for FocusTimer<LogNotifier> {
    fn default() -> Self {
        Self::new(FocusTimerConfig::default())
    }
}

impl<N: MilestoneNotifier> FocusTimer<N> {
    pub fn with_notifier(config: FocusTimerConfig, notifier: N) -> Self {
        Self {
            config,
            notifier,
            elapsed_secs: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pauses without clearing elapsed time.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Advances one second while running and returns the new elapsed value.
    pub fn tick(&mut self) -> u64 {
        if !self.running {
            return self.elapsed_secs;
        }
        self.elapsed_secs += 1;
        let interval = self.config.milestone_interval_secs;
        if interval > 0 && self.elapsed_secs % interval == 0 {
            self.notifier
                .on_milestone(self.elapsed_secs / interval, &self.config.message);
        }
        self.elapsed_secs
    }

    pub fn display(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Renders seconds as zero-padded `HH:MM:SS`. Hours grow past two digits.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::{format_clock, FocusTimer, FocusTimerConfig};

    fn config(interval: u64) -> FocusTimerConfig {
        FocusTimerConfig {
            milestone_interval_secs: interval,
            message: "keep going".to_string(),
        }
    }

    #[test]
    fn tick_is_noop_while_stopped() {
        let mut timer = FocusTimer::new(config(3));
        assert_eq!(timer.tick(), 0);
        timer.start();
        assert_eq!(timer.tick(), 1);
        timer.stop();
        assert_eq!(timer.tick(), 1);
    }

    #[test]
    fn milestones_fire_once_per_interval() {
        let mut fired = Vec::new();
        {
            let mut timer = FocusTimer::with_notifier(config(3), |milestone: u64, message: &str| {
                fired.push((milestone, message.to_string()));
            });
            timer.start();
            for _ in 0..7 {
                timer.tick();
            }
        }
        assert_eq!(
            fired,
            vec![(1, "keep going".to_string()), (2, "keep going".to_string())]
        );
    }

    #[test]
    fn reset_stops_and_zeroes() {
        let mut timer = FocusTimer::new(config(0));
        timer.toggle();
        timer.tick();
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_secs(), 0);
        assert_eq!(timer.display(), "00:00:00");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(3661), "01:01:01");
        assert_eq!(format_clock(59), "00:00:59");
        assert_eq!(format_clock(360_000), "100:00:00");
    }
}
