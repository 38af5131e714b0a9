//! Progress accounting over characters and phases.

use callsheet_core::{GenerationPhase, ProgressEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Distance kept below a character's boundary until it completes.
const BOUNDARY_GAP: f64 = 0.01;

/// Percentage at which character `index` of `total` starts.
pub fn character_start(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    100.0 * index as f64 / total as f64
}

/// Percentage after `phase` of character `index` finishes, held just below
/// the character's completion boundary.
pub fn phase_percentage(index: usize, total: usize, phase: GenerationPhase) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let fraction = (phase.index() + 1) as f64 / GenerationPhase::COUNT as f64;
    let raw = 100.0 * (index as f64 + fraction) / total as f64;
    raw.min(character_start(index + 1, total) - BOUNDARY_GAP)
}

/// Single writer of progress events for one run.
///
/// Percentages never decrease. After [`silence`](Self::silence) nothing
/// more is sent. A dropped receiver is tolerated.
#[derive(Debug)]
pub struct ProgressReporter {
    sender: Option<UnboundedSender<ProgressEvent>>,
    total: usize,
    last: f64,
    silenced: bool,
}

impl ProgressReporter {
    /// Reporter for a roster of `total` characters.
    pub fn new(sender: Option<UnboundedSender<ProgressEvent>>, total: usize) -> Self {
        Self {
            sender,
            total,
            last: 0.0,
            silenced: false,
        }
    }

    /// Last percentage sent.
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Character `index` begins.
    pub fn character_started(&mut self, name: &str, index: usize) {
        let percentage = self.clamp(character_start(index, self.total));
        self.emit(ProgressEvent::character(
            name,
            index,
            self.total,
            format!("Generating materials for {} ({}/{})", name, index + 1, self.total),
            percentage,
        ));
    }

    /// A phase of character `index` finished.
    pub fn phase_completed(&mut self, name: &str, index: usize, phase: GenerationPhase) {
        let percentage = self.clamp(phase_percentage(index, self.total, phase));
        self.emit(ProgressEvent::phase(
            name,
            index,
            self.total,
            phase,
            format!("Finished {} phase for {}", phase, name),
            percentage,
        ));
    }

    /// All phases of character `index` finished.
    pub fn character_completed(&mut self, name: &str, index: usize) {
        let percentage = self.clamp(character_start(index + 1, self.total));
        self.emit(ProgressEvent::character(
            name,
            index,
            self.total,
            format!("Completed materials for {}", name),
            percentage,
        ));
    }

    /// The run finished.
    pub fn complete(&mut self, generated: usize) {
        let percentage = self.clamp(100.0);
        self.emit(ProgressEvent::complete(
            format!("Generated materials for {} of {} characters", generated, self.total),
            percentage,
        ));
    }

    /// Stop emitting for the rest of the run.
    pub fn silence(&mut self) {
        self.silenced = true;
    }

    fn clamp(&self, percentage: f64) -> f64 {
        percentage.max(self.last)
    }

    fn emit(&mut self, event: ProgressEvent) {
        if self.silenced {
            return;
        }
        self.last = event.percentage;
        let dropped = match &self.sender {
            Some(sender) => sender.send(event).is_err(),
            None => false,
        };
        if dropped {
            debug!("Progress receiver dropped");
            self.sender = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsheet_core::ProgressKind;
    use tokio::sync::mpsc;

    #[test]
    fn test_phase_percentages() {
        assert_eq!(character_start(1, 4), 25.0);
        let core = phase_percentage(0, 2, GenerationPhase::Core);
        assert!((core - 100.0 / 6.0).abs() < 1e-9);
        assert!((phase_percentage(0, 2, GenerationPhase::Practice) - 49.99).abs() < 1e-9);
        assert!((phase_percentage(2, 3, GenerationPhase::Practice) - 99.99).abs() < 1e-9);
    }

    #[test]
    fn test_reporter_sequence_is_monotonic() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(Some(tx), 2);
        for (index, name) in ["Jace", "Marisol"].into_iter().enumerate() {
            reporter.character_started(name, index);
            for phase in [
                GenerationPhase::Core,
                GenerationPhase::Relationships,
                GenerationPhase::Practice,
            ] {
                reporter.phase_completed(name, index, phase);
            }
            reporter.character_completed(name, index);
        }
        reporter.complete(2);

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 11);
        assert!(events.windows(2).all(|w| w[0].percentage <= w[1].percentage));
        assert_eq!(events[4].percentage, 50.0);
        let last = events.last().unwrap();
        assert_eq!(last.kind, ProgressKind::Complete);
        assert_eq!(last.percentage, 100.0);
    }

    #[test]
    fn test_empty_roster_completes_at_100() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(Some(tx), 0);
        reporter.complete(0);
        let event = rx.try_recv().unwrap();
        assert_eq!(event.percentage, 100.0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_silenced_reporter_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut reporter = ProgressReporter::new(Some(tx), 1);
        reporter.character_started("Jace", 0);
        reporter.silence();
        reporter.phase_completed("Jace", 0, GenerationPhase::Core);
        reporter.complete(0);
        assert_eq!(rx.try_recv().unwrap().kind, ProgressKind::Character);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_tolerated() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut reporter = ProgressReporter::new(Some(tx), 1);
        reporter.character_started("Jace", 0);
        reporter.complete(1);
        assert_eq!(reporter.last(), 100.0);
    }
}
