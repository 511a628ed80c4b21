use embassy_time::Duration;

/// How often the count is reported while inspection mode is active.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);
/// How often the button is polled once an exit press has been seen.
pub const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Suspendable background work.
///
/// This trait exists as a seam so that a mock can be injected when unit
/// testing the inspection-mode transitions.
pub trait Background {
    fn suspend(&mut self);
    fn resume(&mut self);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Idle,
    Reporting,
    AwaitingRelease,
}

/// What the caller must do next after feeding the controller an observation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Sleep [`REPORT_INTERVAL`], emit a count report, observe again.
    Report,
    /// Sleep [`EXIT_POLL_INTERVAL`], observe again.
    AwaitRelease,
    /// The session is over and background work has been resumed.
    Done,
}

/// Inspection-mode controller.
///
/// On a long press the event loop calls [`enter`](Self::enter) (which
/// suspends background work) and then drives [`observe`](Self::observe) in a
/// loop, sleeping as each returned [`Step`] directs. The button is watched by
/// level polling here, not by its edge events: the event loop is already
/// occupied running this session, so a second engagement is picked up with at
/// most a report interval plus a poll interval of latency.
pub struct InspectionMode {
    state: State,
}

impl InspectionMode {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Begin a session. Suspends `background` and starts periodic reporting.
    /// A no-op unless idle, keeping suspend/resume strictly paired.
    pub fn enter(&mut self, background: &mut impl Background) {
        if self.state == State::Idle {
            background.suspend();
            self.state = State::Reporting;
        }
    }

    /// Feed the current button level and learn what to do next. Resumes
    /// `background` on the release that ends the session.
    pub fn observe(&mut self, button_pressed: bool, background: &mut impl Background) -> Step {
        match self.state {
            State::Idle => Step::Done,
            State::Reporting => {
                if button_pressed {
                    self.state = State::AwaitingRelease;
                    Step::AwaitRelease
                } else {
                    Step::Report
                }
            }
            State::AwaitingRelease => {
                if button_pressed {
                    Step::AwaitRelease
                } else {
                    background.resume();
                    self.state = State::Idle;
                    Step::Done
                }
            }
        }
    }
}

#[mutants::skip]
impl Default for InspectionMode {
    fn default() -> Self {
        Self::new()
    }
}
