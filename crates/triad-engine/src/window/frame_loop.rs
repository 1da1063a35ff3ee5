/// Frame loop state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Exiting,
}

/// Bookkeeping for the `Running -> Exiting` frame loop.
///
/// Enforces that OS events are polled between two presentations: after a
/// frame is presented, no new frame may begin until the next poll is
/// recorded. Once `Exiting`, nothing else is accepted.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    polled_since_present: bool,
    polls: u64,
    presented: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            // Window creation itself drains the first batch of events.
            polled_since_present: true,
            polls: 0,
            presented: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Records that pending OS events were dispatched.
    pub fn record_poll(&mut self) {
        if self.is_running() {
            self.polls += 1;
            self.polled_since_present = true;
        }
    }

    /// Returns `true` if a frame may be drawn now, consuming the poll.
    pub fn begin_frame(&mut self) -> bool {
        if !self.is_running() || !self.polled_since_present {
            return false;
        }
        self.polled_since_present = false;
        true
    }

    /// Records a successful presentation.
    pub fn record_present(&mut self) {
        self.presented += 1;
    }

    /// Moves to `Exiting`. Returns `true` on the first call only.
    pub fn request_exit(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = LoopState::Exiting;
        was_running
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
