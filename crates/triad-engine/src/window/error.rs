use std::fmt;

/// Process status on normal termination.
pub const EXIT_SUCCESS: u8 = 0;
/// Process status when the window, its context, or the scene could not be
/// created. `-1` truncated to the 8 bits a process status carries.
pub const EXIT_STARTUP_FAILURE: u8 = -1i8 as u8;
/// Process status for any other runtime error.
pub const EXIT_FAILURE: u8 = 1;

/// Startup step that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StartupStage {
    EventLoop,
    Window,
    Context,
    Scene,
}

impl fmt::Display for StartupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StartupStage::EventLoop => "initialize the windowing library",
            StartupStage::Window => "create the window",
            StartupStage::Context => "create the rendering context",
            StartupStage::Scene => "set up the scene",
        })
    }
}

/// Fatal startup failure. Nothing past the failed stage was attempted.
#[derive(Debug)]
pub struct StartupError {
    pub stage: StartupStage,
    source: anyhow::Error,
}

impl StartupError {
    pub fn new(stage: StartupStage, source: impl Into<anyhow::Error>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {}: {:#}", self.stage, self.source)
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Maps a run result to the process status.
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) if e.chain().any(|c| c.is::<StartupError>()) => EXIT_STARTUP_FAILURE,
        Err(_) => EXIT_FAILURE,
    }
}
