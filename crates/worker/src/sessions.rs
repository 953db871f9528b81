//! The sample focus sessions the batch mints artifacts for.

use focusnft_core::types::DurationMinutes;

/// One sample session: who focused, for how long, and what kind of session
/// it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDescriptor {
    pub duration: DurationMinutes,
    pub user: &'static str,
    pub session_type: &'static str,
}

/// Sample sessions, in batch order.
pub const SAMPLE_SESSIONS: [SessionDescriptor; 6] = [
    SessionDescriptor {
        duration: 25,
        user: "focus-master",
        session_type: "Pomodoro Session",
    },
    SessionDescriptor {
        duration: 30,
        user: "productivity-guru",
        session_type: "Focus Sprint",
    },
    SessionDescriptor {
        duration: 45,
        user: "deep-thinker",
        session_type: "Deep Work",
    },
    SessionDescriptor {
        duration: 60,
        user: "meditation-monk",
        session_type: "Hour of Power",
    },
    SessionDescriptor {
        duration: 90,
        user: "flow-state",
        session_type: "Extended Focus",
    },
    SessionDescriptor {
        duration: 120,
        user: "focus-legend",
        session_type: "Ultra Session",
    },
];
