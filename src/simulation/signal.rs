//! Traffic signal state machines
//!
//! One independent red/green/yellow cycle per fixture, advanced by the world
//! tick. Fixtures also carry the footprint the collision resolver checks
//! around their connector poles.

use super::types::Position;

/// Footprint half-width around a fixture's connector pole: half the pole
/// width plus the clearance pad.
pub const DEFAULT_FOOTPRINT_HALF_WIDTH: f32 = 1.02;

/// Phase of a signal head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Red = 0,
    Green = 1,
    Yellow = 2,
}

/// One row of the signal cycle: how long a state holds and what follows it.
struct Phase {
    min_dwell_secs: f32,
    next: SignalState,
}

/// Cycle table indexed by state discriminant.
static CYCLE: [Phase; 3] = [
    // Red
    Phase {
        min_dwell_secs: 2.0,
        next: SignalState::Green,
    },
    // Green
    Phase {
        min_dwell_secs: 2.0,
        next: SignalState::Yellow,
    },
    // Yellow
    Phase {
        min_dwell_secs: 1.0,
        next: SignalState::Red,
    },
];

impl SignalState {
    fn phase(self) -> &'static Phase {
        &CYCLE[self as usize]
    }
}

/// A traffic signal installation at a fixed world position.
#[derive(Debug, Clone)]
pub struct SignalFixture {
    pub position: Position,
    /// Half-width of the square footprint the collision resolver excludes.
    pub footprint_half_width: f32,
    pub state: SignalState,
    /// Seconds accumulated in the current state.
    pub time_in_state: f32,
}

impl SignalFixture {
    pub fn new(position: Position, footprint_half_width: f32) -> Self {
        Self {
            position,
            footprint_half_width,
            state: SignalState::Red,
            time_in_state: 0.0,
        }
    }

    /// Accumulate dwell time and transition once the minimum hold expires.
    ///
    /// The check is `>=`, so any overshoot is carried into the next state by
    /// the following tick's accumulation rather than corrected here.
    pub fn advance(&mut self, delta_secs: f32) {
        self.time_in_state += delta_secs;

        let phase = self.state.phase();
        if self.time_in_state >= phase.min_dwell_secs {
            self.state = phase.next;
            self.time_in_state = 0.0;
        }
    }

    /// On/off state of the three lamp slots in red, green, yellow order.
    ///
    /// Derived view for the renderer; exactly one lamp is lit at a time.
    pub fn lights(&self) -> [bool; 3] {
        [
            self.state == SignalState::Red,
            self.state == SignalState::Green,
            self.state == SignalState::Yellow,
        ]
    }

    /// Whether a position falls inside this fixture's square footprint.
    pub fn blocks(&self, position: &Position) -> bool {
        (position.x - self.position.x).abs() <= self.footprint_half_width
            && (position.z - self.position.z).abs() <= self.footprint_half_width
    }
}
