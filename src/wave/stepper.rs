//! Integer wave stepper
//!
//! A two-state machine that walks the wave endpoint one LED per frame:
//! `flow_length` steps forward, then `ebb_length` steps back, re-anchoring
//! the sweep start at every turn. Reaching the far end of the strip forces
//! a full ebb back toward the start.

use super::{Direction, StepShape};

/// One frame of stepper output
///
/// Captured before the state machine moves, so it describes the frame the
/// caller should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepFrame {
    /// Wave endpoint for this frame
    pub pos: i32,
    /// Direction the wave is travelling this frame
    pub direction: Direction,
    /// Position where the current sweep started
    pub start_pos: i32,
    /// The whole canvas must be re-set to the ebb hue first
    pub reset_canvas: bool,
}

/// Per-instance state of the stepping wave animation
#[derive(Debug, Clone)]
pub struct WaveStepper {
    shape: StepShape,
    pos: i32,
    direction: Direction,
    start_pos: i32,
}

impl WaveStepper {
    pub const fn new(shape: StepShape) -> Self {
        Self {
            shape,
            pos: 0,
            direction: Direction::Flow,
            start_pos: 0,
        }
    }

    pub const fn position(&self) -> i32 {
        self.pos
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn start_pos(&self) -> i32 {
        self.start_pos
    }

    /// Restart the animation from the strip start
    pub fn reset(&mut self) {
        self.pos = 0;
        self.direction = Direction::Flow;
        self.start_pos = 0;
    }

    /// Produce this frame's drawing state, then move the endpoint
    ///
    /// Turn conditions are checked on the drawn position: flow turns to
    /// ebb at `start_pos + flow_length`, ebb turns back at
    /// `start_pos - ebb_length`, and the far strip end forces an ebb with
    /// the sweep start reset to `ebb_length`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn advance(&mut self, num_to_fill: usize) -> StepFrame {
        let frame = StepFrame {
            pos: self.pos,
            direction: self.direction,
            start_pos: self.start_pos,
            reset_canvas: self.pos == 0,
        };

        match self.direction {
            Direction::Flow => {
                if self.pos == self.start_pos + self.shape.flow_length() {
                    self.direction = Direction::Ebb;
                    self.start_pos = self.pos;
                }
            }
            Direction::Ebb => {
                if self.pos == self.start_pos - self.shape.ebb_length() {
                    self.direction = Direction::Flow;
                    self.start_pos = self.pos;
                }
            }
        }

        if self.pos == num_to_fill as i32 {
            self.direction = Direction::Ebb;
            self.start_pos = self.shape.ebb_length();
        }

        self.pos += self.direction.signum();
        frame
    }
}
