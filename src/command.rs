//! Control commands for the render loop
//!
//! A bounded, interrupt-safe queue carries commands from a controlling
//! task (buttons, serial console) into the render loop, which drains it
//! once per frame. Built on `critical-section` and `heapless::Deque` so
//! it works without an allocator or OS.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::bounds::RenderingBounds;
use crate::effect::EffectId;

/// A state change requested from outside the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch to a new animation
    SwitchEffect(EffectId),
    /// Set the target brightness
    SetBrightness(u8),
    /// Change the rendered strip segment
    SetBounds(RenderingBounds),
    /// Fade the strip in to the stored target brightness
    PowerOn,
    /// Fade the strip out to black, keeping the target brightness
    PowerOff,
}

/// Error returned when sending to a full queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFullError(pub Command);

/// A bounded, thread-safe command queue
///
/// Synchronized with critical sections, so senders may live in interrupt
/// context. Exactly one receiver (the render loop) should drain it.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for this queue
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    fn try_send(&self, command: Command) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFullError)
        })
    }

    fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command
    ///
    /// Returns `Err(QueueFullError(command))` if the queue is full.
    pub fn try_send(&self, command: Command) -> Result<(), QueueFullError> {
        self.queue.try_send(command)
    }
}

/// A receiver handle for a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the next pending command, if any
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.try_receive()
    }
}
