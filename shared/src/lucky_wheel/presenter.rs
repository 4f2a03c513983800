use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use log::debug;

use super::spin::SpinPlan;

const TARGET_TOLERANCE: f64 = 1e-6;

/// Property an animation-end notification refers to. Only `Rotation` can
/// finish a spin; glow, scale and similar effects end on their own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    Rotation,
    Other(&'static str),
}

/// Identifies one spin: which registration it is and the rotation it was issued for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTicket {
    pub id: u64,
    pub target_degrees: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
    pub plan: SpinPlan,
    pub duration_ms: u32,
}

/// Renders the wheel. `start_rotation` animates from `plan.start` to
/// `plan.target` and reports the end through `on_complete`.
pub trait WheelPresenter {
    fn start_rotation(&self, request: RotationRequest, on_complete: RotationCompletion);
}

pub fn rotation_completion(ticket: RotationTicket) -> (RotationCompletion, CompletionSignal) {
    let (tx, rx) = oneshot::channel();
    (
        RotationCompletion {
            ticket,
            slot: Rc::new(RefCell::new(Some(tx))),
        },
        CompletionSignal { ticket, rx },
    )
}

/// Presenter side of a spin registration. Clones share the same one-shot slot.
#[derive(Debug, Clone)]
pub struct RotationCompletion {
    ticket: RotationTicket,
    slot: Rc<RefCell<Option<oneshot::Sender<RotationTicket>>>>,
}

impl RotationCompletion {
    pub fn ticket(&self) -> RotationTicket {
        self.ticket
    }

    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Reports that an animation ended. Returns whether this finished the spin;
    /// other properties, other rotations and repeats are ignored.
    pub fn animation_ended(&self, property: AnimatedProperty, rotation_degrees: f64) -> bool {
        if property != AnimatedProperty::Rotation {
            debug!("Ignoring end of {:?} animation during spin {}", property, self.ticket.id);
            return false;
        }
        if (rotation_degrees - self.ticket.target_degrees).abs() > TARGET_TOLERANCE {
            debug!(
                "Ignoring stale rotation end at {} (spin {} targets {})",
                rotation_degrees, self.ticket.id, self.ticket.target_degrees
            );
            return false;
        }
        match self.slot.borrow_mut().take() {
            Some(tx) => tx.send(self.ticket).is_ok(),
            None => {
                debug!("Spin {} already completed", self.ticket.id);
                false
            }
        }
    }
}

/// Orchestrator side: resolves once with the ticket, or with `Err` when every
/// registration was dropped without firing.
#[derive(Debug)]
pub struct CompletionSignal {
    ticket: RotationTicket,
    rx: oneshot::Receiver<RotationTicket>,
}

impl CompletionSignal {
    pub fn ticket(&self) -> RotationTicket {
        self.ticket
    }
}

impl Future for CompletionSignal {
    type Output = Result<RotationTicket, oneshot::Canceled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}
