use super::presenter::RotationTicket;

/// Where a draw attempt stands. At most one attempt is ever past `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPhase {
    Idle,
    Requesting,
    Spinning(RotationTicket),
    Revealing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawEvent {
    Trigger,
    OutcomeResolved(RotationTicket),
    RequestFailed,
    RotationFinished(RotationTicket),
    Acknowledged,
}

impl DrawPhase {
    /// Next phase, or `None` when the event does not apply. A second trigger
    /// while busy and a completion for another spin both land here.
    pub fn next(self, event: DrawEvent) -> Option<DrawPhase> {
        match (self, event) {
            (DrawPhase::Idle, DrawEvent::Trigger) => Some(DrawPhase::Requesting),
            (DrawPhase::Requesting, DrawEvent::OutcomeResolved(ticket)) => {
                Some(DrawPhase::Spinning(ticket))
            }
            (DrawPhase::Requesting, DrawEvent::RequestFailed) => Some(DrawPhase::Idle),
            (DrawPhase::Spinning(active), DrawEvent::RotationFinished(ticket))
                if active.id == ticket.id =>
            {
                Some(DrawPhase::Revealing)
            }
            (DrawPhase::Revealing, DrawEvent::Acknowledged) => Some(DrawPhase::Idle),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DrawPhase::Idle)
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, DrawPhase::Spinning(_))
    }
}
