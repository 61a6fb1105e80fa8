/// Proof that a response belongs to a particular request on a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// Latest-request-wins bookkeeping for one kind of in-flight request.
///
/// Issuing a ticket or invalidating the slot makes every earlier ticket stale.
#[derive(Debug, Default, Clone)]
pub struct RequestSlot {
    generation: u64,
}

impl RequestSlot {
    pub fn issue(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Consumes the slot's current ticket. A response may be applied at most once.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.invalidate();
        true
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}
