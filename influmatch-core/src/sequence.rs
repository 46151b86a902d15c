//! Generation counters that keep late responses from overwriting newer state.

/// Generation number handed out with each issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One counter per piece of state fed by async requests.
///
/// A completion is applied only while its ticket is the latest one issued;
/// anything older is stale.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == ticket.0
    }

    /// Marks every outstanding ticket stale without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
