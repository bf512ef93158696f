//! Response DTOs returned to the host

/// What the host should do with a player it just added to a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Not banned, keep the member
    Allowed,
    /// Banned, a deferred kick has been scheduled
    Rejected,
}

impl JoinOutcome {
    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}
