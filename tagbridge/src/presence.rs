// tagbridge/src/presence.rs

use crate::types::Uid;

/// Transition produced by one poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    /// A tag (new or swapped in) is now in the field
    Entered(Uid),
    /// The tag that was present is gone
    Left(Uid),
}

/// Last UID seen by the poll loop. Starts empty and lives as long as the
/// loop that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceState {
    last_uid: Option<Uid>,
}

impl PresenceState {
    /// Nothing seen yet
    pub fn new() -> Self {
        Self::default()
    }

    /// UID of the tag currently in the field
    pub fn last_uid(&self) -> Option<&Uid> {
        self.last_uid.as_ref()
    }

    /// Feed the UID from the current scan (or None) and get the transition.
    /// A different UID replacing the old one in a single poll is reported
    /// as `Entered` only.
    pub fn observe(&mut self, current: Option<&Uid>) -> Option<PresenceEvent> {
        match current {
            Some(cur) if self.last_uid.as_ref() == Some(cur) => None,
            Some(cur) => {
                self.last_uid = Some(cur.clone());
                Some(PresenceEvent::Entered(cur.clone()))
            }
            None => self.last_uid.take().map(PresenceEvent::Left),
        }
    }
}
