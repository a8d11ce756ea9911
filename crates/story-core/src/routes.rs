//! Static branching data: which scene a trigger leads to from which scene.

use crate::error::StoryError;
use fnv::FnvHashMap;

/// A user-initiated navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Advance,
    ChoiceA,
    ChoiceB,
    Restart,
}

impl Trigger {
    /// Map a key name (DOM `KeyboardEvent.key` spelling) to a trigger.
    pub fn from_key(key: &str) -> Option<Trigger> {
        match key {
            " " | "Enter" | "ArrowRight" | "n" | "N" => Some(Trigger::Advance),
            "1" | "a" | "A" => Some(Trigger::ChoiceA),
            "2" | "b" | "B" => Some(Trigger::ChoiceB),
            "r" | "R" => Some(Trigger::Restart),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    To(usize),
    /// The trigger does nothing from this scene (e.g. "next" while a choice
    /// is pending).
    Blocked,
}

/// `(scene index, trigger) -> route`. Anything not listed falls back to the
/// sequencer's default: Advance goes to the next scene, choices go nowhere.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: FnvHashMap<(usize, Trigger), Route>,
    restart: usize,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, from: usize, trigger: Trigger, to: usize) -> Self {
        self.routes.insert((from, trigger), Route::To(to));
        self
    }

    pub fn block(mut self, from: usize, trigger: Trigger) -> Self {
        self.routes.insert((from, trigger), Route::Blocked);
        self
    }

    pub fn restart_at(mut self, index: usize) -> Self {
        self.restart = index;
        self
    }

    #[inline]
    pub fn lookup(&self, from: usize, trigger: Trigger) -> Option<Route> {
        self.routes.get(&(from, trigger)).copied()
    }

    #[inline]
    pub fn restart_index(&self) -> usize {
        self.restart
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every source and target must name a real scene.
    pub fn validate(&self, count: usize) -> Result<(), StoryError> {
        if self.restart >= count {
            return Err(StoryError::RestartOutOfRange {
                index: self.restart,
                count,
            });
        }
        let mut entries: Vec<_> = self.routes.iter().collect();
        entries.sort_by_key(|((from, _), _)| *from);
        for (&(from, trigger), route) in entries {
            let to = match *route {
                Route::To(to) => to,
                Route::Blocked => from,
            };
            if from >= count || to >= count {
                return Err(StoryError::RouteOutOfRange {
                    from,
                    trigger,
                    to,
                    count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_distinguishes_blocked_from_absent() {
        let table = RouteTable::new()
            .route(7, Trigger::ChoiceA, 8)
            .block(7, Trigger::Advance);
        assert_eq!(table.lookup(7, Trigger::ChoiceA), Some(Route::To(8)));
        assert_eq!(table.lookup(7, Trigger::Advance), Some(Route::Blocked));
        assert_eq!(table.lookup(6, Trigger::Advance), None);
    }

    #[test]
    fn validate_rejects_targets_past_the_end() {
        let table = RouteTable::new().route(2, Trigger::ChoiceB, 12);
        assert_eq!(
            table.validate(10),
            Err(StoryError::RouteOutOfRange {
                from: 2,
                trigger: Trigger::ChoiceB,
                to: 12,
                count: 10
            })
        );
        assert!(RouteTable::new().restart_at(3).validate(3).is_err());
    }
}
