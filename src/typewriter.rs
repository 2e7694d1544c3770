pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 100;
pub const HOLD_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types each role out, holds it, deletes it, then moves to the next one. Loops forever.
///
/// It has no reset; the only input is `tick`.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    roles: Vec<String>,
    role: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Where the cycle currently is: (role index, characters shown, phase).
    pub fn position(&self) -> (usize, usize, Phase) {
        (self.role, self.shown, self.phase)
    }

    pub fn text(&self) -> &str {
        match self.roles.get(self.role) {
            Some(role) => match role.char_indices().nth(self.shown) {
                Some((end, _)) => &role[..end],
                None => role,
            },
            None => "",
        }
    }

    pub fn next_delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => TYPE_DELAY_MS,
            Phase::Holding => HOLD_DELAY_MS,
            Phase::Deleting => DELETE_DELAY_MS,
        }
    }

    /// Advances one step. Returns `false` when there is nothing to cycle.
    pub fn tick(&mut self) -> bool {
        let Some(role) = self.roles.get(self.role) else {
            return false;
        };
        let len = role.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        true
    }
}
