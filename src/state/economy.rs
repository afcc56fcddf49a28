//! Score keeping, the swatter purchase, and the end-of-round signal.

use crate::model::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Purchase {
    Purchased,
    AlreadyOwned,
    Insufficient { score: u32, cost: u32 },
}

impl Purchase {
    /// Text for the store's status line.
    pub fn status_text(self) -> &'static str {
        match self {
            Purchase::Purchased | Purchase::AlreadyOwned => "Purchased!",
            Purchase::Insufficient { .. } => "Not enough points!",
        }
    }
}

#[derive(Debug)]
pub struct Economy {
    cost: u32,
    win_score: u32,
    /// Cleared when the completion signal fires; set again for the next round.
    armed: bool,
}

impl Economy {
    pub fn new(cost: u32, win_score: u32) -> Self {
        Self { cost, win_score, armed: true }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Adds `n` points. Returns `true` exactly once per round: on the call
    /// that brings the score to the win threshold.
    pub fn add_score(&mut self, session: &mut Session, n: u32) -> bool {
        session.score = session.score.saturating_add(n);
        if self.armed && session.score >= self.win_score {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn try_purchase(&self, session: &mut Session) -> Purchase {
        if session.has_upgrade {
            return Purchase::AlreadyOwned;
        }
        if session.score < self.cost {
            return Purchase::Insufficient { score: session.score, cost: self.cost };
        }
        session.score -= self.cost;
        session.has_upgrade = true;
        Purchase::Purchased
    }

    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
