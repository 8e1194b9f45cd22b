use rand::Rng;

pub const DIE_FACES: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceOutcome {
    /// Both dice show 1.
    Lose,
    /// Both dice match and are not 1.
    Win,
    /// The dice differ.
    Pending,
}

/// Roll a single die: a uniform integer in `1..=6`.
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_FACES)
}

/// Two independently rolled dice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDice {
    left: u8,
    right: u8,
}

impl TwoDice {
    /// Start on differing faces so a fresh pair is neither a win nor a loss.
    pub fn new() -> Self {
        Self { left: 1, right: 2 }
    }

    pub fn left(&self) -> u8 {
        self.left
    }

    pub fn right(&self) -> u8 {
        self.right
    }

    pub fn roll_left(&mut self) {
        self.roll_left_with(&mut rand::rng());
    }

    pub fn roll_right(&mut self) {
        self.roll_right_with(&mut rand::rng());
    }

    pub fn roll_left_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.left = roll(rng);
        tracing::trace!(left = self.left, "rolled left die");
    }

    pub fn roll_right_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.right = roll(rng);
        tracing::trace!(right = self.right, "rolled right die");
    }

    pub fn outcome(&self) -> DiceOutcome {
        match (self.left, self.right) {
            (1, 1) => DiceOutcome::Lose,
            (l, r) if l == r => DiceOutcome::Win,
            _ => DiceOutcome::Pending,
        }
    }
}

impl Default for TwoDice {
    fn default() -> Self {
        Self::new()
    }
}
