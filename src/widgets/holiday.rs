#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    Christmas,
    Halloween,
    NewYear,
    Thanksgiving,
    ValentinesDay,
}

const BY_ALPHABET: [Holiday; 5] = [
    Holiday::Christmas,
    Holiday::Halloween,
    Holiday::NewYear,
    Holiday::Thanksgiving,
    Holiday::ValentinesDay,
];

const BY_YEAR: [Holiday; 5] = [
    Holiday::NewYear,
    Holiday::ValentinesDay,
    Holiday::Halloween,
    Holiday::Thanksgiving,
    Holiday::Christmas,
];

impl Holiday {
    pub fn name(self) -> &'static str {
        match self {
            Self::Christmas => "Christmas",
            Self::Halloween => "Halloween",
            Self::NewYear => "New Year",
            Self::Thanksgiving => "Thanksgiving",
            Self::ValentinesDay => "Valentine's Day",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Christmas => "🎄",
            Self::Halloween => "🎃",
            Self::NewYear => "🎆",
            Self::Thanksgiving => "🦃",
            Self::ValentinesDay => "💘",
        }
    }

    fn next_in(self, order: &[Holiday]) -> Holiday {
        let index = order.iter().position(|h| *h == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }
}

/// Cycles through holidays, either alphabetically or through the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleHoliday {
    current: Holiday,
}

impl CycleHoliday {
    pub fn new() -> Self {
        Self {
            current: Holiday::NewYear,
        }
    }

    pub fn current(&self) -> Holiday {
        self.current
    }

    pub fn advance_by_alphabet(&mut self) {
        self.current = self.current.next_in(&BY_ALPHABET);
    }

    pub fn advance_by_year(&mut self) {
        self.current = self.current.next_in(&BY_YEAR);
    }
}

impl Default for CycleHoliday {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order_wraps() {
        let mut cycle = CycleHoliday::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            cycle.advance_by_alphabet();
            seen.push(cycle.current().name());
        }
        assert_eq!(
            seen,
            vec!["Thanksgiving", "Valentine's Day", "Christmas", "Halloween", "New Year"]
        );
    }

    #[test]
    fn test_year_order_wraps() {
        let mut cycle = CycleHoliday::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            cycle.advance_by_year();
            seen.push(cycle.current());
        }
        assert_eq!(
            seen,
            vec![
                Holiday::ValentinesDay,
                Holiday::Halloween,
                Holiday::Thanksgiving,
                Holiday::Christmas,
                Holiday::NewYear,
            ]
        );
    }

    #[test]
    fn test_orders_are_sorted() {
        let names: Vec<&str> = BY_ALPHABET.iter().map(|h| h.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_mixed_advancing() {
        let mut cycle = CycleHoliday::new();
        cycle.advance_by_year();
        assert_eq!(cycle.current(), Holiday::ValentinesDay);
        cycle.advance_by_alphabet();
        assert_eq!(cycle.current(), Holiday::Christmas);
        assert_eq!(cycle.current().emoji(), "🎄");
    }
}
