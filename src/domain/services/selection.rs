use crate::domain::models::catalog;

pub const MAX_GUESTS: u32 = 8;
pub const SECURITY_DEPOSIT: i64 = 1000;

/// Markup the listing platform adds on top of the direct rate.
const PLATFORM_MARKUP: f64 = 1.17;

/// Party size split into adults and children. The combined total never
/// exceeds MAX_GUESTS and neither count goes below zero; out-of-range
/// adjustments are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCount {
    pub adults: u32,
    pub children: u32,
}

impl Default for GuestCount {
    fn default() -> Self {
        Self { adults: 2, children: 0 }
    }
}

impl GuestCount {
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    pub fn increment_adults(&mut self) {
        if self.total() < MAX_GUESTS {
            self.adults += 1;
        }
    }

    pub fn decrement_adults(&mut self) {
        self.adults = self.adults.saturating_sub(1);
    }

    pub fn increment_children(&mut self) {
        if self.total() < MAX_GUESTS {
            self.children += 1;
        }
    }

    pub fn decrement_children(&mut self) {
        self.children = self.children.saturating_sub(1);
    }
}

/// Ordered set of selected week labels. Only weeks that are available with
/// a numeric price can enter the set; toggling anything else is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSelection {
    selected: Vec<&'static str>,
}

impl WeekSelection {
    pub fn toggle(&mut self, label: &str) {
        let Some(slot) = catalog::find_week(label) else {
            return;
        };
        if slot.bookable_price().is_none() {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|l| *l == slot.label) {
            self.selected.remove(pos);
        } else {
            self.selected.push(slot.label);
        }
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn contains(&self, label: &str) -> bool {
        self.selected.iter().any(|l| *l == label)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn joined(&self) -> String {
        self.selected.join(", ")
    }

    /// Recomputed on every call; the selection is small enough that caching
    /// would buy nothing.
    pub fn summary(&self) -> PriceSummary {
        let direct_total: i64 = self
            .selected
            .iter()
            .filter_map(|label| catalog::find_week(label))
            .filter_map(|slot| slot.bookable_price())
            .map(i64::from)
            .sum();

        PriceSummary::from_direct_total(direct_total)
    }
}

/// Derived pricing for the current selection. A pure function of the
/// selection, with no lifecycle of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSummary {
    pub direct_total: i64,
    pub platform_total: i64,
    pub security_deposit: i64,
    pub total_with_deposit: i64,
}

impl PriceSummary {
    fn from_direct_total(direct_total: i64) -> Self {
        let platform_total = (direct_total as f64 * PLATFORM_MARKUP).round() as i64;
        Self {
            direct_total,
            platform_total,
            security_deposit: SECURITY_DEPOSIT,
            total_with_deposit: direct_total + SECURITY_DEPOSIT,
        }
    }

    /// What booking direct saves over the platform rate.
    pub fn savings(&self) -> i64 {
        self.platform_total - self.direct_total
    }
}
