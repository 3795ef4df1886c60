/// One bookable calendar week in the fixed seasonal catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSlot {
    pub label: &'static str,
    /// Weekly rate in whole dollars. None for weeks sold through the
    /// listing platform, shown as "BOOKED".
    pub price: Option<u32>,
    pub available: bool,
}

impl WeekSlot {
    /// Price of the slot if it can actually be selected.
    pub fn bookable_price(&self) -> Option<u32> {
        if self.available { self.price } else { None }
    }
}

/// Season catalog for the current year, Saturday-to-Saturday weeks.
/// Defined at build time and never mutated at runtime.
pub const WEEK_CATALOG: &[WeekSlot] = &[
    WeekSlot { label: "June 7-14", price: None, available: false },
    WeekSlot { label: "June 14-21", price: None, available: false },
    WeekSlot { label: "June 21-28", price: None, available: false },
    WeekSlot { label: "June 28-July 5", price: None, available: false },
    WeekSlot { label: "July 5-12", price: None, available: false },
    WeekSlot { label: "July 12-19", price: Some(6800), available: true },
    WeekSlot { label: "July 19-26", price: None, available: false },
    WeekSlot { label: "July 26-Aug 2", price: None, available: false },
    WeekSlot { label: "Aug 2-9", price: None, available: false },
    WeekSlot { label: "Aug 9-16", price: None, available: false },
    WeekSlot { label: "Aug 16-23", price: None, available: false },
    WeekSlot { label: "Aug 23-30", price: Some(7300), available: true },
    WeekSlot { label: "Aug 30-Sep 6", price: None, available: false },
    WeekSlot { label: "Sep 6-13", price: None, available: false },
    WeekSlot { label: "Sep 13-20", price: None, available: false },
    WeekSlot { label: "Sep 20-27", price: None, available: false },
];

pub fn find_week(label: &str) -> Option<&'static WeekSlot> {
    WEEK_CATALOG.iter().find(|w| w.label == label)
}
