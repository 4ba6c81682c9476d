//! View logic behind the appointments table.

use crate::models::Appointment;
use std::cmp::Ordering;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Sort appointments newest first.
///
/// The sort is stable, so appointments sharing a date keep their fetch order.
/// Entries whose date cannot be parsed go after every dated entry.
pub fn sort_newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Appointments whose literal `date` field contains `query`.
///
/// An empty query matches everything.
#[must_use]
pub fn filter_by_date<'a>(appointments: &'a [Appointment], query: &str) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|appointment| appointment.date.contains(query))
        .collect()
}

/// A fixed-size page over a result list of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index.
    pub index: usize,
    /// Rows per page.
    pub size: usize,
    /// Number of items being paginated.
    pub total: usize,
}

impl Page {
    /// Page `index` of `total` items in pages of [`PAGE_SIZE`].
    #[must_use]
    pub const fn new(index: usize, total: usize) -> Self {
        Self {
            index,
            size: PAGE_SIZE,
            total,
        }
    }

    /// First item offset of this page.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.index * self.size
    }

    /// Item range of this page, clamped to `total`.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.start().min(self.total);
        let end = (self.start() + self.size).min(self.total);
        start..end
    }

    /// Items of `rows` that fall on this page.
    #[must_use]
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(rows.len());
        &rows[range.start.min(end)..end]
    }

    /// Whether "Previous" is enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Whether "Next" is enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.start() + self.size < self.total
    }

    /// 1-based page number for display.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index + 1
    }
}
