//! Calendar view use case

use crate::domain::EntryCollection;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{Datelike, NaiveDate};

/// One month of calendar data: a Sunday-first cell grid plus the entries
/// that fall inside the month
#[derive(Debug)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Leading `None` cells pad the first week so day 1 lands on its weekday
    pub cells: Vec<Option<NaiveDate>>,
    pub entries: EntryCollection,
}

/// Build the calendar view for one month.
pub fn month_view(repository: &FileSystemRepository, year: i32, month: u32) -> Result<MonthView> {
    let collection = repository.entry_store().load_all()?;

    let entries = collection
        .into_iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .collect();

    Ok(MonthView {
        year,
        month,
        cells: month_cells(year, month),
        entries,
    })
}

/// Grid cells for a month, padded with `None` up to the first day's
/// weekday (Sunday-first)
pub fn month_cells(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];

    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    cells
}
