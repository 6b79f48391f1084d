//! Yearly payment totals.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::SalaryEntry;

/// Sums payment amounts per calendar year of their date.
pub fn salary_totals_by_year(entries: &[SalaryEntry]) -> BTreeMap<i32, Decimal> {
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.date.year()).or_insert(Decimal::ZERO) += entry.amount;
    }
    totals
}

/// Sums payment amounts dated in `year`.
///
/// # Example
///
/// ```
/// use attendance_ledger::calculation::yearly_salary_total;
/// use attendance_ledger::models::SalaryEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     SalaryEntry {
///         id: "a".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 1, 27).unwrap(),
///         amount: Decimal::new(1200, 0),
///         note: String::new(),
///     },
///     SalaryEntry {
///         id: "b".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 12, 23).unwrap(),
///         amount: Decimal::new(300, 0),
///         note: "Bonus".to_string(),
///     },
/// ];
///
/// assert_eq!(yearly_salary_total(&entries, 2026), Decimal::new(1200, 0));
/// ```
pub fn yearly_salary_total(entries: &[SalaryEntry], year: i32) -> Decimal {
    entries
        .iter()
        .filter(|entry| entry.date.year() == year)
        .map(|entry| entry.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_entry(date: &str, amount: &str) -> SalaryEntry {
        SalaryEntry {
            id: format!("s_{}", date),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount: dec(amount),
            note: String::new(),
        }
    }

    #[test]
    fn test_totals_are_split_by_year() {
        let entries = vec![
            make_entry("2025-12-31", "100.25"),
            make_entry("2026-01-01", "50"),
            make_entry("2026-06-15", "49.75"),
        ];

        let totals = salary_totals_by_year(&entries);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&2025], dec("100.25"));
        assert_eq!(totals[&2026], dec("99.75"));
    }

    #[test]
    fn test_year_without_entries_totals_zero() {
        let entries = vec![make_entry("2025-03-01", "10")];
        assert_eq!(yearly_salary_total(&entries, 2026), Decimal::ZERO);
        assert!(salary_totals_by_year(&[]).is_empty());
    }
}
