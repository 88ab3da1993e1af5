use chrono::NaiveDate;
use diesel::prelude::*;

/// Days-until-expiry reported for items without an expiry date. Far enough in
/// the future that such items never count as expiring.
pub const NO_EXPIRY_DAYS: i64 = 999;

/// Items expiring within this many days are treated as high priority.
pub const EXPIRING_SOON_DAYS: i64 = 3;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::pantry_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PantryItem {
    pub id: i32,
    pub name: String,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pantry_items)]
pub struct NewPantryItem<'a> {
    pub name: &'a str,
    pub expiry_date: Option<NaiveDate>,
}

impl PantryItem {
    /// Days from `today` until this item expires. Items without an expiry
    /// date report [`NO_EXPIRY_DAYS`]. Negative for items already expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        match self.expiry_date {
            Some(expiry) => (expiry - today).num_days(),
            None => NO_EXPIRY_DAYS,
        }
    }

    /// Whether this item expires within [`EXPIRING_SOON_DAYS`] of `today`.
    pub fn is_expiring_soon(&self, today: NaiveDate) -> bool {
        self.days_until_expiry(today) <= EXPIRING_SOON_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item(name: &str, expiry_date: Option<NaiveDate>) -> PantryItem {
        PantryItem {
            id: 1,
            name: name.to_string(),
            expiry_date,
        }
    }

    #[test]
    fn test_no_expiry_uses_sentinel() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let milk = item("milk", None);

        assert_eq!(milk.days_until_expiry(today), NO_EXPIRY_DAYS);
        assert!(!milk.is_expiring_soon(today));
    }

    #[test]
    fn test_expiring_within_three_days() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();

        for days in 0..=3 {
            let it = item("milk", Some(today + Duration::days(days)));
            assert!(it.is_expiring_soon(today), "day +{} should be expiring", days);
        }

        let later = item("flour", Some(today + Duration::days(4)));
        assert!(!later.is_expiring_soon(today));
    }

    #[test]
    fn test_already_expired_counts_as_expiring() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let old = item("yogurt", Some(today - Duration::days(2)));

        assert_eq!(old.days_until_expiry(today), -2);
        assert!(old.is_expiring_soon(today));
    }
}
