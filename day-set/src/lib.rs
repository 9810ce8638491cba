#![doc = include_str!("../README.md")]

use std::fmt;
use std::ops::Deref;

use chrono::NaiveDate;

/// A set of calendar days, stored as a [`Vec`] that is always sorted and
/// never holds the same day twice.
#[repr(transparent)]
#[derive(Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DaySet(Vec<NaiveDate>);

impl DaySet {
    /// Check if this set includes the given day.
    ///
    /// ```
    /// use day_set::DaySet;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2019, 12, 18).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2019, 12, 19).unwrap();
    ///
    /// let set: DaySet = [day1].into_iter().collect();
    /// assert!(set.contains(day1));
    /// assert!(!set.contains(day2));
    /// ```
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.0.binary_search(&day).is_ok()
    }

    /// Build the set of days that are included in `self` but not in `other`.
    ///
    /// ```
    /// use day_set::DaySet;
    /// use chrono::NaiveDate;
    ///
    /// let days: Vec<_> = (1..=5)
    ///     .map(|d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap())
    ///     .collect();
    ///
    /// let all: DaySet = days.clone().into();
    /// let holidays: DaySet = vec![days[1], days[3]].into();
    ///
    /// assert_eq!(
    ///     all.difference(&holidays).as_slice(),
    ///     &[days[0], days[2], days[4]],
    /// );
    /// ```
    pub fn difference(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }

        Self(
            self.0
                .iter()
                .copied()
                .filter(|day| !other.contains(*day))
                .collect(),
        )
    }

    /// Extract a slice of all days in the set, in increasing order.
    #[inline]
    pub fn as_slice(&self) -> &[NaiveDate] {
        self.0.as_slice()
    }

    /// Consume the set and return the inner sorted vector.
    #[inline]
    pub fn into_inner(self) -> Vec<NaiveDate> {
        self.0
    }
}

impl From<Vec<NaiveDate>> for DaySet {
    /// Sort the days and remove duplicates.
    ///
    /// ```
    /// use day_set::DaySet;
    /// use chrono::NaiveDate;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2019, 12, 18).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2019, 12, 19).unwrap();
    ///
    /// let set: DaySet = vec![day2, day1, day2].into();
    /// assert_eq!(set.as_slice(), &[day1, day2]);
    /// ```
    #[inline]
    fn from(mut vec: Vec<NaiveDate>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }
}

impl FromIterator<NaiveDate> for DaySet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl IntoIterator for DaySet {
    type Item = NaiveDate;
    type IntoIter = std::vec::IntoIter<NaiveDate>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Deref for DaySet {
    type Target = [NaiveDate];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl fmt::Debug for DaySet {
    /// ```
    /// use day_set::DaySet;
    /// use chrono::NaiveDate;
    ///
    /// let set: DaySet = vec![
    ///     NaiveDate::from_ymd_opt(2022, 8, 12).unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 3, 5).unwrap(),
    /// ]
    /// .into();
    ///
    /// assert_eq!(format!("{set:?}"), "DaySet {2022-03-05, 2022-08-12}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaySet ")?;
        f.debug_set().entries(self.0.iter()).finish()
    }
}
