use super::notation::Notation;

/// Semantic keys of the vocabulary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Now,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Week,
    Weeks,
}

// Columns: Long, Short, Twitter. Long suffixes carry their own leading space.
const VOCABULARY: [(&str, [&str; 3]); 9] = [
    ("now", ["just now", "now", "n"]),
    ("min", [" minute ago", "min", "m"]),
    ("mins", [" minutes ago", "mins", "m"]),
    ("hour", [" hour ago", "hr", "h"]),
    ("hours", [" hours ago", "hrs", "h"]),
    ("day", ["yesterday", "dy", "d"]),
    ("days", [" days ago", "dys", "d"]),
    ("week", [" week ago", "wk", "w"]),
    ("weeks", [" weeks ago", "wks", "w"]),
];

pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Term {
    const ALL: [Term; 9] = [
        Term::Now,
        Term::Minute,
        Term::Minutes,
        Term::Hour,
        Term::Hours,
        Term::Day,
        Term::Days,
        Term::Week,
        Term::Weeks,
    ];

    pub fn key(self) -> &'static str {
        VOCABULARY[self as usize].0
    }

    pub fn from_key(key: &str) -> Option<Term> {
        Term::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Text for this term in the given notation.
    pub fn text(self, notation: Notation) -> &'static str {
        VOCABULARY[self as usize].1[notation.column()]
    }
}

/// Month name for a 1-based month number.
pub fn month_name(month: u32, notation: Notation) -> &'static str {
    let table = if notation.abbreviates_months() {
        &MONTHS_SHORT
    } else {
        &MONTHS_LONG
    };
    table[month as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_their_rows() {
        let expected = [
            (Term::Now, "now"),
            (Term::Minute, "min"),
            (Term::Minutes, "mins"),
            (Term::Hour, "hour"),
            (Term::Hours, "hours"),
            (Term::Day, "day"),
            (Term::Days, "days"),
            (Term::Week, "week"),
            (Term::Weeks, "weeks"),
        ];
        for (term, key) in expected {
            assert_eq!(term.key(), key);
            assert_eq!(Term::from_key(key), Some(term));
        }
        assert_eq!(Term::from_key("month"), None);
        assert_eq!(Term::from_key("hours").map(|t| t.text(Notation::Long)), Some(" hours ago"));
    }

    #[test]
    fn columns_follow_notation() {
        assert_eq!(Term::Now.text(Notation::Long), "just now");
        assert_eq!(Term::Now.text(Notation::Short), "now");
        assert_eq!(Term::Now.text(Notation::Twitter), "n");
        assert_eq!(Term::Hours.text(Notation::Short), "hrs");
        assert_eq!(Term::Week.text(Notation::Twitter), "w");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1, Notation::Long), "January");
        assert_eq!(month_name(1, Notation::Short), "Jan");
        assert_eq!(month_name(12, Notation::Twitter), "Dec");
        assert_eq!(month_name(9, Notation::Long), "September");
    }
}
