// src/services/filter.rs

//! Eligibility filtering by enrollment-open date.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Course;
use crate::utils::date::parse_date;

/// Which collected courses are worth showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Keep courses whose enrollment opens strictly after the date
    NotYetOpen(NaiveDate),
    /// Keep everything
    All,
}

impl Eligibility {
    /// Apply the rule.
    ///
    /// Any unparsable enrollment date fails the whole pass; no partial
    /// result is returned.
    pub fn apply(self, courses: Vec<Course>) -> Result<Vec<Course>> {
        let reference = match self {
            Self::All => return Ok(courses),
            Self::NotYetOpen(reference) => reference,
        };

        let mut kept = Vec::with_capacity(courses.len());
        for course in courses {
            let opens = parse_date("enrollment_open_date", &course.opens)?;
            if opens > reference {
                kept.push(course);
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::Location;

    fn course(id: i64, opens: &str) -> Course {
        Course {
            id,
            course_type: "3".into(),
            location: Location::default(),
            starts: "2025-06-01".into(),
            opens: opens.into(),
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_boundary_dates() {
        let courses = vec![
            course(1, "2024-03-14"),
            course(2, "2024-03-15"),
            course(3, "2024-03-16"),
        ];
        let kept = Eligibility::NotYetOpen(reference()).apply(courses).unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 3);
    }

    #[test]
    fn test_keeps_order() {
        let courses = vec![
            course(1, "2024-09-01"),
            course(2, "2023-01-01"),
            course(3, "2024-04-01"),
        ];
        let kept = Eligibility::NotYetOpen(reference()).apply(courses).unwrap();
        let ids: Vec<i64> = kept.iter().map(|c| c.id).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_all_is_identity() {
        let courses = vec![course(1, "2020-01-01"), course(2, "garbage")];
        assert_eq!(Eligibility::All.apply(courses.clone()).unwrap(), courses);
        assert!(Eligibility::All.apply(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(
            Eligibility::NotYetOpen(reference())
                .apply(Vec::new())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_bad_date_aborts() {
        let courses = vec![course(1, "2024-09-01"), course(2, "01/10/2024")];
        let result = Eligibility::NotYetOpen(reference()).apply(courses);

        assert!(matches!(
            result,
            Err(AppError::DateParse { ref value, .. }) if value == "01/10/2024"
        ));
    }

    #[test]
    fn test_missing_date_aborts() {
        let result = Eligibility::NotYetOpen(reference()).apply(vec![course(1, "")]);
        assert!(matches!(result, Err(AppError::DateParse { .. })));
    }
}
