//! Greedy placement of students into firms.
//!
//! Students are processed from the highest score to the lowest. Each one is
//! placed into the first firm of its preference list which still has some
//! remaining capacity, or left unassigned if none has.

use crate::model::{Firm, Placement, Student, StudentId};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Order in which students get to pick a firm: by decreasing score, students
/// with equal scores keeping their relative input order. Students whose score
/// is not a number come last.
pub fn ranking(students: &[Student]) -> Vec<StudentId> {
    let mut order = (0..students.len()).map(StudentId).collect::<Vec<_>>();
    // `sort_by` is stable, which provides the tie-break.
    order.sort_by(|&StudentId(a), &StudentId(b)| {
        compare_scores(students[b].score, students[a].score)
    });
    order
}

fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

/// Remaining capacity of every firm during one allocation run.
struct Capacities<'a> {
    remaining: HashMap<&'a str, u32>,
}

impl<'a> Capacities<'a> {
    /// A firm listed several times gets the quota of its last occurrence.
    fn new(firms: &'a [Firm]) -> Self {
        let mut remaining = HashMap::with_capacity(firms.len());
        for firm in firms {
            remaining.insert(firm.name.as_str(), firm.quota);
        }
        Capacities { remaining }
    }

    fn has_room(&self, firm: &str) -> bool {
        !firm.is_empty() && self.remaining.get(firm).is_some_and(|&n| n > 0)
    }

    fn take(&mut self, firm: &str) {
        if let Some(n) = self.remaining.get_mut(firm) {
            *n -= 1;
        }
    }
}

/// Place every student, returning one placement per student in processing
/// order. Neither `students` nor `firms` is modified, and calling this
/// function twice on the same input gives the same result.
pub fn allocate(students: &[Student], firms: &[Firm]) -> Vec<Placement> {
    let mut capacities = Capacities::new(firms);
    let placements = ranking(students)
        .into_iter()
        .map(|id| {
            let student = &students[id.0];
            let granted = student
                .preferences
                .iter()
                .enumerate()
                .find(|(_, firm)| capacities.has_room(firm));
            match granted {
                Some((rank, firm)) => {
                    capacities.take(firm);
                    trace!(student = %student, firm = %firm, rank = rank + 1, "placing student");
                    Placement {
                        student: id,
                        student_name: student.name.clone(),
                        firm: Some(firm.clone()),
                        rank: Some(rank),
                    }
                }
                None => {
                    trace!(student = %student, "no preferred firm has room left");
                    Placement {
                        student: id,
                        student_name: student.name.clone(),
                        firm: None,
                        rank: None,
                    }
                }
            }
        })
        .collect::<Vec<_>>();
    debug!(
        students = students.len(),
        firms = firms.len(),
        placed = placements.iter().filter(|p| p.is_assigned()).count(),
        "allocation done"
    );
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NOT_ASSIGNED;

    fn student(name: &str, score: f64, prefs: &[&str]) -> Student {
        Student::new(name, score, prefs.iter().map(|&p| p.to_owned()).collect())
    }

    fn outcome(placements: &[Placement]) -> Vec<(&str, &str)> {
        placements
            .iter()
            .map(|p| (p.student_name.as_str(), p.assigned_firm()))
            .collect()
    }

    #[test]
    fn test_higher_score_wins_contested_firm() {
        let firms = vec![Firm::new("A", 1), Firm::new("B", 1)];
        let students = vec![student("S1", 90.0, &["A", "B"]), student("S2", 80.0, &["A", "B"])];
        let placements = allocate(&students, &firms);
        assert_eq!(outcome(&placements), vec![("S1", "A"), ("S2", "B")]);
        assert_eq!(placements[1].rank, Some(1));
    }

    #[test]
    fn test_output_follows_processing_order() {
        let firms = vec![Firm::new("A", 1)];
        let students = vec![student("S1", 50.0, &["A"]), student("S2", 70.0, &["A"])];
        let placements = allocate(&students, &firms);
        assert_eq!(outcome(&placements), vec![("S2", "A"), ("S1", NOT_ASSIGNED)]);
        assert_eq!(placements[0].student, StudentId(1));
        assert_eq!(placements[1].student, StudentId(0));
    }

    #[test]
    fn test_zero_quota_never_matches() {
        let firms = vec![Firm::new("A", 0)];
        let students = vec![student("S1", 10.0, &["A"])];
        assert_eq!(outcome(&allocate(&students, &firms)), vec![("S1", NOT_ASSIGNED)]);
    }

    #[test]
    fn test_no_firms() {
        let students = vec![student("S1", 5.0, &["A", "B", "C", "D"])];
        let placements = allocate(&students, &[]);
        assert_eq!(outcome(&placements), vec![("S1", NOT_ASSIGNED)]);
        assert_eq!(placements[0].rank, None);
    }

    #[test]
    fn test_no_students() {
        assert!(allocate(&[], &[Firm::new("A", 3)]).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let firms = vec![Firm::new("A", 2)];
        let students = vec![
            student("S1", 10.0, &["A"]),
            student("S2", 10.0, &["A"]),
            student("S3", 10.0, &["A"]),
        ];
        assert_eq!(
            outcome(&allocate(&students, &firms)),
            vec![("S1", "A"), ("S2", "A"), ("S3", NOT_ASSIGNED)]
        );
    }

    #[test]
    fn test_duplicate_firm_last_quota_wins() {
        let students = vec![student("S1", 3.0, &["A"]), student("S2", 2.0, &["A"])];
        let shrinking = vec![Firm::new("A", 2), Firm::new("A", 1)];
        assert_eq!(
            outcome(&allocate(&students, &shrinking)),
            vec![("S1", "A"), ("S2", NOT_ASSIGNED)]
        );
        let growing = vec![Firm::new("A", 0), Firm::new("A", 2)];
        assert_eq!(
            outcome(&allocate(&students, &growing)),
            vec![("S1", "A"), ("S2", "A")]
        );
    }

    #[test]
    fn test_blank_and_unknown_preferences_are_skipped() {
        let firms = vec![Firm::new("A", 1), Firm::new("", 5)];
        let students = vec![student("S1", 1.0, &["", "Ghost", "A"]), student("S2", 0.0, &[""])];
        let placements = allocate(&students, &firms);
        assert_eq!(outcome(&placements), vec![("S1", "A"), ("S2", NOT_ASSIGNED)]);
        assert_eq!(placements[0].rank, Some(2));
    }

    #[test]
    fn test_more_than_four_preferences() {
        let firms = vec![Firm::new("E", 1)];
        let students = vec![student("S1", 1.0, &["A", "B", "C", "D", "E"])];
        let placements = allocate(&students, &firms);
        assert_eq!(outcome(&placements), vec![("S1", "E")]);
        assert_eq!(placements[0].rank, Some(4));
    }

    #[test]
    fn test_negative_and_fractional_scores() {
        let students = vec![
            student("low", -3.5, &[]),
            student("mid", 0.25, &[]),
            student("high", 0.5, &[]),
        ];
        assert_eq!(ranking(&students), vec![StudentId(2), StudentId(1), StudentId(0)]);
    }

    #[test]
    fn test_nan_scores_come_last() {
        let students = vec![
            student("nan1", f64::NAN, &[]),
            student("low", -1.0, &[]),
            student("nan2", f64::NAN, &[]),
            student("high", 1.0, &[]),
        ];
        assert_eq!(
            ranking(&students),
            vec![StudentId(3), StudentId(1), StudentId(0), StudentId(2)]
        );
    }

    #[test]
    fn test_inputs_untouched_and_repeatable() {
        let firms = vec![Firm::new("A", 1), Firm::new("B", 2)];
        let students = vec![
            student("S1", 1.0, &["A", "B"]),
            student("S2", 2.0, &["A"]),
            student("S3", 2.0, &["B", "A"]),
        ];
        let (firms_before, students_before) = (firms.clone(), students.clone());
        let first = allocate(&students, &firms);
        let second = allocate(&students, &firms);
        assert_eq!(first, second);
        assert_eq!(firms, firms_before);
        assert_eq!(students, students_before);
        assert_eq!(outcome(&first), vec![("S2", "A"), ("S3", "B"), ("S1", "B")]);
    }
}
