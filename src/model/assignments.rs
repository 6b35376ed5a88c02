use super::*;
use std::collections::HashMap;

/// Read-only view of an allocation run, indexed both by firm and by student.
///
/// Firms are deduplicated by name: a firm keeps the position of its first
/// occurrence and the quota of its last one, which is how the allocator
/// builds its capacity table.
#[derive(Debug)]
pub struct Assignments<'a> {
    pub students: &'a [Student],
    pub firms: Vec<Firm>,
    firm_ids: HashMap<String, FirmId>,
    assigned_to: Vec<Option<FirmId>>,
    assigned: Vec<Vec<StudentId>>,
    ranks: Vec<Option<usize>>,
}

impl<'a> Assignments<'a> {
    /// Build the view. `placements` must have been computed for `students`.
    ///
    /// # Panics
    ///
    /// Panics if a placement refers to a student outside of `students`.
    pub fn new(students: &'a [Student], firms: &[Firm], placements: &[Placement]) -> Self {
        let mut deduplicated: Vec<Firm> = Vec::with_capacity(firms.len());
        let mut firm_ids: HashMap<String, FirmId> = HashMap::new();
        for firm in firms {
            if let Some(&FirmId(id)) = firm_ids.get(&firm.name) {
                deduplicated[id].quota = firm.quota;
            } else {
                firm_ids.insert(firm.name.clone(), FirmId(deduplicated.len()));
                deduplicated.push(firm.clone());
            }
        }
        let mut assigned_to = vec![None; students.len()];
        let mut assigned = vec![Vec::new(); deduplicated.len()];
        let mut ranks = vec![None; students.len()];
        for placement in placements {
            let StudentId(student) = placement.student;
            assert!(
                student < students.len(),
                "placement for unknown student {} ({})",
                student,
                placement.student_name
            );
            ranks[student] = placement.rank;
            if let Some(&firm) = placement.firm.as_ref().and_then(|f| firm_ids.get(f)) {
                assigned_to[student] = Some(firm);
                assigned[firm.0].push(placement.student);
            }
        }
        Assignments {
            students,
            firms: deduplicated,
            firm_ids,
            assigned_to,
            assigned,
            ranks,
        }
    }

    pub fn student(&self, StudentId(student): StudentId) -> &Student {
        &self.students[student]
    }

    pub fn firm(&self, FirmId(firm): FirmId) -> &Firm {
        &self.firms[firm]
    }

    pub fn firm_id(&self, name: &str) -> Option<FirmId> {
        self.firm_ids.get(name).copied()
    }

    pub fn all_firms(&self) -> Vec<FirmId> {
        self.filter_firms(|_| true)
    }

    pub fn filter_firms<F>(&self, condition: F) -> Vec<FirmId>
    where
        F: Fn(FirmId) -> bool,
    {
        (0..self.firms.len())
            .map(FirmId)
            .filter(|&firm| condition(firm))
            .collect()
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        (0..self.students.len()).map(StudentId).collect()
    }

    pub fn firm_for(&self, StudentId(student): StudentId) -> Option<FirmId> {
        self.assigned_to[student]
    }

    /// Rank of the preference the student was granted, if any.
    pub fn granted_rank(&self, StudentId(student): StudentId) -> Option<usize> {
        self.ranks[student]
    }

    pub fn rank_of(&self, student: StudentId, firm: FirmId) -> Option<usize> {
        self.student(student).rank_of(&self.firm(firm).name)
    }

    pub fn students_for(&self, FirmId(firm): FirmId) -> &Vec<StudentId> {
        &self.assigned[firm]
    }

    pub fn unassigned_students(&self) -> Vec<StudentId> {
        self.assigned_to
            .iter()
            .enumerate()
            .filter_map(|(id, firm)| if firm.is_none() { Some(StudentId(id)) } else { None })
            .collect()
    }

    pub fn is_lazy(&self, student: StudentId) -> bool {
        self.student(student).is_lazy()
    }

    pub fn size(&self, firm: FirmId) -> usize {
        self.students_for(firm).len()
    }

    pub fn quota(&self, firm: FirmId) -> usize {
        self.firm(firm).quota as usize
    }

    pub fn remaining(&self, firm: FirmId) -> usize {
        self.quota(firm).saturating_sub(self.size(firm))
    }

    pub fn is_open(&self, firm: FirmId) -> bool {
        !self.students_for(firm).is_empty()
    }

    pub fn is_at_capacity(&self, firm: FirmId) -> bool {
        self.size(firm) == self.quota(firm)
    }

    pub fn is_over_capacity(&self, firm: FirmId) -> bool {
        self.size(firm) > self.quota(firm)
    }
}
