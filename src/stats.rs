use crate::model::Assignments;

/// Number of students who obtained each preference rank, trailing empty ranks
/// removed.
pub fn statistics(a: &Assignments) -> Vec<usize> {
    let mut ranks = Vec::new();
    for rank in a.all_students().into_iter().filter_map(|s| a.granted_rank(s)) {
        if ranks.len() <= rank {
            ranks.resize(rank + 1, 0);
        }
        ranks[rank] += 1;
    }
    ranks
}
