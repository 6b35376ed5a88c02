use crate::model::{Assignments, Firm, Placement};
use crate::stats;

pub fn display_firms(firms: &[Firm]) {
    println!(
        "Current firms: {}",
        firms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
}

/// Placements in the order students were processed.
pub fn display_results(placements: &[Placement]) {
    println!("Results:");
    for p in placements {
        println!("  - {p}");
    }
    println!();
}

pub fn display_details(a: &Assignments) {
    let mut firms = a.filter_firms(|f| a.is_open(f));
    firms.sort_by_key(|&f| a.firm(f).name.clone());
    for f in firms {
        let mut students = a.students_for(f).clone();
        students.sort_by_key(|&s| a.student(s).name.clone());
        println!("{} ({}/{}):", a.firm(f).name, a.size(f), a.quota(f));
        for s in students {
            print!("  - {}", a.student(s).name);
            if let Some(rank) = a.rank_of(s, f) {
                print!(" (rank {})", rank + 1);
            }
            println!();
        }
        println!();
    }
}

pub fn display_stats(a: &Assignments) {
    let students = a.students.len();
    let unassigned = a.unassigned_students();
    let lazy = unassigned.iter().filter(|&&s| a.is_lazy(s)).count();
    println!(
        "Students placed/not assigned/total: {}/{}/{}",
        students - unassigned.len(),
        unassigned.len(),
        students
    );
    if lazy > 0 {
        println!("Students without any preference: {lazy}");
    }
    let ranks = stats::statistics(a);
    let cumul = ranks.iter().scan(0, |s, &r| {
        *s += r;
        Some(*s)
    });
    let total: usize = ranks.iter().sum();
    if total == 0 {
        return;
    }
    println!("Obtained preferences:");
    for (rank, (n, c)) in ranks.iter().zip(cumul).enumerate() {
        if *n != 0 {
            println!(
                "  - rank {}: {} (cumulative {} - {:.2}%)",
                rank + 1,
                n,
                c,
                100.0 * c as f32 / total as f32
            );
        }
    }
}

pub fn display_unfilled(a: &Assignments) {
    let mut empty = a.filter_firms(|f| !a.is_open(f));
    empty.sort_by_key(|&f| a.firm(f).name.clone());
    if !empty.is_empty() {
        println!("Firms without students:");
        for f in empty {
            println!("  - {}", a.firm(f).name);
        }
    }
    let mut partial = a.filter_firms(|f| a.is_open(f) && a.remaining(f) > 0);
    partial.sort_by_key(|&f| a.firm(f).name.clone());
    if !partial.is_empty() {
        println!("Firms with open positions left:");
        for f in partial {
            println!("  - {} ({} left)", a.firm(f).name, a.remaining(f));
        }
    }
}
