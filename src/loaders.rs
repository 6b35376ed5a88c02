use crate::model::{Firm, Placement, Student};
use eyre::{Result, WrapErr};
use csv::StringRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Reason for which an entry is refused before reaching the allocator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("missing name")]
    MissingName,
    #[error("missing score")]
    MissingScore,
    #[error("score {0:?} is not a number")]
    InvalidScore(String),
    #[error("missing quota")]
    MissingQuota,
    #[error("quota {0:?} is not a non-negative integer")]
    InvalidQuota(String),
}

pub fn parse_firm(name: &str, quota: &str) -> Result<Firm, Rejection> {
    let (name, quota) = (name.trim(), quota.trim());
    if name.is_empty() {
        return Err(Rejection::MissingName);
    }
    if quota.is_empty() {
        return Err(Rejection::MissingQuota);
    }
    let quota = quota
        .parse::<u32>()
        .map_err(|_| Rejection::InvalidQuota(quota.to_owned()))?;
    Ok(Firm::new(name, quota))
}

pub fn parse_student<'a>(
    name: &str,
    score: &str,
    choices: impl IntoIterator<Item = &'a str>,
) -> Result<Student, Rejection> {
    let (name, score) = (name.trim(), score.trim());
    if name.is_empty() {
        return Err(Rejection::MissingName);
    }
    if score.is_empty() {
        return Err(Rejection::MissingScore);
    }
    let score = score
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
        .ok_or_else(|| Rejection::InvalidScore(score.to_owned()))?;
    let preferences = choices.into_iter().map(|c| c.trim().to_owned()).collect();
    Ok(Student::new(name, score, preferences))
}

#[derive(Serialize)]
struct PlacementRecord<'a> {
    student: &'a str,
    firm: &'a str,
}

/// Line on which a record starts in its source, blank lines included.
fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

/// Read firms from CSV data with a `name,quota` header. Invalid rows are
/// logged and skipped.
pub fn read_firms<R: Read>(reader: R) -> Result<Vec<Firm>> {
    let mut firms = Vec::new();
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    for record in rdr.records() {
        let record = record.wrap_err("malformed firm record")?;
        let name = record.get(0).unwrap_or_default();
        let quota = record.get(1).unwrap_or_default();
        match parse_firm(name, quota) {
            Ok(firm) => firms.push(firm),
            Err(e) => warn!(line = line_of(&record), firm = name, "rejecting firm: {e}"),
        }
    }
    Ok(firms)
}

/// Read students from CSV data with a `name,score,choice1,...` header. Any
/// number of choice columns is accepted, missing trailing ones being blank.
/// Invalid rows are logged and skipped.
pub fn read_students<R: Read>(reader: R) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    for record in rdr.records() {
        let record = record.wrap_err("malformed student record")?;
        let name = record.get(0).unwrap_or_default();
        let score = record.get(1).unwrap_or_default();
        match parse_student(name, score, record.iter().skip(2)) {
            Ok(student) => students.push(student),
            Err(e) => warn!(line = line_of(&record), student = name, "rejecting student: {e}"),
        }
    }
    Ok(students)
}

/// Write placements as `student,firm` CSV records.
pub fn write_placements<W: Write>(writer: W, placements: &[Placement]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in placements {
        wtr.serialize(PlacementRecord {
            student: &p.student_name,
            firm: p.assigned_firm(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub struct Loader {
    firms: PathBuf,
    students: PathBuf,
}

impl Loader {
    pub fn new(firms: impl Into<PathBuf>, students: impl Into<PathBuf>) -> Self {
        Self {
            firms: firms.into(),
            students: students.into(),
        }
    }

    pub fn load(&self) -> Result<(Vec<Student>, Vec<Firm>)> {
        let firms = open(&self.firms)
            .and_then(read_firms)
            .wrap_err_with(|| format!("cannot load firms from {}", self.firms.display()))?;
        let students = open(&self.students)
            .and_then(read_students)
            .wrap_err_with(|| format!("cannot load students from {}", self.students.display()))?;
        info!(
            firms = firms.len(),
            students = students.len(),
            "input loaded"
        );
        Ok((students, firms))
    }
}

pub fn save_placements(path: &Path, placements: &[Placement]) -> Result<()> {
    let file = File::create(path).wrap_err_with(|| format!("cannot create {}", path.display()))?;
    write_placements(file, placements)
        .wrap_err_with(|| format!("cannot save placements to {}", path.display()))
}

fn open(path: &Path) -> Result<File> {
    Ok(File::open(path)?)
}
