pub use self::assignments::Assignments;
pub use self::firm::{Firm, FirmId};
pub use self::placement::{NOT_ASSIGNED, Placement};
pub use self::student::{Student, StudentId};

mod assignments;
mod firm;
mod placement;
mod student;
