//! Probability helpers used by coefficient inference.

mod student;

pub use student::student_p_value;
