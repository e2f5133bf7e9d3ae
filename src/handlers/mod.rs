// Handler modules
pub mod check;
pub mod sarif;

// Re-export all handler functions
pub use check::{handle_check, run_audit, run_check, CheckOptions};
pub use sarif::handle_sarif;

/// How a command finished, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything checked out.
    Success,
    /// At least one tool image is outdated.
    Outdated,
}

impl Outcome {
    /// 0 when all tools are current, 1 when any is outdated. Errors also exit
    /// with 1; that mapping lives in `main`.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Outdated => 1,
        }
    }
}
