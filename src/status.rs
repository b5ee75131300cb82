use std::process;

use crate::alerts::Severity;

/// Every way a run can end, and the exit code the monitoring system sees.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Ok,
    Warning,
    Critical,
    NoFilesystems,
    InvalidFlag,
    MalformedInput,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Ok             => 0,
            ExitStatus::Warning        => 1,
            ExitStatus::Critical       => 2,
            ExitStatus::NoFilesystems  => 3,
            ExitStatus::InvalidFlag    => 4,
            ExitStatus::MalformedInput => 5,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.code())
    }
}

impl From<Severity> for ExitStatus {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok       => ExitStatus::Ok,
            Severity::Warning  => ExitStatus::Warning,
            Severity::Critical => ExitStatus::Critical,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ExitStatus;
    use crate::alerts::Severity;

    #[test]
    fn severity_codes() {
        assert_eq!(ExitStatus::from(Severity::Ok).code(), 0);
        assert_eq!(ExitStatus::from(Severity::Warning).code(), 1);
        assert_eq!(ExitStatus::from(Severity::Critical).code(), 2);
    }

    #[test]
    fn terminal_condition_codes() {
        assert_eq!(ExitStatus::NoFilesystems.code(), 3);
        assert_eq!(ExitStatus::InvalidFlag.code(), 4);
        assert_eq!(ExitStatus::MalformedInput.code(), 5);
    }
}
