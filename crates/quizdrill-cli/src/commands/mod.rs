pub mod export_stats;
pub mod new_exam;
pub mod remediation;
pub mod retake;
