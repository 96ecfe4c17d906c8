pub mod eligibility;
pub mod enrollment;
pub mod intake;
pub mod plans;
pub mod providers;
