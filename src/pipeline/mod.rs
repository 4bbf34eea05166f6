pub mod stage2_normalize;
pub mod stage3_reduce;
pub mod stage4_report;
