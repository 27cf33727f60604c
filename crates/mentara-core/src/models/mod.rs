pub mod pre_assessment;
