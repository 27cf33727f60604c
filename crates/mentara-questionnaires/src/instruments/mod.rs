pub mod asrs;
pub mod audit;
pub mod bes;
pub mod dast10;
pub mod gad7;
pub mod isi;
pub mod mbi;
pub mod mdq;
pub mod oci_r;
pub mod pcl5;
pub mod pdss;
pub mod phq15;
pub mod phq9;
pub mod pss;
pub mod spin;
