pub mod a001_alm_integration;
