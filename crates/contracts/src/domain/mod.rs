pub mod a001_alm_settings;
