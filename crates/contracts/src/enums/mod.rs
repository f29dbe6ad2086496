pub mod alm_key;

pub use alm_key::AlmKey;
