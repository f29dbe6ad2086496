pub mod components;
pub mod icons;
pub mod l10n;
pub mod modal;
pub mod urls;
