pub mod card;
pub mod charts;
pub mod modal;
pub mod toast;
