pub mod card;
pub mod heading;
pub mod icons;
pub mod layout;
