pub mod email;
pub mod vote;
pub mod voter;
