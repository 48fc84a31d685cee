pub mod bot;
pub mod review;
pub mod vote;
