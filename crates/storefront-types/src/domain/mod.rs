pub mod cart;
pub mod menu;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;
