pub mod answer;
pub mod community;
pub mod criteria;
pub mod exercise;
pub mod patient;
pub mod profile;
pub mod result;
