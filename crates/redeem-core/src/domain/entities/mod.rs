pub mod course;
pub mod token;

pub use crate::domain::DomainError;
pub use course::Course;
pub use token::Token;
