mod violations;

pub use violations::Violation;
