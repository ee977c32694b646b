pub mod repository;
pub mod roster;

pub use repository::StudentRepository;
pub use roster::Roster;
