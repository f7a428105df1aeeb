pub mod builder;
pub mod roundtable;
pub mod user_directory;
pub mod validation;

pub use builder::RoundtableBuilder;
pub use roundtable::{Roundtable, RoundtableStatus, StatusFilter, UserDetails};
pub use user_directory::{PlaceholderUserDirectory, StaticUserDirectory, UserDirectory};
pub use validation::CreateRoundtableRequest;
