pub mod home;
pub mod journey;

pub use home::HomePage;
pub use journey::JourneyPage;
