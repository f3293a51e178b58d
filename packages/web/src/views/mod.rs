mod home;
pub use home::Home;

mod imprint;
pub use imprint::Imprint;
