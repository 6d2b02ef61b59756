mod alert;
mod button;
mod spinner;

pub use alert::{Alert, AlertKind};
pub use button::SubmitButton;
pub use spinner::Spinner;
