pub mod mock;
pub mod traits;

pub use mock::MockAppointmentSource;
pub use traits::AppointmentSource;
