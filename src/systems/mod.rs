pub mod aerodynamics;
mod angle_source;
mod inlet_profile;
mod post_process;
mod results_log;

pub use aerodynamics::{calculate_coefficients, calculate_record, rotate_to_wind_axes};
pub use angle_source::{parse_angle, AngleRefresh, AngleSource};
pub use inlet_profile::{fill_profile, inlet_velocity, VelocityComponent};
pub use post_process::evaluate_surface;
pub use results_log::ResultsLog;
