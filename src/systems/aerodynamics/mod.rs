mod coefficients;

pub use coefficients::{calculate_coefficients, calculate_record, rotate_to_wind_axes};
