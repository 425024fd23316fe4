// Case defaults
pub const DEFAULT_SURFACE_ZONE_ID: u32 = 5;
pub const DEFAULT_FREESTREAM_SPEED: f64 = 16.0; // m/s
pub const DEFAULT_DENSITY: f64 = 1.225; // kg/m^3
pub const DEFAULT_REFERENCE_AREA: f64 = 0.4; // m^2
pub const DEFAULT_REFERENCE_LENGTH: f64 = 0.435; // m

// Files, relative to the solver working directory
pub const DEFAULT_ANGLE_FILE: &str = "aoa.txt";
pub const DEFAULT_RESULTS_FILE: &str = "aoa_results.txt";

/// Moment reference point as a fraction of the reference length (quarter-chord).
pub const QUARTER_CHORD: f64 = 0.25;

/// Column header of the results log.
pub const RESULTS_HEADER: &str = "AoA_deg\tFx[N]\tFy[N]\tFz[N]\tFd[N]\tFl[N]\tCd\tCl\t\
Mx[Nm]\tMy[Nm]\tMz[Nm]\tCmx\tCmy\tCmz";

/// Significant digits used when writing numbers to the results log.
pub const RESULTS_PRECISION: usize = 6;
