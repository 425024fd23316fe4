mod aoa;

pub use aoa::AoaPlugin;
