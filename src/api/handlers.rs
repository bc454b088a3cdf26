pub mod map;
pub mod path;

pub use map::get_map;
pub use path::calculate_path;
