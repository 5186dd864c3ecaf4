//! OBJ loading and the fixed orientation correction

mod obj;
mod transform;

pub use obj::{LoadedObj, load_obj};
pub use transform::y_up_to_z_up;
