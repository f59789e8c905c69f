//! Model serialization: saving and loading trained artifacts.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedConfig, SerializedModel};
pub use load::ModelLoader;
pub use save::{ModelSaver, MODEL_FILE};
