pub mod scene_writer;
pub mod table_writer;

pub use scene_writer::SceneWriter;
pub use table_writer::TableWriter;
