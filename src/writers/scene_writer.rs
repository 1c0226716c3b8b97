use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::render::MapScene;

/// Serializes a [`MapScene`] to the JSON document the map collaborator
/// consumes.
pub struct SceneWriter {
    pretty: bool,
}

impl Default for SceneWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_compact_output(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn write_scene(&self, scene: &MapScene, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_scene_to(scene, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_scene_to<W: Write>(&self, scene: &MapScene, writer: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, scene)?;
        } else {
            serde_json::to_writer(writer, scene)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{gas_seeps, mud_volcanoes};
    use crate::render::{build_scene, MapConfig};

    #[test]
    fn test_scene_round_trips_through_json() {
        let scene = build_scene(MapConfig::default(), &mud_volcanoes(), &gas_seeps());

        let mut buffer = Vec::new();
        SceneWriter::new()
            .write_scene_to(&scene, &mut buffer)
            .unwrap();

        let decoded: MapScene = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(decoded.layers.len(), scene.layers.len());
        assert_eq!(decoded.marker_count(), scene.marker_count());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let scene = build_scene(MapConfig::default(), &mud_volcanoes(), &[]);

        let mut buffer = Vec::new();
        SceneWriter::new()
            .with_compact_output()
            .write_scene_to(&scene, &mut buffer)
            .unwrap();

        assert!(!buffer.contains(&b'\n'));
    }
}
