mod lights;
mod primitives;
mod settings;

use std::{error::Error, fs::File, io::Read, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use lights::*;
pub use primitives::*;
pub use settings::*;

use crate::scene::Scene;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    pub primitives: Vec<PrimitiveData>,
    pub lights: Vec<LightData>,
}

impl TryFrom<SceneData> for Scene {
    type Error = Box<dyn Error>;
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let scene = Scene::new(
            data.primitives
                .into_iter()
                .map(|e| e.transform())
                .collect(),
            data.lights.into_iter().map(|e| e.into()).collect(),
        );
        scene.validate()?;
        Ok(scene)
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut input = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut input))
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let data: T = serde_json::from_str(&input)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    Ok(data)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, Box<dyn Error>> {
    load_json::<SceneData, _>(path)?.try_into()
}
