pub mod frame;
pub mod scene;

pub use frame::{Frame, ScreenPainter, Tone};
pub use scene::{SceneLayout, SceneView};
