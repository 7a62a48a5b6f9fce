pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod ui;
pub mod viewer;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, AppContext, UiSnapshot};
pub use api::types::{NodeId, UiEvent};
pub use bridge::protocol::FrameLayout;
pub use core::time::{Countdown, FrameClock};
pub use input::queue::{InputEvent, InputQueue};
pub use ui::options::OptionList;
pub use ui::panel::{Catalog, InjectPanel, PanelChange};
pub use ui::style::{button_style, tab_style, ButtonStyle, TabStyle};
pub use ui::tabs::{TabBar, TabId};
pub use viewer::animation::{ClipDescriptor, ClipPlayer};
pub use viewer::camera::OrbitCamera;
pub use viewer::lighting::{DirectionalLight, LightRig};
pub use viewer::model::{ModelManifest, NodeDescriptor};
pub use viewer::scene::{Node, SceneGraph};
