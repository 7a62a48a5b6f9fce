use wasm_bindgen::prelude::*;
use vivarium_core::*;

mod app;

use app::InjectLab;

vivarium_web::export_app!(InjectLab, "inject-lab");
