use wasm_bindgen::prelude::*;

mod landing;
use landing::LandingBackdrop;

eve_web::export_backdrop!(LandingBackdrop, "eve-landing");
