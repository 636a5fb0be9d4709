pub mod renderer;

pub use renderer::{HtmlRenderer, RenderFailure, RenderStage, UnavailableRenderer};
