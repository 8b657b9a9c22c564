use std::path::PathBuf;

use log::{info, warn};

use crate::error::Result;
use crate::model::TokenSequence;
use crate::reshape::{reshape, visual_order};
use crate::types::RenderConfig;

/// Text and settings handed to a [`RenderAdapter`].
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    /// Space-joined tokens, reshaped and in visual order.
    pub text: String,
    /// Renderer settings.
    pub config: &'a RenderConfig,
}

/// Draws a word cloud image; layout, fonts and compositing live behind this
/// boundary.
pub trait RenderAdapter {
    /// Renders `request` and returns the path of the written image.
    fn render(&self, request: &RenderRequest<'_>) -> Result<PathBuf>;
}

/// Joins `tokens` with single spaces, shapes the letters and reorders the
/// result for display. `tokens` is left untouched.
pub fn prepare_render_text(tokens: &TokenSequence) -> String {
    visual_order(&reshape(&tokens.join()))
}

/// Validates render resources and hands `tokens` to `adapter`.
///
/// Missing mask or font files are fatal. Empty input is passed on with a
/// warning.
pub fn render_word_cloud<A>(
    adapter: &A,
    tokens: &TokenSequence,
    config: &RenderConfig,
) -> Result<PathBuf>
where
    A: RenderAdapter + ?Sized,
{
    config.validate()?;
    if tokens.is_empty() {
        warn!("rendering an empty token sequence");
    }

    let request = RenderRequest {
        text: prepare_render_text(tokens),
        config,
    };
    let saved = adapter.render(&request)?;
    info!("the word cloud image is saved in {}", saved.display());
    Ok(saved)
}
