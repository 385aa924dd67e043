//! # Assets
//!
//! The four brand assets, each a self-sizing drawing:
//!
//! - [`Icon`]: cube silhouette, accent blocks, L monogram and wireframe
//! - [`Wordmark`]: the isometric letters, composited letter by letter
//! - [`Logo`]: icon and scaled wordmark side by side
//! - [`Monogram`]: the L alone, centered on a fixed square canvas
//!
//! Every asset computes its own canvas size and draws into canvas space
//! (origin top-left, y down). Drawing never fails and never depends on
//! state outside the asset value, so drawing twice yields identical
//! command lists.

mod icon;
mod logo;
mod monogram;
mod wordmark;

pub use icon::Icon;
pub use logo::Logo;
pub use monogram::Monogram;
pub use wordmark::Wordmark;

use glam::DVec2;

use crate::canvas::{Canvas, Scene};

/// A drawing with a known canvas size.
pub trait Asset {
    /// Base file name, without theme suffix or extension.
    fn name(&self) -> &'static str;

    /// Canvas width and height.
    fn size(&self) -> DVec2;

    /// Whether the asset is published in both light and dark variants.
    fn themed(&self) -> bool {
        true
    }

    /// Paints the asset in canvas space.
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C);

    /// Records the asset into a [`Scene`] of its own size.
    fn to_scene(&self) -> Scene {
        let size = self.size();
        let mut scene = Scene::new(size.x, size.y);
        self.draw(&mut scene);
        scene
    }
}

/// Any of the four assets, for callers that pick one at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyAsset {
    Icon(Icon),
    Wordmark(Wordmark),
    Logo(Logo),
    Monogram(Monogram),
}

impl Asset for AnyAsset {
    fn name(&self) -> &'static str {
        match self {
            AnyAsset::Icon(a) => a.name(),
            AnyAsset::Wordmark(a) => a.name(),
            AnyAsset::Logo(a) => a.name(),
            AnyAsset::Monogram(a) => a.name(),
        }
    }

    fn size(&self) -> DVec2 {
        match self {
            AnyAsset::Icon(a) => a.size(),
            AnyAsset::Wordmark(a) => a.size(),
            AnyAsset::Logo(a) => a.size(),
            AnyAsset::Monogram(a) => a.size(),
        }
    }

    fn themed(&self) -> bool {
        match self {
            AnyAsset::Icon(a) => a.themed(),
            AnyAsset::Wordmark(a) => a.themed(),
            AnyAsset::Logo(a) => a.themed(),
            AnyAsset::Monogram(a) => a.themed(),
        }
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            AnyAsset::Icon(a) => a.draw(canvas),
            AnyAsset::Wordmark(a) => a.draw(canvas),
            AnyAsset::Logo(a) => a.draw(canvas),
            AnyAsset::Monogram(a) => a.draw(canvas),
        }
    }
}

impl From<Icon> for AnyAsset {
    fn from(asset: Icon) -> Self {
        AnyAsset::Icon(asset)
    }
}

impl From<Wordmark> for AnyAsset {
    fn from(asset: Wordmark) -> Self {
        AnyAsset::Wordmark(asset)
    }
}

impl From<Logo> for AnyAsset {
    fn from(asset: Logo) -> Self {
        AnyAsset::Logo(asset)
    }
}

impl From<Monogram> for AnyAsset {
    fn from(asset: Monogram) -> Self {
        AnyAsset::Monogram(asset)
    }
}
