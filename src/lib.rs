//! Cartouche: node figure presentation for diagram editors.
//!
//! A cartouche is a drawn frame enclosing a name, which is precisely
//! what this crate lays out: the visual presentation of a diagram node
//! as a shape border with a centered name label. It provides:
//!
//! - **Figures**: the composite [`fig::NodePresentation`] with its owned
//!   [`fig::Border`] and [`fig::NameDisplay`] children ([`fig`] module)
//! - **Geometry**: integer canvas primitives ([`geometry`] module)
//! - **Notation**: model-element text resolution and measurement
//!   ([`notation`] module)
//! - **Settings**: rendering configuration ([`settings`] module)
//! - **Colors**: CSS color handling ([`color::Color`])
//!
//! The crate is a layout and bounds-management policy, not a graphics
//! engine: model management, persistence, and the editor shell are
//! external collaborators reached through the small contracts in
//! [`fig`] ([`fig::FigGroup`], [`fig::ChangeListener`]).
//!
//! All figures live on the UI event-processing thread; operations are
//! synchronous state transitions with no internal locking.

pub mod color;
pub mod error;
pub mod fig;
pub mod geometry;
pub mod model;
pub mod notation;
pub mod settings;

pub use error::CartoucheError;
