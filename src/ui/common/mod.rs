//! Common reusable UI components shared by the landing page, dashboard and
//! editor.

pub mod decor;
pub mod modal;
pub mod spinner;

pub use decor::{
    FeaturePill, FloatingShapes, MagneticWrapper, MeshGradient, NoiseOverlay, SplitTextReveal,
    TiltCard,
};
pub use modal::BaseModal;
pub use spinner::{LoadingOverlay, LoadingSpinner, Spinner, SpinnerSize};
