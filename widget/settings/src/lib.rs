//! The tenant settings document and its application logic.
//!
//! [`WidgetSettings`] mirrors the JSON served by
//! `/widget/settings/public`: every section is optional, and an absent
//! section must leave the widget's current state untouched. Application is
//! split into two pure functions over an [`ApplyContext`]:
//! [`apply::effects`] (visual state as render effects) and
//! [`apply::motion_plan`] (behavioral intent for the controller).

pub mod apply;
pub mod context;
pub mod defaults;
pub mod greeting;
pub mod schema;

pub use apply::{
    AttentionPlan, AutoOpenPlan, MotionPlan, RotationPlan, VisibilityPlan,
};
pub use context::ApplyContext;
pub use schema::*;
