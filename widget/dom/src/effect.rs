use crate::adapter::Dom;
use crate::node::NodeId;

/// One declarative render operation.
///
/// Settings application is a pure mapping from the settings document to a
/// list of effects; [`apply`] is the only place effects touch an adapter.
/// A section absent from the document simply contributes no effects, which
/// is how partial re-application leaves earlier values untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEffect {
    /// Set a CSS custom property on the widget root.
    SetVar(&'static str, String),
    SetText(NodeId, String),
    SetAttr(NodeId, &'static str, String),
    AddClass(NodeId, &'static str),
    RemoveClass(NodeId, &'static str),
    Show(NodeId),
    Hide(NodeId),
}

/// Apply a batch of effects to an adapter, in order.
pub fn apply<D: Dom + ?Sized>(dom: &mut D, effects: &[RenderEffect]) {
    for effect in effects {
        match effect {
            RenderEffect::SetVar(name, value) => dom.set_var(name, value),
            RenderEffect::SetText(node, text) => dom.set_text(*node, text),
            RenderEffect::SetAttr(node, name, value) => dom.set_attr(*node, name, value),
            RenderEffect::AddClass(node, class) => dom.add_class(*node, class),
            RenderEffect::RemoveClass(node, class) => dom.remove_class(*node, class),
            RenderEffect::Show(node) => dom.show(*node),
            RenderEffect::Hide(node) => dom.hide(*node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDom;

    #[test]
    fn effects_apply_in_order() {
        let mut dom = HeadlessDom::new();
        apply(
            &mut dom,
            &[
                RenderEffect::SetVar("--cc-primary", "#123456".into()),
                RenderEffect::SetText(NodeId::HeaderTitle, "Support".into()),
                RenderEffect::Show(NodeId::Launcher),
                RenderEffect::AddClass(NodeId::Root, "cc-dark"),
                RenderEffect::RemoveClass(NodeId::Root, "cc-dark"),
            ],
        );
        assert_eq!(dom.var("--cc-primary"), Some("#123456"));
        assert_eq!(dom.text(NodeId::HeaderTitle), Some("Support"));
        assert!(dom.is_visible(NodeId::Launcher));
        assert!(!dom.has_class(NodeId::Root, "cc-dark"));
    }
}
